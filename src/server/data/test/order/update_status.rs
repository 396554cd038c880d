use super::*;

/// Tests setting an arbitrary status.
///
/// Expected: Ok with the new status stored
#[tokio::test]
async fn sets_status_regardless_of_current() -> Result<(), OrderError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::order::create_order_with_status(db, 42, 3).await?;
    let now = submitted_at() + Duration::days(3);

    let repo = OrderRepository::new(db);
    repo.update_status(order.id, OrderStatus::Finished, now)
        .await?;

    let stored = entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, OrderStatus::Finished.as_i16());
    assert_eq!(stored.updated, now);

    Ok(())
}

/// Tests that only the targeted order changes.
///
/// Expected: Ok with other orders untouched
#[tokio::test]
async fn leaves_other_orders_untouched() -> Result<(), OrderError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_order(db, 42).await?;
    let other = factory::create_order(db, 42).await?;

    let repo = OrderRepository::new(db);
    repo.update_status(target.id, OrderStatus::Canceled, submitted_at())
        .await?;

    let stored = entity::prelude::Order::find_by_id(other.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored, other);

    Ok(())
}

/// Tests updating an order that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_order() -> Result<(), OrderError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let result = repo
        .update_status(999, OrderStatus::Paid, submitted_at())
        .await;

    assert!(matches!(result, Err(OrderError::NotFound(_))));

    Ok(())
}
