use super::*;

/// Tests paying an unfinished order.
///
/// Expected: Ok with status paid, pay way and updated timestamp written
#[tokio::test]
async fn pays_unfinished_order() -> Result<(), OrderError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::create_order(db, 42).await?;
    let now = submitted_at() + Duration::minutes(10);

    let repo = OrderRepository::new(db);
    repo.pay(order.id, 2, now).await?;

    let stored = entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, OrderStatus::Paid.as_i16());
    assert_eq!(stored.pay_way, 2);
    assert_eq!(stored.updated, now);

    Ok(())
}

/// Tests paying an order that is already paid.
///
/// Expected: Err(InvalidTransition) with the order unchanged
#[tokio::test]
async fn rejects_paying_paid_order() -> Result<(), OrderError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::order::OrderFactory::new(db, 42)
        .status(2)
        .pay_way(1)
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let result = repo.pay(order.id, 2, submitted_at()).await;

    assert!(matches!(
        result,
        Err(OrderError::InvalidTransition {
            current: 2,
            target: OrderStatus::Paid,
            ..
        })
    ));

    let stored = entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored, order);

    Ok(())
}

/// Tests paying an order that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_order() -> Result<(), OrderError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let result = repo.pay(999, 1, submitted_at()).await;

    assert!(matches!(result, Err(OrderError::NotFound(_))));

    Ok(())
}
