use super::*;

/// Tests filtering orders by user and exact status.
///
/// Expected: Ok with only the user's orders in the requested status, by ascending ID
#[tokio::test]
async fn returns_only_orders_in_exact_status() -> Result<(), OrderError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let paid_a = factory::order::create_order_with_status(db, 42, 2).await?;
    factory::order::create_order_with_status(db, 42, 0).await?;
    let paid_b = factory::order::create_order_with_status(db, 42, 2).await?;
    factory::order::create_order_with_status(db, 42, 1).await?;
    factory::order::create_order_with_status(db, 42, 3).await?;
    factory::order::create_order_with_status(db, 7, 2).await?;

    let repo = OrderRepository::new(db);
    let result = repo.get_by_user_and_status(42, OrderStatus::Paid).await?;

    let ids: Vec<i32> = result.iter().map(|(order, _)| order.id).collect();
    assert_eq!(ids, vec![paid_a.id, paid_b.id]);
    assert!(result
        .iter()
        .all(|(order, _)| order.user_id == 42 && order.status == 2));

    Ok(())
}

/// Tests that each returned order carries its own items.
///
/// Expected: Ok with items grouped by order
#[tokio::test]
async fn attaches_items_to_their_orders() -> Result<(), OrderError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, first_items) = factory::helpers::create_order_with_items(db, 42, 2).await?;
    let (second, second_items) = factory::helpers::create_order_with_items(db, 42, 3).await?;
    let empty = factory::create_order(db, 42).await?;

    let repo = OrderRepository::new(db);
    let result = repo
        .get_by_user_and_status(42, OrderStatus::Unfinished)
        .await?;

    assert_eq!(result.len(), 3);
    assert_eq!(result[0], (first, first_items));
    assert_eq!(result[1], (second, second_items));
    assert_eq!(result[2], (empty, Vec::new()));

    Ok(())
}

/// Tests a user without matching orders.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_no_matches() -> Result<(), OrderError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::order::create_order_with_status(db, 42, 0).await?;

    let repo = OrderRepository::new(db);
    assert!(repo
        .get_by_user_and_status(42, OrderStatus::Canceled)
        .await?
        .is_empty());
    assert!(repo
        .get_by_user_and_status(99, OrderStatus::Unfinished)
        .await?
        .is_empty());

    Ok(())
}
