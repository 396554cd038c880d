use super::*;

/// Tests placing an order with the legacy code scheme.
///
/// Verifies the unpadded code and that reading the order back returns the submitted values.
///
/// Expected: Ok with code "20243795342"
#[tokio::test]
async fn places_order_with_legacy_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = settings(OrderCodeScheme::Legacy);
    let service = OrderService::new(db, &settings);
    let placed = service
        .place_order(params(42, vec![item(1), item(2)]))
        .await?;

    assert_eq!(placed.order_code, "20243795342");

    let stored = service.get_by_id(placed.id).await?;
    assert_eq!(stored.order.order_code, placed.order_code);
    assert_eq!(stored.order.user_id, 42);
    assert_eq!(stored.order.address_id, "addr-1");
    assert_eq!(stored.order.total_price, 1500);
    assert!(stored.order.promotion);
    assert_eq!(stored.order.freight, 100);
    assert_eq!(stored.order.status, OrderStatus::Unfinished);
    assert_eq!(stored.order.created, submitted_at());
    assert_eq!(stored.order.closed, submitted_at() + Duration::hours(5));

    let drafts: Vec<OrderItemDraft> = stored.items.iter().map(as_draft).collect();
    assert_eq!(drafts.len(), 2);
    assert!(drafts.contains(&item(1)));
    assert!(drafts.contains(&item(2)));

    Ok(())
}

/// Tests that the configured closed interval is applied.
///
/// Expected: Ok with closed 24 hours after submission
#[tokio::test]
async fn applies_configured_closed_interval() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = OrderSettings {
        closed_interval_hours: 24,
        ..Default::default()
    };
    let service = OrderService::new(db, &settings);
    let placed = service.place_order(params(42, vec![item(1)])).await?;

    let stored = service.get_by_id(placed.id).await?;
    assert_eq!(stored.order.closed, submitted_at() + Duration::hours(24));

    Ok(())
}

/// Tests two legacy placements by the same user in the same second.
///
/// Expected: Err(DuplicateOrderCode) for the second with only the first persisted
#[tokio::test]
async fn rejects_legacy_collision_in_same_second() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = settings(OrderCodeScheme::Legacy);
    let service = OrderService::new(db, &settings);
    service.place_order(params(42, vec![item(1)])).await?;
    let result = service.place_order(params(42, vec![item(2)])).await;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::DuplicateOrderCode(_)))
    ));
    assert_eq!(entity::prelude::Order::find().count(db).await?, 1);
    assert_eq!(entity::prelude::OrderItem::find().count(db).await?, 1);

    Ok(())
}

/// Tests two randomized placements by the same user in the same second.
///
/// Expected: Ok for both with distinct codes sharing the timestamp and user prefix
#[tokio::test]
async fn randomized_codes_separate_same_second_orders() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = settings(OrderCodeScheme::Randomized);
    let service = OrderService::new(db, &settings);
    let first = service.place_order(params(42, vec![item(1)])).await?;
    let second = service.place_order(params(42, vec![item(2)])).await?;

    assert_ne!(first.order_code, second.order_code);
    assert!(first.order_code.starts_with("2024030709050342"));
    assert!(second.order_code.starts_with("2024030709050342"));
    assert_eq!(entity::prelude::Order::find().count(db).await?, 2);

    Ok(())
}

/// Tests that a store that cannot be reached in time yields a deadline error.
///
/// An open transaction holds the only pooled connection, so the placement cannot start.
///
/// Expected: Err(DeadlineExceeded) with nothing persisted
#[tokio::test]
async fn fails_with_deadline_when_store_is_busy() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = OrderSettings {
        store_timeout: StdDuration::from_millis(50),
        ..Default::default()
    };
    let service = OrderService::new(db, &settings);

    let blocker = db.begin().await?;
    let result = service.place_order(params(42, vec![item(1)])).await;
    blocker.rollback().await?;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::DeadlineExceeded(_)))
    ));
    assert_eq!(entity::prelude::Order::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a per-service timeout overrides the configured one.
///
/// The configured timeout is left at its default; only the override is short enough to
/// expire while the store is held by another transaction.
///
/// Expected: Err(DeadlineExceeded) carrying the overridden duration
#[tokio::test]
async fn store_timeout_override_bounds_the_call() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = OrderSettings::default();
    let service =
        OrderService::new(db, &settings).with_store_timeout(StdDuration::from_millis(50));

    let blocker = db.begin().await?;
    let result = service.place_order(params(42, vec![item(1)])).await;
    blocker.rollback().await?;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::DeadlineExceeded(timeout)))
            if timeout == StdDuration::from_millis(50)
    ));
    assert_eq!(entity::prelude::Order::find().count(db).await?, 0);

    Ok(())
}
