use super::*;

/// Tests the pay then consign lifecycle.
///
/// Expected: Ok with the consigned order carrying the ship code
#[tokio::test]
async fn consigns_after_payment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = OrderSettings::default();
    let service = OrderService::new(db, &settings);
    let placed = service.place_order(params(42, vec![item(1)])).await?;

    service.pay(placed.id, 1, submitted_at()).await?;
    let consigned = service
        .consign(placed.id, "SF1001".to_string(), submitted_at() + Duration::hours(2))
        .await?;

    assert_eq!(consigned.order.status, OrderStatus::Consigned);
    assert_eq!(consigned.order.ship_code, "SF1001");
    assert_eq!(consigned.order.updated, submitted_at() + Duration::hours(2));

    Ok(())
}

/// Tests consigning with a blank ship code.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_blank_ship_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::order::create_order_with_status(db, 42, 2).await?;

    let settings = OrderSettings::default();
    let service = OrderService::new(db, &settings);
    let result = service
        .consign(order.id, "  ".to_string(), submitted_at())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests consigning an unknown order.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = OrderSettings::default();
    let service = OrderService::new(db, &settings);
    let result = service
        .consign(999, "SF1001".to_string(), submitted_at())
        .await;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::NotFound(_)))
    ));

    Ok(())
}
