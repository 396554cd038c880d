use super::*;

/// Tests overriding an order's status.
///
/// Expected: Ok with the new status returned
#[tokio::test]
async fn overrides_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::order::create_order_with_status(db, 42, 3).await?;

    let settings = OrderSettings::default();
    let service = OrderService::new(db, &settings);
    let updated = service
        .update_status(order.id, OrderStatus::Finished, submitted_at())
        .await?;

    assert_eq!(updated.order.status, OrderStatus::Finished);
    assert_eq!(updated.order.updated, submitted_at());

    Ok(())
}

/// Tests overriding the status of an unknown order.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = OrderSettings::default();
    let service = OrderService::new(db, &settings);
    let result = service
        .update_status(999, OrderStatus::Canceled, submitted_at())
        .await;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::NotFound(_)))
    ));

    Ok(())
}
