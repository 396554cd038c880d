use super::*;

/// Tests reading an order with items as domain models.
///
/// Expected: Ok with converted order and items
#[tokio::test]
async fn returns_order_with_items() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (order, items) = factory::helpers::create_order_with_items(db, 42, 2).await?;

    let settings = OrderSettings::default();
    let service = OrderService::new(db, &settings);
    let result = service.get_by_id(order.id).await?;

    assert_eq!(result.order.id, order.id);
    assert_eq!(result.order.order_code, order.order_code);
    assert_eq!(result.order.status, OrderStatus::Unfinished);
    assert_eq!(result.items.len(), items.len());
    assert!(result.items.iter().all(|item| item.order_id == order.id));

    Ok(())
}

/// Tests reading an unknown order.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = OrderSettings::default();
    let service = OrderService::new(db, &settings);
    let result = service.get_by_id(999).await;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::NotFound(_)))
    ));

    Ok(())
}

/// Tests reading an order whose stored values do not fit the domain model.
///
/// Expected: Err(InternalErr)
#[tokio::test]
async fn reports_corrupt_stored_values_as_internal() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let negative_price = factory::order::OrderFactory::new(db, 42)
        .total_price(-1)
        .build()
        .await?;
    let unknown_status = factory::order::create_order_with_status(db, 42, 9).await?;

    let settings = OrderSettings::default();
    let service = OrderService::new(db, &settings);

    assert!(matches!(
        service.get_by_id(negative_price.id).await,
        Err(AppError::InternalErr(_))
    ));
    assert!(matches!(
        service.get_by_id(unknown_status.id).await,
        Err(AppError::InternalErr(_))
    ));

    Ok(())
}
