use super::*;

/// Tests finding a placed order by its code.
///
/// Expected: Ok(Some) with the placement ID
#[tokio::test]
async fn finds_id_of_existing_code() -> Result<(), OrderError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let order_id = repo.place(&draft("FIND1", 42), &[item(1)], 5).await?;

    assert_eq!(repo.find_id_by_code("FIND1").await?, Some(order_id));

    Ok(())
}

/// Tests looking up a code that was never stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_code() -> Result<(), OrderError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_order(db, 42).await?;

    let repo = OrderRepository::new(db);
    assert_eq!(repo.find_id_by_code("MISSING").await?, None);

    Ok(())
}
