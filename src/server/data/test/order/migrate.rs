use super::*;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};

async fn migrated_db() -> Result<DatabaseConnection, OrderError> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Tests that the migrations build a schema the repository can use.
///
/// Places an order through the migrated tables and reads it back.
///
/// Expected: Ok with the order, its deadline and its items returned
#[tokio::test]
async fn migrated_schema_stores_and_reads_orders() -> Result<(), OrderError> {
    let db = migrated_db().await?;

    let repo = OrderRepository::new(&db);
    let order_id = repo
        .place(&draft("MIG1", 42), &[item(1), item(2), item(3)], 5)
        .await?;

    let (order, items) = repo.get_by_id(order_id).await?.unwrap();
    assert_eq!(order.order_code, "MIG1");
    assert_eq!(order.closed, submitted_at() + Duration::hours(5));
    assert_eq!(items.len(), 3);

    Ok(())
}

/// Tests applying the migrations twice.
///
/// Expected: Ok with the second run a no-op
#[tokio::test]
async fn migrations_apply_twice() -> Result<(), OrderError> {
    let db = migrated_db().await?;
    Migrator::up(&db, None).await?;

    let repo = OrderRepository::new(&db);
    repo.place(&draft("MIG2", 42), &[item(1)], 5).await?;
    assert_eq!(entity::prelude::Order::find().count(&db).await?, 1);

    Ok(())
}

/// Tests re-running every migration against tables and indexes that already exist.
///
/// The migration history is cleared so each migration runs its statements again.
///
/// Expected: Ok with existing rows kept
#[tokio::test]
async fn migrations_rerun_over_existing_schema() -> Result<(), OrderError> {
    let db = migrated_db().await?;

    let repo = OrderRepository::new(&db);
    let order_id = repo.place(&draft("MIG3", 42), &[item(1), item(2)], 5).await?;

    db.execute_unprepared("DELETE FROM seaql_migrations").await?;
    Migrator::up(&db, None).await?;

    let (order, items) = repo.get_by_id(order_id).await?.unwrap();
    assert_eq!(order.order_code, "MIG3");
    assert_eq!(items.len(), 2);

    Ok(())
}
