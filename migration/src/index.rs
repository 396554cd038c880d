use sea_orm_migration::prelude::*;

/// Creates `index` unless an index named `name` already exists on `table`.
///
/// sea-query drops `IF NOT EXISTS` from `CREATE INDEX` on MySQL, so the guard is a schema
/// lookup instead.
pub(crate) async fn create_index_if_missing(
    manager: &SchemaManager<'_>,
    table: &str,
    name: &str,
    index: IndexCreateStatement,
) -> Result<(), DbErr> {
    if manager.has_index(table, name).await? {
        return Ok(());
    }

    manager.create_index(index).await
}
