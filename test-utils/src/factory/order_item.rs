//! Order item factory for creating test order item entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an order item with count 1, price 500 and no discount.
///
/// # Arguments
/// - `db` - Database connection
/// - `order_id` - Order the item belongs to
/// - `product_id` - Product referenced by the item
///
/// # Returns
/// - `Ok(Model)` - The created order item entity
/// - `Err(DbErr)` - Database error during insertion
pub async fn create_order_item(
    db: &DatabaseConnection,
    order_id: i32,
    product_id: i64,
) -> Result<entity::order_item::Model, DbErr> {
    entity::order_item::ActiveModel {
        product_id: ActiveValue::Set(product_id),
        order_id: ActiveValue::Set(order_id),
        count: ActiveValue::Set(1),
        price: ActiveValue::Set(500),
        discount: ActiveValue::Set(0),
        ..Default::default()
    }
    .insert(db)
    .await
}
