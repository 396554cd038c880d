//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules, including
//! unique value generation and convenience methods for creating an order together with
//! its items.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an order for `user_id` with `item_count` default items.
///
/// Items reference consecutive product ids starting at 1.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owner of the order
/// - `item_count` - Number of items to attach
///
/// # Returns
/// - `Ok((order, items))` - The created order and its items in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_items(
    db: &DatabaseConnection,
    user_id: i64,
    item_count: i64,
) -> Result<(entity::order::Model, Vec<entity::order_item::Model>), DbErr> {
    let order = crate::factory::order::create_order(db, user_id).await?;

    let mut items = Vec::new();
    for product_id in 1..=item_count {
        items.push(crate::factory::order_item::create_order_item(db, order.id, product_id).await?);
    }

    Ok((order, items))
}
