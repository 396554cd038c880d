//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating order fixtures with sensible defaults,
//! reducing boilerplate in tests. Fixtures are inserted directly through the entity layer so
//! repository tests can arrange state without going through the code under test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let order = factory::order::create_order(&db, 42).await?;
//!     let item = factory::order_item::create_order_item(&db, order.id, 7).await?;
//!
//!     // Create an order and its items in one call
//!     let (order, items) = factory::helpers::create_order_with_items(&db, 42, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let order = factory::order::OrderFactory::new(&db, 42)
//!     .status(2)
//!     .closed(Utc::now() - Duration::hours(1))
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod order;
pub mod order_item;

pub use order::create_order;
pub use order_item::create_order_item;
