//! Storefront Test Utils
//!
//! Provides shared testing utilities for the storefront order service. This crate offers a
//! builder pattern for creating test contexts with in-memory SQLite databases and factories
//! for inserting order fixtures.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Fixture factories for orders and order items
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_order_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_order_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
