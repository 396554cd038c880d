//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed by the
//! request handlers. The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::config::OrderSettings;

/// Application state containing shared resources and dependencies.
///
/// Cloning is cheap: `DatabaseConnection` is a connection pool whose clones share the pool,
/// and the order settings sit behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Closed interval, order code scheme and store timeout used by the order service.
    pub order_settings: Arc<OrderSettings>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `order_settings` - Settings for the order service
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, order_settings: OrderSettings) -> Self {
        Self {
            db,
            order_settings: Arc::new(order_settings),
        }
    }
}
