//! Server-side order backend.
//!
//! This module contains the complete backend implementation for the storefront order service,
//! including API endpoints, business logic, data access and scheduled maintenance. The backend
//! uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Order code derivation, deadlines and not-found decisions
//! - **Data Layer** (`data/`) - Transactions and queries against the order tables
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, order settings)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Scheduler** (`scheduler/`) - Cron job expiring overdue unpaid orders
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the order controller
//! 2. **Controller** parses the DTO into params, calls the service
//! 3. **Service** derives values, bounds the call with the store deadline
//! 4. **Data** runs the statements, inside a transaction where atomicity or a single
//!    snapshot is required
//! 5. **Service** converts entity models to domain models
//! 6. **Controller** converts domain models to DTOs and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
