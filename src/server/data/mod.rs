//! Database repository layer.
//!
//! Repositories handle database operations for each domain in the application. They use
//! SeaORM entity models internally; conversion to domain models happens in the service layer.

pub mod order;
