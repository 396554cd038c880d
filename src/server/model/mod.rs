//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the service boundary and transformed
//! to DTOs at the controller boundary. They provide type-safe representations (unsigned
//! quantities, a status enum) of what the database stores as plain integers.

pub mod order;
