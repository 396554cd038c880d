//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Order code derivation and request-level validation
//! - **Deadlines**: Bounding every store call with the configured timeout
//! - **Domain Models**: Converting entity models into domain models

pub mod order;
