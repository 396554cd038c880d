//! HTTP request handlers.
//!
//! Controllers parse and validate request DTOs, call the service layer and convert domain
//! models back into response DTOs. Error-to-status mapping lives on the error types.

pub mod deadline;
pub mod order;
