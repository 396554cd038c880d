//! Per-request store deadline.

use axum::{extract::FromRequestParts, http::request::Parts};
use std::time::Duration;

use crate::server::{error::AppError, service::order::OrderService};

/// Header carrying the caller's remaining budget in milliseconds.
pub const REQUEST_TIMEOUT_HEADER: &str = "x-request-timeout-ms";

/// Deadline requested by the caller through `x-request-timeout-ms`.
///
/// Absent header means the configured store timeout applies unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestDeadline(pub Option<Duration>);

impl RequestDeadline {
    /// Bounds `service` by the requested deadline when it is tighter than the configured one.
    pub fn apply<'a>(self, service: OrderService<'a>, configured: Duration) -> OrderService<'a> {
        match self.0 {
            Some(requested) if requested < configured => service.with_store_timeout(requested),
            _ => service,
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for RequestDeadline {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(REQUEST_TIMEOUT_HEADER) else {
            return Ok(Self(None));
        };

        let millis = value
            .to_str()
            .ok()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|millis| *millis > 0)
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "{} must be a positive number of milliseconds",
                    REQUEST_TIMEOUT_HEADER
                ))
            })?;

        Ok(Self(Some(Duration::from_millis(millis))))
    }
}
