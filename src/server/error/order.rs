use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use std::time::Duration;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{data::order::ORDER_TABLE, model::order::OrderStatus},
};

#[derive(Error, Debug)]
pub enum OrderError {
    /// Driver or network failure while talking to the store.
    ///
    /// Any statement failing inside an order placement rolls the whole placement back.
    #[error(transparent)]
    Db(#[from] DbErr),

    /// A write that must affect exactly one row affected none.
    ///
    /// Always rolls back the enclosing transaction.
    #[error("Insert into '{table}' affected 0 rows")]
    NoRowsAffected {
        /// Table the insert targeted
        table: &'static str,
    },

    /// Another order already uses this order code.
    #[error("Order code '{0}' is already in use")]
    DuplicateOrderCode(String),

    /// No order matched the lookup.
    #[error("Order {0} not found")]
    NotFound(String),

    /// The order exists but is not in the status the operation requires.
    #[error("Order {id} cannot move from status {current} to {target}")]
    InvalidTransition {
        /// Order ID
        id: i32,
        /// Stored status value
        current: i16,
        /// Requested status
        target: OrderStatus,
    },

    /// A value cannot be represented in its database column.
    #[error("Value {value} for '{field}' is out of range")]
    ValueOutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: u64,
    },

    /// The store did not answer within the configured deadline.
    #[error("Store call exceeded deadline of {0:?}")]
    DeadlineExceeded(Duration),
}

impl OrderError {
    /// Classifies a failed insert into `table`.
    ///
    /// `RecordNotInserted` is SeaORM's report of an insert that affected zero rows; a unique
    /// violation on the order table can only come from the order code index.
    pub fn from_insert(err: DbErr, table: &'static str, order_code: &str) -> Self {
        if matches!(err, DbErr::RecordNotInserted) {
            return Self::NoRowsAffected { table };
        }

        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) if table == ORDER_TABLE => {
                Self::DuplicateOrderCode(order_code.to_string())
            }
            _ => Self::Db(err),
        }
    }

    /// Whether the failure came from the store rather than the request.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, Self::Db(_) | Self::NoRowsAffected { .. })
    }
}

/// Converts order errors into HTTP responses.
///
/// - `NotFound` → 404 Not Found
/// - `DuplicateOrderCode` / `InvalidTransition` → 409 Conflict
/// - `ValueOutOfRange` → 400 Bad Request
/// - `Db` / `NoRowsAffected` → 502 Bad Gateway with a generic message
/// - `DeadlineExceeded` → 504 Gateway Timeout
///
/// Persistence failures are logged with full details while the client only sees a generic
/// message.
impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicateOrderCode(_) | Self::InvalidTransition { .. } => StatusCode::CONFLICT,
            Self::ValueOutOfRange { .. } => StatusCode::BAD_REQUEST,
            Self::DeadlineExceeded(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Db(_) | Self::NoRowsAffected { .. } => StatusCode::BAD_GATEWAY,
        };

        let error = if self.is_persistence_failure() {
            tracing::error!("Order persistence failure: {}", self);
            "Order store unavailable".to_string()
        } else {
            tracing::debug!("Order request rejected: {}", self);
            self.to_string()
        };

        (status, Json(ErrorDto { error })).into_response()
    }
}
