use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored column value does not fit the domain type it is read into.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Stored value {value} in column '{column}' is out of range")]
    ColumnOutOfRange {
        /// Name of the offending column
        column: &'static str,
        /// The stored value
        value: i64,
    },

    /// A stored order status does not map to any known status.
    #[error("Unknown order status {0} stored in database")]
    UnknownOrderStatus(i16),
}
