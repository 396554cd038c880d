use crate::server::error::{internal::InternalError, order::OrderError, AppError};

/// Parses a boolean flag sent as a string.
///
/// Accepts `1 t T TRUE true True` for true and `0 f F FALSE false False` for false,
/// the spellings existing clients send for the promotion flag.
///
/// # Returns
/// - `Ok(bool)` - Parsed flag
/// - `Err(AppError::BadRequest)` - Any other spelling
pub fn parse_bool_flag(field: &str, value: &str) -> Result<bool, AppError> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(AppError::BadRequest(format!(
            "Invalid boolean value '{}' for {}",
            value, field
        ))),
    }
}

/// Converts an unsigned domain value into a signed 64-bit column value.
///
/// # Returns
/// - `Ok(i64)` - Value fits the column
/// - `Err(OrderError::ValueOutOfRange)` - Value exceeds `i64::MAX`
pub fn column_i64(field: &'static str, value: u64) -> Result<i64, OrderError> {
    i64::try_from(value).map_err(|_| OrderError::ValueOutOfRange { field, value })
}

/// Reads a stored 64-bit column back into a `u32` domain value.
pub fn stored_u32(column: &'static str, value: i64) -> Result<u32, InternalError> {
    u32::try_from(value).map_err(|_| InternalError::ColumnOutOfRange { column, value })
}

/// Reads a stored 64-bit column back into a `u64` domain value.
pub fn stored_u64(column: &'static str, value: i64) -> Result<u64, InternalError> {
    u64::try_from(value).map_err(|_| InternalError::ColumnOutOfRange { column, value })
}

/// Reads a stored 16-bit column back into a `u8` domain value.
pub fn stored_u8(column: &'static str, value: i16) -> Result<u8, InternalError> {
    u8::try_from(value).map_err(|_| InternalError::ColumnOutOfRange {
        column,
        value: i64::from(value),
    })
}
