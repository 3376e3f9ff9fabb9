//! Field conversions - Parsing difensivo degli input del form
//!
//! Gli input numerici e di data arrivano come stringhe; qui vengono
//! convertiti nel tipo del payload. Ogni fallimento diventa un
//! [`ApiError::Validation`] e blocca l'operazione prima della rete.

use crate::core::ApiError;
use chrono::NaiveDate;

/// Parses a plain numeric field.
pub(crate) fn parse_number(field: &str, raw: &str) -> Result<f64, ApiError> {
    raw.trim().parse::<f64>().map_err(|_| {
        ApiError::validation(format!("{} must be a number (got \"{}\")", field, raw))
    })
}

/// Parses a magnitude field: a stray minus sign is clamped away instead of
/// producing a negative value.
pub(crate) fn parse_magnitude(field: &str, raw: &str) -> Result<f64, ApiError> {
    parse_number(field, raw).map(f64::abs)
}

/// Parses a stock quantity; never negative.
pub(crate) fn parse_quantity(field: &str, raw: &str) -> Result<i64, ApiError> {
    raw.trim().parse::<i64>().map(i64::abs).map_err(|_| {
        ApiError::validation(format!(
            "{} must be a whole number (got \"{}\")",
            field, raw
        ))
    })
}

/// Parses an ISO `YYYY-MM-DD` date input.
pub(crate) fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, ApiError> {
    raw.trim().parse::<NaiveDate>().map_err(|_| {
        ApiError::validation(format!(
            "{} must be a date in YYYY-MM-DD format (got \"{}\")",
            field, raw
        ))
    })
}

/// Unwraps a required select input.
pub(crate) fn require<T>(field: &str, value: Option<T>) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::validation(format!("{} is required", field)))
}
