//! Input validation helpers
//!
//! Text length limits and the checks shared by the profile and collection
//! services. PostgreSQL TEXT has no built-in length enforcement.

use chrono::{DateTime, Utc};
use shared::error::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Names, titles, schools, employers, cities, countries
pub const MAX_NAME_LEN: usize = 200;

/// Phone numbers, skill levels, licence classes
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Street addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Descriptions and working experience free text
pub const MAX_DESCRIPTION_LEN: usize = 10_000;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a string is within the length limit (counted in chars).
pub fn validate_max_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty"))
            .with_detail("field", field));
    }
    validate_max_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_max_len(v, field, max_len),
        None => Ok(()),
    }
}

/// Validate a patch of a NOT NULL column: if present it must be non-empty.
pub fn validate_present_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_required_text(v, field, max_len),
        None => Ok(()),
    }
}

/// Validate that a path or query identifier is positive.
pub fn validate_positive_id(value: i64, field: &str) -> Result<i64, AppError> {
    if value <= 0 {
        return Err(
            AppError::invalid_request(format!("{field} must be a positive integer"))
                .with_detail("field", field),
        );
    }
    Ok(value)
}

/// Validate that a date range does not end before it starts.
pub fn validate_date_range(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<(), AppError> {
    if let (Some(start), Some(end)) = (start, end)
        && end < start
    {
        return Err(AppError::validation("endDate must not be before startDate")
            .with_detail("field", "endDate"));
    }
    Ok(())
}
