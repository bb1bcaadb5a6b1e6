use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, Utc};

/// Parse a wire timestamp (RFC 3339, with or without fractional seconds).
pub fn parse_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// dd/mm/yyyy HH:MM, the format the dashboard uses everywhere.
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string()
}
