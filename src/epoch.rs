use crate::error::{AppError, Result};
use chrono::DateTime;

pub const PROMPT: &str = "UNIX timestamp to convert (epoch format): \n >> ";

/// Parses user input as whole seconds since the UNIX epoch.
pub fn parse_timestamp(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| AppError::InvalidTimestamp(trimmed.to_string()))
}

/// Formats a UNIX timestamp as `DD-MM-YYYY HH:MM:SS UTC`.
pub fn format_timestamp(timestamp: i64) -> Result<String> {
    let date = DateTime::from_timestamp(timestamp, 0)
        .ok_or(AppError::TimestampOutOfRange(timestamp))?;
    Ok(date.format("%d-%m-%Y %H:%M:%S UTC").to_string())
}
