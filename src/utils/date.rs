//! Date utilities: day boundaries and the timestamp formats stored in the DBs.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, SecondsFormat};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Local midnight of the day `now` falls on.
pub fn start_of_day(now: DateTime<Local>) -> AppResult<DateTime<Local>> {
    let midnight = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| AppError::InvalidDate(now.date_naive().to_string()))?;

    // DST gaps may skip midnight: fall back to the earliest valid instant
    midnight
        .and_local_timezone(Local)
        .earliest()
        .ok_or_else(|| AppError::InvalidDate(midnight.to_string()))
}

/// Storage format (RFC 3339, microseconds, keeps the local offset).
pub fn format_datetime(ts: &DateTime<Local>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, false)
}

pub fn parse_datetime(s: &str) -> AppResult<DateTime<Local>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Short human form used in tables: `YYYY-MM-DD HH:MM`.
pub fn display_datetime(ts: &DateTime<Local>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}
