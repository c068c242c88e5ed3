//! Parsing of calendar values arriving as strings.

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::server::error::AppError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Parses a `YYYY-MM-DD` date.
///
/// # Returns
/// - `Ok(NaiveDate)` - Successfully parsed date
/// - `Err(AppError::BadRequest)` - Value is not a valid calendar date
pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| AppError::BadRequest(format!("Invalid date '{}', expected YYYY-MM-DD", value)))
}

/// Parses an `HH:MM` time, also accepting `HH:MM:SS`.
pub fn parse_time(value: &str) -> Result<NaiveTime, AppError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| AppError::BadRequest(format!("Invalid time '{}', expected HH:MM", value)))
}

/// Formats a time the way the API returns it.
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Weekday number of a date, 0 = Monday … 6 = Sunday.
pub fn day_of_week(date: NaiveDate) -> i32 {
    date.weekday().num_days_from_monday() as i32
}

/// Rejects weekday numbers outside 0..=6.
pub fn validate_day_of_week(day: i32) -> Result<i32, AppError> {
    if (0..=6).contains(&day) {
        Ok(day)
    } else {
        Err(AppError::BadRequest(format!(
            "Invalid day of week {}, expected 0 (Monday) to 6 (Sunday)",
            day
        )))
    }
}

/// Parses a start/end pair and checks that the window is not empty.
pub fn parse_slot_times(start: &str, end: &str) -> Result<(NaiveTime, NaiveTime), AppError> {
    let start_time = parse_time(start)?;
    let end_time = parse_time(end)?;

    if start_time >= end_time {
        return Err(AppError::BadRequest(format!(
            "Slot start {} must be before its end {}",
            format_time(start_time),
            format_time(end_time)
        )));
    }

    Ok((start_time, end_time))
}
