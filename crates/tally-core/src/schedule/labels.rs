//! Conversions between 12-hour slot labels ("2:00 PM") and 24-hour times.
//!
//! Formatting and parsing go through jiff's `strftime`/`strptime` support.

use jiff::{civil::Time, fmt::strtime};

use super::time::HOLDING_TIME;
use crate::error::{Result, TrackerError};

const LABEL_FORMAT: &str = "%-I:%M %p";
const LABEL_PARSE_FORMAT: &str = "%I:%M %p";
const TWENTY_FOUR_HOUR_FORMAT: &str = "%H:%M";

/// Formats an hour and minute as a 12-hour label, e.g. `14, 30` as
/// `"2:30 PM"` and `0, 0` as `"12:00 AM"`.
pub fn format_slot_label(hour: u8, minute: u8) -> String {
    match Time::new(hour as i8, minute as i8, 0, 0) {
        Ok(time) => format_time(time),
        Err(_) => format!("{hour:02}:{minute:02}"),
    }
}

/// Formats a time of day as a 12-hour label.
pub fn format_time(time: Time) -> String {
    time.strftime(LABEL_FORMAT).to_string()
}

/// Parses a 12-hour label such as `"2:30 PM"`.
pub fn parse_slot_label(label: &str) -> Result<Time> {
    // AM/PM markers are matched in upper case.
    parse_with(label, LABEL_PARSE_FORMAT, &label.trim().to_ascii_uppercase())
}

/// Parses a 24-hour `HH:MM` time.
pub fn parse_24_hour(input: &str) -> Result<Time> {
    parse_with(input, TWENTY_FOUR_HOUR_FORMAT, input.trim())
}

/// Converts a 12-hour label to a zero-padded `HH:MM` string.
pub fn convert_time_slot_to_24_hour(label: &str) -> Result<String> {
    let time = parse_slot_label(label)?;
    Ok(time.strftime(TWENTY_FOUR_HOUR_FORMAT).to_string())
}

/// Converts a `HH:MM` string to its 12-hour label.
pub fn time_slot_from_24_hour(input: &str) -> Result<String> {
    parse_24_hour(input).map(format_time)
}

/// Hour (0-23) that a 12-hour label denotes; minutes are ignored.
pub fn slot_label_to_hour(label: &str) -> Result<u8> {
    parse_slot_label(label).map(|time| time.hour() as u8)
}

/// Parses a user-supplied time of day.
///
/// Accepts `holding` (or `hold`), 12-hour labels and 24-hour `HH:MM`.
pub fn parse_time_input(input: &str) -> Result<Time> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("holding") || trimmed.eq_ignore_ascii_case("hold") {
        return Ok(HOLDING_TIME);
    }

    let upper = trimmed.to_ascii_uppercase();
    if upper.ends_with("AM") || upper.ends_with("PM") {
        parse_slot_label(trimmed)
    } else {
        parse_24_hour(trimmed)
    }
}

fn parse_with(input: &str, format: &str, text: &str) -> Result<Time> {
    strtime::parse(format, text)
        .and_then(|parsed| parsed.to_time())
        .map_err(|e| invalid_time(input, &e.to_string()))
}

fn invalid_time(input: &str, reason: &str) -> TrackerError {
    TrackerError::invalid_input("time").with_reason(format!("'{input}': {reason}"))
}
