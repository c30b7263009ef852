//! DateTime display utilities.
//!
//! Audit timestamps are instants and are shown in the system time zone.
//! Deadlines are already local wall-clock values and are shown as-is.

use std::fmt;

use jiff::{civil::DateTime, tz::TimeZone, Timestamp};

use crate::schedule::{labels, time};

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A task deadline, e.g. `Fri, Mar 14 2025 2:00 PM` or
/// `Fri, Mar 14 2025 (holding)`.
pub struct Deadline<'a>(pub &'a DateTime);

impl fmt::Display for Deadline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.date().strftime("%a, %b %-d %Y"))?;
        if time::is_holding(*self.0) {
            write!(f, " (holding)")
        } else {
            write!(f, " {}", labels::format_time(self.0.time()))
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_deadline_display() {
        let timed = date(2025, 3, 14).at(14, 0, 0, 0);
        assert_eq!(Deadline(&timed).to_string(), "Fri, Mar 14 2025 2:00 PM");

        let holding = date(2025, 3, 4).at(23, 59, 0, 0);
        assert_eq!(Deadline(&holding).to_string(), "Tue, Mar 4 2025 (holding)");
    }
}
