//! Time classification rules for deadlines.
//!
//! A deadline whose time of day is exactly 23:59 is a *holding* deadline: the
//! task belongs to its date but to no particular hour. Holding deadlines do
//! not go past until the day after their date.

use jiff::{
    civil::{time, Date, DateTime, Time},
    ToSpan,
};

use super::Clock;
use crate::error::{Result, TrackerError};

/// Time of day that marks a holding deadline.
pub const HOLDING_TIME: Time = time(23, 59, 0, 0);

/// Time of day given to new tasks when none is supplied.
pub const DEFAULT_TIME: Time = time(6, 0, 0, 0);

/// Whether `deadline` falls on the clock's current date.
pub fn is_today<C: Clock + ?Sized>(deadline: DateTime, clock: &C) -> bool {
    deadline.date() == clock.today()
}

/// Whether `deadline` is past.
///
/// Holding deadlines are past once their date is today or earlier; all other
/// deadlines are past when strictly before now.
pub fn is_past<C: Clock + ?Sized>(deadline: DateTime, clock: &C) -> bool {
    if is_holding(deadline) {
        deadline.date() <= clock.today()
    } else {
        deadline < clock.now()
    }
}

/// Whether `deadline` carries the holding sentinel time.
pub fn is_holding(deadline: DateTime) -> bool {
    deadline.hour() == HOLDING_TIME.hour() && deadline.minute() == HOLDING_TIME.minute()
}

/// Holding deadline for the given date.
pub fn holding_deadline(date: Date) -> DateTime {
    date.to_datetime(HOLDING_TIME)
}

/// Deadline used when a task is created without one: tomorrow at 6:00 AM.
pub fn default_deadline<C: Clock + ?Sized>(clock: &C) -> DateTime {
    clock
        .today()
        .saturating_add(1.days())
        .to_datetime(DEFAULT_TIME)
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<Date> {
    input.trim().parse::<Date>().map_err(|e| {
        TrackerError::invalid_input("date").with_reason(format!(
            "'{input}' is not a valid YYYY-MM-DD date: {e}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::schedule::FixedClock;

    fn clock() -> FixedClock {
        FixedClock(date(2025, 3, 14).at(12, 0, 0, 0))
    }

    #[test]
    fn test_is_today() {
        assert!(is_today(date(2025, 3, 14).at(6, 0, 0, 0), &clock()));
        assert!(is_today(date(2025, 3, 14).at(23, 59, 0, 0), &clock()));
        assert!(!is_today(date(2025, 3, 15).at(0, 0, 0, 0), &clock()));
    }

    #[test]
    fn test_is_past_for_timed_deadlines() {
        assert!(is_past(date(2025, 3, 14).at(11, 0, 0, 0), &clock()));
        assert!(!is_past(date(2025, 3, 14).at(12, 0, 0, 0), &clock()));
        assert!(!is_past(date(2025, 3, 14).at(14, 0, 0, 0), &clock()));
    }

    #[test]
    fn test_is_past_for_holding_deadlines() {
        // Holding today is already past even though 23:59 has not arrived.
        assert!(is_past(holding_deadline(date(2025, 3, 14)), &clock()));
        assert!(is_past(holding_deadline(date(2025, 3, 13)), &clock()));
        assert!(!is_past(holding_deadline(date(2025, 3, 15)), &clock()));
    }

    #[test]
    fn test_is_holding_ignores_seconds() {
        assert!(is_holding(date(2025, 3, 14).at(23, 59, 30, 0)));
        assert!(!is_holding(date(2025, 3, 14).at(23, 0, 0, 0)));
        assert!(!is_holding(date(2025, 3, 14).at(11, 59, 0, 0)));
    }

    #[test]
    fn test_default_deadline_is_tomorrow_morning() {
        assert_eq!(default_deadline(&clock()), date(2025, 3, 15).at(6, 0, 0, 0));

        let new_year = FixedClock(date(2024, 12, 31).at(22, 0, 0, 0));
        assert_eq!(default_deadline(&new_year), date(2025, 1, 1).at(6, 0, 0, 0));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date(" 2025-03-14 ").unwrap(), date(2025, 3, 14));
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("tomorrow").is_err());
    }
}
