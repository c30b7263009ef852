//! Sources of the current local wall-clock time.

use jiff::{
    civil::{Date, DateTime},
    Zoned,
};

/// Provides the current local date and time.
pub trait Clock: Send + Sync {
    /// Current local wall-clock instant.
    fn now(&self) -> DateTime;

    /// Current local calendar date.
    fn today(&self) -> Date {
        self.now().date()
    }
}

/// Reads the system clock in the system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime {
        Zoned::now().datetime()
    }
}

/// A clock frozen at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime);

impl Clock for FixedClock {
    fn now(&self) -> DateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(date(2025, 3, 14).at(10, 0, 0, 0));
        assert_eq!(clock.today(), date(2025, 3, 14));
        assert_eq!(clock.now().hour(), 10);
    }
}
