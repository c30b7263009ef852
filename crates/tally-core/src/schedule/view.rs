//! Calendar boards: one or more days laid out as holding area, hourly slots
//! and a pile of completed work.

use std::{fmt, str::FromStr};

use jiff::{civil::Date, ToSpan};
use serde::{Deserialize, Serialize};

use super::{slots, Clock, TimeSlot, TimeSlots};
use crate::{error::TrackerError, models::Task};

/// Span of days a calendar board covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalendarView {
    /// The anchor date only
    Day,
    /// The anchor date and the two days after it
    #[default]
    #[serde(rename = "3-day")]
    ThreeDay,
    /// Sunday through Saturday of the anchor's week
    Week,
}

impl CalendarView {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarView::Day => "day",
            CalendarView::ThreeDay => "3-day",
            CalendarView::Week => "week",
        }
    }

    /// Dates shown for this view around `anchor`.
    pub fn days(&self, anchor: Date) -> Vec<Date> {
        let (start, count) = match self {
            CalendarView::Day => (anchor, 1),
            CalendarView::ThreeDay => (anchor, 3),
            CalendarView::Week => {
                let offset = i64::from(anchor.weekday().to_sunday_zero_offset());
                (anchor.saturating_sub(offset.days()), 7)
            }
        };
        start.series(1.day()).take(count).collect()
    }
}

impl FromStr for CalendarView {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(CalendarView::Day),
            "3-day" | "3day" | "three-day" => Ok(CalendarView::ThreeDay),
            "week" => Ok(CalendarView::Week),
            _ => Err(TrackerError::invalid_input("view")
                .with_reason(format!("'{s}' is not one of: day, 3-day, week"))),
        }
    }
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tasks scheduled into one hourly slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotRow {
    pub slot: TimeSlot,
    pub tasks: Vec<Task>,
}

/// Layout of a single day.
///
/// Holding and hourly rows list open tasks only; completed tasks of the day
/// are collected in `done`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBoard {
    pub date: Date,
    pub is_today: bool,
    pub holding: Vec<Task>,
    pub slots: Vec<SlotRow>,
    pub done: Vec<Task>,
}

impl DayBoard {
    pub fn build<C: Clock + ?Sized>(tasks: &[Task], date: Date, clock: &C) -> Self {
        let open = |list: Vec<&Task>| -> Vec<Task> {
            list.into_iter().filter(|t| !t.completed).cloned().collect()
        };

        let slots = TimeSlots::of_day()
            .map(|slot| SlotRow {
                slot,
                tasks: open(slots::tasks_in_slot(tasks, date, slot.hour())),
            })
            .collect();

        Self {
            date,
            is_today: date == clock.today(),
            holding: open(slots::holding_tasks(tasks, date)),
            slots,
            done: slots::done_tasks(tasks, date).into_iter().cloned().collect(),
        }
    }

    /// Number of open tasks visible on the board.
    pub fn open_count(&self) -> usize {
        self.holding.len() + self.slots.iter().map(|row| row.tasks.len()).sum::<usize>()
    }
}

/// A run of day boards for a calendar view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarBoard {
    pub view: CalendarView,
    pub anchor: Date,
    pub days: Vec<DayBoard>,
}

impl CalendarBoard {
    pub fn build<C: Clock + ?Sized>(
        tasks: &[Task],
        anchor: Date,
        view: CalendarView,
        clock: &C,
    ) -> Self {
        let days = view
            .days(anchor)
            .into_iter()
            .map(|date| DayBoard::build(tasks, date, clock))
            .collect();
        Self { view, anchor, days }
    }
}

#[cfg(test)]
mod tests {
    use jiff::{
        civil::{date, DateTime},
        Timestamp,
    };

    use super::*;
    use crate::schedule::FixedClock;

    fn task(id: u64, deadline: DateTime, completed: bool) -> Task {
        Task {
            id,
            user_id: "local".to_string(),
            project_id: 1,
            title: format!("Task {id}"),
            deadline,
            completed,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_default_view_is_three_days() {
        assert_eq!(CalendarView::default(), CalendarView::ThreeDay);
        assert_eq!(CalendarView::default().as_str(), "3-day");
    }

    #[test]
    fn test_view_days() {
        // 2025-03-14 is a Friday.
        let anchor = date(2025, 3, 14);
        assert_eq!(CalendarView::Day.days(anchor), vec![anchor]);
        assert_eq!(
            CalendarView::ThreeDay.days(anchor),
            vec![anchor, date(2025, 3, 15), date(2025, 3, 16)]
        );

        let week = CalendarView::Week.days(anchor);
        assert_eq!(week.len(), 7);
        assert_eq!(week[0], date(2025, 3, 9));
        assert_eq!(week[6], date(2025, 3, 15));
    }

    #[test]
    fn test_week_starting_on_sunday() {
        let sunday = date(2025, 3, 9);
        assert_eq!(CalendarView::Week.days(sunday)[0], sunday);
    }

    #[test]
    fn test_parse_view() {
        assert_eq!("3-day".parse::<CalendarView>().unwrap(), CalendarView::ThreeDay);
        assert_eq!("Week".parse::<CalendarView>().unwrap(), CalendarView::Week);
        assert!("month".parse::<CalendarView>().is_err());
    }

    #[test]
    fn test_day_board_layout() {
        let day = date(2025, 3, 14);
        let clock = FixedClock(day.at(12, 0, 0, 0));
        let tasks = vec![
            task(1, day.at(23, 59, 0, 0), false),
            task(2, day.at(9, 0, 0, 0), false),
            task(3, day.at(9, 30, 0, 0), true),
            task(4, day.at(5, 0, 0, 0), false),
            task(5, date(2025, 3, 15).at(9, 0, 0, 0), false),
        ];

        let board = DayBoard::build(&tasks, day, &clock);
        assert!(board.is_today);
        assert_eq!(board.holding.len(), 1);
        assert_eq!(board.slots.len(), 18);

        let nine = board.slots.iter().find(|row| row.slot.hour() == 9).unwrap();
        assert_eq!(nine.tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(board.done.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3]);
        // The 5 AM task is outside the visible grid.
        assert_eq!(board.open_count(), 2);
    }

    #[test]
    fn test_calendar_board() {
        let anchor = date(2025, 3, 14);
        let clock = FixedClock(date(2025, 3, 15).at(8, 0, 0, 0));
        let board = CalendarBoard::build(&[], anchor, CalendarView::ThreeDay, &clock);

        assert_eq!(board.days.len(), 3);
        assert!(!board.days[0].is_today);
        assert!(board.days[1].is_today);
    }
}
