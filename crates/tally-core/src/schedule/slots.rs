//! Hourly calendar slots and the partitioning of tasks into them.
//!
//! A day shows one slot per hour from 6 AM to 11 PM plus a separate holding
//! area. Holding tasks never appear in an hourly slot; tasks due between
//! midnight and 6 AM belong to no visible slot.

use std::{fmt, iter::FusedIterator, str::FromStr};

use jiff::civil::{Date, DateTime, Time};
use serde::{Deserialize, Serialize};

use super::{labels, time};
use crate::{
    error::{Result, TrackerError},
    models::Task,
};

/// First hour shown in the daily grid.
pub const FIRST_SLOT_HOUR: u8 = 6;

/// Last hour shown in the daily grid.
pub const LAST_SLOT_HOUR: u8 = 23;

/// One hourly slot of the daily grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeSlot {
    hour: u8,
}

impl TimeSlot {
    /// Hour of day (0-23) the slot covers.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// 12-hour label such as `"6:00 AM"`.
    pub fn label(&self) -> String {
        labels::format_slot_label(self.hour, 0)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Iterator over the slots of a day, in order.
#[derive(Debug, Clone)]
pub struct TimeSlots {
    next: u8,
}

impl TimeSlots {
    /// All slots from 6 AM through 11 PM.
    pub fn of_day() -> Self {
        Self {
            next: FIRST_SLOT_HOUR,
        }
    }
}

impl Iterator for TimeSlots {
    type Item = TimeSlot;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > LAST_SLOT_HOUR {
            return None;
        }
        let slot = TimeSlot { hour: self.next };
        self.next += 1;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (LAST_SLOT_HOUR + 1).saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TimeSlots {}

impl FusedIterator for TimeSlots {}

/// Where a task sits on its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The holding area
    Holding,
    /// An hourly slot, by hour of day
    Hour(u8),
}

impl Slot {
    /// Slot a deadline lands in on its date.
    pub fn of(deadline: DateTime) -> Self {
        if time::is_holding(deadline) {
            Slot::Holding
        } else {
            Slot::Hour(deadline.hour() as u8)
        }
    }

    /// Deadline that places a task into this slot on `date`.
    ///
    /// Hourly slots map to the top of the hour.
    pub fn deadline_on(&self, date: Date) -> Result<DateTime> {
        match *self {
            Slot::Holding => Ok(time::holding_deadline(date)),
            Slot::Hour(hour) => Time::new(hour as i8, 0, 0, 0)
                .map(|t| date.to_datetime(t))
                .map_err(|e| TrackerError::invalid_input("slot").with_reason(e.to_string())),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Holding => f.write_str("Holding"),
            Slot::Hour(hour) => f.write_str(&labels::format_slot_label(*hour, 0)),
        }
    }
}

impl FromStr for Slot {
    type Err = TrackerError;

    /// Accepts `holding`, a slot label such as `"2:00 PM"`, or `HH:MM`.
    fn from_str(s: &str) -> Result<Self> {
        let time = labels::parse_time_input(s).map_err(|_| {
            TrackerError::invalid_input("slot").with_reason(format!(
                "'{s}' is not a slot; use a label like '2:00 PM', a time like '14:00', or 'holding'"
            ))
        })?;
        if time == time::HOLDING_TIME {
            return Ok(Slot::Holding);
        }
        Ok(Slot::Hour(time.hour() as u8))
    }
}

/// The 18 hourly slots of a day.
pub fn time_slots_of_day() -> TimeSlots {
    TimeSlots::of_day()
}

/// Slot the task occupies on its deadline date.
pub fn slot_for_task(task: &Task) -> Slot {
    Slot::of(task.deadline)
}

/// Non-holding tasks due on `date` within the given hour.
pub fn tasks_in_slot(tasks: &[Task], date: Date, hour: u8) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| !task.is_holding())
        .filter(|task| task.deadline.date() == date && task.deadline.hour() as u8 == hour)
        .collect()
}

/// Holding tasks due on `date`.
pub fn holding_tasks(tasks: &[Task], date: Date) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| task.deadline.date() == date && task.is_holding())
        .collect()
}

/// Completed tasks due on `date`, holding or not.
pub fn done_tasks(tasks: &[Task], date: Date) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| task.completed && task.deadline.date() == date)
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, Timestamp};

    use super::*;

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
    fn test_time_slots_cover_six_to_eleven() {
        let slots: Vec<TimeSlot> = TimeSlots::of_day().collect();
        assert_eq!(slots.len(), 18);
        assert_eq!(TimeSlots::of_day().len(), 18);
        assert_eq!(slots[0].label(), "6:00 AM");
        assert_eq!(slots[6].label(), "12:00 PM");
        assert_eq!(slots[17].label(), "11:00 PM");
        // Regenerable: a second pass yields the same sequence.
        assert_eq!(time_slots_of_day().collect::<Vec<_>>(), slots);
    }

    #[test]
    fn test_slot_labels_round_trip() {
        for slot in time_slots_of_day() {
            let twenty_four = labels::convert_time_slot_to_24_hour(&slot.label()).unwrap();
            assert_eq!(labels::time_slot_from_24_hour(&twenty_four).unwrap(), slot.label());
        }
    }

    #[test]
    fn test_slot_for_task() {
        let day = date(2025, 3, 14);
        assert_eq!(slot_for_task(&task(1, day.at(14, 0, 0, 0), false)), Slot::Hour(14));
        assert_eq!(slot_for_task(&task(2, day.at(23, 59, 0, 0), false)), Slot::Holding);
    }

    #[test]
    fn test_holding_task_never_in_hourly_slot() {
        let day = date(2025, 3, 14);
        let tasks = vec![
            task(1, day.at(23, 59, 0, 0), false),
            task(2, day.at(23, 0, 0, 0), false),
            task(3, day.at(23, 30, 0, 0), false),
        ];

        let late: Vec<u64> = tasks_in_slot(&tasks, day, 23).iter().map(|t| t.id).collect();
        assert_eq!(late, vec![2, 3]);

        let holding: Vec<u64> = holding_tasks(&tasks, day).iter().map(|t| t.id).collect();
        assert_eq!(holding, vec![1]);
    }

    #[test]
    fn test_slots_filter_by_date() {
        let tasks = vec![
            task(1, date(2025, 3, 14).at(9, 15, 0, 0), false),
            task(2, date(2025, 3, 15).at(9, 0, 0, 0), false),
        ];

        assert_eq!(tasks_in_slot(&tasks, date(2025, 3, 14), 9).len(), 1);
        assert!(tasks_in_slot(&tasks, date(2025, 3, 14), 10).is_empty());
    }

    #[test]
    fn test_done_tasks_include_holding() {
        let day = date(2025, 3, 14);
        let tasks = vec![
            task(1, day.at(23, 59, 0, 0), true),
            task(2, day.at(8, 0, 0, 0), true),
            task(3, day.at(8, 0, 0, 0), false),
        ];
        assert_eq!(done_tasks(&tasks, day).len(), 2);
    }

    #[test]
    fn test_slot_parsing_and_deadlines() {
        let day = date(2025, 3, 14);
        assert_eq!("holding".parse::<Slot>().unwrap(), Slot::Holding);
        assert_eq!("2:00 PM".parse::<Slot>().unwrap(), Slot::Hour(14));
        assert_eq!("09:30".parse::<Slot>().unwrap(), Slot::Hour(9));
        assert!("later".parse::<Slot>().is_err());

        assert_eq!(Slot::Hour(14).deadline_on(day).unwrap(), day.at(14, 0, 0, 0));
        assert_eq!(Slot::Holding.deadline_on(day).unwrap(), day.at(23, 59, 0, 0));
        assert_eq!(Slot::of(day.at(23, 59, 0, 0)), Slot::Holding);
        assert_eq!(Slot::of(day.at(7, 45, 0, 0)), Slot::Hour(7));
    }
}
