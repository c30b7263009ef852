//! Display implementations for calendar boards.

use std::fmt;

use crate::schedule::{CalendarBoard, DayBoard};

impl fmt::Display for DayBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "# {}", self.date.strftime("%A, %B %-d %Y"))?;
        if self.is_today {
            write!(f, " (today)")?;
        }
        writeln!(f)?;
        writeln!(f)?;

        writeln!(f, "## Holding")?;
        writeln!(f)?;
        if self.holding.is_empty() {
            writeln!(f, "Nothing on hold.")?;
        }
        for task in &self.holding {
            task.fmt_line(f, false)?;
        }

        writeln!(f, "\n## Schedule")?;
        writeln!(f)?;
        let mut empty = true;
        for row in self.slots.iter().filter(|row| !row.tasks.is_empty()) {
            empty = false;
            writeln!(f, "**{}**", row.slot)?;
            for task in &row.tasks {
                task.fmt_line(f, false)?;
            }
        }
        if empty {
            writeln!(f, "No scheduled tasks.")?;
        }

        if !self.done.is_empty() {
            writeln!(f, "\n## Done")?;
            writeln!(f)?;
            for task in &self.done {
                task.fmt_line(f, false)?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for CalendarBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in &self.days {
            write!(f, "{day}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::{
        civil::{date, DateTime},
        Timestamp,
    };

    use crate::{
        models::Task,
        schedule::{CalendarBoard, CalendarView, DayBoard, FixedClock},
    };

    fn task(id: u64, title: &str, deadline: DateTime, completed: bool) -> Task {
        Task {
            id,
            user_id: "local".to_string(),
            project_id: 1,
            title: title.to_string(),
            deadline,
            completed,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_day_board_display() {
        let day = date(2025, 3, 14);
        let clock = FixedClock(day.at(8, 0, 0, 0));
        let tasks = vec![
            task(1, "Inbox zero", day.at(23, 59, 0, 0), false),
            task(2, "Standup", day.at(9, 0, 0, 0), false),
            task(3, "Coffee", day.at(7, 0, 0, 0), true),
        ];

        let output = DayBoard::build(&tasks, day, &clock).to_string();
        assert!(output.starts_with("# Friday, March 14 2025 (today)"));
        assert!(output.contains("- [ ] 1. Inbox zero"));
        assert!(output.contains("**9:00 AM**\n- [ ] 2. Standup"));
        assert!(output.contains("## Done\n\n- [x] 3. Coffee"));
        // Completed tasks leave their hourly slot.
        assert!(!output.contains("**7:00 AM**"));
    }

    #[test]
    fn test_empty_board_display() {
        let day = date(2025, 3, 14);
        let clock = FixedClock(date(2025, 3, 20).at(8, 0, 0, 0));
        let output = CalendarBoard::build(&[], day, CalendarView::ThreeDay, &clock).to_string();

        assert_eq!(output.matches("No scheduled tasks.").count(), 3);
        assert!(!output.contains("(today)"));
    }
}
