//! Dashboard counters over a snapshot.

use serde::{Deserialize, Serialize};

use crate::{
    models::Snapshot,
    schedule::{is_past, is_today, Clock},
};

/// Lifetime counters shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    pub total_tasks: u32,
    pub completed_tasks: u32,
    /// Incomplete tasks whose deadline is past
    pub overdue_tasks: u32,
    /// Tasks due today, complete or not
    pub due_today: u32,
    /// Incomplete tasks whose deadline is after now
    pub upcoming_tasks: u32,
    /// Completed share of all tasks, rounded to a whole percent
    pub completion_rate: u32,
    pub total_projects: u32,
    pub finished_projects: u32,
}

impl Overview {
    pub fn compute<C: Clock + ?Sized>(snapshot: &Snapshot, clock: &C) -> Self {
        let now = clock.now();
        let mut overview = Self {
            total_tasks: snapshot.tasks.len() as u32,
            total_projects: snapshot.projects.len() as u32,
            ..Self::default()
        };

        for task in &snapshot.tasks {
            if task.completed {
                overview.completed_tasks += 1;
            } else {
                if is_past(task.deadline, clock) {
                    overview.overdue_tasks += 1;
                }
                if task.deadline > now {
                    overview.upcoming_tasks += 1;
                }
            }
            if is_today(task.deadline, clock) {
                overview.due_today += 1;
            }
        }

        overview.finished_projects =
            snapshot.projects.iter().filter(|p| p.is_finished()).count() as u32;
        if overview.total_tasks > 0 {
            overview.completion_rate = (f64::from(overview.completed_tasks)
                / f64::from(overview.total_tasks)
                * 100.0)
                .round() as u32;
        }
        overview
    }
}
