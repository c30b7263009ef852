//! Task model definition and related functionality.

use jiff::{civil::DateTime, Timestamp};
use serde::{Deserialize, Serialize};

use crate::schedule::time;

/// A unit of work with a wall-clock deadline, owned by exactly one project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: u64,

    /// Owner key the task belongs to
    pub user_id: String,

    /// ID of the owning project
    pub project_id: u64,

    /// Title of the task
    pub title: String,

    /// Local wall-clock deadline; 23:59 marks a holding task
    pub deadline: DateTime,

    /// Whether the task has been completed
    #[serde(default)]
    pub completed: bool,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,
}

impl Task {
    /// Whether the deadline carries the holding sentinel.
    pub fn is_holding(&self) -> bool {
        time::is_holding(self.deadline)
    }
}
