//! Point-in-time view of a user's tasks and projects.

use serde::{Deserialize, Serialize};

use super::{Project, Task};
use crate::error::Result;

/// Everything the status engine and calendar need, read in one go from the
/// store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub projects: Vec<Project>,
}

impl Snapshot {
    pub fn new(tasks: Vec<Task>, projects: Vec<Project>) -> Self {
        Self { tasks, projects }
    }

    /// Looks up a project by ID.
    pub fn project(&self, id: u64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Looks up a task by ID.
    pub fn task(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// The Inbox singleton, if present.
    pub fn inbox(&self) -> Option<&Project> {
        self.projects.iter().find(|p| p.is_inbox())
    }

    /// Tasks owned directly by the given project.
    pub fn tasks_for(&self, project_id: u64) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| t.project_id == project_id)
    }

    /// Direct children of the given project.
    pub fn sub_projects(&self, project_id: u64) -> impl Iterator<Item = &Project> {
        self.projects
            .iter()
            .filter(move |p| p.parent_id == Some(project_id))
    }

    /// Drops tasks whose `project_id` does not resolve to a project in the
    /// snapshot.
    pub fn without_orphans(mut self) -> Self {
        let known: std::collections::HashSet<u64> = self.projects.iter().map(|p| p.id).collect();
        self.tasks.retain(|t| known.contains(&t.project_id));
        self
    }

    /// Serializes the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a snapshot previously produced by [`Snapshot::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
