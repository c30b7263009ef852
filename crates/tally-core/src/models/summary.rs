//! Project summary types and functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Project, Snapshot, Status, Task};

/// Summary information about a project with task statistics and its display
/// status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectSummary {
    /// Project ID
    pub id: u64,
    /// Name of the project
    pub name: String,
    /// Opaque display tag
    pub color: String,
    /// Parent project, if nested
    pub parent_id: Option<u64>,
    /// Status as shown to the user
    pub status: Status,
    /// Next action note
    pub next_step: Option<String>,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Whether this is the Inbox singleton
    pub is_inbox: bool,
    /// Number of tasks owned directly by the project
    pub total_tasks: u32,
    /// Number of those tasks that are complete
    pub completed_tasks: u32,
    /// Number of direct sub-projects
    pub sub_projects: u32,
}

impl ProjectSummary {
    /// Build a summary for `project` from the snapshot it belongs to.
    pub fn from_snapshot(project: &Project, snapshot: &Snapshot, status: Status) -> Self {
        let total_tasks = snapshot.tasks_for(project.id).count() as u32;
        let completed_tasks = snapshot
            .tasks_for(project.id)
            .filter(|task| task.completed)
            .count() as u32;

        Self {
            id: project.id,
            name: project.name.clone(),
            color: project.color.clone(),
            parent_id: project.parent_id,
            status,
            next_step: project.next_step.clone(),
            created_at: project.created_at,
            is_inbox: project.is_inbox(),
            total_tasks,
            completed_tasks,
            sub_projects: snapshot.sub_projects(project.id).count() as u32,
        }
    }

    /// Number of tasks still open.
    pub fn pending_tasks(&self) -> u32 {
        self.total_tasks - self.completed_tasks
    }
}

/// Full view of one project: its summary, own tasks and direct children.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectDetail {
    pub summary: ProjectSummary,
    /// Name of the parent project, if nested
    pub parent_name: Option<String>,
    /// Tasks owned directly by the project, ordered by deadline
    pub tasks: Vec<Task>,
    pub sub_projects: Vec<ProjectSummary>,
}
