//! Grouping of top-level projects for the project overview.

use serde::{Deserialize, Serialize};

use super::StatusMap;
use crate::models::{ProjectSummary, Snapshot, Status};

/// Top-level projects split by display status.
///
/// The Inbox sits in its own slot unless it needs review, in which case it
/// leads the `review` list instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectGroups {
    pub inbox: Option<ProjectSummary>,
    pub review: Vec<ProjectSummary>,
    pub active: Vec<ProjectSummary>,
    pub finished: Vec<ProjectSummary>,
}

impl ProjectGroups {
    pub fn build(snapshot: &Snapshot, statuses: &StatusMap) -> Self {
        let mut groups = Self::default();

        for project in snapshot.projects.iter().filter(|p| p.is_root()) {
            let Some(status) = statuses.display(project.id) else {
                continue;
            };
            let summary = ProjectSummary::from_snapshot(project, snapshot, status);

            if project.is_inbox() {
                if status == Status::Unreported {
                    groups.review.insert(0, summary);
                } else {
                    groups.inbox = Some(summary);
                }
                continue;
            }

            match status {
                Status::Unreported => groups.review.push(summary),
                Status::Live => groups.active.push(summary),
                Status::Finished => groups.finished.push(summary),
                // Only the Inbox computes to Done without the manual flag.
                Status::Done => {}
            }
        }

        groups
    }

    /// Whether there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.inbox.is_none()
            && self.review.is_empty()
            && self.active.is_empty()
            && self.finished.is_empty()
    }
}
