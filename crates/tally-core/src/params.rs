//! Parameter structures for Tally operations
//!
//! This module contains shared parameter structures used across the
//! interfaces (CLI, MCP) without framework-specific derives. Dates, times and
//! slots travel as strings here and are validated when converted into the
//! request types in [`crate::models::requests`] or by the tracker.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers add their own derives (clap `Args`) and convert into
//! these types with `From`. JSON schemas for the MCP server are derived only
//! when the `schema` feature is enabled.
//!
//! Accepted string formats:
//!
//! - dates: `YYYY-MM-DD`
//! - times: `2:00 PM`, `14:00`, or `holding`
//! - calendar views: `day`, `3-day`, `week`

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just an ID.
///
/// Used for show_project, finish_project, reopen_project, show_task,
/// toggle_task and delete_task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateProject {
    /// Name of the project (required)
    pub name: String,
    /// Optional display color; defaults to "blue"
    pub color: Option<String>,
    /// Optional parent project for nesting
    pub parent_id: Option<u64>,
}

/// Parameters for updating a project.
///
/// Fields left empty are not changed. `make_root` moves a nested project to
/// the top level and cannot be combined with `parent_id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateProject {
    /// Project ID to update (required)
    pub id: u64,
    /// New name
    pub name: Option<String>,
    /// New display color
    pub color: Option<String>,
    /// New parent project
    pub parent_id: Option<u64>,
    /// Move the project to the top level
    #[serde(default)]
    pub make_root: bool,
    /// Next action note; an empty string clears it
    pub next_step: Option<String>,
}

/// Parameters for permanently deleting a project.
///
/// Deletion removes the project's tasks and sub-projects as well, so it
/// requires explicit confirmation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteProject {
    /// The ID of the project to delete
    pub id: u64,
    /// Must be true to perform the deletion
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for creating a new task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateTask {
    /// Title of the task (required)
    pub title: String,
    /// Owning project; defaults to the Inbox
    pub project_id: Option<u64>,
    /// Deadline date (YYYY-MM-DD); defaults to tomorrow
    pub date: Option<String>,
    /// Deadline time ("2:00 PM", "14:00" or "holding"); defaults to 6:00 AM
    pub time: Option<String>,
}

/// Parameters for updating an existing task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateTask {
    /// Task ID to update (required)
    pub id: u64,
    /// New title
    pub title: Option<String>,
    /// Move the task to another project
    pub project_id: Option<u64>,
    /// New deadline date (YYYY-MM-DD); the time is kept
    pub date: Option<String>,
    /// New deadline time ("2:00 PM", "14:00" or "holding"); the date is kept
    pub time: Option<String>,
    /// Set the completion flag explicitly
    pub completed: Option<bool>,
}

/// Parameters for moving a task into a calendar slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ScheduleTask {
    /// Task ID to move
    pub id: u64,
    /// Target date (YYYY-MM-DD)
    pub date: String,
    /// Target slot: an hour label such as "2:00 PM" or "14:00", or "holding"
    pub slot: String,
}

/// Parameters for rendering the calendar board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ShowCalendar {
    /// Anchor date (YYYY-MM-DD); defaults to today
    pub date: Option<String>,
    /// View: "day", "3-day" (default) or "week"
    pub view: Option<String>,
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};

    use super::*;
    use crate::{
        models::{UpdateProjectRequest, UpdateTaskRequest},
        TrackerError,
    };

    #[test]
    fn test_update_project_conversion() {
        let params = UpdateProject {
            id: 4,
            name: Some("  Garden  ".to_string()),
            next_step: Some(String::new()),
            ..Default::default()
        };

        let request = UpdateProjectRequest::try_from(params).unwrap();
        assert_eq!(request.name, Some("Garden".to_string()));
        assert_eq!(request.next_step, Some(None));
        assert_eq!(request.parent_id, None);
    }

    #[test]
    fn test_update_project_make_root() {
        let params = UpdateProject {
            id: 4,
            make_root: true,
            ..Default::default()
        };

        let request = UpdateProjectRequest::try_from(params).unwrap();
        assert_eq!(request.parent_id, Some(None));
    }

    #[test]
    fn test_update_project_rejects_conflicting_parent() {
        let params = UpdateProject {
            id: 4,
            parent_id: Some(2),
            make_root: true,
            ..Default::default()
        };

        match UpdateProjectRequest::try_from(params).unwrap_err() {
            TrackerError::InvalidInput { field, .. } => assert_eq!(field, "parent_id"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_update_project_rejects_blank_name() {
        let params = UpdateProject {
            id: 4,
            name: Some("   ".to_string()),
            ..Default::default()
        };

        assert!(UpdateProjectRequest::try_from(params).is_err());
    }

    #[test]
    fn test_update_task_conversion() {
        let params = UpdateTask {
            id: 9,
            date: Some("2025-03-14".to_string()),
            time: Some("2:30 PM".to_string()),
            ..Default::default()
        };

        let request = UpdateTaskRequest::try_from(params).unwrap();
        assert_eq!(request.date, Some(date(2025, 3, 14)));
        assert_eq!(request.time, Some(time(14, 30, 0, 0)));
        assert_eq!(request.title, None);
    }

    #[test]
    fn test_update_task_holding_time() {
        let params = UpdateTask {
            id: 9,
            time: Some("holding".to_string()),
            ..Default::default()
        };

        let request = UpdateTaskRequest::try_from(params).unwrap();
        assert_eq!(request.time, Some(time(23, 59, 0, 0)));
    }

    #[test]
    fn test_update_task_rejects_bad_date() {
        let params = UpdateTask {
            id: 9,
            date: Some("14/03/2025".to_string()),
            ..Default::default()
        };

        match UpdateTaskRequest::try_from(params).unwrap_err() {
            TrackerError::InvalidInput { field, .. } => assert_eq!(field, "date"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_update_task() {
        let request = UpdateTaskRequest::try_from(UpdateTask {
            id: 1,
            ..Default::default()
        })
        .unwrap();
        assert!(request.is_empty());
    }
}
