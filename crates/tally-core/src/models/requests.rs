//! Validated request types for updating models.

use jiff::civil::{Date, Time};

use super::ManualStatus;
use crate::{
    error::{Result, TrackerError},
    params::{UpdateProject, UpdateTask},
    schedule::{labels, time},
};

/// Field changes for a project; `None` leaves a field untouched.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub color: Option<String>,
    /// `Some(None)` moves the project to the root
    pub parent_id: Option<Option<u64>>,
    /// `Some(None)` clears the manual override
    pub status: Option<Option<ManualStatus>>,
    /// `Some(None)` clears the note
    pub next_step: Option<Option<String>>,
}

impl UpdateProjectRequest {
    /// Request that only toggles the manual finished flag.
    pub fn finished(finished: bool) -> Self {
        Self {
            status: Some(finished.then_some(ManualStatus::Finished)),
            ..Default::default()
        }
    }

    /// Whether the request changes anything at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl TryFrom<UpdateProject> for UpdateProjectRequest {
    type Error = TrackerError;

    fn try_from(params: UpdateProject) -> Result<Self> {
        if params.parent_id.is_some() && params.make_root {
            return Err(TrackerError::invalid_input("parent_id")
                .with_reason("Cannot set a parent and move to the root at the same time"));
        }

        let name = params.name.map(|n| non_empty("name", n)).transpose()?;
        let parent_id = if params.make_root {
            Some(None)
        } else {
            params.parent_id.map(Some)
        };
        let next_step = params
            .next_step
            .map(|s| if s.trim().is_empty() { None } else { Some(s) });

        Ok(Self {
            name,
            color: params.color,
            parent_id,
            status: None,
            next_step,
        })
    }
}

/// Field changes for a task; date and time are merged with the current
/// deadline by the store.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub project_id: Option<u64>,
    pub date: Option<Date>,
    pub time: Option<Time>,
    pub completed: Option<bool>,
}

impl UpdateTaskRequest {
    /// Whether the request changes anything at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl TryFrom<UpdateTask> for UpdateTaskRequest {
    type Error = TrackerError;

    fn try_from(params: UpdateTask) -> Result<Self> {
        Ok(Self {
            title: params.title.map(|t| non_empty("title", t)).transpose()?,
            project_id: params.project_id,
            date: params.date.as_deref().map(time::parse_date).transpose()?,
            time: params.time.as_deref().map(labels::parse_time_input).transpose()?,
            completed: params.completed,
        })
    }
}

/// Trims a user-supplied string and rejects it when nothing is left.
pub(crate) fn non_empty(field: &str, value: String) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::invalid_input(field).with_reason("must not be empty"));
    }
    Ok(trimmed.to_string())
}
