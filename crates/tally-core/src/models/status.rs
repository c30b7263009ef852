//! Status enumerations for projects.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a project.
///
/// [`crate::status::compute_status`] only ever yields `Live`, `Unreported` or
/// `Done`. `Finished` is layered on top by
/// [`crate::status::display_status`] when the project carries the manual
/// [`ManualStatus::Finished`] flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Has future actionable work
    Live,

    /// Needs human review
    Unreported,

    /// Complete but not closed out
    Done,

    /// Explicitly closed by the user
    Finished,
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "live" => Ok(Status::Live),
            "unreported" | "review" => Ok(Status::Unreported),
            "done" => Ok(Status::Done),
            "finished" => Ok(Status::Finished),
            _ => Err(format!("Invalid project status: {s}")),
        }
    }
}

impl Status {
    /// Stable lowercase representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Live => "live",
            Status::Unreported => "unreported",
            Status::Done => "done",
            Status::Finished => "finished",
        }
    }

    /// Human-facing label used by the project views.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Live => "Active",
            Status::Unreported => "Review",
            Status::Done => "Completed",
            Status::Finished => "Finished",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally_core::models::Status;
    ///
    /// assert_eq!(Status::Live.with_icon(), "● Active");
    /// assert_eq!(Status::Unreported.with_icon(), "◐ Review");
    /// assert_eq!(Status::Finished.with_icon(), "★ Finished");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            Status::Live => "● Active",
            Status::Unreported => "◐ Review",
            Status::Done => "✓ Completed",
            Status::Finished => "★ Finished",
        }
    }
}

/// Manual override stored on a project. Absence means "not finished".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ManualStatus {
    /// The user has explicitly closed the project
    Finished,
}

impl FromStr for ManualStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "finished" => Ok(ManualStatus::Finished),
            _ => Err(format!("Invalid manual project status: {s}")),
        }
    }
}

impl ManualStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ManualStatus::Finished => "finished",
        }
    }
}
