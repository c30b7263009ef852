//! Project model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ManualStatus;

/// A project groups tasks and may be nested under another project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Unique identifier for the project
    pub id: u64,

    /// Owner key the project belongs to
    pub user_id: String,

    /// Name of the project
    pub name: String,

    /// Opaque display tag
    pub color: String,

    /// Parent project, `None` for root projects
    #[serde(default)]
    pub parent_id: Option<u64>,

    /// Manual override; only `finished` is recognised
    #[serde(default)]
    pub status: Option<ManualStatus>,

    /// Free-text note of the next action to take
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_step: Option<String>,

    /// Timestamp when the project was created (UTC)
    pub created_at: Timestamp,
}

impl Project {
    /// Name reserved for the per-user default project.
    pub const INBOX_NAME: &'static str = "Inbox";

    /// Color given to a freshly created Inbox.
    pub const INBOX_COLOR: &'static str = "gray";

    /// Whether this is the distinguished Inbox singleton.
    pub fn is_inbox(&self) -> bool {
        self.name == Self::INBOX_NAME && self.parent_id.is_none()
    }

    /// Whether the user has manually closed this project.
    pub fn is_finished(&self) -> bool {
        self.status == Some(ManualStatus::Finished)
    }

    /// Whether the project sits at the top of the forest.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
