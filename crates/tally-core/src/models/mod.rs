//! Data models for projects and tasks.
//!
//! This module contains the core domain models of the tracker. Display
//! implementations for these models live in [`crate::display::models`] so
//! that the data structures stay free of presentation logic.
//!
//! # Model Overview
//!
//! - [`Project`]: a node in the per-user project forest. The root project
//!   named `Inbox` is the default home for new tasks and is protected from
//!   renaming, moving, finishing and deletion.
//! - [`Task`]: a titled unit of work with a local wall-clock deadline. A
//!   deadline at exactly 23:59 marks the task as *holding*.
//! - [`Snapshot`]: every task and project of one user, read together.
//! - [`ProjectSummary`] / [`ProjectDetail`]: derived views that carry the
//!   project's display [`Status`].
//!
//! # Examples
//!
//! ```rust
//! use jiff::{civil::date, Timestamp};
//! use tally_core::models::Task;
//!
//! let task = Task {
//!     id: 1,
//!     user_id: "local".to_string(),
//!     project_id: 1,
//!     title: "Water the plants".to_string(),
//!     deadline: date(2025, 3, 14).at(23, 59, 0, 0),
//!     completed: false,
//!     created_at: Timestamp::UNIX_EPOCH,
//! };
//! assert!(task.is_holding());
//! ```

pub mod project;
pub mod requests;
pub mod snapshot;
pub mod status;
pub mod summary;
pub mod task;

#[cfg(test)]
mod tests;

pub use project::Project;
pub use requests::{UpdateProjectRequest, UpdateTaskRequest};
pub use snapshot::Snapshot;
pub use status::{ManualStatus, Status};
pub use summary::{ProjectDetail, ProjectSummary};
pub use task::Task;
