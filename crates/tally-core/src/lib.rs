//! Core library for the Tally task and project tracker.
//!
//! Tally keeps tasks with wall-clock deadlines inside a forest of projects.
//! Each user has an Inbox project that new tasks land in by default. Project
//! status is never stored: it is derived on demand from the project's tasks
//! and sub-projects, and only the manual "finished" mark is persisted.
//!
//! # Layers
//!
//! - [`schedule`]: time classification (today, past, holding), hourly slots
//!   and calendar views, all against an injectable [`schedule::Clock`]
//! - [`status`]: the recursive status engine, project grouping and stats
//! - [`db`]: SQLite storage scoped by owner key
//! - [`tracker`]: the async facade used by the CLI and the MCP server
//! - [`display`]: markdown rendering shared by both interfaces
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tally_core::{params::{CreateProject, CreateTask}, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("tally.db"))
//!     .build()
//!     .await?;
//!
//! let garden = tracker
//!     .create_project(&CreateProject {
//!         name: "Garden".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! tracker
//!     .add_task(&CreateTask {
//!         title: "Plant tulips".to_string(),
//!         project_id: Some(garden.id),
//!         date: Some("2025-03-20".to_string()),
//!         time: Some("10:00 AM".to_string()),
//!     })
//!     .await?;
//!
//! println!("{}", tracker.project_overview().await?);
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod schedule;
pub mod status;
pub mod tracker;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, OperationStatus, ProjectSummaries, Tasks, UpdateResult,
};
pub use error::{Result, TrackerError};
pub use models::{
    ManualStatus, Project, ProjectDetail, ProjectSummary, Snapshot, Status, Task,
    UpdateProjectRequest, UpdateTaskRequest,
};
pub use schedule::{CalendarBoard, CalendarView, Clock, FixedClock, SystemClock};
pub use status::{compute_status, display_status, Overview, ProjectGroups, StatusEngine};
pub use tracker::{Tracker, TrackerBuilder};
