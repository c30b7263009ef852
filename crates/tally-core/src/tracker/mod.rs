//! High-level tracker API for managing projects and tasks.
//!
//! The [`Tracker`] is the entry point used by the CLI and the MCP server. It
//! owns the database location, the owner key and the clock, and exposes
//! async operations that run each database call on the blocking thread pool.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Views       │    │   Operations    │    │    Database     │
//! │ (overview,      │───▶│ (project_ops,   │───▶│   (via db/)     │
//! │  calendar, ...) │    │  task_ops)      │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!  Status + schedule      Store mutations        Data persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: configures and creates [`Tracker`] instances
//! - [`project_ops`]: project mutations and lookups
//! - [`task_ops`]: task mutations, lookups and scheduling
//! - [`views`]: read-side projections that run the status engine and the
//!   calendar layout over a fresh snapshot
//!
//! # Usage
//!
//! ```rust,no_run
//! use tally_core::{params::CreateTask, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("/tmp/tally.db"))
//!     .build()
//!     .await?;
//!
//! // Lands in the Inbox, due tomorrow at 6:00 AM
//! let task = tracker
//!     .add_task(&CreateTask {
//!         title: "Call the plumber".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let overview = tracker.project_overview().await?;
//! println!("{overview}");
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use tokio::task;

use crate::{
    db::Database,
    error::{Result, TrackerError},
    schedule::Clock,
};

pub mod builder;
pub mod project_ops;
pub mod task_ops;
pub mod views;


pub use builder::TrackerBuilder;

/// Owner key used when none is configured.
pub const DEFAULT_USER: &str = "local";

/// Main tracker interface for managing projects and tasks.
#[derive(Clone)]
pub struct Tracker {
    pub(crate) db_path: PathBuf,
    pub(crate) user_id: String,
    pub(crate) clock: Arc<dyn Clock>,
}

impl Tracker {
    pub(crate) fn new(db_path: PathBuf, user_id: String, clock: Arc<dyn Clock>) -> Self {
        Self {
            db_path,
            user_id,
            clock,
        }
    }

    /// Owner key every operation is scoped to.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Location of the SQLite database file.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Runs `op` against a fresh connection on the blocking thread pool.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Database, &str) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();
        let user_id = self.user_id.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db, &user_id)
        })
        .await
        .map_err(TrackerError::join)?
    }
}
