//! Builder for creating and configuring Tracker instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;

use super::{Tracker, DEFAULT_USER};
use crate::{
    error::{Result, TrackerError},
    schedule::{Clock, SystemClock},
};

/// Builder for creating and configuring Tracker instances.
#[derive(Clone)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
    user_id: String,
    clock: Arc<dyn Clock>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            user_id: DEFAULT_USER.to_string(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/tally/tally.db` or `~/.local/share/tally/tally.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the owner key all projects and tasks are scoped to.
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Replaces the system clock, e.g. with a
    /// [`FixedClock`](crate::schedule::FixedClock) in tests.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Builds the configured tracker instance.
    ///
    /// Creates the database directory and schema if needed and makes sure the
    /// user has an Inbox.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` if the user key is empty
    /// Returns `TrackerError::FileSystem` if the database path is invalid
    /// Returns `TrackerError::Database` if database initialization fails
    pub async fn build(self) -> Result<Tracker> {
        let user_id = self.user_id.trim().to_string();
        if user_id.is_empty() {
            return Err(TrackerError::invalid_input("user").with_reason("must not be empty"));
        }

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TrackerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let tracker = Tracker::new(db_path, user_id, self.clock);
        let inbox = tracker.with_database(|db, user| db.ensure_inbox(user)).await?;
        debug!(
            "Tracker ready at {} (user '{}', Inbox {})",
            tracker.db_path.display(),
            tracker.user_id,
            inbox.id
        );

        Ok(tracker)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("tally")
            .place_data_file("tally.db")
            .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
    }
}

impl Default for TrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
