//! SQLite storage for projects and tasks.
//!
//! This module is the store behind the tracker: it opens connections,
//! manages the schema and offers per-user CRUD queries. Every query is scoped
//! by the owner key so that one database file can hold several users.
//! Mutations that would break the Inbox or the acyclic project forest are
//! rejected here.

use std::path::Path;

use rusqlite::Connection;

use crate::{
    error::{DatabaseResultExt, Result},
    models::Snapshot,
};

pub mod migrations;
pub mod project_queries;
pub mod task_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Reads every project and task owned by `user_id`.
    pub fn snapshot(&self, user_id: &str) -> Result<Snapshot> {
        Ok(Snapshot::new(
            self.list_tasks(user_id)?,
            self.list_projects(user_id)?,
        ))
    }
}
