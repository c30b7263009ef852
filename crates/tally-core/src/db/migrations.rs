//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Cascading deletes rely on foreign keys, which are per connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Brings databases created by earlier versions up to date.
    fn apply_migrations(&self) -> Result<()> {
        let has_next_step: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('projects') WHERE name = 'next_step'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect projects table")?;

        if !has_next_step {
            log::info!("Adding next_step column to projects table");
            self.connection
                .execute("ALTER TABLE projects ADD COLUMN next_step TEXT", [])
                .db_context("Failed to add next_step column to projects table")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use tempfile::TempDir;

    use crate::db::Database;

    #[test]
    fn test_adds_missing_next_step_column() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("old.db");

        let connection = Connection::open(&path).unwrap();
        connection
            .execute_batch(
                "CREATE TABLE projects (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    user_id TEXT NOT NULL,
                    name TEXT NOT NULL,
                    color TEXT NOT NULL DEFAULT 'blue',
                    parent_id INTEGER REFERENCES projects(id) ON DELETE CASCADE,
                    status TEXT,
                    created_at TEXT NOT NULL
                );",
            )
            .unwrap();
        drop(connection);

        let db = Database::new(&path).unwrap();
        let inbox = db.ensure_inbox("local").unwrap();
        assert_eq!(inbox.next_step, None);
    }
}
