//! Project CRUD operations and queries.

use std::collections::HashSet;

use jiff::Timestamp;
use log::{debug, info};
use rusqlite::{params, types::Type, Connection, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{requests::non_empty, ManualStatus, Project, UpdateProjectRequest},
};

/// Color given to projects created without one.
pub const DEFAULT_PROJECT_COLOR: &str = "blue";

const PROJECT_COLUMNS: &str = "id, user_id, name, color, parent_id, status, next_step, created_at";
const INSERT_PROJECT_SQL: &str = "INSERT INTO projects (user_id, name, color, parent_id, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_PROJECT_SQL: &str = "UPDATE projects SET name = ?1, color = ?2, parent_id = ?3, status = ?4, next_step = ?5 WHERE id = ?6 AND user_id = ?7";
const DELETE_PROJECT_SQL: &str = "DELETE FROM projects WHERE id = ?1 AND user_id = ?2";
const SELECT_PARENT_SQL: &str = "SELECT parent_id FROM projects WHERE id = ?1 AND user_id = ?2";

impl super::Database {
    /// Helper function to construct a Project from a database row
    fn build_project_from_row(row: &rusqlite::Row) -> rusqlite::Result<Project> {
        let status = row
            .get::<_, Option<String>>(5)?
            .map(|s| {
                s.parse::<ManualStatus>().map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(5, Type::Text, e.into())
                })
            })
            .transpose()?;

        Ok(Project {
            id: row.get::<_, i64>(0)? as u64,
            user_id: row.get(1)?,
            name: row.get(2)?,
            color: row.get(3)?,
            parent_id: row.get::<_, Option<i64>>(4)?.map(|id| id as u64),
            status,
            next_step: row.get(6)?,
            created_at: row.get::<_, String>(7)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e))
            })?,
        })
    }

    fn query_project(conn: &Connection, user_id: &str, id: u64) -> Result<Option<Project>> {
        conn.query_row(
            &format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?1 AND user_id = ?2"),
            params![id as i64, user_id],
            Self::build_project_from_row,
        )
        .optional()
        .db_context("Failed to query project")
    }

    fn query_inbox(conn: &Connection, user_id: &str) -> Result<Option<Project>> {
        conn.query_row(
            &format!(
                "SELECT {PROJECT_COLUMNS} FROM projects WHERE user_id = ?1 AND name = ?2 AND parent_id IS NULL ORDER BY id LIMIT 1"
            ),
            params![user_id, Project::INBOX_NAME],
            Self::build_project_from_row,
        )
        .optional()
        .db_context("Failed to query Inbox")
    }

    /// Walks up from `start` and fails if `project_id` is among its
    /// ancestors (or is `start` itself).
    fn check_no_cycle(conn: &Connection, user_id: &str, project_id: u64, start: u64) -> Result<()> {
        let mut seen = HashSet::new();
        let mut current = Some(start);

        while let Some(id) = current {
            if id == project_id {
                return Err(TrackerError::invalid_input("parent_id").with_reason(format!(
                    "Project {start} is project {project_id} or one of its descendants"
                )));
            }
            if !seen.insert(id) {
                break;
            }
            current = conn
                .query_row(SELECT_PARENT_SQL, params![id as i64, user_id], |row| {
                    row.get::<_, Option<i64>>(0)
                })
                .optional()
                .db_context("Failed to query project parent")?
                .flatten()
                .map(|id| id as u64);
        }
        Ok(())
    }

    fn reject_second_inbox(conn: &Connection, user_id: &str, except: Option<u64>) -> Result<()> {
        if let Some(inbox) = Self::query_inbox(conn, user_id)? {
            if Some(inbox.id) != except {
                return Err(TrackerError::invalid_input("name").with_reason(format!(
                    "A top-level project named '{}' already exists",
                    Project::INBOX_NAME
                )));
            }
        }
        Ok(())
    }

    /// Returns the user's Inbox, creating it if it does not exist yet.
    pub fn ensure_inbox(&self, user_id: &str) -> Result<Project> {
        if let Some(inbox) = Self::query_inbox(&self.connection, user_id)? {
            return Ok(inbox);
        }

        let now = Timestamp::now();
        self.connection
            .execute(
                INSERT_PROJECT_SQL,
                params![
                    user_id,
                    Project::INBOX_NAME,
                    Project::INBOX_COLOR,
                    Option::<i64>::None,
                    now.to_string()
                ],
            )
            .db_context("Failed to create Inbox")?;

        let id = self.connection.last_insert_rowid() as u64;
        info!("Created Inbox project {id} for user '{user_id}'");

        Ok(Project {
            id,
            user_id: user_id.to_string(),
            name: Project::INBOX_NAME.to_string(),
            color: Project::INBOX_COLOR.to_string(),
            parent_id: None,
            status: None,
            next_step: None,
            created_at: now,
        })
    }

    /// Creates a new project, optionally nested under `parent_id`.
    pub fn create_project(
        &mut self,
        user_id: &str,
        name: &str,
        color: Option<&str>,
        parent_id: Option<u64>,
    ) -> Result<Project> {
        let name = non_empty("name", name.to_string())?;
        let color = color
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_PROJECT_COLOR)
            .to_string();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        match parent_id {
            Some(parent) => {
                if Self::query_project(&tx, user_id, parent)?.is_none() {
                    return Err(TrackerError::ProjectNotFound { id: parent });
                }
            }
            None if name == Project::INBOX_NAME => Self::reject_second_inbox(&tx, user_id, None)?,
            None => {}
        }

        let now = Timestamp::now();
        tx.execute(
            INSERT_PROJECT_SQL,
            params![
                user_id,
                &name,
                &color,
                parent_id.map(|id| id as i64),
                now.to_string()
            ],
        )
        .db_context("Failed to insert project")?;

        let id = tx.last_insert_rowid() as u64;
        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Created project {id} '{name}' for user '{user_id}'");

        Ok(Project {
            id,
            user_id: user_id.to_string(),
            name,
            color,
            parent_id,
            status: None,
            next_step: None,
            created_at: now,
        })
    }

    /// Retrieves a project by its ID.
    pub fn get_project(&self, user_id: &str, id: u64) -> Result<Option<Project>> {
        Self::query_project(&self.connection, user_id, id)
    }

    /// Lists the user's projects, Inbox first, then in creation order.
    pub fn list_projects(&self, user_id: &str) -> Result<Vec<Project>> {
        let mut stmt = self
            .connection
            .prepare(&format!(
                "SELECT {PROJECT_COLUMNS} FROM projects WHERE user_id = ?1 \
                 ORDER BY (name = ?2 AND parent_id IS NULL) DESC, id"
            ))
            .db_context("Failed to prepare query")?;

        let projects = stmt
            .query_map(
                params![user_id, Project::INBOX_NAME],
                Self::build_project_from_row,
            )
            .db_context("Failed to query projects")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch projects")?;

        Ok(projects)
    }

    /// Applies `request` to a project and returns the updated project.
    ///
    /// The Inbox may only change color and next step. A new parent must
    /// exist and must not be the project itself or one of its descendants.
    pub fn update_project(
        &mut self,
        user_id: &str,
        id: u64,
        request: &UpdateProjectRequest,
    ) -> Result<Project> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut project =
            Self::query_project(&tx, user_id, id)?.ok_or(TrackerError::ProjectNotFound { id })?;

        if project.is_inbox() {
            if request.name.as_deref().is_some_and(|n| n != Project::INBOX_NAME) {
                return Err(TrackerError::InboxProtected {
                    operation: "renamed",
                });
            }
            if matches!(request.parent_id, Some(Some(_))) {
                return Err(TrackerError::InboxProtected { operation: "moved" });
            }
            if matches!(request.status, Some(Some(ManualStatus::Finished))) {
                return Err(TrackerError::InboxProtected {
                    operation: "finished",
                });
            }
        }

        if let Some(Some(parent)) = request.parent_id {
            if Self::query_project(&tx, user_id, parent)?.is_none() {
                return Err(TrackerError::ProjectNotFound { id: parent });
            }
            Self::check_no_cycle(&tx, user_id, id, parent)?;
        }

        if let Some(name) = &request.name {
            project.name = name.clone();
        }
        if let Some(color) = &request.color {
            project.color = color.clone();
        }
        if let Some(parent_id) = request.parent_id {
            project.parent_id = parent_id;
        }
        if let Some(status) = request.status {
            project.status = status;
        }
        if let Some(next_step) = &request.next_step {
            project.next_step = next_step.clone();
        }

        if project.is_inbox() {
            Self::reject_second_inbox(&tx, user_id, Some(id))?;
        }

        tx.execute(
            UPDATE_PROJECT_SQL,
            params![
                &project.name,
                &project.color,
                project.parent_id.map(|p| p as i64),
                project.status.map(|s| s.as_str()),
                project.next_step.as_deref(),
                id as i64,
                user_id
            ],
        )
        .db_context("Failed to update project")?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Updated project {id} for user '{user_id}'");

        Ok(project)
    }

    /// Deletes a project along with its tasks and sub-projects.
    ///
    /// Returns the deleted project. The Inbox cannot be deleted.
    pub fn delete_project(&mut self, user_id: &str, id: u64) -> Result<Project> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let project =
            Self::query_project(&tx, user_id, id)?.ok_or(TrackerError::ProjectNotFound { id })?;
        if project.is_inbox() {
            return Err(TrackerError::InboxProtected {
                operation: "deleted",
            });
        }

        tx.execute(DELETE_PROJECT_SQL, params![id as i64, user_id])
            .db_context("Failed to delete project")?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Deleted project {id} for user '{user_id}'");

        Ok(project)
    }
}
