//! Task CRUD operations and queries.

use jiff::{civil::DateTime, Timestamp};
use log::debug;
use rusqlite::{params, types::Type, Connection, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{requests::non_empty, Task, UpdateTaskRequest},
};

const TASK_COLUMNS: &str = "id, user_id, project_id, title, deadline, completed, created_at";
const CHECK_PROJECT_EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1 AND user_id = ?2)";
const INSERT_TASK_SQL: &str = "INSERT INTO tasks (user_id, project_id, title, deadline, completed, created_at) VALUES (?1, ?2, ?3, ?4, 0, ?5)";
const UPDATE_TASK_SQL: &str = "UPDATE tasks SET project_id = ?1, title = ?2, deadline = ?3, completed = ?4 WHERE id = ?5 AND user_id = ?6";
const DELETE_TASK_SQL: &str = "DELETE FROM tasks WHERE id = ?1 AND user_id = ?2";

impl super::Database {
    /// Helper function to construct a Task from a database row
    fn build_task_from_row(row: &rusqlite::Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get::<_, i64>(0)? as u64,
            user_id: row.get(1)?,
            project_id: row.get::<_, i64>(2)? as u64,
            title: row.get(3)?,
            deadline: row.get::<_, String>(4)?.parse::<DateTime>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
            })?,
            completed: row.get(5)?,
            created_at: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
            })?,
        })
    }

    fn query_task(conn: &Connection, user_id: &str, id: u64) -> Result<Option<Task>> {
        conn.query_row(
            &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1 AND user_id = ?2"),
            params![id as i64, user_id],
            Self::build_task_from_row,
        )
        .optional()
        .db_context("Failed to query task")
    }

    fn ensure_project_exists(conn: &Connection, user_id: &str, project_id: u64) -> Result<()> {
        let exists: bool = conn
            .query_row(
                CHECK_PROJECT_EXISTS_SQL,
                params![project_id as i64, user_id],
                |row| row.get(0),
            )
            .db_context("Failed to check project existence")?;

        if exists {
            Ok(())
        } else {
            Err(TrackerError::ProjectNotFound { id: project_id })
        }
    }

    fn write_task(conn: &Connection, task: &Task) -> Result<()> {
        conn.execute(
            UPDATE_TASK_SQL,
            params![
                task.project_id as i64,
                &task.title,
                task.deadline.to_string(),
                task.completed,
                task.id as i64,
                &task.user_id
            ],
        )
        .db_context("Failed to update task")?;
        Ok(())
    }

    /// Creates a new, incomplete task in the given project.
    pub fn create_task(
        &mut self,
        user_id: &str,
        project_id: u64,
        title: &str,
        deadline: DateTime,
    ) -> Result<Task> {
        let title = non_empty("title", title.to_string())?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        Self::ensure_project_exists(&tx, user_id, project_id)?;

        let now = Timestamp::now();
        tx.execute(
            INSERT_TASK_SQL,
            params![
                user_id,
                project_id as i64,
                &title,
                deadline.to_string(),
                now.to_string()
            ],
        )
        .db_context("Failed to insert task")?;

        let id = tx.last_insert_rowid() as u64;
        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Created task {id} in project {project_id} due {deadline}");

        Ok(Task {
            id,
            user_id: user_id.to_string(),
            project_id,
            title,
            deadline,
            completed: false,
            created_at: now,
        })
    }

    /// Retrieves a single task by its ID.
    pub fn get_task(&self, user_id: &str, id: u64) -> Result<Option<Task>> {
        Self::query_task(&self.connection, user_id, id)
    }

    /// Lists the user's tasks ordered by deadline.
    pub fn list_tasks(&self, user_id: &str) -> Result<Vec<Task>> {
        let mut stmt = self
            .connection
            .prepare(&format!(
                "SELECT {TASK_COLUMNS} FROM tasks WHERE user_id = ?1 ORDER BY deadline, id"
            ))
            .db_context("Failed to prepare query")?;

        let tasks = stmt
            .query_map(params![user_id], Self::build_task_from_row)
            .db_context("Failed to query tasks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch tasks")?;

        Ok(tasks)
    }

    /// Applies `request` to a task and returns the updated task.
    ///
    /// A new date keeps the current time of day and a new time keeps the
    /// current date.
    pub fn update_task(
        &mut self,
        user_id: &str,
        id: u64,
        request: &UpdateTaskRequest,
    ) -> Result<Task> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut task =
            Self::query_task(&tx, user_id, id)?.ok_or(TrackerError::TaskNotFound { id })?;

        if let Some(project_id) = request.project_id {
            Self::ensure_project_exists(&tx, user_id, project_id)?;
            task.project_id = project_id;
        }
        if let Some(title) = &request.title {
            task.title = title.clone();
        }
        if request.date.is_some() || request.time.is_some() {
            let date = request.date.unwrap_or_else(|| task.deadline.date());
            let time = request.time.unwrap_or_else(|| task.deadline.time());
            task.deadline = date.to_datetime(time);
        }
        if let Some(completed) = request.completed {
            task.completed = completed;
        }

        Self::write_task(&tx, &task)?;
        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Updated task {id} for user '{user_id}'");

        Ok(task)
    }

    /// Moves a task to a new deadline, leaving everything else untouched.
    pub fn reschedule_task(&mut self, user_id: &str, id: u64, deadline: DateTime) -> Result<Task> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut task =
            Self::query_task(&tx, user_id, id)?.ok_or(TrackerError::TaskNotFound { id })?;
        task.deadline = deadline;

        Self::write_task(&tx, &task)?;
        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Rescheduled task {id} to {deadline}");

        Ok(task)
    }

    /// Flips the completion flag of a task.
    pub fn toggle_task(&mut self, user_id: &str, id: u64) -> Result<Task> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut task =
            Self::query_task(&tx, user_id, id)?.ok_or(TrackerError::TaskNotFound { id })?;
        task.completed = !task.completed;

        Self::write_task(&tx, &task)?;
        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Task {id} completed = {}", task.completed);

        Ok(task)
    }

    /// Deletes a task and returns it.
    pub fn delete_task(&mut self, user_id: &str, id: u64) -> Result<Task> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let task = Self::query_task(&tx, user_id, id)?.ok_or(TrackerError::TaskNotFound { id })?;
        tx.execute(DELETE_TASK_SQL, params![id as i64, user_id])
            .db_context("Failed to delete task")?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Deleted task {id} for user '{user_id}'");

        Ok(task)
    }
}
