//! Task operations for the Tracker.

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    models::{Task, UpdateTaskRequest},
    params::{CreateTask, Id, ScheduleTask, UpdateTask},
    schedule::{labels, time, Slot},
};

impl Tracker {
    /// Creates a task.
    ///
    /// Without a project the task goes to the Inbox. A missing date means
    /// tomorrow and a missing time means 6:00 AM.
    pub async fn add_task(&self, params: &CreateTask) -> Result<Task> {
        let default = time::default_deadline(self.clock.as_ref());
        let date = params
            .date
            .as_deref()
            .map(time::parse_date)
            .transpose()?
            .unwrap_or_else(|| default.date());
        let time_of_day = params
            .time
            .as_deref()
            .map(labels::parse_time_input)
            .transpose()?
            .unwrap_or_else(|| default.time());
        let deadline = date.to_datetime(time_of_day);

        let title = params.title.clone();
        let project_id = params.project_id;

        self.with_database(move |db, user| {
            let project_id = match project_id {
                Some(id) => id,
                None => db.ensure_inbox(user)?.id,
            };
            db.create_task(user, project_id, &title, deadline)
        })
        .await
    }

    /// Retrieves a task by its ID.
    pub async fn get_task(&self, params: &Id) -> Result<Option<Task>> {
        let id = params.id;
        self.with_database(move |db, user| db.get_task(user, id)).await
    }

    /// Lists every task of the user by deadline.
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.with_database(|db, user| db.list_tasks(user)).await
    }

    /// Updates title, project, deadline or completion of a task.
    pub async fn update_task(&self, params: &UpdateTask) -> Result<Task> {
        let id = params.id;
        let request = UpdateTaskRequest::try_from(params.clone())?;
        if request.is_empty() {
            return Err(TrackerError::invalid_input("update")
                .with_reason("No changes requested; pass at least one field to update"));
        }

        self.with_database(move |db, user| db.update_task(user, id, &request))
            .await
    }

    /// Flips a task between open and completed.
    pub async fn toggle_task(&self, params: &Id) -> Result<Task> {
        let id = params.id;
        self.with_database(move |db, user| db.toggle_task(user, id))
            .await
    }

    /// Moves a task into an hourly slot or the holding area of a date.
    pub async fn schedule_task(&self, params: &ScheduleTask) -> Result<Task> {
        let id = params.id;
        let date = time::parse_date(&params.date)?;
        let deadline = params.slot.parse::<Slot>()?.deadline_on(date)?;

        self.with_database(move |db, user| db.reschedule_task(user, id, deadline))
            .await
    }

    /// Deletes a task and returns it.
    pub async fn delete_task(&self, params: &Id) -> Result<Task> {
        let id = params.id;
        self.with_database(move |db, user| db.delete_task(user, id))
            .await
    }
}
