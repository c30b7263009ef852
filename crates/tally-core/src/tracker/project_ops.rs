//! Project operations for the Tracker.

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    models::{Project, UpdateProjectRequest},
    params::{CreateProject, DeleteProject, Id, UpdateProject},
};

impl Tracker {
    /// Creates a new project, nested under `parent_id` when given.
    pub async fn create_project(&self, params: &CreateProject) -> Result<Project> {
        let name = params.name.clone();
        let color = params.color.clone();
        let parent_id = params.parent_id;

        self.with_database(move |db, user| {
            db.create_project(user, &name, color.as_deref(), parent_id)
        })
        .await
    }

    /// Retrieves a project by its ID.
    pub async fn get_project(&self, params: &Id) -> Result<Option<Project>> {
        let id = params.id;
        self.with_database(move |db, user| db.get_project(user, id))
            .await
    }

    /// Lists every project of the user, Inbox first.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.with_database(|db, user| db.list_projects(user)).await
    }

    /// Returns the user's Inbox, creating it if necessary.
    pub async fn inbox(&self) -> Result<Project> {
        self.with_database(|db, user| db.ensure_inbox(user)).await
    }

    /// Updates name, color, parent or next step of a project.
    pub async fn update_project(&self, params: &UpdateProject) -> Result<Project> {
        let id = params.id;
        let request = UpdateProjectRequest::try_from(params.clone())?;
        if request.is_empty() {
            return Err(TrackerError::invalid_input("update")
                .with_reason("No changes requested; pass at least one field to update"));
        }

        self.with_database(move |db, user| db.update_project(user, id, &request))
            .await
    }

    /// Marks a project as finished.
    pub async fn finish_project(&self, params: &Id) -> Result<Project> {
        self.set_finished(params.id, true).await
    }

    /// Clears the finished mark so the status is derived again.
    pub async fn reopen_project(&self, params: &Id) -> Result<Project> {
        self.set_finished(params.id, false).await
    }

    async fn set_finished(&self, id: u64, finished: bool) -> Result<Project> {
        let request = UpdateProjectRequest::finished(finished);
        self.with_database(move |db, user| db.update_project(user, id, &request))
            .await
    }

    /// Deletes a project with its tasks and sub-projects.
    ///
    /// Requires `confirmed` to be set.
    pub async fn delete_project(&self, params: &DeleteProject) -> Result<Project> {
        if !params.confirmed {
            return Err(TrackerError::invalid_input("confirmed").with_reason(
                "Deleting a project also deletes its tasks and sub-projects; confirm to proceed",
            ));
        }

        let id = params.id;
        self.with_database(move |db, user| db.delete_project(user, id))
            .await
    }
}
