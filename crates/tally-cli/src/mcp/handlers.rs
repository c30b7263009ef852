//! MCP tool handlers implementation

use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tally_core::{
    display::{CreateResult, DeleteResult, UpdateResult},
    params as core, Tracker,
};

use super::errors::{not_found, to_mcp_error};

// ============================================================================
// Generic Parameter Wrapper
// ============================================================================
//
// Core parameter types derive `JsonSchema` only behind the `schema` feature.
// The transparent wrapper gives every tool a single parameter type that
// deserializes straight into the core struct.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreateProject = McpParams<core::CreateProject>;
pub type UpdateProject = McpParams<core::UpdateProject>;
pub type DeleteProject = McpParams<core::DeleteProject>;
pub type CreateTask = McpParams<core::CreateTask>;
pub type UpdateTask = McpParams<core::UpdateTask>;
pub type ScheduleTask = McpParams<core::ScheduleTask>;
pub type ShowCalendar = McpParams<core::ShowCalendar>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(body: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body)]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    tracker: Tracker,
}

impl McpHandlers {
    pub fn new(tracker: Tracker) -> Self {
        Self { tracker }
    }

    pub async fn create_project(
        &self,
        Parameters(params): Parameters<CreateProject>,
    ) -> McpResult {
        debug!("create_project: {params:?}");

        let project = self
            .tracker
            .create_project(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create project", &e))?;

        text(CreateResult::new(project).to_string())
    }

    pub async fn list_projects(&self) -> McpResult {
        debug!("list_projects");

        let groups = self
            .tracker
            .project_overview()
            .await
            .map_err(|e| to_mcp_error("Failed to list projects", &e))?;

        text(groups.to_string())
    }

    pub async fn show_project(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_project: {params:?}");

        let id = params.as_ref().id;
        let detail = self
            .tracker
            .project_detail(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get project", &e))?
            .ok_or_else(|| not_found("Project", id))?;

        text(detail.to_string())
    }

    pub async fn update_project(
        &self,
        Parameters(params): Parameters<UpdateProject>,
    ) -> McpResult {
        debug!("update_project: {params:?}");

        let project = self
            .tracker
            .update_project(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update project", &e))?;

        text(UpdateResult::new(project).to_string())
    }

    pub async fn finish_project(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("finish_project: {params:?}");

        let project = self
            .tracker
            .finish_project(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to finish project", &e))?;

        let changes = vec!["Marked as finished".to_string()];
        text(UpdateResult::with_changes(project, changes).to_string())
    }

    pub async fn reopen_project(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("reopen_project: {params:?}");

        let project = self
            .tracker
            .reopen_project(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to reopen project", &e))?;

        let changes = vec!["Cleared finished mark".to_string()];
        text(UpdateResult::with_changes(project, changes).to_string())
    }

    pub async fn delete_project(
        &self,
        Parameters(params): Parameters<DeleteProject>,
    ) -> McpResult {
        debug!("delete_project: {params:?}");

        let project = self
            .tracker
            .delete_project(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete project", &e))?;

        text(DeleteResult::new(project).to_string())
    }

    pub async fn add_task(&self, Parameters(params): Parameters<CreateTask>) -> McpResult {
        debug!("add_task: {params:?}");

        let task = self
            .tracker
            .add_task(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to add task", &e))?;

        text(CreateResult::new(task).to_string())
    }

    pub async fn show_task(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_task: {params:?}");

        let id = params.as_ref().id;
        let task = self
            .tracker
            .get_task(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get task", &e))?
            .ok_or_else(|| not_found("Task", id))?;

        text(task.to_string())
    }

    pub async fn update_task(&self, Parameters(params): Parameters<UpdateTask>) -> McpResult {
        debug!("update_task: {params:?}");

        let task = self
            .tracker
            .update_task(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update task", &e))?;

        text(UpdateResult::new(task).to_string())
    }

    pub async fn toggle_task(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("toggle_task: {params:?}");

        let task = self
            .tracker
            .toggle_task(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to toggle task", &e))?;

        let change = if task.completed {
            "Marked as completed"
        } else {
            "Marked as open"
        };
        text(UpdateResult::with_changes(task, vec![change.to_string()]).to_string())
    }

    pub async fn schedule_task(
        &self,
        Parameters(params): Parameters<ScheduleTask>,
    ) -> McpResult {
        debug!("schedule_task: {params:?}");

        let inner = params.as_ref();
        let change = format!("Moved to {} on {}", inner.slot, inner.date);
        let task = self
            .tracker
            .schedule_task(inner)
            .await
            .map_err(|e| to_mcp_error("Failed to schedule task", &e))?;

        text(UpdateResult::with_changes(task, vec![change]).to_string())
    }

    pub async fn delete_task(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("delete_task: {params:?}");

        let task = self
            .tracker
            .delete_task(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete task", &e))?;

        text(DeleteResult::new(task).to_string())
    }

    pub async fn show_calendar(
        &self,
        Parameters(params): Parameters<ShowCalendar>,
    ) -> McpResult {
        debug!("show_calendar: {params:?}");

        let board = self
            .tracker
            .calendar(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to build calendar", &e))?;

        text(board.to_string())
    }

    pub async fn show_stats(&self) -> McpResult {
        debug!("show_stats");

        let overview = self
            .tracker
            .stats()
            .await
            .map_err(|e| to_mcp_error("Failed to compute stats", &e))?;

        text(overview.to_string())
    }

    pub async fn export_snapshot(&self) -> McpResult {
        debug!("export_snapshot");

        let json = self
            .tracker
            .export()
            .await
            .map_err(|e| to_mcp_error("Failed to export snapshot", &e))?;

        text(json)
    }
}
