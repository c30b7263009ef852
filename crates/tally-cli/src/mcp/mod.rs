//! MCP server implementation for Tally
//!
//! Exposes the tracker over the Model Context Protocol so AI assistants can
//! manage projects, tasks and the calendar.

use std::future::Future;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tally_core::Tracker;
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{
    CreateProject, CreateTask, DeleteProject, Id, McpResult, ScheduleTask, ShowCalendar,
    UpdateProject, UpdateTask,
};

/// MCP server for Tally
#[derive(Clone)]
pub struct TallyMcpServer {
    tracker: Tracker,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TallyMcpServer {
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.tracker.clone())
    }

    #[tool(
        name = "create_project",
        description = "Create a new project. Provide a name (required), an optional display color, and an optional parent_id to nest it under another project. A top-level project named 'Inbox' cannot be created; every user already has one."
    )]
    async fn create_project(&self, params: Parameters<CreateProject>) -> McpResult {
        self.handlers().create_project(params).await
    }

    #[tool(
        name = "list_projects",
        description = "List top-level projects grouped by status: the Inbox, projects needing review (overdue work, nothing planned, or all work complete), active projects with upcoming work, and finished projects."
    )]
    async fn list_projects(&self) -> McpResult {
        self.handlers().list_projects().await
    }

    #[tool(
        name = "show_project",
        description = "Show a project with its status, progress, tasks and direct sub-projects with their statuses."
    )]
    async fn show_project(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_project(params).await
    }

    #[tool(
        name = "update_project",
        description = "Change a project's name, color, parent (or move it to the top level with make_root=true) and next step note. Pass an empty next_step to clear it. The Inbox can only change color and next step."
    )]
    async fn update_project(&self, params: Parameters<UpdateProject>) -> McpResult {
        self.handlers().update_project(params).await
    }

    #[tool(
        name = "finish_project",
        description = "Mark a project as finished. Finished projects count as done for their parents regardless of their own tasks. The Inbox cannot be finished."
    )]
    async fn finish_project(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().finish_project(params).await
    }

    #[tool(
        name = "reopen_project",
        description = "Clear the finished mark of a project so its status is derived from its tasks and sub-projects again."
    )]
    async fn reopen_project(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().reopen_project(params).await
    }

    #[tool(
        name = "delete_project",
        description = "Permanently delete a project together with its tasks and all sub-projects. Requires confirmed=true. The Inbox cannot be deleted. This operation cannot be undone."
    )]
    async fn delete_project(&self, params: Parameters<DeleteProject>) -> McpResult {
        self.handlers().delete_project(params).await
    }

    #[tool(
        name = "add_task",
        description = "Add a task. Without project_id it goes to the Inbox. date is YYYY-MM-DD and defaults to tomorrow; time accepts '2:00 PM', '14:00' or 'holding' and defaults to 6:00 AM. Holding tasks sit in the day's holding bucket instead of an hour slot."
    )]
    async fn add_task(&self, params: Parameters<CreateTask>) -> McpResult {
        self.handlers().add_task(params).await
    }

    #[tool(
        name = "show_task",
        description = "Show a task with its deadline, project and completion state."
    )]
    async fn show_task(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_task(params).await
    }

    #[tool(
        name = "update_task",
        description = "Change a task's title, project, deadline date or time, or set its completion flag. Changing only the date keeps the time and vice versa."
    )]
    async fn update_task(&self, params: Parameters<UpdateTask>) -> McpResult {
        self.handlers().update_task(params).await
    }

    #[tool(
        name = "toggle_task",
        description = "Flip a task between open and completed."
    )]
    async fn toggle_task(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().toggle_task(params).await
    }

    #[tool(
        name = "schedule_task",
        description = "Move a task to a calendar slot: a date (YYYY-MM-DD) plus an hour slot between '6:00 AM' and '11:00 PM' (or '06:00' to '23:00'), or 'holding' for the day's holding bucket."
    )]
    async fn schedule_task(&self, params: Parameters<ScheduleTask>) -> McpResult {
        self.handlers().schedule_task(params).await
    }

    #[tool(
        name = "delete_task",
        description = "Permanently delete a task."
    )]
    async fn delete_task(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().delete_task(params).await
    }

    #[tool(
        name = "show_calendar",
        description = "Show the calendar for a date (default today) as a 'day', '3-day' (default) or 'week' view. Each day lists its holding bucket, open tasks per hour slot from 6 AM to 11 PM, and completed tasks."
    )]
    async fn show_calendar(&self, params: Parameters<ShowCalendar>) -> McpResult {
        self.handlers().show_calendar(params).await
    }

    #[tool(
        name = "show_stats",
        description = "Show dashboard counters: completed, due today, upcoming and overdue tasks, completion rate, and finished projects."
    )]
    async fn show_stats(&self) -> McpResult {
        self.handlers().show_stats().await
    }

    #[tool(
        name = "export_snapshot",
        description = "Export every project and task of the user as JSON."
    )]
    async fn export_snapshot(&self) -> McpResult {
        self.handlers().export_snapshot().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for TallyMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "tally".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Tally tracks tasks with deadlines inside nested projects and derives each project's status from its work.

## Core Concepts
- **Projects**: nestable containers. Every user has an Inbox that collects tasks without a project; it cannot be renamed, moved, finished or deleted.
- **Tasks**: a title, a deadline (date and time) and a completion flag. A deadline at 11:59 PM means the task is "holding": parked for that day without an hour slot.
- **Status**: never stored, always derived.
  - `live`: open work ahead
  - `unreported`: needs review (overdue work, nothing planned, or everything complete but not closed out)
  - `finished`: manually closed with `finish_project`

## Workflow
1. `create_project`, then `add_task` with a date and time
2. `show_calendar` to see the day; `schedule_task` to move work between slots or into holding
3. `toggle_task` when work is done
4. `list_projects` to find projects needing review; `finish_project` to close them out

## Tool Categories
- **Projects**: create_project, list_projects, show_project, update_project, finish_project, reopen_project, delete_project
- **Tasks**: add_task, show_task, update_task, toggle_task, schedule_task, delete_task
- **Views**: show_calendar, show_stats, export_snapshot"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: TallyMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Tally MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
