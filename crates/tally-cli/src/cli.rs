//! Command definitions and handlers for the `tally` binary.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From`, so the core stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```
//!
//! [`Cli`] runs a parsed command against a [`Tracker`] and renders the
//! markdown produced by the core display types.

use anyhow::Result;
use clap::{Args, Subcommand};
use tally_core::{
    params::*, CreateResult, DeleteResult, OperationStatus, ProjectSummaries, Tracker,
    UpdateResult,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Project arguments
// ============================================================================

/// Create a new project
#[derive(Args)]
pub struct CreateProjectArgs {
    /// Name of the project
    pub name: String,
    /// Display color
    #[arg(short, long, help = "Display color of the project (default: blue)")]
    pub color: Option<String>,
    /// Parent project to nest under
    #[arg(short, long, help = "ID of the parent project to nest this one under")]
    pub parent: Option<u64>,
}

impl From<CreateProjectArgs> for CreateProject {
    fn from(val: CreateProjectArgs) -> Self {
        CreateProject {
            name: val.name,
            color: val.color,
            parent_id: val.parent,
        }
    }
}

/// List projects
///
/// By default the top-level projects are grouped into Inbox, Review, Active
/// and Finished. `--all` lists every project, nested ones included.
#[derive(Args)]
pub struct ListProjectsArgs {
    #[arg(short, long, help = "List every project, including sub-projects")]
    pub all: bool,
}

/// Show details of a specific project
#[derive(Args)]
pub struct ShowProjectArgs {
    #[arg(help = "Unique identifier of the project to show details for")]
    pub id: u64,
}

impl From<ShowProjectArgs> for Id {
    fn from(val: ShowProjectArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a project's details
///
/// The Inbox may only change color and next step.
#[derive(Args)]
pub struct UpdateProjectArgs {
    #[arg(help = "Unique identifier of the project to update")]
    pub id: u64,
    #[arg(short, long, help = "New name for the project")]
    pub name: Option<String>,
    #[arg(short, long, help = "New display color")]
    pub color: Option<String>,
    #[arg(
        short,
        long,
        conflicts_with = "root",
        help = "Move the project under another project"
    )]
    pub parent: Option<u64>,
    #[arg(long, help = "Move the project to the top level")]
    pub root: bool,
    #[arg(
        long,
        help = "Note describing the next action; pass an empty string to clear it"
    )]
    pub next_step: Option<String>,
}

impl UpdateProjectArgs {
    /// Human-readable list of the requested changes.
    fn changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(name) = &self.name {
            changes.push(format!("Renamed to '{}'", name.trim()));
        }
        if let Some(color) = &self.color {
            changes.push(format!("Color set to {color}"));
        }
        if let Some(parent) = self.parent {
            changes.push(format!("Moved under project {parent}"));
        }
        if self.root {
            changes.push("Moved to the top level".to_string());
        }
        match self.next_step.as_deref().map(str::trim) {
            Some("") => changes.push("Cleared next step".to_string()),
            Some(_) => changes.push("Updated next step".to_string()),
            None => {}
        }
        changes
    }
}

impl From<UpdateProjectArgs> for UpdateProject {
    fn from(val: UpdateProjectArgs) -> Self {
        UpdateProject {
            id: val.id,
            name: val.name,
            color: val.color,
            parent_id: val.parent,
            make_root: val.root,
            next_step: val.next_step,
        }
    }
}

/// Mark a project as finished
#[derive(Args)]
pub struct FinishProjectArgs {
    #[arg(help = "Unique identifier of the project to mark as finished")]
    pub id: u64,
}

impl From<FinishProjectArgs> for Id {
    fn from(val: FinishProjectArgs) -> Self {
        Id { id: val.id }
    }
}

/// Clear the finished mark of a project
#[derive(Args)]
pub struct ReopenProjectArgs {
    #[arg(help = "Unique identifier of the finished project to reopen")]
    pub id: u64,
}

impl From<ReopenProjectArgs> for Id {
    fn from(val: ReopenProjectArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a project permanently
///
/// Removes the project together with its tasks and all sub-projects.
#[derive(Args)]
pub struct DeleteProjectArgs {
    #[arg(help = "Unique identifier of the project to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteProjectArgs> for DeleteProject {
    fn from(val: DeleteProjectArgs) -> Self {
        DeleteProject {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Create a new project
    #[command(alias = "c")]
    Create(CreateProjectArgs),
    /// List projects grouped by status
    #[command(aliases = ["l", "ls"])]
    List(ListProjectsArgs),
    /// Show details of a specific project
    #[command(alias = "s")]
    Show(ShowProjectArgs),
    /// Update a project's details
    #[command(alias = "u")]
    Update(UpdateProjectArgs),
    /// Mark a project as finished
    #[command(alias = "f")]
    Finish(FinishProjectArgs),
    /// Clear the finished mark of a project
    #[command(alias = "r")]
    Reopen(ReopenProjectArgs),
    /// Delete a project permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteProjectArgs),
}

// ============================================================================
// Task arguments
// ============================================================================

/// Add a new task
///
/// Without a project the task lands in the Inbox. The deadline defaults to
/// tomorrow at 6:00 AM.
#[derive(Args)]
pub struct AddTaskArgs {
    /// Title of the task
    pub title: String,
    #[arg(short, long, help = "ID of the project the task belongs to")]
    pub project: Option<u64>,
    #[arg(short, long, help = "Deadline date (YYYY-MM-DD)")]
    pub date: Option<String>,
    #[arg(
        short,
        long,
        help = "Deadline time: \"2:00 PM\", \"14:00\" or \"holding\""
    )]
    pub time: Option<String>,
}

impl From<AddTaskArgs> for CreateTask {
    fn from(val: AddTaskArgs) -> Self {
        CreateTask {
            title: val.title,
            project_id: val.project,
            date: val.date,
            time: val.time,
        }
    }
}

/// Show details of a specific task
#[derive(Args)]
pub struct ShowTaskArgs {
    #[arg(help = "Unique identifier of the task to show details for")]
    pub id: u64,
}

impl From<ShowTaskArgs> for Id {
    fn from(val: ShowTaskArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a task's details
#[derive(Args)]
pub struct UpdateTaskArgs {
    #[arg(help = "Unique identifier of the task to update")]
    pub id: u64,
    #[arg(long, help = "New title for the task")]
    pub title: Option<String>,
    #[arg(short, long, help = "Move the task to another project")]
    pub project: Option<u64>,
    #[arg(short, long, help = "New deadline date (YYYY-MM-DD); the time is kept")]
    pub date: Option<String>,
    #[arg(
        short,
        long,
        help = "New deadline time (\"2:00 PM\", \"14:00\" or \"holding\"); the date is kept"
    )]
    pub time: Option<String>,
}

impl UpdateTaskArgs {
    fn changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(title) = &self.title {
            changes.push(format!("Renamed to '{}'", title.trim()));
        }
        if let Some(project) = self.project {
            changes.push(format!("Moved to project {project}"));
        }
        if let Some(date) = &self.date {
            changes.push(format!("Date set to {date}"));
        }
        if let Some(time) = &self.time {
            changes.push(format!("Time set to {time}"));
        }
        changes
    }
}

impl From<UpdateTaskArgs> for UpdateTask {
    fn from(val: UpdateTaskArgs) -> Self {
        UpdateTask {
            id: val.id,
            title: val.title,
            project_id: val.project,
            date: val.date,
            time: val.time,
            completed: None,
        }
    }
}

/// Toggle a task between open and completed
#[derive(Args)]
pub struct ToggleTaskArgs {
    #[arg(help = "Unique identifier of the task to toggle")]
    pub id: u64,
}

impl From<ToggleTaskArgs> for Id {
    fn from(val: ToggleTaskArgs) -> Self {
        Id { id: val.id }
    }
}

/// Move a task into a calendar slot
///
/// The slot is an hour label such as "2:00 PM" or "14:00", or "holding" for
/// the day's holding bucket.
#[derive(Args)]
pub struct ScheduleTaskArgs {
    #[arg(help = "Unique identifier of the task to move")]
    pub id: u64,
    #[arg(help = "Target date (YYYY-MM-DD)")]
    pub date: String,
    #[arg(help = "Target slot: \"2:00 PM\", \"14:00\" or \"holding\"")]
    pub slot: String,
}

impl From<ScheduleTaskArgs> for ScheduleTask {
    fn from(val: ScheduleTaskArgs) -> Self {
        ScheduleTask {
            id: val.id,
            date: val.date,
            slot: val.slot,
        }
    }
}

/// Delete a task permanently
#[derive(Args)]
pub struct DeleteTaskArgs {
    #[arg(help = "Unique identifier of the task to delete")]
    pub id: u64,
}

impl From<DeleteTaskArgs> for Id {
    fn from(val: DeleteTaskArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a new task
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// List open tasks by deadline
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a specific task
    #[command(alias = "s")]
    Show(ShowTaskArgs),
    /// Update a task's details
    #[command(alias = "u")]
    Update(UpdateTaskArgs),
    /// Toggle a task between open and completed
    #[command(alias = "x")]
    Toggle(ToggleTaskArgs),
    /// Move a task into an hour slot or the holding bucket
    #[command(alias = "mv")]
    Schedule(ScheduleTaskArgs),
    /// Delete a task permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteTaskArgs),
}

// ============================================================================
// Calendar arguments
// ============================================================================

/// Show the calendar board
///
/// Each day lists its holding bucket, the open tasks in the hourly slots from
/// 6 AM to 11 PM, and the tasks already completed.
#[derive(Args)]
pub struct CalendarArgs {
    #[arg(short, long, help = "Anchor date (YYYY-MM-DD); defaults to today")]
    pub date: Option<String>,
    #[arg(
        short,
        long,
        value_parser = ["day", "3-day", "week"],
        help = "Number of days to show (default: 3-day)"
    )]
    pub view: Option<String>,
}

impl From<CalendarArgs> for ShowCalendar {
    fn from(val: CalendarArgs) -> Self {
        ShowCalendar {
            date: val.date,
            view: val.view,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs CLI commands against a tracker.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub async fn handle_project_command(&self, command: ProjectCommands) -> Result<()> {
        match command {
            ProjectCommands::Create(args) => {
                let project = self.tracker.create_project(&args.into()).await?;
                self.renderer.render(&CreateResult::new(project).to_string())
            }
            ProjectCommands::List(args) => self.list_projects(&args).await,
            ProjectCommands::Show(args) => {
                let params: Id = args.into();
                match self.tracker.project_detail(&params).await? {
                    Some(detail) => self.renderer.render(&detail.to_string()),
                    None => self.not_found("Project", params.id),
                }
            }
            ProjectCommands::Update(args) => {
                let changes = args.changes();
                let project = self.tracker.update_project(&args.into()).await?;
                self.renderer
                    .render(&UpdateResult::with_changes(project, changes).to_string())
            }
            ProjectCommands::Finish(args) => {
                let project = self.tracker.finish_project(&args.into()).await?;
                let changes = vec!["Marked as finished".to_string()];
                self.renderer
                    .render(&UpdateResult::with_changes(project, changes).to_string())
            }
            ProjectCommands::Reopen(args) => {
                let project = self.tracker.reopen_project(&args.into()).await?;
                let changes = vec!["Cleared finished mark".to_string()];
                self.renderer
                    .render(&UpdateResult::with_changes(project, changes).to_string())
            }
            ProjectCommands::Delete(args) => {
                let project = self.tracker.delete_project(&args.into()).await?;
                self.renderer.render(&DeleteResult::new(project).to_string())
            }
        }
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => {
                let task = self.tracker.add_task(&args.into()).await?;
                self.renderer.render(&CreateResult::new(task).to_string())
            }
            TaskCommands::List => {
                let tasks = self.tracker.open_tasks().await?;
                self.renderer.render(&format!("# Open Tasks\n\n{tasks}"))
            }
            TaskCommands::Show(args) => {
                let params: Id = args.into();
                match self.tracker.get_task(&params).await? {
                    Some(task) => self.renderer.render(&task.to_string()),
                    None => self.not_found("Task", params.id),
                }
            }
            TaskCommands::Update(args) => {
                let changes = args.changes();
                let task = self.tracker.update_task(&args.into()).await?;
                self.renderer
                    .render(&UpdateResult::with_changes(task, changes).to_string())
            }
            TaskCommands::Toggle(args) => {
                let task = self.tracker.toggle_task(&args.into()).await?;
                let change = if task.completed {
                    "Marked as completed"
                } else {
                    "Marked as open"
                };
                self.renderer.render(
                    &UpdateResult::with_changes(task, vec![change.to_string()]).to_string(),
                )
            }
            TaskCommands::Schedule(args) => {
                let change = format!("Moved to {} on {}", args.slot, args.date);
                let task = self.tracker.schedule_task(&args.into()).await?;
                self.renderer
                    .render(&UpdateResult::with_changes(task, vec![change]).to_string())
            }
            TaskCommands::Delete(args) => {
                let task = self.tracker.delete_task(&args.into()).await?;
                self.renderer.render(&DeleteResult::new(task).to_string())
            }
        }
    }

    /// Shows the grouped overview of top-level projects.
    pub async fn overview(&self) -> Result<()> {
        let groups = self.tracker.project_overview().await?;
        self.renderer.render(&groups.to_string())
    }

    async fn list_projects(&self, args: &ListProjectsArgs) -> Result<()> {
        if args.all {
            let summaries = ProjectSummaries(self.tracker.project_summaries().await?);
            self.renderer.render(&format!("# Projects\n\n{summaries}"))
        } else {
            self.overview().await
        }
    }

    pub async fn calendar(&self, args: CalendarArgs) -> Result<()> {
        let board = self.tracker.calendar(&args.into()).await?;
        self.renderer.render(&board.to_string())
    }

    pub async fn stats(&self) -> Result<()> {
        let overview = self.tracker.stats().await?;
        self.renderer.render(&overview.to_string())
    }

    /// Prints the JSON snapshot unrendered so it can be piped.
    pub async fn export(&self) -> Result<()> {
        println!("{}", self.tracker.export().await?);
        Ok(())
    }

    fn not_found(&self, kind: &str, id: u64) -> Result<()> {
        let status = OperationStatus::failure(format!("{kind} with ID {id} not found"));
        self.renderer.render(&status.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_project_changes() {
        let args = UpdateProjectArgs {
            id: 3,
            name: Some(" Garden ".to_string()),
            color: None,
            parent: None,
            root: true,
            next_step: Some(String::new()),
        };

        assert_eq!(
            args.changes(),
            vec![
                "Renamed to 'Garden'".to_string(),
                "Moved to the top level".to_string(),
                "Cleared next step".to_string(),
            ]
        );

        let params: UpdateProject = args.into();
        assert!(params.make_root);
        assert_eq!(params.parent_id, None);
    }

    #[test]
    fn test_update_task_args_never_set_completion() {
        let args = UpdateTaskArgs {
            id: 1,
            title: None,
            project: Some(2),
            date: Some("2025-03-14".to_string()),
            time: None,
        };
        assert_eq!(
            args.changes(),
            vec![
                "Moved to project 2".to_string(),
                "Date set to 2025-03-14".to_string()
            ]
        );

        let params: UpdateTask = args.into();
        assert_eq!(params.completed, None);
        assert_eq!(params.project_id, Some(2));
    }
}
