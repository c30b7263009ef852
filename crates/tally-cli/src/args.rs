use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CalendarArgs, ProjectCommands, TaskCommands};

/// Main command-line interface for the Tally tracker
///
/// Tally keeps tasks with deadlines inside nested projects and derives each
/// project's status from its work: live, needing review, or finished. Tasks
/// are placed on an hourly calendar or parked in a per-day holding bucket.
/// Run without a command to see the project overview, or start the MCP
/// server with `serve` for AI assistant integration.
#[derive(Parser)]
#[command(version, about, name = "tally")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/tally/tally.db
    #[arg(long, global = true, env = "TALLY_DATABASE_FILE")]
    pub database_file: Option<PathBuf>,

    /// Owner key all projects and tasks are scoped to
    #[arg(long, global = true, env = "TALLY_USER", default_value = "local")]
    pub user: String,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Tally CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage projects
    #[command(alias = "p")]
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Manage tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Show the calendar board
    #[command(alias = "c")]
    Calendar(CalendarArgs),
    /// Show dashboard counters
    Stats,
    /// Print all projects and tasks as JSON
    Export,
    /// Start the MCP server
    Serve,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_user_defaults_to_local() {
        let args = Args::try_parse_from(["tally", "stats"]).unwrap();
        assert_eq!(args.user, "local");
        assert!(matches!(args.command, Some(Commands::Stats)));
    }

    #[test]
    fn test_no_command_is_allowed() {
        let args = Args::try_parse_from(["tally", "--no-color"]).unwrap();
        assert!(args.no_color);
        assert!(args.command.is_none());
    }
}
