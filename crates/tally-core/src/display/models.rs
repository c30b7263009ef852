//! Display implementations for domain models.
//!
//! All output is markdown so the CLI can render it through termimad and the
//! MCP server can hand it to clients unchanged.

use std::fmt;

use super::datetime::{Deadline, LocalDateTime};
use crate::{
    models::{ManualStatus, Project, ProjectDetail, ProjectSummary, Status, Task},
    status::Overview,
};

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ManualStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Task {
    /// Checkbox marker used in task lists.
    fn checkbox(&self) -> &'static str {
        if self.completed {
            "[x]"
        } else {
            "[ ]"
        }
    }

    /// One-line list entry, e.g. `- [ ] 4. Water plants (Fri, Mar 14 2025 2:00 PM)`.
    pub(crate) fn fmt_line(&self, f: &mut fmt::Formatter<'_>, with_deadline: bool) -> fmt::Result {
        write!(f, "- {} {}. {}", self.checkbox(), self.id, self.title)?;
        if with_deadline {
            write!(f, " ({})", Deadline(&self.deadline))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.completed { "✓ Done" } else { "○ Open" };
        writeln!(f, "### {}. {} ({state})", self.id, self.title)?;
        writeln!(f)?;
        writeln!(f, "- Due: {}", Deadline(&self.deadline))?;
        writeln!(f, "- Project: {}", self.project_id)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        if self.is_inbox() {
            writeln!(f, "- Default project")?;
        }
        writeln!(f, "- Color: {}", self.color)?;
        if let Some(parent_id) = self.parent_id {
            writeln!(f, "- Parent: {parent_id}")?;
        }
        if let Some(status) = self.status {
            writeln!(f, "- Marked: {status}")?;
        }
        if let Some(next_step) = &self.next_step {
            writeln!(f, "- Next step: {next_step}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))
    }
}

impl fmt::Display for ProjectSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_tasks > 0 {
            format!(" ({}/{})", self.completed_tasks, self.total_tasks)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Status**: {}", self.status.with_icon())?;
        if let Some(next_step) = &self.next_step {
            writeln!(f, "- **Next step**: {next_step}")?;
        }
        if self.sub_projects > 0 {
            writeln!(f, "- **Sub-projects**: {}", self.sub_projects)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ProjectDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = &self.summary;
        writeln!(f, "# {}. {}", summary.id, summary.name)?;
        writeln!(f)?;
        writeln!(f, "- Status: {}", summary.status.with_icon())?;
        if let Some(parent) = &self.parent_name {
            writeln!(f, "- Parent: {parent}")?;
        }
        writeln!(f, "- Color: {}", summary.color)?;
        writeln!(
            f,
            "- Progress: {}/{} tasks complete",
            summary.completed_tasks, summary.total_tasks
        )?;
        if let Some(next_step) = &summary.next_step {
            writeln!(f, "- Next step: {next_step}")?;
        }

        writeln!(f, "\n## Tasks")?;
        writeln!(f)?;
        if self.tasks.is_empty() {
            writeln!(f, "No tasks in this project.")?;
        }
        for task in &self.tasks {
            task.fmt_line(f, true)?;
        }

        if !self.sub_projects.is_empty() {
            writeln!(f, "\n## Sub-projects")?;
            writeln!(f)?;
            for sub in &self.sub_projects {
                writeln!(f, "- {}. {} ({})", sub.id, sub.name, sub.status.with_icon())?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Overview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Overview")?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Completed**: {} of {} tasks ({}%)",
            self.completed_tasks, self.total_tasks, self.completion_rate
        )?;
        writeln!(f, "- **Due today**: {}", self.due_today)?;
        writeln!(f, "- **Upcoming**: {}", self.upcoming_tasks)?;
        writeln!(f, "- **Overdue**: {}", self.overdue_tasks)?;
        writeln!(
            f,
            "- **Projects finished**: {} of {}",
            self.finished_projects, self.total_projects
        )
    }
}
