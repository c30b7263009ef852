//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::{
    models::{ProjectSummary, Task},
    status::ProjectGroups,
};

/// Newtype wrapper for displaying collections of project summaries.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use tally_core::{
///     display::ProjectSummaries,
///     models::{ProjectSummary, Status},
/// };
///
/// let project = ProjectSummary {
///     id: 2,
///     name: "Garden".to_string(),
///     color: "green".to_string(),
///     parent_id: None,
///     status: Status::Live,
///     next_step: None,
///     created_at: Timestamp::now(),
///     is_inbox: false,
///     total_tasks: 3,
///     completed_tasks: 1,
///     sub_projects: 0,
/// };
///
/// let output = ProjectSummaries(vec![project]).to_string();
/// assert!(output.contains("Garden"));
/// ```
pub struct ProjectSummaries(pub Vec<ProjectSummary>);

impl ProjectSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of project summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the project summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, ProjectSummary> {
        self.0.iter()
    }
}

impl Index<usize> for ProjectSummaries {
    type Output = ProjectSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a ProjectSummaries {
    type Item = &'a ProjectSummary;
    type IntoIter = std::slice::Iter<'a, ProjectSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ProjectSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No projects found.")
        } else {
            for project in &self.0 {
                write!(f, "{project}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a list of tasks, one line each.
pub struct Tasks(pub Vec<Task>);

impl Tasks {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of tasks in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the tasks.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }
}

impl Index<usize> for Tasks {
    type Output = Task;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Tasks {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks found.");
        }
        for task in &self.0 {
            task.fmt_line(f, true)?;
        }
        Ok(())
    }
}

impl fmt::Display for ProjectGroups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No projects found.");
        }

        if let Some(inbox) = &self.inbox {
            writeln!(f, "# Inbox")?;
            writeln!(f)?;
            write!(f, "{inbox}")?;
        }

        for (title, group) in [
            ("Review", &self.review),
            ("Active", &self.active),
            ("Finished", &self.finished),
        ] {
            if group.is_empty() {
                continue;
            }
            writeln!(f, "# {title}")?;
            writeln!(f)?;
            for project in group {
                write!(f, "{project}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::Status;

    fn summary(id: u64, name: &str, status: Status) -> ProjectSummary {
        ProjectSummary {
            id,
            name: name.to_string(),
            color: "blue".to_string(),
            parent_id: None,
            status,
            next_step: None,
            created_at: Timestamp::UNIX_EPOCH,
            is_inbox: name == "Inbox",
            total_tasks: 0,
            completed_tasks: 0,
            sub_projects: 0,
        }
    }

    #[test]
    fn test_empty_collections() {
        assert_eq!(ProjectSummaries(vec![]).to_string(), "No projects found.\n");
        assert_eq!(Tasks(vec![]).to_string(), "No tasks found.\n");
        assert_eq!(ProjectGroups::default().to_string(), "No projects found.\n");
    }

    #[test]
    fn test_groups_display_order() {
        let groups = ProjectGroups {
            inbox: None,
            review: vec![summary(1, "Inbox", Status::Unreported)],
            active: vec![summary(2, "Garden", Status::Live)],
            finished: vec![],
        };

        let output = groups.to_string();
        let review = output.find("# Review").unwrap();
        let active = output.find("# Active").unwrap();
        assert!(review < active);
        assert!(!output.contains("# Finished"));
        assert!(!output.contains("# Inbox\n"));
    }
}
