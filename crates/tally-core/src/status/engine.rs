//! Recursive status evaluation over the project forest.

use std::collections::{HashMap, HashSet};

use log::warn;

use crate::{
    models::{Project, Snapshot, Status, Task},
    schedule::{is_past, Clock},
};

/// Evaluates project statuses against one snapshot.
///
/// Sub-projects and tasks are indexed by parent once at construction. Tasks
/// whose project is not part of the snapshot are never looked up, so they
/// take no part in any evaluation.
pub struct StatusEngine<'a, C: Clock + ?Sized> {
    projects: &'a [Project],
    children: HashMap<u64, Vec<&'a Project>>,
    tasks: HashMap<u64, Vec<&'a Task>>,
    clock: &'a C,
}

impl<'a, C: Clock + ?Sized> StatusEngine<'a, C> {
    pub fn new(tasks: &'a [Task], projects: &'a [Project], clock: &'a C) -> Self {
        let mut children: HashMap<u64, Vec<&'a Project>> = HashMap::new();
        for project in projects {
            if let Some(parent_id) = project.parent_id {
                children.entry(parent_id).or_default().push(project);
            }
        }

        let mut by_project: HashMap<u64, Vec<&'a Task>> = HashMap::new();
        for task in tasks {
            by_project.entry(task.project_id).or_default().push(task);
        }

        Self {
            projects,
            children,
            tasks: by_project,
            clock,
        }
    }

    pub fn from_snapshot(snapshot: &'a Snapshot, clock: &'a C) -> Self {
        Self::new(&snapshot.tasks, &snapshot.projects, clock)
    }

    /// Computed status of `project`: one of `Live`, `Unreported` or `Done`.
    pub fn compute_status(&self, project: &Project) -> Status {
        self.evaluate(project, &mut HashSet::new(), &mut HashMap::new())
    }

    /// Status to show for `project`: `Finished` when manually closed,
    /// otherwise the computed status.
    pub fn display_status(&self, project: &Project) -> Status {
        if project.is_finished() {
            Status::Finished
        } else {
            self.compute_status(project)
        }
    }

    /// Computes every project in one pass, sharing sub-project results.
    pub fn evaluate_all(&self) -> StatusMap {
        let mut memo = HashMap::with_capacity(self.projects.len());
        let mut finished = HashSet::new();
        for project in self.projects {
            self.evaluate(project, &mut HashSet::new(), &mut memo);
            if project.is_finished() {
                finished.insert(project.id);
            }
        }
        StatusMap {
            computed: memo,
            finished,
        }
    }

    fn evaluate(
        &self,
        project: &Project,
        path: &mut HashSet<u64>,
        memo: &mut HashMap<u64, Status>,
    ) -> Status {
        if let Some(status) = memo.get(&project.id) {
            return *status;
        }
        let status = self.derive(project, path, memo);
        memo.insert(project.id, status);
        status
    }

    fn derive(
        &self,
        project: &Project,
        path: &mut HashSet<u64>,
        memo: &mut HashMap<u64, Status>,
    ) -> Status {
        let own: &[&Task] = self.tasks.get(&project.id).map(Vec::as_slice).unwrap_or_default();
        let has_overdue = own
            .iter()
            .any(|task| !task.completed && is_past(task.deadline, self.clock));

        if project.is_inbox() {
            return if has_overdue {
                Status::Unreported
            } else {
                Status::Done
            };
        }

        if project.is_finished() {
            return Status::Done;
        }

        if !path.insert(project.id) {
            warn!(
                "Cycle detected in project hierarchy at project {} ({})",
                project.id, project.name
            );
            return Status::Unreported;
        }
        let subs: Vec<Status> = self
            .children
            .get(&project.id)
            .map(|children| {
                children
                    .iter()
                    .map(|child| self.evaluate(child, path, memo))
                    .collect()
            })
            .unwrap_or_default();
        path.remove(&project.id);

        if subs.contains(&Status::Unreported) || has_overdue {
            return Status::Unreported;
        }
        if own.is_empty() && subs.is_empty() {
            return Status::Unreported;
        }
        if own.iter().any(|task| !task.completed) {
            return Status::Live;
        }
        if subs.contains(&Status::Live) {
            return Status::Live;
        }

        // Everything below is complete work awaiting an explicit close-out.
        let all_subs_done = subs.iter().all(|s| *s == Status::Done);
        if !own.is_empty() && all_subs_done {
            return Status::Unreported;
        }
        if own.is_empty() && !subs.is_empty() && all_subs_done {
            return Status::Unreported;
        }
        Status::Unreported
    }
}

/// Statuses of every project in a snapshot.
#[derive(Debug, Clone, Default)]
pub struct StatusMap {
    computed: HashMap<u64, Status>,
    finished: HashSet<u64>,
}

impl StatusMap {
    /// Computed status of the project with the given ID.
    pub fn computed(&self, id: u64) -> Option<Status> {
        self.computed.get(&id).copied()
    }

    /// Display status of the project with the given ID.
    pub fn display(&self, id: u64) -> Option<Status> {
        if self.finished.contains(&id) {
            return Some(Status::Finished);
        }
        self.computed(id)
    }
}

/// Computes the status of `project` against the given tasks and projects.
pub fn compute_status<C: Clock + ?Sized>(
    project: &Project,
    tasks: &[Task],
    projects: &[Project],
    clock: &C,
) -> Status {
    StatusEngine::new(tasks, projects, clock).compute_status(project)
}

/// Status every view renders for `project`.
pub fn display_status<C: Clock + ?Sized>(
    project: &Project,
    tasks: &[Task],
    projects: &[Project],
    clock: &C,
) -> Status {
    StatusEngine::new(tasks, projects, clock).display_status(project)
}
