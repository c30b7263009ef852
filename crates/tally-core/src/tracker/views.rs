//! Read-side projections for the Tracker.
//!
//! Every view reads a fresh snapshot and recomputes statuses from scratch;
//! nothing derived is stored.

use super::Tracker;
use crate::{
    display::Tasks,
    error::Result,
    models::{Project, ProjectDetail, ProjectSummary, Snapshot, Status},
    params::{Id, ShowCalendar},
    schedule::{time, CalendarBoard, CalendarView},
    status::{Overview, ProjectGroups, StatusEngine},
};

impl Tracker {
    /// Reads every project and task of the user.
    ///
    /// Tasks whose project cannot be resolved are dropped.
    pub async fn snapshot(&self) -> Result<Snapshot> {
        let snapshot = self.with_database(|db, user| db.snapshot(user)).await?;
        Ok(snapshot.without_orphans())
    }

    /// Display status of a single project.
    pub async fn project_status(&self, params: &Id) -> Result<Option<Status>> {
        let snapshot = self.snapshot().await?;
        let engine = StatusEngine::from_snapshot(&snapshot, self.clock.as_ref());
        Ok(snapshot
            .project(params.id)
            .map(|project| engine.display_status(project)))
    }

    /// Top-level projects grouped into Inbox, review, active and finished.
    pub async fn project_overview(&self) -> Result<ProjectGroups> {
        let snapshot = self.snapshot().await?;
        let statuses = StatusEngine::from_snapshot(&snapshot, self.clock.as_ref()).evaluate_all();
        Ok(ProjectGroups::build(&snapshot, &statuses))
    }

    /// Every project of the user with its display status, Inbox first.
    pub async fn project_summaries(&self) -> Result<Vec<ProjectSummary>> {
        let snapshot = self.snapshot().await?;
        let statuses = StatusEngine::from_snapshot(&snapshot, self.clock.as_ref()).evaluate_all();
        Ok(snapshot
            .projects
            .iter()
            .filter_map(|project| {
                let status = statuses.display(project.id)?;
                Some(ProjectSummary::from_snapshot(project, &snapshot, status))
            })
            .collect())
    }

    /// A project with its tasks and direct sub-projects.
    pub async fn project_detail(&self, params: &Id) -> Result<Option<ProjectDetail>> {
        let snapshot = self.snapshot().await?;
        let Some(project) = snapshot.project(params.id) else {
            return Ok(None);
        };
        let statuses = StatusEngine::from_snapshot(&snapshot, self.clock.as_ref()).evaluate_all();
        let summary_of = |project: &Project| {
            let status = statuses.display(project.id).unwrap_or(Status::Unreported);
            ProjectSummary::from_snapshot(project, &snapshot, status)
        };

        let mut tasks: Vec<_> = snapshot.tasks_for(project.id).cloned().collect();
        tasks.sort_by_key(|task| (task.deadline, task.id));

        Ok(Some(ProjectDetail {
            summary: summary_of(project),
            parent_name: project
                .parent_id
                .and_then(|id| snapshot.project(id))
                .map(|parent| parent.name.clone()),
            tasks,
            sub_projects: snapshot.sub_projects(project.id).map(summary_of).collect(),
        }))
    }

    /// Open tasks of the user ordered by deadline.
    pub async fn open_tasks(&self) -> Result<Tasks> {
        let tasks = self.list_tasks().await?;
        Ok(Tasks(tasks.into_iter().filter(|task| !task.completed).collect()))
    }

    /// Calendar board for the requested view; defaults to a 3-day
    /// board starting today.
    pub async fn calendar(&self, params: &ShowCalendar) -> Result<CalendarBoard> {
        let anchor = match params.date.as_deref() {
            Some(date) => time::parse_date(date)?,
            None => self.clock.today(),
        };
        let view = match params.view.as_deref() {
            Some(view) => view.parse::<CalendarView>()?,
            None => CalendarView::default(),
        };

        let snapshot = self.snapshot().await?;
        Ok(CalendarBoard::build(
            &snapshot.tasks,
            anchor,
            view,
            self.clock.as_ref(),
        ))
    }

    /// Dashboard counters.
    pub async fn stats(&self) -> Result<Overview> {
        let snapshot = self.snapshot().await?;
        Ok(Overview::compute(&snapshot, self.clock.as_ref()))
    }

    /// The user's snapshot as pretty-printed JSON.
    pub async fn export(&self) -> Result<String> {
        self.snapshot().await?.to_json()
    }
}
