#[cfg(test)]
mod model_tests {
    use jiff::{civil::date, Timestamp};

    use crate::models::{
        ManualStatus, Project, ProjectSummary, Snapshot, Status, Task, UpdateProjectRequest,
    };

    fn create_test_project(id: u64, name: &str, parent_id: Option<u64>) -> Project {
        Project {
            id,
            user_id: "local".to_string(),
            name: name.to_string(),
            color: "blue".to_string(),
            parent_id,
            status: None,
            next_step: None,
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
        }
    }

    fn create_test_task(id: u64, project_id: u64, completed: bool) -> Task {
        Task {
            id,
            user_id: "local".to_string(),
            project_id,
            title: format!("Task {id}"),
            deadline: date(2025, 3, 14).at(9, 0, 0, 0),
            completed,
            created_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    fn create_test_snapshot() -> Snapshot {
        Snapshot::new(
            vec![
                create_test_task(1, 1, false),
                create_test_task(2, 2, true),
                create_test_task(3, 2, false),
                create_test_task(4, 42, false),
            ],
            vec![
                create_test_project(1, "Inbox", None),
                create_test_project(2, "Garden", None),
                create_test_project(3, "Beds", Some(2)),
            ],
        )
    }

    #[test]
    fn test_inbox_identity() {
        assert!(create_test_project(1, "Inbox", None).is_inbox());
        assert!(!create_test_project(2, "Inbox", Some(1)).is_inbox());
        assert!(!create_test_project(3, "inbox", None).is_inbox());
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("live".parse::<Status>().unwrap(), Status::Live);
        assert_eq!("Review".parse::<Status>().unwrap(), Status::Unreported);
        assert!("archived".parse::<Status>().is_err());
        assert_eq!("finished".parse::<ManualStatus>().unwrap(), ManualStatus::Finished);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Unreported).unwrap(), "\"unreported\"");
        let project = create_test_project(2, "Garden", None);
        let json = serde_json::to_value(&project).unwrap();
        assert!(json.get("next_step").is_none());
        assert_eq!(json["status"], serde_json::Value::Null);
    }

    #[test]
    fn test_snapshot_lookups() {
        let snapshot = create_test_snapshot();
        assert_eq!(snapshot.inbox().map(|p| p.id), Some(1));
        assert_eq!(snapshot.tasks_for(2).count(), 2);
        assert_eq!(snapshot.sub_projects(2).map(|p| p.id).collect::<Vec<_>>(), vec![3]);
        assert!(snapshot.project(99).is_none());
        assert_eq!(snapshot.task(3).map(|t| t.project_id), Some(2));
    }

    #[test]
    fn test_snapshot_drops_orphans() {
        let snapshot = create_test_snapshot().without_orphans();
        assert_eq!(snapshot.tasks.len(), 3);
        assert!(snapshot.task(4).is_none());
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let snapshot = create_test_snapshot();
        let json = snapshot.to_json().unwrap();
        assert_eq!(Snapshot::from_json(&json).unwrap(), snapshot);
        assert!(Snapshot::from_json("{").is_err());
    }

    #[test]
    fn test_project_summary_counts() {
        let snapshot = create_test_snapshot();
        let garden = snapshot.project(2).unwrap();
        let summary = ProjectSummary::from_snapshot(garden, &snapshot, Status::Live);

        assert_eq!(summary.total_tasks, 2);
        assert_eq!(summary.completed_tasks, 1);
        assert_eq!(summary.pending_tasks(), 1);
        assert_eq!(summary.sub_projects, 1);
        assert!(!summary.is_inbox);
    }

    #[test]
    fn test_finished_request() {
        let request = UpdateProjectRequest::finished(true);
        assert_eq!(request.status, Some(Some(ManualStatus::Finished)));
        assert!(!request.is_empty());

        let reopen = UpdateProjectRequest::finished(false);
        assert_eq!(reopen.status, Some(None));
        assert!(UpdateProjectRequest::default().is_empty());
    }
}
