use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color against a test database
fn tally_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("tally").expect("Failed to find tally binary");
    cmd.env_remove("TALLY_USER")
        .env_remove("TALLY_DATABASE_FILE")
        .arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

/// Runs a command expected to succeed and returns its stdout.
fn run_ok(temp_dir: &TempDir, args: &[&str]) -> String {
    let output = tally_cmd(temp_dir)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).expect("Invalid UTF-8")
}

/// Extracts the ID from a "Created <kind> with ID: <n>" line.
fn extract_id_from_output(output: &str) -> String {
    output
        .lines()
        .find_map(|line| line.split_once("with ID: ").map(|(_, id)| id.trim().to_string()))
        .unwrap_or_else(|| panic!("No ID found in output: {output}"))
}

#[test]
fn test_cli_overview_shows_inbox() {
    let temp_dir = create_cli_test_environment();

    tally_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Inbox"))
        .stdout(predicate::str::contains("## Inbox (ID: 1)"));
}

#[test]
fn test_cli_create_project() {
    let temp_dir = create_cli_test_environment();

    tally_cmd(&temp_dir)
        .args(["project", "create", "Garden", "--color", "green"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created project with ID: 2"))
        .stdout(predicate::str::contains("# 2. Garden"))
        .stdout(predicate::str::contains("- Color: green"));
}

#[test]
fn test_cli_new_empty_project_needs_review() {
    let temp_dir = create_cli_test_environment();
    run_ok(&temp_dir, &["project", "create", "Garden"]);

    tally_cmd(&temp_dir)
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Review"))
        .stdout(predicate::str::contains("## Garden (ID: 2)"))
        .stdout(predicate::str::contains("◐ Review"));
}

#[test]
fn test_cli_future_task_makes_project_active() {
    let temp_dir = create_cli_test_environment();
    let output = run_ok(&temp_dir, &["project", "create", "Garden"]);
    let project_id = extract_id_from_output(&output);

    run_ok(
        &temp_dir,
        &[
            "task",
            "add",
            "Plant tulips",
            "--project",
            &project_id,
            "--date",
            "2099-04-01",
            "--time",
            "10:00 AM",
        ],
    );

    tally_cmd(&temp_dir)
        .args(["project", "show", &project_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 2. Garden"))
        .stdout(predicate::str::contains("- Status: ● Active"))
        .stdout(predicate::str::contains("Plant tulips"));
}

#[test]
fn test_cli_show_missing_project() {
    let temp_dir = create_cli_test_environment();

    tally_cmd(&temp_dir)
        .args(["project", "show", "999"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Project with ID 999 not found",
        ));
}

#[test]
fn test_cli_inbox_cannot_be_deleted() {
    let temp_dir = create_cli_test_environment();

    tally_cmd(&temp_dir)
        .args(["project", "delete", "1", "--confirm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "The Inbox project cannot be deleted",
        ));
}

#[test]
fn test_cli_delete_project_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    run_ok(&temp_dir, &["project", "create", "Scratch"]);

    tally_cmd(&temp_dir)
        .args(["project", "delete", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("confirmed"));

    tally_cmd(&temp_dir)
        .args(["project", "delete", "2", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted project 'Scratch' (ID: 2)"));
}

#[test]
fn test_cli_finish_and_reopen_project() {
    let temp_dir = create_cli_test_environment();
    run_ok(&temp_dir, &["project", "create", "Taxes"]);

    tally_cmd(&temp_dir)
        .args(["project", "finish", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Marked as finished"))
        .stdout(predicate::str::contains("- Marked: finished"));

    tally_cmd(&temp_dir)
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Finished"));

    tally_cmd(&temp_dir)
        .args(["project", "reopen", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Cleared finished mark"));
}

#[test]
fn test_cli_update_project_rejects_cycle() {
    let temp_dir = create_cli_test_environment();
    run_ok(&temp_dir, &["project", "create", "Home"]);
    run_ok(&temp_dir, &["project", "create", "Kitchen", "--parent", "2"]);

    tally_cmd(&temp_dir)
        .args(["project", "update", "2", "--parent", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parent_id"));

    tally_cmd(&temp_dir)
        .args(["project", "update", "3", "--root", "--next-step", "Pick tiles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Moved to the top level"))
        .stdout(predicate::str::contains("- Next step: Pick tiles"));
}

#[test]
fn test_cli_add_task_defaults_to_inbox() {
    let temp_dir = create_cli_test_environment();

    tally_cmd(&temp_dir)
        .args(["task", "add", "Call the plumber"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created task with ID: 1"))
        .stdout(predicate::str::contains("- Project: 1"))
        .stdout(predicate::str::contains("6:00 AM"));
}

#[test]
fn test_cli_add_task_rejects_bad_time() {
    let temp_dir = create_cli_test_environment();

    tally_cmd(&temp_dir)
        .args(["task", "add", "Nope", "--time", "25:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'time'"));
}

#[test]
fn test_cli_toggle_task() {
    let temp_dir = create_cli_test_environment();
    let output = run_ok(&temp_dir, &["task", "add", "Water plants"]);
    let task_id = extract_id_from_output(&output);

    tally_cmd(&temp_dir)
        .args(["task", "toggle", &task_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Marked as completed"))
        .stdout(predicate::str::contains("(✓ Done)"));

    tally_cmd(&temp_dir)
        .args(["task", "toggle", &task_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Marked as open"));
}

#[test]
fn test_cli_schedule_task_into_calendar() {
    let temp_dir = create_cli_test_environment();
    let output = run_ok(
        &temp_dir,
        &["task", "add", "Standup", "--date", "2099-03-14", "--time", "9:00 AM"],
    );
    let task_id = extract_id_from_output(&output);

    tally_cmd(&temp_dir)
        .args(["calendar", "--date", "2099-03-14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**9:00 AM**"))
        .stdout(predicate::str::contains(format!("- [ ] {task_id}. Standup")));

    tally_cmd(&temp_dir)
        .args(["task", "schedule", &task_id, "2099-03-14", "holding"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(holding)"));

    tally_cmd(&temp_dir)
        .args(["calendar", "--date", "2099-03-14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Holding"))
        .stdout(predicate::str::contains("No scheduled tasks."));
}

#[test]
fn test_cli_calendar_rejects_unknown_view() {
    let temp_dir = create_cli_test_environment();

    tally_cmd(&temp_dir)
        .args(["calendar", "--view", "month"])
        .assert()
        .failure();
}

#[test]
fn test_cli_task_list_hides_completed() {
    let temp_dir = create_cli_test_environment();
    run_ok(&temp_dir, &["task", "add", "Open one"]);
    let output = run_ok(&temp_dir, &["task", "add", "Closed one"]);
    let closed_id = extract_id_from_output(&output);
    run_ok(&temp_dir, &["task", "toggle", &closed_id]);

    tally_cmd(&temp_dir)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Open one"))
        .stdout(predicate::str::contains("Closed one").not());
}

#[test]
fn test_cli_stats() {
    let temp_dir = create_cli_test_environment();
    let output = run_ok(&temp_dir, &["task", "add", "Done soon"]);
    let task_id = extract_id_from_output(&output);
    run_ok(&temp_dir, &["task", "add", "Still open"]);
    run_ok(&temp_dir, &["task", "toggle", &task_id]);

    tally_cmd(&temp_dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Overview"))
        .stdout(predicate::str::contains("1 of 2 tasks (50%)"));
}

#[test]
fn test_cli_export_is_json() {
    let temp_dir = create_cli_test_environment();
    run_ok(&temp_dir, &["task", "add", "Exported"]);

    let output = run_ok(&temp_dir, &["export"]);
    let value: serde_json::Value = serde_json::from_str(&output).expect("Export is not JSON");
    assert_eq!(value["projects"][0]["name"], "Inbox");
    assert_eq!(value["tasks"][0]["title"], "Exported");
}

#[test]
fn test_cli_users_are_isolated() {
    let temp_dir = create_cli_test_environment();
    run_ok(&temp_dir, &["--user", "alice", "task", "add", "Alice's task"]);

    tally_cmd(&temp_dir)
        .args(["--user", "bob", "task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));

    tally_cmd(&temp_dir)
        .args(["--user", "alice", "task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice's task"));
}
