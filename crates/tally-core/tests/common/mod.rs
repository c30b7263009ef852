use jiff::civil::date;
use tally_core::{FixedClock, Tracker, TrackerBuilder};
use tempfile::TempDir;

/// Helper function to create a test tracker pinned to Friday 2025-03-14 noon
pub async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_clock(FixedClock(date(2025, 3, 14).at(12, 0, 0, 0)))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}
