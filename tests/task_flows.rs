//! Task Flow Tests
//!
//! End-to-end scenarios through the task layer: every operation opens the
//! store, works on the decoded collection, and persists the whole file.

use tasklog::{TaskError, TaskStatus, Tasks};

fn tasks_in(dir: &tempfile::TempDir) -> Tasks {
    Tasks::new(dir.path().join("tasks.json"))
}

// ============================================================================
// Add / list
// ============================================================================

#[test]
fn added_tasks_get_sequential_ids_in_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let tasks = tasks_in(&dir);

    let first = tasks.add("task 1").unwrap();
    let second = tasks.add("task 2").unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.status, TaskStatus::Todo);
    assert!(first.updated_at.is_none());

    let listing = tasks.list(None).unwrap();
    assert_eq!(listing, vec![first, second]);
}

#[test]
fn list_filters_by_status() {
    let dir = tempfile::tempdir().unwrap();
    let tasks = tasks_in(&dir);

    tasks.add("stay todo").unwrap();
    let started = tasks.add("get started").unwrap();
    tasks.set_status(started.id, TaskStatus::InProgress).unwrap();

    let in_progress = tasks.list(Some(TaskStatus::InProgress)).unwrap();
    assert_eq!(in_progress.len(), 1);
    assert_eq!(in_progress[0].id, started.id);

    assert!(tasks.list(Some(TaskStatus::Done)).unwrap().is_empty());
}

// ============================================================================
// Update / status
// ============================================================================

#[test]
fn updates_persist_across_a_fresh_handle() {
    let dir = tempfile::tempdir().unwrap();
    let added = tasks_in(&dir).add("original wording").unwrap();

    let updated = tasks_in(&dir).update(added.id, "better wording").unwrap();
    assert_eq!(updated.description, "better wording");
    assert!(updated.updated_at.is_some());

    let fetched = tasks_in(&dir).get(added.id).unwrap();
    assert_eq!(fetched, updated);
}

#[test]
fn set_status_stamps_updated_at_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let tasks = tasks_in(&dir);
    let added = tasks.add("long running job").unwrap();

    let marked = tasks.set_status(added.id, TaskStatus::Done).unwrap();
    assert_eq!(marked.status, TaskStatus::Done);
    assert!(marked.updated_at.is_some());

    assert_eq!(tasks.get(added.id).unwrap().status, TaskStatus::Done);
}

#[test]
fn status_is_stored_with_kebab_case_vocabulary() {
    let dir = tempfile::tempdir().unwrap();
    let tasks = tasks_in(&dir);
    let added = tasks.add("check the wire format").unwrap();
    tasks.set_status(added.id, TaskStatus::InProgress).unwrap();

    let raw = std::fs::read_to_string(dir.path().join("tasks.json")).unwrap();
    assert!(raw.contains("\"in-progress\""));
}

// ============================================================================
// Delete
// ============================================================================

#[test]
fn deleting_one_of_two_leaves_the_other() {
    let dir = tempfile::tempdir().unwrap();
    let tasks = tasks_in(&dir);
    tasks.add("task 1").unwrap();
    let kept = tasks.add("task 2").unwrap();

    tasks.delete(1).unwrap();

    let listing = tasks.list(None).unwrap();
    assert_eq!(listing, vec![kept]);
}

#[test]
fn deleting_the_last_task_empties_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let tasks = tasks_in(&dir);
    let only = tasks.add("short lived").unwrap();

    tasks.delete(only.id).unwrap();

    let path = dir.path().join("tasks.json");
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
    assert!(tasks.list(None).unwrap().is_empty());
}

// ============================================================================
// Error paths
// ============================================================================

#[test]
fn operations_on_missing_ids_fail_with_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let tasks = tasks_in(&dir);
    tasks.add("the one task").unwrap();

    assert!(matches!(
        tasks.update(9, "nope"),
        Err(TaskError::NotFound { id: 9 })
    ));
    assert!(matches!(
        tasks.set_status(9, TaskStatus::Done),
        Err(TaskError::NotFound { id: 9 })
    ));
    assert!(matches!(tasks.delete(9), Err(TaskError::NotFound { id: 9 })));
    assert!(matches!(tasks.get(9), Err(TaskError::NotFound { id: 9 })));
}

#[test]
fn store_errors_pass_through_the_task_layer() {
    let dir = tempfile::tempdir().unwrap();
    // Path without .json: the store's validation error surfaces unchanged.
    let tasks = Tasks::new(dir.path().join("tasks.txt"));

    let err = tasks.add("anything").unwrap_err();
    assert!(matches!(err, TaskError::Store(e) if e.is_invalid_path()));
}

#[test]
fn malformed_file_surfaces_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    std::fs::write(&path, "[{\"id\": ").unwrap();

    let err = Tasks::new(&path).list(None).unwrap_err();
    assert!(matches!(err, TaskError::Store(e) if e.is_decode()));
}
