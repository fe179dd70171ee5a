//! Task tracking on top of the record store.
//!
//! The domain layer is a thin client of [`FileStore`]: every operation
//! opens the store, reads the full collection, mutates it in memory,
//! writes it back, and releases the handle.
//!
//! # Example
//!
//! ```no_run
//! use tasklog::{Tasks, TaskStatus};
//!
//! let tasks = Tasks::new("tasks.json");
//! let added = tasks.add("write the report")?;
//! tasks.set_status(added.id, TaskStatus::Done)?;
//! # Ok::<(), tasklog::TaskError>(())
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::error::Error;
use crate::record::Record;
use crate::store::{FileStore, DEFAULT_PATH};

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started.
    Todo,
    /// Being worked on.
    InProgress,
    /// Finished.
    Done,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        };
        f.write_str(name)
    }
}

impl FromStr for TaskStatus {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(TaskStatus::Todo),
            "in-progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            other => Err(TaskError::UnknownStatus(other.to_string())),
        }
    }
}

/// One tracked task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the store.
    pub id: u64,
    /// What needs doing. Never empty.
    pub description: String,
    /// Current lifecycle state.
    pub status: TaskStatus,
    /// When the task was added.
    pub created_at: DateTime<Utc>,
    /// When the task was last changed, if ever.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record for Task {
    fn id(&self) -> u64 {
        self.id
    }

    fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }
}

/// Task-layer errors.
#[derive(Debug, Error)]
pub enum TaskError {
    /// An add or update was attempted with an empty description.
    #[error("no description provided")]
    EmptyDescription,

    /// No task carries the requested ID.
    #[error("task with id {id} not found")]
    NotFound {
        /// The ID that was looked up.
        id: u64,
    },

    /// A status string outside the `todo`/`in-progress`/`done` vocabulary.
    #[error("unknown status: {0} (expected todo, in-progress or done)")]
    UnknownStatus(String),

    /// A store error, passed through unchanged.
    #[error(transparent)]
    Store(#[from] Error),
}

/// Result type for task operations.
pub type TaskResult<T> = std::result::Result<T, TaskError>;

/// Task operations over a store at a configured path.
///
/// Each operation opens its own [`FileStore`] handle and releases it on
/// every exit path, so a `Tasks` value holds no file descriptor between
/// calls.
pub struct Tasks {
    path: PathBuf,
}

impl Tasks {
    /// Task operations backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path operations are bound to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> TaskResult<FileStore<Task>> {
        Ok(FileStore::open(&self.path)?)
    }

    /// Add a task with the given description.
    ///
    /// Stamps `created_at`; the store assigns the ID. Fails with
    /// [`TaskError::EmptyDescription`] on an empty description.
    pub fn add(&self, description: &str) -> TaskResult<Task> {
        if description.is_empty() {
            return Err(TaskError::EmptyDescription);
        }

        let mut store = self.open()?;
        let task = Task {
            id: 0,
            description: description.to_string(),
            status: TaskStatus::Todo,
            created_at: Utc::now(),
            updated_at: None,
        };
        let stored = store.append(task)?;
        store.close()?;

        info!("added task {}", stored.id);
        Ok(stored)
    }

    /// Replace the description of the task with the given ID.
    pub fn update(&self, id: u64, description: &str) -> TaskResult<Task> {
        if description.is_empty() {
            return Err(TaskError::EmptyDescription);
        }

        let mut store = self.open()?;
        let mut tasks = store.read_all()?;
        let slot = find_index(id, &tasks)?;

        tasks[slot].description = description.to_string();
        tasks[slot].updated_at = Some(Utc::now());
        store.write_all(&tasks)?;
        store.close()?;

        info!("updated task {}", id);
        Ok(tasks.swap_remove(slot))
    }

    /// Move the task with the given ID to a new status.
    pub fn set_status(&self, id: u64, status: TaskStatus) -> TaskResult<Task> {
        let mut store = self.open()?;
        let mut tasks = store.read_all()?;
        let slot = find_index(id, &tasks)?;

        tasks[slot].status = status;
        tasks[slot].updated_at = Some(Utc::now());
        store.write_all(&tasks)?;
        store.close()?;

        info!("marked task {} as {}", id, status);
        Ok(tasks.swap_remove(slot))
    }

    /// Remove the task with the given ID.
    ///
    /// If the removal empties the collection the file is truncated to
    /// zero bytes instead of holding an empty array.
    pub fn delete(&self, id: u64) -> TaskResult<()> {
        let mut store = self.open()?;
        let mut tasks = store.read_all()?;
        let slot = find_index(id, &tasks)?;

        tasks.remove(slot);
        if tasks.is_empty() {
            store.clear()?;
        } else {
            store.write_all(&tasks)?;
        }
        store.close()?;

        info!("deleted task {}", id);
        Ok(())
    }

    /// All tasks in insertion order, optionally filtered by status.
    pub fn list(&self, filter: Option<TaskStatus>) -> TaskResult<Vec<Task>> {
        let mut store = self.open()?;
        let tasks = store.read_all()?;
        store.close()?;

        Ok(match filter {
            Some(status) => tasks.into_iter().filter(|t| t.status == status).collect(),
            None => tasks,
        })
    }

    /// The task with the given ID.
    pub fn get(&self, id: u64) -> TaskResult<Task> {
        let mut store = self.open()?;
        let tasks = store.read_all()?;
        store.close()?;

        tasks
            .into_iter()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound { id })
    }
}

impl Default for Tasks {
    /// Task operations backed by [`DEFAULT_PATH`].
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}

fn find_index(id: u64, tasks: &[Task]) -> TaskResult<usize> {
    tasks
        .iter()
        .position(|t| t.id == id)
        .ok_or(TaskError::NotFound { id })
}
