//! # tasklog
//!
//! A task tracker backed by a single-file JSON record store.
//!
//! The core is [`FileStore`], a store generic over any [`Record`] type:
//! one JSON file holds the whole collection, records carry unique integer
//! IDs assigned on append, and every read decodes the file fresh. The
//! [`Tasks`] layer builds the tracker's add/update/delete/list operations
//! on top of it.
//!
//! ## Quick Start
//!
//! ```no_run
//! use tasklog::prelude::*;
//!
//! let tasks = Tasks::new("tasks.json");
//!
//! let report = tasks.add("write the report")?;
//! tasks.set_status(report.id, TaskStatus::InProgress)?;
//!
//! for task in tasks.list(None)? {
//!     println!("{}: {} [{}]", task.id, task.description, task.status);
//! }
//! # Ok::<(), tasklog::TaskError>(())
//! ```
//!
//! ## Limitations
//!
//! The store is single-process and single-handle: no file locking is
//! performed, so concurrent writers against one path race. See
//! [`FileStore`] for details.

#![warn(missing_docs)]

mod error;
mod record;
mod store;
mod tasks;

pub mod prelude;

// Re-export the store core
pub use error::{Error, Result};
pub use record::Record;
pub use store::{FileStore, DEFAULT_PATH};

// Re-export the task domain
pub use tasks::{Task, TaskError, TaskResult, TaskStatus, Tasks};
