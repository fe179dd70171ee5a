//! Convenient imports for tasklog.
//!
//! Re-exports the most commonly used types so you can get started with a
//! single import:
//!
//! ```no_run
//! use tasklog::prelude::*;
//!
//! let tasks = Tasks::new("tasks.json");
//! tasks.add("write the report")?;
//! # Ok::<(), tasklog::TaskError>(())
//! ```

// Store core
pub use crate::error::{Error, Result};
pub use crate::record::Record;
pub use crate::store::{FileStore, DEFAULT_PATH};

// Task domain
pub use crate::tasks::{Task, TaskError, TaskResult, TaskStatus, Tasks};
