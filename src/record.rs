//! The identity capability records must provide to live in a store.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A value that can be persisted in a [`FileStore`](crate::FileStore).
///
/// A record is any serde-serializable type that exposes a unique integer
/// identifier and can be re-identified without mutating shared state:
/// [`with_id`](Record::with_id) consumes the value and returns a modified
/// copy, so callers holding clones of the original are never affected.
///
/// # Example
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use tasklog::Record;
///
/// #[derive(Clone, Serialize, Deserialize)]
/// struct Note {
///     id: u64,
///     body: String,
/// }
///
/// impl Record for Note {
///     fn id(&self) -> u64 {
///         self.id
///     }
///
///     fn with_id(mut self, id: u64) -> Self {
///         self.id = id;
///         self
///     }
/// }
/// ```
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// The record's unique integer identifier.
    fn id(&self) -> u64;

    /// Return a copy of this record carrying `id` instead of its current
    /// identifier.
    fn with_id(self, id: u64) -> Self;
}
