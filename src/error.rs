//! Error types for the record store.
//!
//! All fallible store operations return [`Result`]. Errors are never
//! swallowed or replaced with defaults; callers inspect and decide.

use std::path::PathBuf;

use thiserror::Error;

/// All record-store errors.
///
/// This is the canonical error type for every `FileStore` operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The supplied path does not contain the `.json` extension.
    ///
    /// Returned from open before any filesystem call is made.
    #[error("not a data file (missing .json): {}", .path.display())]
    InvalidPath {
        /// The offending path, verbatim as supplied.
        path: PathBuf,
    },

    /// Filesystem-level failure, propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File content is not a well-formed JSON array of the expected shape.
    ///
    /// Carries serde_json's diagnostic (line and column) for the caller.
    #[error("decode error: {0}")]
    Decode(serde_json::Error),

    /// A record failed to serialize during a write.
    ///
    /// Surfaced before the file is touched; prior content stays intact.
    #[error("encode error: {0}")]
    Encode(serde_json::Error),
}

/// Result type for record-store operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is an invalid-path error.
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Error::InvalidPath { .. })
    }

    /// Check if this is a decode error.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// Check if this is a filesystem error.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

// No #[from] for serde_json::Error: decode and encode failures share the
// underlying type but must stay distinguishable, so construction is explicit
// at each call site.
