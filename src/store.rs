//! File-backed record store.
//!
//! This module provides [`FileStore`], the core persistence abstraction: a
//! single JSON file holding an ordered collection of records, each carrying
//! a unique integer ID assigned by the store on append.

use std::fs::OpenOptions;
use std::io::{Read as _, Seek, SeekFrom, Write as _};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::record::Record;

/// Path used when the caller supplies none.
pub const DEFAULT_PATH: &str = "db.json";

/// A file-backed store for an ordered collection of one record type.
///
/// The store owns a single backing file whose entire content is one JSON
/// array. The decoded collection is materialized fresh on every
/// [`read_all`](FileStore::read_all) and persisted by a full overwrite on
/// every [`write_all`](FileStore::write_all); nothing is cached in between.
/// [`append`](FileStore::append) is the only operation that assigns IDs.
///
/// [`open`](FileStore::open) is the only constructor and
/// [`close`](FileStore::close) consumes the handle, so operations on an
/// unopened or closed store are unrepresentable. Dropping the handle
/// releases the file descriptor on early-exit paths.
///
/// # Concurrency
///
/// The store performs no file locking. `append` and `write_all` are
/// read-modify-write over the whole file, so two handles on the same path
/// race: updates can be lost (last writer wins) and ID uniqueness can be
/// violated. Callers needing concurrent access must serialize externally.
///
/// # Example
///
/// ```no_run
/// use tasklog::{FileStore, Task};
///
/// let mut store = FileStore::<Task>::open("tasks.json")?;
/// let tasks = store.read_all()?;
/// store.close()?;
/// # Ok::<(), tasklog::Error>(())
/// ```
#[derive(Debug)]
pub struct FileStore<T> {
    path: PathBuf,
    file: std::fs::File,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> FileStore<T> {
    /// Open the store at `path`, creating the file if absent.
    ///
    /// An empty path maps to [`DEFAULT_PATH`]. Any other path must contain
    /// `.json` (case-sensitive substring) or the call fails with
    /// [`Error::InvalidPath`] before any filesystem call, so an invalid
    /// path never mutates the filesystem. Existing content is not
    /// truncated. The extension is never synthesized by the store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let path = if path.as_os_str().is_empty() {
            PathBuf::from(DEFAULT_PATH)
        } else {
            if !path.to_string_lossy().contains(".json") {
                return Err(Error::InvalidPath {
                    path: path.to_path_buf(),
                });
            }
            path.to_path_buf()
        };

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&path)?;
        debug!("opened store at {}", path.display());

        Ok(Self {
            path,
            file,
            _record: PhantomData,
        })
    }

    /// Open the store at [`DEFAULT_PATH`].
    pub fn open_default() -> Result<Self> {
        Self::open(DEFAULT_PATH)
    }

    /// The path this store is bound to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and release the file handle.
    ///
    /// Plain drop also releases the descriptor; `close` additionally
    /// surfaces the final sync error instead of discarding it.
    pub fn close(self) -> Result<()> {
        self.file.sync_all()?;
        debug!("closed store at {}", self.path.display());
        Ok(())
    }

    /// Decode the entire file content as the collection.
    ///
    /// A zero-byte or whitespace-only file decodes to an empty vector.
    /// Malformed content fails with [`Error::Decode`] carrying the parser
    /// diagnostic. Every call returns a freshly allocated vector.
    pub fn read_all(&mut self) -> Result<Vec<T>> {
        self.file.seek(SeekFrom::Start(0))?;
        let mut content = String::new();
        self.file.read_to_string(&mut content)?;

        if content.trim().is_empty() {
            trace!("read_all: empty file at {}", self.path.display());
            return Ok(Vec::new());
        }

        let items: Vec<T> = serde_json::from_str(&content).map_err(Error::Decode)?;
        trace!("read_all: {} records from {}", items.len(), self.path.display());
        Ok(items)
    }

    /// Replace the file content with `items`, encoded as one pretty-printed
    /// JSON array.
    ///
    /// Encoding happens before the file is touched, so an
    /// [`Error::Encode`] leaves prior content intact. The file is then
    /// truncated and rewritten from offset zero: shrinking content leaves
    /// no stale trailing bytes.
    pub fn write_all(&mut self, items: &[T]) -> Result<()> {
        let data = serde_json::to_vec_pretty(items).map_err(Error::Encode)?;

        self.file.set_len(0)?;
        self.file.seek(SeekFrom::Start(0))?;
        self.file.write_all(&data)?;
        self.file.flush()?;
        trace!("write_all: {} records to {}", items.len(), self.path.display());
        Ok(())
    }

    /// Truncate the backing file to zero length.
    ///
    /// A subsequent [`read_all`](FileStore::read_all) yields an empty
    /// collection.
    pub fn clear(&mut self) -> Result<()> {
        self.file.set_len(0)?;
        self.file.seek(SeekFrom::Start(0))?;
        debug!("cleared store at {}", self.path.display());
        Ok(())
    }

    /// Append `item` to the collection under a freshly assigned ID and
    /// return the stored record.
    ///
    /// The new ID is `max(existing IDs) + 1`, or `1` for an empty
    /// collection; whatever ID the caller put on `item` is discarded. The
    /// full collection is rewritten. Not safe for concurrent callers
    /// against the same file.
    pub fn append(&mut self, item: T) -> Result<T> {
        let mut items = self.read_all()?;
        let next_id = items.iter().map(Record::id).max().unwrap_or(0) + 1;

        let stored = item.with_id(next_id);
        items.push(stored.clone());
        self.write_all(&items)?;
        debug!("appended record {} to {}", next_id, self.path.display());
        Ok(stored)
    }
}
