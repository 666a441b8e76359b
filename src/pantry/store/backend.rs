use crate::error::Result;
use std::path::{Path, PathBuf};

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `PantryStore` handles the "what" (state format, recovery, reports).
pub trait StorageBackend {
    /// Read the raw state document.
    /// Returns Ok(None) if no state has been written yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_state(&self) -> Result<Option<String>>;

    /// Replace the state document.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_state(&self, content: &str) -> Result<()>;

    /// Write a report to `destination`. Independent of the state document.
    fn write_report(&self, destination: &Path, content: &str) -> Result<()>;

    /// Where the state lives. For FsBackend this is the real path.
    fn state_location(&self) -> PathBuf;
}
