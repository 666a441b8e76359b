use super::backend::StorageBackend;
use crate::error::{PantryError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FsBackend {
    state_file: PathBuf,
}

impl FsBackend {
    pub fn new(state_file: PathBuf) -> Self {
        Self { state_file }
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path).map_err(PantryError::Io)?;
    }
    Ok(())
}

/// Writes `content` next to `target` under a unique temporary name and renames
/// it into place. `target` is either fully replaced or left as it was.
fn write_atomic(target: &Path, content: &str) -> Result<()> {
    let dir = target.parent().unwrap_or_else(|| Path::new(""));
    ensure_dir(dir)?;

    let stem = target
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("pantry");
    let tmp_file = dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()));

    if let Err(e) = fs::write(&tmp_file, content) {
        let _ = fs::remove_file(&tmp_file);
        return Err(PantryError::Io(e));
    }
    if let Err(e) = fs::rename(&tmp_file, target) {
        let _ = fs::remove_file(&tmp_file);
        return Err(PantryError::Io(e));
    }
    Ok(())
}

impl StorageBackend for FsBackend {
    fn read_state(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.state_file) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PantryError::Io(e)),
        }
    }

    fn write_state(&self, content: &str) -> Result<()> {
        write_atomic(&self.state_file, content)
    }

    fn write_report(&self, destination: &Path, content: &str) -> Result<()> {
        write_atomic(destination, content)
    }

    fn state_location(&self) -> PathBuf {
        self.state_file.clone()
    }
}
