//! # Storage Layer
//!
//! Persistence is split in two, the same way for every backend:
//!
//! - [`backend::StorageBackend`]: raw I/O ("how"). Reads and atomically writes
//!   whole documents.
//!   - [`fs_backend::FsBackend`]: production, writes to a tmp file and renames.
//!   - [`mem_backend::MemBackend`]: tests, can simulate I/O failures.
//! - [`PantryStore`]: the state format and its policies ("what").
//!
//! ## State Format
//!
//! A single JSON object keyed by item name:
//!
//! ```text
//! {
//!   "Apples": { "quantity": 15, "category": "Fresh" },
//!   "Black Beans": { "quantity": 4, "category": "Canned" }
//! }
//! ```
//!
//! Files written by older releases use `qty` instead of `quantity`; both load.
//!
//! ## Recovery
//!
//! Loading never fails. A missing file is a fresh start. A file that cannot be
//! read, is not the shape above, or breaks an inventory invariant (zero
//! quantity, blank name, two keys normalizing to one item) is discarded: the
//! caller gets an empty inventory plus a [`CorruptState`] describing why, and
//! the next save overwrites the bad file.

use crate::error::{PantryError, Result};
use crate::inventory::Inventory;
use crate::model::{ItemName, Record};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

use backend::StorageBackend;

pub const REPORT_TITLE: &str = "Community Pantry Inventory Report";
const REPORT_RULE_WIDTH: usize = 40;

/// Why a state document was thrown away at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorruptState {
    pub path: PathBuf,
    pub reason: String,
}

impl fmt::Display for CorruptState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Could not read inventory file {} ({}). Starting with an empty inventory; previously saved items may be lost.",
            self.path.display(),
            self.reason
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// No saved state existed.
    Fresh,
    /// Saved state was read back intact.
    Restored,
    /// Saved state was unusable and has been replaced by an empty inventory.
    Recovered(CorruptState),
}

#[derive(Debug)]
pub struct Loaded {
    pub inventory: Inventory,
    pub status: LoadStatus,
}

pub struct PantryStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> PantryStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn load(&self) -> Loaded {
        let path = self.backend.state_location();
        let decoded = match self.backend.read_state() {
            Ok(None) => {
                debug!(path = %path.display(), "no saved inventory, starting fresh");
                return Loaded {
                    inventory: Inventory::new(),
                    status: LoadStatus::Fresh,
                };
            }
            Ok(Some(text)) => decode(&text),
            Err(e) => Err(e.to_string()),
        };

        match decoded {
            Ok(inventory) => {
                debug!(path = %path.display(), items = inventory.len(), "inventory loaded");
                Loaded {
                    inventory,
                    status: LoadStatus::Restored,
                }
            }
            Err(reason) => {
                warn!(path = %path.display(), reason = reason.as_str(), "discarding unreadable inventory");
                Loaded {
                    inventory: Inventory::new(),
                    status: LoadStatus::Recovered(CorruptState { path, reason }),
                }
            }
        }
    }

    pub fn save(&self, inventory: &Inventory) -> Result<()> {
        let content = encode(inventory)?;
        self.backend.write_state(&content)?;
        debug!(
            path = %self.backend.state_location().display(),
            items = inventory.len(),
            "inventory saved"
        );
        Ok(())
    }

    /// Writes the plain-text report. The destination must not be the state
    /// file, or the next load would find a report where the inventory was.
    pub fn export_report(&self, inventory: &Inventory, destination: &Path) -> Result<()> {
        if same_file(destination, &self.backend.state_location()) {
            return Err(PantryError::validation(format!(
                "Report destination {} is the inventory file. Choose another path.",
                destination.display()
            )));
        }
        self.backend
            .write_report(destination, &render_report(inventory))?;
        debug!(path = %destination.display(), items = inventory.len(), "report exported");
        Ok(())
    }
}

/// Best-effort absolute form of `path`. Follows symlinks when the file exists,
/// otherwise resolves the parent directory and keeps the file name.
fn resolve(path: &Path) -> PathBuf {
    if let Ok(real) = path.canonicalize() {
        return real;
    }
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    match (parent.canonicalize(), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    a == b || resolve(a) == resolve(b)
}

fn encode(inventory: &Inventory) -> Result<String> {
    let mut content = serde_json::to_string_pretty(inventory.records())?;
    content.push('\n');
    Ok(content)
}

fn decode(text: &str) -> std::result::Result<Inventory, String> {
    let raw: BTreeMap<String, Record> = serde_json::from_str(text).map_err(|e| e.to_string())?;

    let mut records = BTreeMap::new();
    for (raw_name, record) in raw {
        let name =
            ItemName::parse(&raw_name).map_err(|_| format!("blank item name {:?}", raw_name))?;
        if record.quantity == 0 {
            return Err(format!("{} has a quantity of 0", name));
        }
        if records.insert(name.clone(), record).is_some() {
            return Err(format!("{} appears more than once", name));
        }
    }
    Ok(Inventory::from_records(records))
}

/// Plain-text dump, one line per item.
pub fn render_report(inventory: &Inventory) -> String {
    let mut out = String::new();
    out.push_str(REPORT_TITLE);
    out.push('\n');
    out.push_str(&"-".repeat(REPORT_RULE_WIDTH));
    out.push_str("\n\n");
    for (name, record) in inventory.all() {
        out.push_str(&format!(
            "{}: {} units (Category: {})\n",
            name, record.quantity, record.category
        ));
    }
    out
}
