//! # Configuration
//!
//! Pantry keeps an optional `config.json` in its data directory. Missing keys
//! (or a missing file) fall back to the defaults below.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `state_file` | `pantry_inventory.json` | Inventory state, relative to the data directory |
//! | `report_file` | `pantry_report.txt` | Export target, relative to the working directory |
//!
//! The data directory itself is chosen by the CLI: `--data-dir`, then the
//! `PANTRY_HOME` environment variable, then the OS data directory.

use crate::error::{PantryError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";
pub const HOME_ENV: &str = "PANTRY_HOME";
const DEFAULT_STATE_FILE: &str = "pantry_inventory.json";
const DEFAULT_REPORT_FILE: &str = "pantry_report.txt";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PantryConfig {
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,

    #[serde(default = "default_report_file")]
    pub report_file: PathBuf,
}

fn default_state_file() -> PathBuf {
    PathBuf::from(DEFAULT_STATE_FILE)
}

fn default_report_file() -> PathBuf {
    PathBuf::from(DEFAULT_REPORT_FILE)
}

impl Default for PantryConfig {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            report_file: default_report_file(),
        }
    }
}

impl PantryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PantryError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| PantryError::Config(format!("{}: {}", config_path.display(), e)))
    }

    /// Absolute state path for a data directory.
    pub fn state_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.state_file)
    }

    pub fn report_path(&self) -> &Path {
        &self.report_file
    }
}
