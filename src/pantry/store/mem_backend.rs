use super::backend::StorageBackend;
use crate::error::{PantryError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since pantry is single-threaded,
/// so the `StorageBackend` trait can take `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    state: RefCell<Option<String>>,
    reports: RefCell<HashMap<PathBuf, String>>,
    simulate_read_error: RefCell<bool>,
    simulate_write_error: RefCell<bool>,
}

fn simulated(what: &str) -> PantryError {
    PantryError::Io(io::Error::new(
        io::ErrorKind::PermissionDenied,
        format!("Simulated {} error", what),
    ))
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that starts with `content` as its state document.
    pub fn with_state(content: impl Into<String>) -> Self {
        let backend = Self::default();
        *backend.state.borrow_mut() = Some(content.into());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    pub fn set_simulate_read_error(&self, simulate: bool) {
        *self.simulate_read_error.borrow_mut() = simulate;
    }

    pub fn raw_state(&self) -> Option<String> {
        self.state.borrow().clone()
    }

    pub fn report(&self, destination: &Path) -> Option<String> {
        self.reports.borrow().get(destination).cloned()
    }
}

impl StorageBackend for MemBackend {
    fn read_state(&self) -> Result<Option<String>> {
        if *self.simulate_read_error.borrow() {
            return Err(simulated("read"));
        }
        Ok(self.state.borrow().clone())
    }

    fn write_state(&self, content: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(simulated("write"));
        }
        *self.state.borrow_mut() = Some(content.to_string());
        Ok(())
    }

    fn write_report(&self, destination: &Path, content: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(simulated("write"));
        }
        self.reports
            .borrow_mut()
            .insert(destination.to_path_buf(), content.to_string());
        Ok(())
    }

    fn state_location(&self) -> PathBuf {
        PathBuf::from("memory://pantry_inventory.json")
    }
}
