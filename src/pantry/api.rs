//! # API Facade
//!
//! [`PantryApi`] is the single entry point for every UI. It owns the loaded
//! [`Inventory`] and the [`PantryStore`] it came from, dispatches to the command
//! modules, and decides when to persist.
//!
//! ## Persistence Policy
//!
//! State is loaded once, in [`PantryApi::open`]. After that:
//!
//! - with `autosave` on (one-shot CLI commands) every successful add/remove is
//!   saved immediately; a failed save is returned as an error while the
//!   in-memory inventory keeps the change
//! - with `autosave` off (interactive shell) nothing touches disk until
//!   [`PantryApi::save`]
//!
//! Views and search never write.
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `PantryApi<FsBackend>`
//! - Testing: `PantryApi<MemBackend>`

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::Category;
use crate::store::backend::StorageBackend;
use crate::store::{LoadStatus, PantryStore};
use std::path::Path;

pub struct PantryApi<B: StorageBackend> {
    store: PantryStore<B>,
    inventory: Inventory,
    load_status: LoadStatus,
    autosave: bool,
}

impl<B: StorageBackend> PantryApi<B> {
    /// Loads the saved inventory. Never fails: unreadable state comes back as
    /// an empty inventory, reported through [`PantryApi::load_messages`].
    pub fn open(backend: B) -> Self {
        let store = PantryStore::new(backend);
        let loaded = store.load();
        Self {
            store,
            inventory: loaded.inventory,
            load_status: loaded.status,
            autosave: false,
        }
    }

    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    pub fn store(&self) -> &PantryStore<B> {
        &self.store
    }

    /// What the operator should be told about startup.
    pub fn load_messages(&self) -> Vec<CmdMessage> {
        match &self.load_status {
            LoadStatus::Fresh => vec![CmdMessage::info(
                "No saved inventory found. Starting fresh.",
            )],
            LoadStatus::Restored => vec![CmdMessage::info("Inventory loaded successfully.")],
            LoadStatus::Recovered(corrupt) => vec![CmdMessage::warning(corrupt.to_string())],
        }
    }

    pub fn add_item(&mut self, name: &str, quantity: i64, category: Category) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.inventory, name, quantity, category)?;
        self.persist()?;
        Ok(result)
    }

    pub fn remove_item(&mut self, name: &str, quantity: i64) -> Result<CmdResult> {
        let result = commands::remove::run(&mut self.inventory, name, quantity)?;
        self.persist()?;
        Ok(result)
    }

    pub fn list(&self) -> CmdResult {
        commands::view::list(&self.inventory)
    }

    pub fn table(&self) -> CmdResult {
        commands::view::table(&self.inventory)
    }

    pub fn by_category(&self) -> CmdResult {
        commands::view::by_category(&self.inventory)
    }

    pub fn sorted(&self, descending: bool) -> CmdResult {
        commands::view::sorted(&self.inventory, descending)
    }

    pub fn search(&self, query: &str) -> CmdResult {
        commands::search::run(&self.inventory, query)
    }

    pub fn export_report(&self, destination: &Path) -> Result<CmdResult> {
        commands::export::run(&self.store, &self.inventory, destination)
    }

    pub fn save(&self) -> Result<CmdResult> {
        commands::save::run(&self.store, &self.inventory)
    }

    fn persist(&self) -> Result<()> {
        if self.autosave {
            self.store.save(&self.inventory)?;
        }
        Ok(())
    }
}
