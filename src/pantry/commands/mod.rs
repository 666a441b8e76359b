//! # Command Layer
//!
//! One module per operator action. Commands take the [`Inventory`] (and the
//! [`PantryStore`](crate::store::PantryStore) when they touch disk), call into
//! the record store or the projection views, and return a [`CmdResult`].
//!
//! Commands never print, prompt, or exit. The UI decides how to show the
//! records and messages they hand back.
//!
//! Command tests use [`MemBackend`](crate::store::mem_backend::MemBackend)
//! wherever storage is involved.
//!
//! - [`add`]: add stock, merging into existing items
//! - [`remove`]: take stock away, deleting empty items
//! - [`view`]: simple list, table, grouped and sorted views
//! - [`search`]: substring search over item names
//! - [`export`]: plain-text report
//! - [`save`]: explicit save

use crate::inventory::Inventory;
use crate::model::{Category, ItemName, Record};
use serde::Serialize;
use std::path::PathBuf;

pub mod add;
pub mod export;
pub mod remove;
pub mod save;
pub mod search;
pub mod view;

pub const EMPTY_INVENTORY: &str = "Inventory is empty.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records to display, already in display order.
    pub listed: Vec<(ItemName, Record)>,
    /// Category groups, populated by the grouped view only.
    pub grouped: Vec<(Category, Vec<(ItemName, u64)>)>,
    /// Preformatted rows (table view), header first.
    pub rows: Vec<String>,
    pub report_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, listed: Vec<(ItemName, Record)>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

/// Shared guard for the read-only views: an empty inventory yields a single
/// info message instead of an empty listing.
pub(crate) fn empty_inventory(inventory: &Inventory) -> Option<CmdResult> {
    inventory
        .is_empty()
        .then(|| CmdResult::default().with_message(CmdMessage::info(EMPTY_INVENTORY)))
}
