//! # Record Store
//!
//! [`Inventory`] owns the mapping from [`ItemName`] to [`Record`] and is the only
//! thing allowed to change it. Two invariants hold after every call:
//!
//! - every stored quantity is at least 1 (a record that drops to zero or below
//!   is removed, never kept around empty)
//! - keys are normalized names, so `"apples"` and `" Apples"` are one record
//!
//! Failed operations leave the inventory untouched.

use crate::error::{PantryError, Result};
use crate::model::{Category, ItemName, Record};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Reduced(u64),
    Deleted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    records: BTreeMap<ItemName, Record>,
}

/// Accepts operator quantities of 1 or more.
pub fn positive_quantity(quantity: i64) -> Result<u64> {
    u64::try_from(quantity)
        .ok()
        .filter(|q| *q > 0)
        .ok_or_else(|| PantryError::validation("Quantity must be positive."))
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds stock. An existing item keeps its first-assigned category; the
    /// `category` argument only applies to new items.
    pub fn add(&mut self, name: &str, quantity: i64, category: Category) -> Result<Record> {
        let key = ItemName::parse(name)?;
        let quantity = positive_quantity(quantity)?;

        let record = match self.records.get(&key) {
            Some(existing) => {
                let total = existing.quantity.checked_add(quantity).ok_or_else(|| {
                    PantryError::validation(format!("Quantity for {} is too large.", key))
                })?;
                Record::new(total, existing.category)
            }
            None => Record::new(quantity, category),
        };

        self.records.insert(key, record);
        Ok(record)
    }

    /// Takes stock away. Removing as much or more than is stocked deletes the item.
    pub fn remove(&mut self, name: &str, quantity: i64) -> Result<RemoveOutcome> {
        let key = ItemName::parse(name)?;
        let current = self
            .records
            .get(&key)
            .map(|r| r.quantity)
            .ok_or_else(|| PantryError::NotFound(key.to_string()))?;
        let quantity = positive_quantity(quantity)?;

        if quantity >= current {
            self.records.remove(&key);
            return Ok(RemoveOutcome::Deleted);
        }

        let remaining = current - quantity;
        if let Some(record) = self.records.get_mut(&key) {
            record.quantity = remaining;
        }
        Ok(RemoveOutcome::Reduced(remaining))
    }

    pub fn get(&self, name: &str) -> Option<Record> {
        let key = ItemName::parse(name).ok()?;
        self.records.get(&key).copied()
    }

    /// Snapshot of every record in iteration order.
    pub fn all(&self) -> Vec<(ItemName, Record)> {
        self.records
            .iter()
            .map(|(name, record)| (name.clone(), *record))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn records(&self) -> &BTreeMap<ItemName, Record> {
        &self.records
    }

    /// Builds an inventory from already-validated records. Used by the
    /// persistence layer after it has checked the invariants.
    pub(crate) fn from_records(records: BTreeMap<ItemName, Record>) -> Self {
        Self { records }
    }
}
