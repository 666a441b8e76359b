//! # Projection Views
//!
//! Read-only views computed from an [`Inventory::all`](crate::inventory::Inventory::all)
//! snapshot. Nothing here can touch the inventory itself: every function takes
//! a borrowed slice and returns fresh data.

use crate::model::{normalize_name, Category, ItemName, Record};

pub type Snapshot = [(ItemName, Record)];

const NAME_WIDTH: usize = 20;
const QTY_WIDTH: usize = 10;
const RULE_WIDTH: usize = 45;

/// Groups items by their stored category. Every category appears, in
/// [`Category::ALL`] order, even when it has no items.
pub fn by_category(snapshot: &Snapshot) -> Vec<(Category, Vec<(ItemName, u64)>)> {
    Category::ALL
        .iter()
        .map(|cat| {
            let items = snapshot
                .iter()
                .filter(|(_, record)| record.category == *cat)
                .map(|(name, record)| (name.clone(), record.quantity))
                .collect();
            (*cat, items)
        })
        .collect()
}

/// Items whose name contains `query`. The query goes through the same
/// normalization as item names and is compared case-insensitively.
pub fn search(snapshot: &Snapshot, query: &str) -> Vec<(ItemName, Record)> {
    let needle = normalize_name(query).to_lowercase();
    snapshot
        .iter()
        .filter(|(name, _)| name.as_str().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Stable sort on quantity. Equal quantities keep their snapshot order in
/// either direction.
pub fn sort_by_quantity(snapshot: &Snapshot, descending: bool) -> Vec<(ItemName, Record)> {
    let mut sorted = snapshot.to_vec();
    if descending {
        sorted.sort_by(|(_, a), (_, b)| b.quantity.cmp(&a.quantity));
    } else {
        sorted.sort_by(|(_, a), (_, b)| a.quantity.cmp(&b.quantity));
    }
    sorted
}

/// Header row and rule for [`table`].
pub fn table_header() -> [String; 2] {
    [
        format!(
            "{:<name_w$} {:<qty_w$} {}",
            "Item",
            "Qty",
            "Category",
            name_w = NAME_WIDTH,
            qty_w = QTY_WIDTH
        ),
        "-".repeat(RULE_WIDTH),
    ]
}

/// One fixed-width row per record.
pub fn table(snapshot: &Snapshot) -> Vec<String> {
    snapshot
        .iter()
        .map(|(name, record)| {
            format!(
                "{:<name_w$} {:<qty_w$} {}",
                name.as_str(),
                record.quantity,
                record.category,
                name_w = NAME_WIDTH,
                qty_w = QTY_WIDTH
            )
        })
        .collect()
}

pub fn plain_listing(snapshot: &Snapshot) -> Vec<String> {
    snapshot
        .iter()
        .map(|(name, record)| {
            format!(
                "{} - Quantity: {} | Category: {}",
                name, record.quantity, record.category
            )
        })
        .collect()
}
