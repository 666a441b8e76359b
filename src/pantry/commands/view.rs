use crate::commands::{empty_inventory, CmdResult};
use crate::inventory::Inventory;
use crate::views;

/// Every record, in inventory order.
pub fn list(inventory: &Inventory) -> CmdResult {
    if let Some(empty) = empty_inventory(inventory) {
        return empty;
    }
    CmdResult::default().with_listed(inventory.all())
}

/// Fixed-width table rows, header and rule first.
pub fn table(inventory: &Inventory) -> CmdResult {
    if let Some(empty) = empty_inventory(inventory) {
        return empty;
    }
    let snapshot = inventory.all();
    let mut rows: Vec<String> = views::table_header().into();
    rows.extend(views::table(&snapshot));
    CmdResult {
        rows,
        listed: snapshot,
        ..Default::default()
    }
}

pub fn by_category(inventory: &Inventory) -> CmdResult {
    if let Some(empty) = empty_inventory(inventory) {
        return empty;
    }
    CmdResult {
        grouped: views::by_category(&inventory.all()),
        ..Default::default()
    }
}

pub fn sorted(inventory: &Inventory, descending: bool) -> CmdResult {
    if let Some(empty) = empty_inventory(inventory) {
        return empty;
    }
    CmdResult::default().with_listed(views::sort_by_quantity(&inventory.all(), descending))
}
