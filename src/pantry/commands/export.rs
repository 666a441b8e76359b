use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::backend::StorageBackend;
use crate::store::PantryStore;
use std::path::Path;

pub fn run<B: StorageBackend>(
    store: &PantryStore<B>,
    inventory: &Inventory,
    destination: &Path,
) -> Result<CmdResult> {
    store.export_report(inventory, destination)?;

    let mut result = CmdResult {
        report_path: Some(destination.to_path_buf()),
        ..Default::default()
    };
    result.add_message(CmdMessage::success(format!(
        "Report exported to {}",
        destination.display()
    )));
    Ok(result)
}
