use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::backend::StorageBackend;
use crate::store::PantryStore;

pub fn run<B: StorageBackend>(store: &PantryStore<B>, inventory: &Inventory) -> Result<CmdResult> {
    store.save(inventory)?;
    Ok(CmdResult::default().with_message(CmdMessage::success("Inventory saved successfully.")))
}
