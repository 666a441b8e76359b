use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::{Category, ItemName};

pub fn run(
    inventory: &mut Inventory,
    name: &str,
    quantity: i64,
    category: Category,
) -> Result<CmdResult> {
    let record = inventory.add(name, quantity, category)?;
    let key = ItemName::parse(name)?;

    let mut result = CmdResult::default().with_listed(vec![(key.clone(), record)]);
    result.add_message(CmdMessage::success(format!(
        "{} added. Total Quantity: {} (Category: {})",
        key, record.quantity, record.category
    )));
    Ok(result)
}
