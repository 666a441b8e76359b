use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::{Inventory, RemoveOutcome};
use crate::model::ItemName;

pub fn run(inventory: &mut Inventory, name: &str, quantity: i64) -> Result<CmdResult> {
    let outcome = inventory.remove(name, quantity)?;
    let key = ItemName::parse(name)?;

    let mut result = CmdResult::default();
    match outcome {
        RemoveOutcome::Deleted => result.add_message(CmdMessage::success(format!(
            "{} has been removed completely from inventory.",
            key
        ))),
        RemoveOutcome::Reduced(left) => {
            if let Some(record) = inventory.get(key.as_str()) {
                result.listed.push((key.clone(), record));
            }
            result.add_message(CmdMessage::success(format!("{} now has {} left.", key, left)))
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PantryError;
    use crate::model::Category;

    fn stocked() -> Inventory {
        let mut inv = Inventory::new();
        inv.add("Peaches", 8, Category::Canned).unwrap();
        inv
    }

    #[test]
    fn partial_removal_lists_remaining() {
        let mut inv = stocked();
        let result = run(&mut inv, "peaches", 3).unwrap();
        assert_eq!(result.listed[0].1.quantity, 5);
        assert_eq!(result.messages[0].content, "Peaches now has 5 left.");
    }

    #[test]
    fn full_removal_reports_deletion() {
        let mut inv = stocked();
        let result = run(&mut inv, "Peaches", 50).unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(
            result.messages[0].content,
            "Peaches has been removed completely from inventory."
        );
        assert!(inv.is_empty());
    }

    #[test]
    fn missing_item_is_not_found() {
        let mut inv = stocked();
        assert!(matches!(
            run(&mut inv, "Pears", 1),
            Err(PantryError::NotFound(_))
        ));
        assert_eq!(inv.get("Peaches").unwrap().quantity, 8);
    }
}
