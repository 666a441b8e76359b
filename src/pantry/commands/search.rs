use crate::commands::{CmdMessage, CmdResult};
use crate::inventory::Inventory;
use crate::views;

pub const NO_MATCHES: &str = "No matching items found.";

pub fn run(inventory: &Inventory, query: &str) -> CmdResult {
    let matches = views::search(&inventory.all(), query);
    if matches.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info(NO_MATCHES));
    }
    CmdResult::default().with_listed(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn finds_substring_matches() {
        let mut inv = Inventory::new();
        inv.add("canned corn", 2, Category::Canned).unwrap();
        inv.add("corn flakes", 1, Category::DryGoods).unwrap();
        inv.add("milk", 1, Category::Fresh).unwrap();

        let result = run(&inv, "CORN");
        let names: Vec<&str> = result.listed.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Canned Corn", "Corn Flakes"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn no_match_is_not_an_error() {
        let mut inv = Inventory::new();
        inv.add("milk", 1, Category::Fresh).unwrap();
        let result = run(&inv, "bread");
        assert!(result.listed.is_empty());
        assert_eq!(result.messages[0].content, NO_MATCHES);
    }
}
