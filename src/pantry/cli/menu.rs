//! The interactive numbered menu. Reads one choice per line, prompts for the
//! fields each action needs, and keeps going after any recoverable error.
//! Choice 9 saves and exits; if the save fails the menu comes back so the
//! operator can retry. End of input saves once and gives up on failure.

use super::commands::parse_quantity;
use super::render::{render, render_messages};
use pantry::api::PantryApi;
use pantry::commands::{CmdMessage, CmdResult};
use pantry::error::{PantryError, Result};
use pantry::inventory::positive_quantity;
use pantry::model::{Category, ItemName};
use pantry::store::backend::StorageBackend;
use std::io::{BufRead, Write};
use std::path::Path;

const MENU: &str = "
--- Community Food Pantry Inventory Tracker ---
1. Add Item
2. Remove Item
3. View Inventory (Simple List)
4. View Inventory (Table Format)
5. View Inventory by Category
6. Search for an Item
7. View Sorted by Quantity (Highest First)
8. Export Inventory Report
9. Exit
";

pub(super) struct Menu<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub(super) fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub(super) fn run<B: StorageBackend>(
        &mut self,
        api: &mut PantryApi<B>,
        report_path: &Path,
    ) -> Result<()> {
        writeln!(
            self.out,
            "Welcome to the Community Food Pantry Inventory Tracker!"
        )?;
        self.emit(&render_messages(&api.load_messages()))?;

        loop {
            write!(self.out, "{}", MENU)?;
            let Some(choice) = self.prompt("Enter your choice (1-9): ")? else {
                return self.save_and_exit(api);
            };

            let outcome = match choice.trim() {
                "1" => self.add(api),
                "2" => self.remove(api),
                "3" => Ok(Some(api.list())),
                "4" => Ok(Some(api.table())),
                "5" => Ok(Some(api.by_category())),
                "6" => self.search(api),
                "7" => Ok(Some(api.sorted(true))),
                "8" => api.export_report(report_path).map(Some),
                "9" => match self.save_and_exit(api) {
                    Ok(()) => return Ok(()),
                    Err(e) => Ok(Some(CmdResult::default().with_message(CmdMessage::error(
                        format!("{} Choose 9 to try again.", e),
                    )))),
                },
                _ => Ok(Some(CmdResult::default().with_message(CmdMessage::error(
                    "Invalid selection. Please choose 1-9.",
                )))),
            };

            match outcome {
                Ok(Some(result)) => self.emit(&render(&result))?,
                // Input ran out mid-prompt.
                Ok(None) => return self.save_and_exit(api),
                Err(e) => self.emit(&render_messages(&[CmdMessage::error(e.to_string())]))?,
            }
        }
    }

    fn save_and_exit<B: StorageBackend>(&mut self, api: &PantryApi<B>) -> Result<()> {
        writeln!(self.out, "Saving data...")?;
        let saved = api.save()?;
        self.emit(&render(&saved))?;
        writeln!(
            self.out,
            "Thank you for using the Food Pantry Tracker. Goodbye!"
        )?;
        Ok(())
    }

    fn add<B: StorageBackend>(&mut self, api: &mut PantryApi<B>) -> Result<Option<CmdResult>> {
        let Some(name) = self.prompt("Enter item name: ")? else {
            return Ok(None);
        };
        ItemName::parse(&name)?;
        let Some(quantity) = self.prompt("Enter quantity to add: ")? else {
            return Ok(None);
        };
        let quantity = parse_quantity(&quantity)?;
        positive_quantity(quantity)?;

        writeln!(self.out, "\nCategories:")?;
        for category in Category::ALL {
            writeln!(self.out, "{}. {}", category.ordinal(), category)?;
        }
        let Some(choice) = self.prompt("Choose a category (number): ")? else {
            return Ok(None);
        };
        let ordinal: usize = choice
            .trim()
            .parse()
            .map_err(|_| PantryError::validation("Invalid input. Must be a number."))?;
        let category = Category::from_ordinal(ordinal)?;

        api.add_item(&name, quantity, category).map(Some)
    }

    fn remove<B: StorageBackend>(&mut self, api: &mut PantryApi<B>) -> Result<Option<CmdResult>> {
        let Some(name) = self.prompt("Enter item name to remove: ")? else {
            return Ok(None);
        };
        // Report a missing item before asking how many to take away.
        if api.inventory().get(&name).is_none() {
            return Ok(Some(CmdResult::default().with_message(CmdMessage::error(
                "Item not found in inventory.",
            ))));
        }
        let Some(quantity) = self.prompt("Enter quantity to remove: ")? else {
            return Ok(None);
        };
        let quantity = parse_quantity(&quantity)?;

        api.remove_item(&name, quantity).map(Some)
    }

    fn search<B: StorageBackend>(&mut self, api: &PantryApi<B>) -> Result<Option<CmdResult>> {
        let Some(query) = self.prompt("Enter item name to search: ")? else {
            return Ok(None);
        };
        Ok(Some(api.search(&query)))
    }

    /// Writes `label` and reads one line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry::store::mem_backend::MemBackend;
    use std::io::Cursor;

    fn session(api: &mut PantryApi<MemBackend>, script: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        Menu::new(Cursor::new(script.to_string()), &mut out)
            .run(api, Path::new("report.txt"))
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_merge_and_remove_session() {
        let mut api = PantryApi::open(MemBackend::new());
        let out = session(
            &mut api,
            "1\napples\n10\n2\n1\nApples \n5\n1\n2\napples\n15\n3\n9\n",
        );

        assert!(out.contains("No saved inventory found. Starting fresh."));
        assert!(out.contains("Apples added. Total Quantity: 10 (Category: Fresh)"));
        assert!(out.contains("Apples added. Total Quantity: 15 (Category: Fresh)"));
        assert!(out.contains("Apples has been removed completely from inventory."));
        assert!(out.contains("Inventory is empty."));
        assert!(out.contains("Inventory saved successfully."));
        assert!(api.store().load().inventory.is_empty());
    }

    #[test]
    fn bad_input_is_reported_and_the_loop_continues() {
        let mut api = PantryApi::open(MemBackend::new());
        let out = session(
            &mut api,
            "1\n \n1\nrice\nlots\n1\nrice\n0\n1\nrice\n2\n7\n2\nbread\n42\n9\n",
        );

        assert!(out.contains("Item name cannot be empty."));
        assert!(out.contains("Invalid number. Please enter a valid quantity."));
        assert!(out.contains("Quantity must be positive."));
        assert!(out.contains("Invalid category selected: 7"));
        assert!(out.contains("Item not found in inventory."));
        assert!(out.contains("Invalid selection. Please choose 1-9."));
        assert!(api.inventory().is_empty());
        // Bad names and quantities are caught before the category prompt.
        assert_eq!(out.matches("Choose a category").count(), 1);
        assert_eq!(out.matches("Enter quantity to add").count(), 3);
    }

    #[test]
    fn failed_save_on_exit_returns_to_the_menu() {
        colored::control::set_override(false);
        let mut api = PantryApi::open(MemBackend::new());
        api.store().backend().set_simulate_write_error(true);

        let mut out = Vec::new();
        let result = Menu::new(Cursor::new("1\nbeans\n3\n1\n9\n3\n".to_string()), &mut out)
            .run(&mut api, Path::new("report.txt"));
        let out = String::from_utf8(out).unwrap();

        // Option 9 failed, the listing still ran, then end of input gave up.
        assert!(out.contains("Choose 9 to try again."));
        assert!(out.contains("Beans - Quantity: 3 | Category: Canned"));
        assert!(!out.contains("Goodbye!"));
        assert!(matches!(result, Err(PantryError::Io(_))));
        assert_eq!(api.inventory().get("Beans").unwrap().quantity, 3);

        api.store().backend().set_simulate_write_error(false);
        let out = session(&mut api, "9\n");
        assert!(out.contains("Inventory saved successfully."));
        assert!(out.ends_with("Goodbye!\n"));
        assert_eq!(
            api.store().load().inventory.get("Beans").unwrap().quantity,
            3
        );
    }

    #[test]
    fn end_of_input_saves_and_exits() {
        let mut api = PantryApi::open(MemBackend::new());
        let out = session(&mut api, "1\nbeans\n3\n1\n");
        assert!(out.ends_with("Goodbye!\n"));
        assert_eq!(
            api.store().load().inventory.get("Beans").unwrap().quantity,
            3
        );
    }

    #[test]
    fn views_and_export_render() {
        let mut api = PantryApi::open(MemBackend::new());
        let out = session(&mut api, "1\nbeans\n3\n1\n4\n5\n6\nbea\n7\n8\n9\n");

        assert!(out.contains("Item"));
        assert!(out.contains("[Dry Goods]\n  (No items)"));
        assert!(out.contains("Beans - Quantity: 3 | Category: Canned"));
        assert!(out.contains("Report exported to report.txt"));
        assert!(api
            .store()
            .backend()
            .report(Path::new("report.txt"))
            .is_some());
    }
}
