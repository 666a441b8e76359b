use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2026-01-15" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "pantry", bin_name = "pantry", version = get_version())]
#[command(about = "Community food pantry inventory tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the inventory state (defaults to $PANTRY_HOME, then the OS data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add stock (merges into an existing item)
    #[command(alias = "a")]
    Add {
        /// Item name
        name: String,

        /// Quantity to add
        #[arg(allow_negative_numbers = true)]
        quantity: String,

        /// Category for a new item: canned, fresh, dry-goods (or 1-3)
        category: String,
    },

    /// Remove stock (deletes the item when it runs out)
    #[command(alias = "rm")]
    Remove {
        /// Item name
        name: String,

        /// Quantity to remove
        #[arg(allow_negative_numbers = true)]
        quantity: String,
    },

    /// List every item
    #[command(alias = "ls")]
    List,

    /// Show the inventory as a table
    #[command(alias = "t")]
    Table,

    /// Show the inventory grouped by category
    #[command(alias = "cat")]
    Categories,

    /// Search items by name
    #[command(alias = "s")]
    Search { query: String },

    /// List items by quantity, highest first
    Sorted {
        /// Lowest first instead
        #[arg(long)]
        ascending: bool,
    },

    /// Write a plain-text inventory report
    Export {
        /// Report destination (defaults to the configured report file)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Start the interactive menu
    Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_negative_quantity() {
        let cli = Cli::try_parse_from(["pantry", "add", "rice", "-1", "dry-goods"]).unwrap();
        match cli.command {
            Some(Commands::Add {
                name,
                quantity,
                category,
            }) => {
                assert_eq!(name, "rice");
                assert_eq!(quantity, "-1");
                assert_eq!(category, "dry-goods");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn parses_aliases_and_global_flags() {
        let cli = Cli::try_parse_from(["pantry", "rm", "rice", "2", "--data-dir", "/tmp/p"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Remove { .. })));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/p")));

        let cli = Cli::try_parse_from(["pantry", "-v", "sorted", "--ascending"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Some(Commands::Sorted { ascending: true })
        ));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["pantry"]).unwrap();
        assert!(cli.command.is_none());
    }
}
