//! # Pantry CLI
//!
//! The binary is intentionally thin: everything lives in `cli/`, and this file
//! only invokes `cli::run()` and turns an error into a non-zero exit.
//!
//! - `cli/setup.rs`: clap definitions
//! - `cli/commands.rs`: context wiring and one handler per subcommand
//! - `cli/menu.rs`: the interactive numbered menu (`pantry shell`)
//! - `cli/render.rs`: turns `CmdResult` values into terminal text
//!
//! Everything from `api.rs` inward is UI agnostic; the CLI owns all terminal
//! concerns, including logging setup.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
