//! # CLI Layer
//!
//! This module is **one possible UI client** for pantry. It is the only place
//! that parses arguments, prints, reads stdin, or sets up logging.
//!
//! Each one-shot subcommand opens the inventory with autosave on, so a
//! successful `add` or `remove` is on disk before the process exits. The
//! `shell` subcommand turns autosave off and saves once, on exit.

use super::menu::Menu;
use super::render::{render, render_messages};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use pantry::api::PantryApi;
use pantry::commands::{CmdMessage, CmdResult, MessageLevel};
use pantry::config::{PantryConfig, HOME_ENV};
use pantry::error::{PantryError, Result};
use pantry::model::Category;
use pantry::store::fs_backend::FsBackend;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: PantryApi<FsBackend>,
    report_path: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let interactive = matches!(cli.command, Some(Commands::Shell));
    let mut ctx = init_context(cli.data_dir, !interactive)?;

    if !interactive {
        print_load_warnings(&ctx.api.load_messages());
    }

    match cli.command {
        Some(Commands::Add {
            name,
            quantity,
            category,
        }) => handle_add(&mut ctx, &name, &quantity, &category),
        Some(Commands::Remove { name, quantity }) => handle_remove(&mut ctx, &name, &quantity),
        Some(Commands::List) | None => show(ctx.api.list()),
        Some(Commands::Table) => show(ctx.api.table()),
        Some(Commands::Categories) => show(ctx.api.by_category()),
        Some(Commands::Search { query }) => show(ctx.api.search(&query)),
        Some(Commands::Sorted { ascending }) => show(ctx.api.sorted(!ascending)),
        Some(Commands::Export { output }) => handle_export(&ctx, output),
        Some(Commands::Shell) => handle_shell(&mut ctx),
    }
}

/// Diagnostics go to stderr. `RUST_LOG` wins unless `--verbose` is set.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("org", "pantry", "pantry")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn init_context(data_dir: Option<PathBuf>, autosave: bool) -> Result<AppContext> {
    let data_dir = resolve_data_dir(data_dir);
    let config = PantryConfig::load(&data_dir)?;
    let state_path = config.state_path(&data_dir);
    debug!(state = %state_path.display(), "opening inventory");

    let api = PantryApi::open(FsBackend::new(state_path)).with_autosave(autosave);
    Ok(AppContext {
        api,
        report_path: config.report_path().to_path_buf(),
    })
}

/// Parses operator-typed quantities. Sign and range are checked by the core.
pub(super) fn parse_quantity(raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| PantryError::validation("Invalid number. Please enter a valid quantity."))
}

fn handle_add(ctx: &mut AppContext, name: &str, quantity: &str, category: &str) -> Result<()> {
    let quantity = parse_quantity(quantity)?;
    let category: Category = category.parse()?;
    show(ctx.api.add_item(name, quantity, category)?)
}

fn handle_remove(ctx: &mut AppContext, name: &str, quantity: &str) -> Result<()> {
    let quantity = parse_quantity(quantity)?;
    show(ctx.api.remove_item(name, quantity)?)
}

fn handle_export(ctx: &AppContext, output: Option<PathBuf>) -> Result<()> {
    let destination = output.unwrap_or_else(|| ctx.report_path.clone());
    show(ctx.api.export_report(&destination)?)
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(stdin.lock(), stdout.lock()).run(&mut ctx.api, &ctx.report_path)
}

fn show(result: CmdResult) -> Result<()> {
    print!("{}", render(&result));
    Ok(())
}

/// One-shot commands skip the "starting fresh" note; only problems are shown.
fn print_load_warnings(messages: &[CmdMessage]) {
    let warnings: Vec<CmdMessage> = messages
        .iter()
        .filter(|m| !matches!(m.level, MessageLevel::Info))
        .cloned()
        .collect();
    eprint!("{}", render_messages(&warnings));
}
