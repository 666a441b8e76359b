//! # Pantry Architecture
//!
//! Pantry is a **UI-agnostic inventory library** with a CLI client on top. The
//! library never prints, prompts, or exits; the binary in `cli/` does all of that.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the menu, renders results         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the loaded Inventory and its PantryStore            │
//! │  - Dispatches to commands, decides when to save             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operator action, returns CmdResult        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (inventory.rs, views.rs, model.rs)                    │
//! │  - Record store with add/remove/merge invariants            │
//! │  - Pure projections: grouped, search, sorted, table         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait: FsBackend, MemBackend              │
//! │  - PantryStore: JSON state, recovery, reports               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Strategy
//!
//! 1. **Core and commands**: unit tests next to the code, storage-free or on
//!    `MemBackend`. Most tests live here.
//! 2. **API**: dispatch and persistence policy, on `MemBackend`.
//! 3. **Storage**: `FsBackend` against a temp directory (`tests/`).
//! 4. **CLI**: the built binary end to end with `assert_cmd` (`tests/`).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operator action
//! - [`inventory`]: The record store
//! - [`views`]: Read-only projections
//! - [`model`]: `ItemName`, `Category`, `Record`
//! - [`store`]: Persistence
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod inventory;
pub mod model;
pub mod store;
pub mod views;
