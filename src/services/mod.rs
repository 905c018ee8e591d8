//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `orchestrator.rs` — the flow itself: directories, prerequisites, run, summary.
//! - `toolchain.rs` — in-process executable lookup on a search path.
//! - `script.rs` — OpenROAD control script template and writer.
//! - `runner.rs` — subprocess launch with combined output logging.
//! - `reports.rs` — report presence checks and summary rendering.
//! - `settings.rs` — optional `config/flow.toml` overrides.
//! - `output.rs` — JSON output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod orchestrator;
pub mod output;
pub mod reports;
pub mod runner;
pub mod script;
pub mod settings;
pub mod toolchain;
