//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — run results, summary and report structs.
//! - `constants.rs` — fixed file names, tool names and processor specification.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem or subprocess side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect the `--json` output.

pub mod constants;
pub mod models;
