//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — variable sets, check status and report structs.
//! - `constants.rs` — default file names and environment variable keys.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` output.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
