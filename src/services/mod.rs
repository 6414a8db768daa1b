//! Service layer containing the check logic and its side-effect helpers.
//!
//! ## Service map
//! - `parser.rs` — line rule turning env-file text into a variable set.
//! - `checker.rs` — template/actual comparison and report assembly.
//! - `output.rs` — JSON/text report rendering.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Filesystem reads live in `parser.rs`; printing lives in `output.rs`.

pub mod checker;
pub mod output;
pub mod parser;
