//! Compares the variable names declared in an env template (`.env.example`)
//! against an actual env file (`.env`) and reports the names that are missing.
//!
//! ## Layers
//! - `domain` — data-only models and constants.
//! - `services` — parsing, checking and report rendering.
//! - `cli` — argument parsing used by the `env-sanity-check` binary.
//!
//! The binary only translates the check result into an exit code; everything
//! else is usable from here.

pub mod cli;
pub mod domain;
pub mod services;

pub use domain::models::{CheckStatus, SanityReport, VarSet};
pub use services::checker::{
    check_sanity, missing_vars, report_sanity, EnvSanityChecker, SanityError,
};
pub use services::parser::{parse_line, parse_var_names};
