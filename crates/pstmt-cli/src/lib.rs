//! # pstmt-cli — Problem Statement Command-Line Interface
//!
//! A clap-based front end over `pstmt-schema`. It loads documents, runs
//! validation and the configured policy, and renders the findings.
//!
//! ## Subcommands
//!
//! - `validate` — One statement (optionally resolved against a namespace),
//!   or every statement of a namespace.
//! - `inspect` — Task types, weights and target resolution of one statement.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `pstmt-schema`; no validation rules here.
//! - Exit codes: 0 valid, 1 violations found, 2 operational error.

use std::path::{Path, PathBuf};

pub mod config;
pub mod inspect;
pub mod validate;

/// Resolve a user-supplied path against the working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
