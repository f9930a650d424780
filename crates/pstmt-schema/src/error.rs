//! # Load Errors
//!
//! Failures reading problem statements from disk. Validation findings are
//! never reported through this type; see [`crate::violation`].

use thiserror::Error;

/// Error while loading a statement or namespace document.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The document file could not be read or parsed.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoadError {
        /// Path to the document that failed to load.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },

    /// Two documents in a namespace directory map to the same statement name.
    #[error("duplicate problem statement '{name}' in namespace (second definition at '{path}')")]
    DuplicateStatement {
        /// The repeated statement name.
        name: String,
        /// Path of the document that repeated it.
        path: String,
    },

    /// IO error reading a namespace directory.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
