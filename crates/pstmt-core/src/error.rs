//! # Error Types
//!
//! Errors raised by the schema model itself. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! Structural problems in a loaded problem statement are *not* errors at
//! this level: the validator reports them as violations. `ModelError` covers
//! the few operations that cannot produce an answer at all, such as asking
//! an ill-formed `Type` which task type it is.

use thiserror::Error;

/// Error returned by schema-model queries and constructors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A `Type` union has zero or several populated variants.
    #[error("malformed task type: expected exactly one populated variant, found {populated}")]
    MalformedType {
        /// Number of populated variants (0 or more than 1).
        populated: usize,
    },

    /// A task-type name did not match any known `TaskType`.
    #[error("unknown task type: {0:?}")]
    UnknownTaskType(String),

    /// A predictions-order name did not match any known `PredictionsOrder`.
    #[error("unknown predictions order: {0:?}")]
    UnknownPredictionsOrder(String),

    /// A problem statement reference does not say which statement it selects.
    #[error("problem statement reference has no selector: expected `name`")]
    MissingReferenceSelector,

    /// A namespace already holds a statement under this name.
    #[error("duplicate problem statement name in namespace: {0:?}")]
    DuplicateStatement(String),
}
