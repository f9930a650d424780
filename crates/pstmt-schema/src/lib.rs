//! # pstmt-schema — Problem Statement Validation
//!
//! Decides whether a loaded [`ProblemStatement`](pstmt_core::ProblemStatement)
//! is well-formed and reports every structural violation in one pass.
//!
//! ## Validation (`validate`)
//!
//! - [`validate`] — checks one statement, optionally resolving its
//!   `implements` references against a [`NamespaceView`].
//! - [`validate_all`] — checks every statement of a namespace against that
//!   namespace, keyed in namespace order.
//!
//! Validation is lint, not parse: malformed data never produces an `Err`,
//! only entries in a [`ValidationViolations`] list.
//!
//! ## Policy (`policy`)
//!
//! Rules that are business decisions rather than structural invariants,
//! such as "a statement needs at least one task". Off unless a caller opts
//! in through [`Policy`].
//!
//! ## Loading (`load`)
//!
//! Reads statements and namespaces from YAML or JSON files and directories.
//! Load failures are errors ([`LoadError`]); they are the only failures this
//! crate returns.
//!
//! ## Crate Policy
//!
//! - Depends only on `pstmt-core` internally.
//! - Validation is pure: no I/O, no shared state, deterministic output order.

pub mod error;
pub mod load;
pub mod policy;
pub mod validate;
pub mod violation;

pub use error::LoadError;
pub use load::{load_namespace, load_namespace_dir, load_statement};
pub use policy::{apply_namespace_policy, apply_policy, Policy};
pub use validate::{validate, validate_all, NamespaceView};
pub use violation::{ValidationViolations, Violation, ViolationKind};
