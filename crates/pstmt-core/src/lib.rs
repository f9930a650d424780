//! # pstmt-core — Problem Statement Schema Model
//!
//! Plain data types describing a machine-learning problem statement: the
//! prediction tasks a model exposes, how each task's label and weights are
//! read, which loss it trains against, what is monitored, and which
//! meta-optimization targets drive tuning. Problem statements live in a
//! uniquely keyed namespace and may reference one another.
//!
//! ## Key Design Principles
//!
//! 1. **Ill-formed unions are representable.** `Type` keeps one optional slot
//!    per task-type variant, exactly as a loaded document presents it.
//!    [`Type::active_task_type`] turns the "exactly one variant" rule into an
//!    explicit, testable check instead of a convention.
//!
//! 2. **Presence is distinct from value.** `task_weight`, `n_classes`,
//!    `n_predicted_labels` and target `weight` are `Option`s. Absence never
//!    collapses to zero; defaults are applied only by the `*_or_default()`
//!    accessors.
//!
//! 3. **String-keyed cross references.** Meta-optimization targets name tasks
//!    and `implements` entries name sibling statements. Resolution happens
//!    after loading, against a caller-supplied context, never through live
//!    pointers.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `pstmt-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod error;
pub mod meta;
pub mod namespace;
pub mod objective;
pub mod reference;
pub mod statement;
pub mod task;
pub mod task_type;

// Re-export primary types for ergonomic imports.
pub use error::ModelError;
pub use meta::{MetaOptimizationTarget, DEFAULT_TARGET_WEIGHT};
pub use namespace::ProblemStatementNamespace;
pub use objective::{ObjectiveFunction, PerformanceMetric};
pub use reference::{ProblemStatementReference, ReferenceSelector};
pub use statement::ProblemStatement;
pub use task::{
    active_task_type, BinaryClassification, MultiClassClassification, OneDimensionalRegression,
    Task, TopKClassification, Type, TypeVariant, DEFAULT_PREDICTED_LABELS,
};
pub use task_type::{PredictionsOrder, TaskType};
