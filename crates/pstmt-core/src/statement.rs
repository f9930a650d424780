//! # Problem Statements
//!
//! The complete description of what a model predicts and how success is
//! measured. A statement owns its tasks, meta-optimization targets and
//! outgoing references by value.

use serde::{Deserialize, Serialize};

use crate::meta::MetaOptimizationTarget;
use crate::reference::ProblemStatementReference;
use crate::task::Task;

/// A named bundle of prediction tasks and the targets used to tune them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemStatement {
    #[serde(default)]
    pub description: String,
    /// Owning users or teams.
    #[serde(default)]
    pub owner: Vec<String>,
    /// Environment the statement runs in. Should name an environment
    /// declared by the deployment's environment registry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    /// Sibling statements this one implements.
    #[serde(default)]
    pub implements: Vec<ProblemStatementReference>,
    #[serde(default)]
    pub meta_optimization_target: Vec<MetaOptimizationTarget>,
    /// Optimize targets as separate objectives instead of a weighted sum.
    #[serde(default)]
    pub multi_objective: bool,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl ProblemStatement {
    /// Empty statement with the given description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// Add an owner.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner.push(owner.into());
        self
    }

    /// Set the environment.
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Append an `implements` reference.
    pub fn with_implements(mut self, reference: ProblemStatementReference) -> Self {
        self.implements.push(reference);
        self
    }

    /// Append a meta-optimization target.
    pub fn with_target(mut self, target: MetaOptimizationTarget) -> Self {
        self.meta_optimization_target.push(target);
        self
    }

    /// Set multi-objective mode.
    pub fn with_multi_objective(mut self, multi_objective: bool) -> Self {
        self.multi_objective = multi_objective;
        self
    }

    /// Append a task.
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// First task named `name`.
    pub fn task(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name == name)
    }

    /// Index of the first task named `name`.
    pub fn task_index(&self, name: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.name == name)
    }

    /// Task names in declaration order, duplicates included.
    pub fn task_names(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(|t| t.name.as_str())
    }
}
