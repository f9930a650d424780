//! # Meta-Optimization Targets
//!
//! A meta-optimization target is an externally tracked objective, such as
//! the score a hyperparameter tuner maximizes. It is distinct from the
//! differentiable training objective of a task.
//!
//! When the owning statement is `multi_objective`, targets are optimized as
//! separate objectives and their `weight` is informational only. Consumers
//! must go through [`MetaOptimizationTarget::effective_weight`], which
//! refuses to hand out a combinable weight in that mode.

use serde::{Deserialize, Serialize};

use crate::objective::PerformanceMetric;
use crate::statement::ProblemStatement;
use crate::task::Type;

/// Target weight used when none is given.
pub const DEFAULT_TARGET_WEIGHT: f64 = 1.0;

/// One objective of the meta-optimization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetaOptimizationTarget {
    /// Name of the task this target measures. Must name a task of the
    /// same statement.
    #[serde(default)]
    pub task_name: String,
    /// Overrides the referenced task's type when set.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<Type>,
    /// The metric being optimized.
    #[serde(default)]
    pub performance_metric: PerformanceMetric,
    /// Weight in a weighted-sum combination of targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl MetaOptimizationTarget {
    /// Target on task `task_name` measured by `metric`, default weight.
    pub fn new(task_name: impl Into<String>, metric: PerformanceMetric) -> Self {
        Self {
            task_name: task_name.into(),
            ty: None,
            performance_metric: metric,
            weight: None,
        }
    }

    /// Override the referenced task's type.
    pub fn with_type(mut self, ty: impl Into<Type>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Set the weighted-sum weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Whether `weight` was set explicitly.
    pub fn has_weight(&self) -> bool {
        self.weight.is_some()
    }

    /// Weight with the default applied.
    pub fn weight_or_default(&self) -> f64 {
        self.weight.unwrap_or(DEFAULT_TARGET_WEIGHT)
    }

    /// Weight to use when combining targets by weighted sum.
    ///
    /// Returns `None` for a multi-objective statement: there the weights
    /// are not combined.
    pub fn effective_weight(&self, multi_objective: bool) -> Option<f64> {
        if multi_objective {
            None
        } else {
            Some(self.weight_or_default())
        }
    }

    /// The override type, or the type of the referenced task.
    ///
    /// Returns `None` when there is no override and `task_name` does not
    /// resolve in `statement`.
    pub fn effective_type<'a>(&'a self, statement: &'a ProblemStatement) -> Option<&'a Type> {
        self.ty
            .as_ref()
            .or_else(|| statement.task(&self.task_name).map(|task| &task.ty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{BinaryClassification, OneDimensionalRegression, Task};
    use crate::task_type::TaskType;

    fn statement() -> ProblemStatement {
        ProblemStatement::new("ads").with_task(Task::new(
            "ctr",
            BinaryClassification::new("clicked"),
        ))
    }

    #[test]
    fn test_weight_default_is_one() {
        let target = MetaOptimizationTarget::new("ctr", PerformanceMetric::default());
        assert!(!target.has_weight());
        assert_eq!(target.weight_or_default(), DEFAULT_TARGET_WEIGHT);
        assert_eq!(target.effective_weight(false), Some(1.0));
    }

    #[test]
    fn test_multi_objective_withholds_weight() {
        let target =
            MetaOptimizationTarget::new("ctr", PerformanceMetric::default()).with_weight(0.3);
        assert_eq!(target.effective_weight(false), Some(0.3));
        assert_eq!(target.effective_weight(true), None);
    }

    #[test]
    fn test_effective_type_falls_back_to_task() {
        let stmt = statement();
        let target = MetaOptimizationTarget::new("ctr", PerformanceMetric::default());
        let ty = target.effective_type(&stmt).unwrap();
        assert_eq!(ty.active_task_type().unwrap(), TaskType::BinaryClassification);
    }

    #[test]
    fn test_effective_type_prefers_override() {
        let stmt = statement();
        let target = MetaOptimizationTarget::new("ctr", PerformanceMetric::default())
            .with_type(OneDimensionalRegression::new("clicked"));
        let ty = target.effective_type(&stmt).unwrap();
        assert_eq!(
            ty.active_task_type().unwrap(),
            TaskType::OneDimensionalRegression
        );
    }

    #[test]
    fn test_effective_type_unresolved() {
        let stmt = statement();
        let target = MetaOptimizationTarget::new("ghost", PerformanceMetric::default());
        assert!(target.effective_type(&stmt).is_none());
    }
}
