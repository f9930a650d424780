//! # Caller-Level Policy
//!
//! Rules a deployment may want enforced that are not structural invariants
//! of a problem statement. Each rule is off by default; `validate` never
//! applies them.

use serde::{Deserialize, Serialize};

use pstmt_core::{ProblemStatement, ProblemStatementNamespace};

use crate::violation::{ValidationViolations, Violation, ViolationKind};

/// Opt-in rules applied on top of structural validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Policy {
    /// Every statement must declare at least one task.
    pub require_tasks: bool,
    /// A namespace must hold at least one statement.
    pub require_statements: bool,
    /// Known environments. When non-empty, a statement's `environment`
    /// (if set) must be one of these.
    pub environments: Vec<String>,
}

impl Policy {
    /// Whether any rule is switched on.
    pub fn is_active(&self) -> bool {
        self.require_tasks || self.require_statements || !self.environments.is_empty()
    }
}

/// Apply statement-level rules of `policy` to `statement`.
pub fn apply_policy(statement: &ProblemStatement, policy: &Policy) -> ValidationViolations {
    let mut out = Vec::new();

    if policy.require_tasks && statement.tasks.is_empty() {
        out.push(Violation::new(
            ViolationKind::EmptyTaskList,
            "tasks",
            "problem statement declares no tasks",
        ));
    }

    if !policy.environments.is_empty() {
        if let Some(environment) = &statement.environment {
            if !policy.environments.iter().any(|known| known == environment) {
                out.push(Violation::new(
                    ViolationKind::UnknownEnvironment,
                    "environment",
                    format!(
                        "environment {environment:?} is not one of: {}",
                        policy.environments.join(", ")
                    ),
                ));
            }
        }
    }

    ValidationViolations::new(out)
}

/// Apply namespace-level rules of `policy` to `namespace`.
pub fn apply_namespace_policy(
    namespace: &ProblemStatementNamespace,
    policy: &Policy,
) -> ValidationViolations {
    let mut out = Vec::new();
    if policy.require_statements && namespace.is_empty() {
        out.push(Violation::new(
            ViolationKind::EmptyNamespace,
            "problem_statements",
            "namespace holds no problem statements",
        ));
    }
    ValidationViolations::new(out)
}
