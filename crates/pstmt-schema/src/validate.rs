//! # Problem Statement Validation
//!
//! Structural checks over one problem statement, run in a fixed order and
//! collected rather than short-circuited:
//!
//! 1. Every task `type` and every target `type` override holds exactly one
//!    variant.
//! 2. Task names are unique; each repeat after the first is reported.
//! 3. Either every task sets `task_weight` or none does. Partial weighting
//!    is reported once, against the whole task list.
//! 4. Every meta-optimization target names an existing task.
//! 5. With a namespace, every `implements` name is a key of it.
//!
//! `multi_objective` is not checked here. It only changes how consumers
//! read target weights; see
//! [`MetaOptimizationTarget::effective_weight`](pstmt_core::MetaOptimizationTarget::effective_weight).
//!
//! An empty task list passes: requiring tasks is a [`Policy`](crate::Policy)
//! decision.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::BuildHasher;

use pstmt_core::{ProblemStatement, ProblemStatementNamespace};

use crate::violation::{ValidationViolations, Violation, ViolationKind};

/// Lookup of statement names used to resolve `implements` references.
pub trait NamespaceView: Send + Sync {
    /// Whether a statement is keyed `name`.
    fn contains_statement(&self, name: &str) -> bool;
}

impl NamespaceView for ProblemStatementNamespace {
    fn contains_statement(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl NamespaceView for BTreeSet<String> {
    fn contains_statement(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl<S: BuildHasher + Send + Sync> NamespaceView for HashSet<String, S> {
    fn contains_statement(&self, name: &str) -> bool {
        self.contains(name)
    }
}

/// Validate one problem statement.
///
/// `namespace` is needed only to resolve `implements` references; without
/// it that check is skipped. The result lists every violation found, in
/// check order, and is identical across calls on the same inputs.
pub fn validate(
    statement: &ProblemStatement,
    namespace: Option<&dyn NamespaceView>,
) -> ValidationViolations {
    let mut out = Vec::new();

    check_types(statement, &mut out);
    let task_names = check_task_names(statement, &mut out);
    check_task_weights(statement, &mut out);
    check_targets(statement, &task_names, &mut out);
    if let Some(namespace) = namespace {
        check_references(statement, namespace, &mut out);
    }

    tracing::debug!(
        tasks = statement.tasks.len(),
        targets = statement.meta_optimization_target.len(),
        violations = out.len(),
        "validated problem statement"
    );

    ValidationViolations::new(out)
}

/// Validate every statement of `namespace` against that namespace.
///
/// Keys follow namespace order; valid statements map to an empty list.
pub fn validate_all(
    namespace: &ProblemStatementNamespace,
) -> BTreeMap<String, ValidationViolations> {
    let report: BTreeMap<String, ValidationViolations> = namespace
        .iter()
        .map(|(name, statement)| {
            let _span = tracing::debug_span!("statement", name).entered();
            let violations = validate(statement, Some(namespace as &dyn NamespaceView));
            (name.to_string(), violations)
        })
        .collect();

    let failing = report.values().filter(|v| !v.is_empty()).count();
    tracing::info!(
        statements = report.len(),
        failing,
        "validated namespace"
    );

    report
}

fn check_types(statement: &ProblemStatement, out: &mut Vec<Violation>) {
    for (i, task) in statement.tasks.iter().enumerate() {
        if let Err(e) = task.ty.active_task_type() {
            out.push(Violation::new(
                ViolationKind::MalformedType,
                format!("tasks[{i}].type"),
                format!("task {:?}: {e}", task.name),
            ));
        }
    }
    for (i, target) in statement.meta_optimization_target.iter().enumerate() {
        if let Some(ty) = &target.ty {
            if let Err(e) = ty.active_task_type() {
                out.push(Violation::new(
                    ViolationKind::MalformedType,
                    format!("meta_optimization_target[{i}].type"),
                    format!("type override for task {:?}: {e}", target.task_name),
                ));
            }
        }
    }
}

/// Reports repeated task names and returns the set of names seen.
fn check_task_names<'a>(
    statement: &'a ProblemStatement,
    out: &mut Vec<Violation>,
) -> HashSet<&'a str> {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    for (i, task) in statement.tasks.iter().enumerate() {
        match first_seen.get(task.name.as_str()) {
            Some(first) => out.push(Violation::new(
                ViolationKind::DuplicateTaskName,
                format!("tasks[{i}].name"),
                format!("task name {:?} already used by tasks[{first}]", task.name),
            )),
            None => {
                first_seen.insert(task.name.as_str(), i);
            }
        }
    }
    first_seen.into_keys().collect()
}

fn check_task_weights(statement: &ProblemStatement, out: &mut Vec<Violation>) {
    let weighted: Vec<&str> = statement
        .tasks
        .iter()
        .filter(|t| t.has_task_weight())
        .map(|t| t.name.as_str())
        .collect();

    if weighted.is_empty() || weighted.len() == statement.tasks.len() {
        return;
    }

    let unweighted: Vec<&str> = statement
        .tasks
        .iter()
        .filter(|t| !t.has_task_weight())
        .map(|t| t.name.as_str())
        .collect();

    out.push(Violation::new(
        ViolationKind::InconsistentTaskWeights,
        "tasks",
        format!(
            "task_weight is set on {} of {} tasks; set it on every task or on none \
             (weighted: {}; unweighted: {})",
            weighted.len(),
            statement.tasks.len(),
            weighted.join(", "),
            unweighted.join(", "),
        ),
    ));
}

fn check_targets(
    statement: &ProblemStatement,
    task_names: &HashSet<&str>,
    out: &mut Vec<Violation>,
) {
    for (i, target) in statement.meta_optimization_target.iter().enumerate() {
        if !task_names.contains(target.task_name.as_str()) {
            out.push(Violation::new(
                ViolationKind::UnresolvedTaskReference,
                format!("meta_optimization_target[{i}].task_name"),
                format!("no task named {:?} in this statement", target.task_name),
            ));
        }
    }
}

fn check_references(
    statement: &ProblemStatement,
    namespace: &dyn NamespaceView,
    out: &mut Vec<Violation>,
) {
    for (i, reference) in statement.implements.iter().enumerate() {
        if let Some(name) = reference.name() {
            if !namespace.contains_statement(name) {
                out.push(Violation::new(
                    ViolationKind::UnresolvedNamespaceReference,
                    format!("implements[{i}].name"),
                    format!("no problem statement named {name:?} in the namespace"),
                ));
            }
        }
    }
}
