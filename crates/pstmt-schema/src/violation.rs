//! # Violations
//!
//! A violation is one structural inconsistency found in a problem
//! statement: what kind it is, which field it concerns, and a message for
//! the person who wrote the document.
//!
//! Paths use field names and zero-based indices, e.g. `tasks[2].name` or
//! `meta_optimization_target[0].task_name`.

use std::fmt;

use serde::Serialize;

/// Category of a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ViolationKind {
    /// A `Type` union has zero or several populated variants.
    MalformedType,
    /// Two or more tasks share a name within one statement.
    DuplicateTaskName,
    /// Some but not all tasks set `task_weight`.
    InconsistentTaskWeights,
    /// A meta-optimization target names a task that does not exist.
    UnresolvedTaskReference,
    /// An `implements` reference names a statement missing from the namespace.
    UnresolvedNamespaceReference,
    /// Policy: the statement declares no tasks.
    EmptyTaskList,
    /// Policy: the namespace holds no statements.
    EmptyNamespace,
    /// Policy: the statement's environment is not a known environment.
    UnknownEnvironment,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedType => "MalformedType",
            Self::DuplicateTaskName => "DuplicateTaskName",
            Self::InconsistentTaskWeights => "InconsistentTaskWeights",
            Self::UnresolvedTaskReference => "UnresolvedTaskReference",
            Self::UnresolvedNamespaceReference => "UnresolvedNamespaceReference",
            Self::EmptyTaskList => "EmptyTaskList",
            Self::EmptyNamespace => "EmptyNamespace",
            Self::UnknownEnvironment => "UnknownEnvironment",
        }
    }

    /// Whether this kind comes from an opt-in policy rather than a
    /// structural invariant.
    pub fn is_policy(&self) -> bool {
        matches!(
            self,
            Self::EmptyTaskList | Self::EmptyNamespace | Self::UnknownEnvironment
        )
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    /// Path to the offending field.
    pub path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl Violation {
    pub fn new(kind: ViolationKind, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "  (root): [{}] {}", self.kind, self.message)
        } else {
            write!(f, "  {}: [{}] {}", self.path, self.kind, self.message)
        }
    }
}

/// Ordered collection of violations. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Violations of one kind, in order.
    pub fn of_kind(&self, kind: ViolationKind) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.kind == kind)
    }

    /// Append another list, keeping order.
    pub fn extend(&mut self, other: ValidationViolations) {
        self.violations.extend(other.violations);
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl IntoIterator for ValidationViolations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationViolations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
