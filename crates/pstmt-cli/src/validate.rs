//! # Validate Subcommand
//!
//! Structural validation plus the configured policy, for one statement or
//! a whole namespace.
//!
//! - `pstmt validate STATEMENT` — validate one statement; `implements`
//!   references are not resolved.
//! - `pstmt validate STATEMENT --namespace NS` — same, resolving references
//!   against `NS` (a namespace document or a directory of statements).
//! - `pstmt validate --namespace NS` — validate every statement of `NS`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use pstmt_core::ProblemStatementNamespace;
use pstmt_schema::{
    apply_namespace_policy, apply_policy, load_namespace, load_statement, validate,
    validate_all, NamespaceView, Policy, ValidationViolations,
};

/// Report key for findings about the namespace as a whole.
pub const NAMESPACE_KEY: &str = "(namespace)";

/// Arguments for the `pstmt validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Problem statement document (.yaml, .yml or .json).
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Namespace document or directory used to resolve `implements`.
    /// Without PATH, every statement in it is validated.
    #[arg(long, value_name = "NS")]
    pub namespace: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// How the validation report is rendered.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One block per statement, one line per violation.
    Text,
    /// A JSON object from statement name to its violation list.
    Json,
}

/// Validation findings keyed by statement name (or document path).
pub type Report = BTreeMap<String, ValidationViolations>;

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when valid, 1 on violations, 2 on usage error.
pub fn run_validate(args: &ValidateArgs, policy: &Policy, cwd: &Path) -> Result<u8> {
    let namespace = match &args.namespace {
        Some(ns_path) => {
            let resolved = crate::resolve_path(ns_path, cwd);
            let namespace = load_namespace(&resolved)
                .with_context(|| format!("failed to load namespace {}", resolved.display()))?;
            Some(namespace)
        }
        None => None,
    };

    let report = match (&args.path, &namespace) {
        (Some(path), _) => {
            let resolved = crate::resolve_path(path, cwd);
            validate_statement_file(&resolved, namespace.as_ref(), policy)?
        }
        (None, Some(namespace)) => validate_namespace(namespace, policy),
        (None, None) => {
            eprintln!("Usage: pstmt validate [PATH] [--namespace NS] [--format text|json]");
            return Ok(2);
        }
    };

    println!("{}", render(&report, args.format)?);

    let failing = report.values().filter(|v| !v.is_empty()).count();
    if failing > 0 {
        tracing::info!(failing, "validation failed");
        Ok(1)
    } else {
        Ok(0)
    }
}

/// Validate one statement file, resolving against `namespace` if given.
pub fn validate_statement_file(
    path: &Path,
    namespace: Option<&ProblemStatementNamespace>,
    policy: &Policy,
) -> Result<Report> {
    let statement = load_statement(path)
        .with_context(|| format!("failed to load problem statement {}", path.display()))?;

    let mut violations = validate(&statement, namespace.map(|ns| ns as &dyn NamespaceView));
    if policy.is_active() {
        violations.extend(apply_policy(&statement, policy));
    }

    let mut report = Report::new();
    report.insert(path.display().to_string(), violations);
    Ok(report)
}

/// Validate every statement of `namespace`, then the namespace itself.
pub fn validate_namespace(namespace: &ProblemStatementNamespace, policy: &Policy) -> Report {
    let mut report = validate_all(namespace);
    if !policy.is_active() {
        return report;
    }
    for (name, statement) in namespace.iter() {
        if let Some(violations) = report.get_mut(name) {
            violations.extend(apply_policy(statement, policy));
        }
    }

    let namespace_violations = apply_namespace_policy(namespace, policy);
    if !namespace_violations.is_empty() {
        report.insert(NAMESPACE_KEY.to_string(), namespace_violations);
    }
    report
}

/// Render a report in the requested format.
///
/// Text output marks findings that come from the policy rather than from
/// the structure of the statement.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("failed to serialize report")
        }
        OutputFormat::Text => {
            let mut lines = Vec::new();
            for (name, violations) in report {
                if violations.is_empty() {
                    lines.push(format!("{name}: OK"));
                } else {
                    lines.push(format!("{name}: {} violation(s)", violations.len()));
                    for violation in violations.iter() {
                        if violation.kind.is_policy() {
                            lines.push(format!("{violation} (policy)"));
                        } else {
                            lines.push(violation.to_string());
                        }
                    }
                }
            }
            let failing = report.values().filter(|v| !v.is_empty()).count();
            lines.push(format!(
                "\nProblem statements: {}/{} passed",
                report.len() - failing,
                report.len()
            ));
            Ok(lines.join("\n"))
        }
    }
}
