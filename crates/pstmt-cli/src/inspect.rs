//! # Inspect Subcommand
//!
//! Prints how a statement will be read by downstream tooling: the task type
//! each head resolves to, whether its weight is explicit, and which task
//! and weight every meta-optimization target ends up with.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use pstmt_core::ProblemStatement;
use pstmt_schema::load_statement;

/// Arguments for the `pstmt inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Problem statement document (.yaml, .yml or .json).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// Execute the inspect subcommand.
pub fn run_inspect(args: &InspectArgs, cwd: &std::path::Path) -> Result<u8> {
    let resolved = crate::resolve_path(&args.path, cwd);
    let statement = load_statement(&resolved)
        .with_context(|| format!("failed to load problem statement {}", resolved.display()))?;

    for line in describe(&statement) {
        println!("{line}");
    }
    Ok(0)
}

/// One line per task and per meta-optimization target.
pub fn describe(statement: &ProblemStatement) -> Vec<String> {
    let mut lines = Vec::new();
    let mode = if statement.multi_objective {
        "multi-objective"
    } else {
        "weighted-sum"
    };
    lines.push(format!(
        "{} task(s), {} target(s), {mode}",
        statement.tasks.len(),
        statement.meta_optimization_target.len()
    ));

    for (i, task) in statement.tasks.iter().enumerate() {
        let task_type = match task.active_task_type() {
            Ok(t) => t.to_string(),
            Err(e) => format!("<{e}>"),
        };
        let weight = match task.task_weight {
            Some(w) => format!("task_weight={w}"),
            None => "task_weight=unset".to_string(),
        };
        lines.push(format!("tasks[{i}] {:?} {task_type} {weight}", task.name));
    }

    for (i, target) in statement.meta_optimization_target.iter().enumerate() {
        let resolved = match target.effective_type(statement).map(|ty| ty.active_task_type()) {
            Some(Ok(t)) => t.to_string(),
            Some(Err(e)) => format!("<{e}>"),
            None => "<unresolved>".to_string(),
        };
        let weight = match target.effective_weight(statement.multi_objective) {
            Some(w) => format!("weight={w}"),
            None => "weight=not combined".to_string(),
        };
        let task = match statement.task_index(&target.task_name) {
            Some(index) => format!("{:?} (tasks[{index}])", target.task_name),
            None => format!("{:?}", target.task_name),
        };
        lines.push(format!(
            "meta_optimization_target[{i}] -> {task} {resolved} {weight}"
        ));
    }
    lines
}
