//! # pstmt CLI entry point
//!
//! Parses command-line arguments, sets up tracing, loads the policy, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pstmt_cli::config::load_policy;
use pstmt_cli::inspect::{run_inspect, InspectArgs};
use pstmt_cli::validate::{run_validate, ValidateArgs};

/// Problem statement toolchain.
///
/// Validates ML problem statements and namespaces of them, and shows how
/// their tasks and meta-optimization targets resolve.
#[derive(Parser, Debug)]
#[command(name = "pstmt", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the validation policy file (YAML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a problem statement or every statement of a namespace.
    Validate(ValidateArgs),

    /// Show resolved task types, weights and targets of a statement.
    Inspect(InspectArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    tracing::debug!(cwd = %cwd.display(), "pstmt starting");

    let result = load_policy(cli.config.as_deref()).and_then(|policy| match &cli.command {
        Commands::Validate(args) => run_validate(args, &policy, &cwd),
        Commands::Inspect(args) => run_inspect(args, &cwd),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
