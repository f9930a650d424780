//! # Configuration
//!
//! The `--config` file is a YAML document holding the validation policy:
//!
//! ```yaml
//! require_tasks: true
//! require_statements: true
//! environments: [prod, staging]
//! ```
//!
//! Without `--config` the default policy applies and every rule is off.

use std::path::Path;

use anyhow::{Context, Result};

use pstmt_schema::Policy;

/// Load the policy from `path`, or the default policy when `None`.
pub fn load_policy(path: Option<&Path>) -> Result<Policy> {
    let Some(path) = path else {
        tracing::debug!("no config file given; using default policy");
        return Ok(Policy::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let policy: Policy = serde_yaml::from_str(&content)
        .with_context(|| format!("invalid config file {}", path.display()))?;

    tracing::info!(
        config = %path.display(),
        require_tasks = policy.require_tasks,
        require_statements = policy.require_statements,
        environments = policy.environments.len(),
        "loaded validation policy"
    );
    Ok(policy)
}
