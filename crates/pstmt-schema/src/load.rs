//! # Loading
//!
//! Reads problem statements and namespaces from disk. The format is chosen
//! from the file extension: `.yaml`/`.yml` for YAML, anything else is JSON.
//!
//! A namespace is either one document with a top-level
//! `problem_statements` mapping, or a directory in which every
//! `*.yaml`, `*.yml` or `*.json` file holds one statement keyed by its file
//! stem.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use pstmt_core::{ProblemStatement, ProblemStatementNamespace};

use crate::error::LoadError;

const DOCUMENT_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// Load one problem statement from a YAML or JSON file.
///
/// # Errors
///
/// Returns [`LoadError::DocumentLoadError`] if the file cannot be read or
/// does not have the shape of a problem statement.
pub fn load_statement(path: &Path) -> Result<ProblemStatement, LoadError> {
    let statement: ProblemStatement = parse_document(path)?;
    tracing::debug!(
        path = %path.display(),
        tasks = statement.tasks.len(),
        "loaded problem statement"
    );
    Ok(statement)
}

/// Load a namespace from a document or a directory of statements.
///
/// # Errors
///
/// Returns [`LoadError::DocumentLoadError`] for unreadable or ill-shaped
/// documents and [`LoadError::DuplicateStatement`] when two files of a
/// directory share a stem.
pub fn load_namespace(path: &Path) -> Result<ProblemStatementNamespace, LoadError> {
    if path.is_dir() {
        return load_namespace_dir(path);
    }
    let namespace: ProblemStatementNamespace = parse_document(path)?;
    tracing::debug!(
        path = %path.display(),
        statements = namespace.len(),
        "loaded namespace document"
    );
    Ok(namespace)
}

/// Load a namespace from a directory, one statement per document file.
///
/// Files are read in path order. Subdirectories and files with other
/// extensions are ignored.
///
/// # Errors
///
/// See [`load_namespace`].
pub fn load_namespace_dir(dir: &Path) -> Result<ProblemStatementNamespace, LoadError> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_document = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| DOCUMENT_EXTENSIONS.contains(&ext));
        if path.is_file() && is_document {
            files.push(path);
        }
    }
    files.sort();

    let mut namespace = ProblemStatementNamespace::new();
    for path in &files {
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            return Err(LoadError::DocumentLoadError {
                path: path.display().to_string(),
                reason: "file name is not valid UTF-8".to_string(),
            });
        };
        let statement = load_statement(path)?;
        namespace
            .insert(name, statement)
            .map_err(|_| LoadError::DuplicateStatement {
                name: name.to_string(),
                path: path.display().to_string(),
            })?;
    }

    tracing::debug!(
        dir = %dir.display(),
        statements = namespace.len(),
        "loaded namespace directory"
    );
    Ok(namespace)
}

fn parse_document<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| LoadError::DocumentLoadError {
            path: path.display().to_string(),
            reason: format!("cannot read file: {e}"),
        })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext {
        "yaml" | "yml" => {
            serde_yaml::from_str(&content).map_err(|e| LoadError::DocumentLoadError {
                path: path.display().to_string(),
                reason: format!("invalid YAML: {e}"),
            })
        }
        _ => serde_json::from_str(&content).map_err(|e| LoadError::DocumentLoadError {
            path: path.display().to_string(),
            reason: format!("invalid JSON: {e}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pstmt_core::TaskType;

    const STATEMENT_YAML: &str = r#"
description: click-through
tasks:
  - name: ctr
    type:
      binary_classification: { label: clicked }
"#;

    #[test]
    fn test_load_yaml_statement() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ctr.yaml");
        std::fs::write(&path, STATEMENT_YAML).unwrap();

        let stmt = load_statement(&path).unwrap();
        assert_eq!(stmt.description, "click-through");
        assert_eq!(
            stmt.tasks[0].active_task_type().unwrap(),
            TaskType::BinaryClassification
        );
    }

    #[test]
    fn test_load_json_statement() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("price.json");
        std::fs::write(
            &path,
            r#"{"tasks": [{"name": "price", "task_weight": 1.0,
                "type": {"one_dimensional_regression": {"label": "price"}}}]}"#,
        )
        .unwrap();

        let stmt = load_statement(&path).unwrap();
        assert_eq!(stmt.tasks[0].task_weight, Some(1.0));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_statement(Path::new("/nonexistent/statement.yaml")).unwrap_err();
        assert!(matches!(err, LoadError::DocumentLoadError { .. }));
    }

    #[test]
    fn test_load_task_without_type_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "tasks:\n  - name: ctr\n").unwrap();

        let err = load_statement(&path).unwrap_err();
        match err {
            LoadError::DocumentLoadError { reason, .. } => assert!(reason.contains("YAML")),
            other => panic!("Expected DocumentLoadError, got: {other}"),
        }
    }

    #[test]
    fn test_load_misspelled_key_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("typo.yaml");
        std::fs::write(
            &path,
            "description: x\ntask:\n  - name: a\n    type: {}\n  - name: a\n    type: {}\n",
        )
        .unwrap();

        let err = load_statement(&path).unwrap_err();
        match err {
            LoadError::DocumentLoadError { reason, .. } => {
                assert!(reason.contains("unknown field `task`"), "got: {reason}")
            }
            other => panic!("Expected DocumentLoadError, got: {other}"),
        }
    }

    #[test]
    fn test_load_statement_as_namespace_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ctr.yaml");
        std::fs::write(&path, STATEMENT_YAML).unwrap();

        let err = load_namespace(&path).unwrap_err();
        assert!(matches!(err, LoadError::DocumentLoadError { .. }));
    }

    #[test]
    fn test_load_namespace_document_repeated_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("namespace.json");
        std::fs::write(
            &path,
            r#"{"problem_statements": {"A": {"description": "one"}, "A": {"description": "two"}}}"#,
        )
        .unwrap();

        let err = load_namespace(&path).unwrap_err();
        match err {
            LoadError::DocumentLoadError { reason, .. } => {
                assert!(reason.contains("duplicate problem statement name"), "got: {reason}")
            }
            other => panic!("Expected DocumentLoadError, got: {other}"),
        }
    }

    #[test]
    fn test_load_namespace_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("namespace.yaml");
        std::fs::write(
            &path,
            "problem_statements:\n  A:\n    implements: [{ name: B }]\n  B: {}\n",
        )
        .unwrap();

        let ns = load_namespace(&path).unwrap();
        assert_eq!(ns.names().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_load_namespace_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ctr.yaml"), STATEMENT_YAML).unwrap();
        std::fs::write(dir.path().join("empty.json"), "{}").unwrap();
        std::fs::write(dir.path().join("README.md"), "not a statement").unwrap();

        let ns = load_namespace(dir.path()).unwrap();
        assert_eq!(ns.names().collect::<Vec<_>>(), vec!["ctr", "empty"]);
    }

    #[test]
    fn test_load_namespace_directory_duplicate_stem() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ctr.json"), "{}").unwrap();
        std::fs::write(dir.path().join("ctr.yaml"), STATEMENT_YAML).unwrap();

        let err = load_namespace(dir.path()).unwrap_err();
        match err {
            LoadError::DuplicateStatement { name, path } => {
                assert_eq!(name, "ctr");
                assert!(path.ends_with("ctr.yaml"));
            }
            other => panic!("Expected DuplicateStatement, got: {other}"),
        }
    }
}
