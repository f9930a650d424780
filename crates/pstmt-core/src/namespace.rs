//! # Problem Statement Namespaces
//!
//! A uniquely keyed collection of problem statements. Keys are the names
//! that `implements` references resolve against. Iteration is in key order
//! so anything derived from a namespace is deterministic.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::statement::ProblemStatement;

/// Name → problem statement mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemStatementNamespace {
    #[serde(default, deserialize_with = "unique_statements")]
    problem_statements: BTreeMap<String, ProblemStatement>,
}

/// Deserialize the statement mapping, rejecting a repeated key instead of
/// keeping the last value.
fn unique_statements<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, ProblemStatement>, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueStatements;

    impl<'de> Visitor<'de> for UniqueStatements {
        type Value = BTreeMap<String, ProblemStatement>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map from statement name to problem statement")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut statements = BTreeMap::new();
            while let Some((name, statement)) = map.next_entry::<String, ProblemStatement>()? {
                if statements.contains_key(&name) {
                    return Err(de::Error::custom(ModelError::DuplicateStatement(name)));
                }
                statements.insert(name, statement);
            }
            Ok(statements)
        }
    }

    deserializer.deserialize_map(UniqueStatements)
}

impl ProblemStatementNamespace {
    /// Empty namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a namespace from `(name, statement)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateStatement`] on the first repeated name.
    pub fn try_from_iter<I, K>(entries: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (K, ProblemStatement)>,
        K: Into<String>,
    {
        let mut namespace = Self::new();
        for (name, statement) in entries {
            namespace.insert(name, statement)?;
        }
        Ok(namespace)
    }

    /// Add `statement` under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateStatement`] if `name` is already taken;
    /// the existing statement is left in place.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        statement: ProblemStatement,
    ) -> Result<(), ModelError> {
        let name = name.into();
        if self.problem_statements.contains_key(&name) {
            return Err(ModelError::DuplicateStatement(name));
        }
        self.problem_statements.insert(name, statement);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ProblemStatement> {
        self.problem_statements.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.problem_statements.contains_key(name)
    }

    /// Statement names in key order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.problem_statements.keys().map(String::as_str)
    }

    /// `(name, statement)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProblemStatement)> {
        self.problem_statements
            .iter()
            .map(|(name, stmt)| (name.as_str(), stmt))
    }

    pub fn len(&self) -> usize {
        self.problem_statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problem_statements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_duplicate_key() {
        let mut ns = ProblemStatementNamespace::new();
        ns.insert("A", ProblemStatement::new("first")).unwrap();
        let err = ns.insert("A", ProblemStatement::new("second")).unwrap_err();
        assert_eq!(err, ModelError::DuplicateStatement("A".to_string()));
        assert_eq!(ns.get("A").unwrap().description, "first");
    }

    #[test]
    fn test_iteration_is_key_ordered() {
        let ns = ProblemStatementNamespace::try_from_iter([
            ("zeta", ProblemStatement::new("z")),
            ("alpha", ProblemStatement::new("a")),
            ("mid", ProblemStatement::new("m")),
        ])
        .unwrap();
        assert_eq!(ns.names().collect::<Vec<_>>(), vec!["alpha", "mid", "zeta"]);
        assert_eq!(ns.len(), 3);
        assert!(ns.contains("mid"));
        assert!(!ns.contains("Mid"));
    }

    #[test]
    fn test_deserialize_namespace() {
        let yaml = r#"
problem_statements:
  A:
    description: a
    implements: [{ name: B }]
  B:
    description: b
"#;
        let ns: ProblemStatementNamespace = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(ns.len(), 2);
        assert_eq!(ns.get("A").unwrap().implements[0].name(), Some("B"));
    }

    #[test]
    fn test_deserialize_rejects_repeated_key() {
        let json = r#"{"problem_statements": {"A": {"description": "one"}, "A": {"description": "two"}}}"#;
        let err = serde_json::from_str::<ProblemStatementNamespace>(json)
            .unwrap_err()
            .to_string();
        assert!(err.contains("duplicate problem statement name"), "got: {err}");
        assert!(err.contains("\"A\""), "got: {err}");
    }

    #[test]
    fn test_deserialize_rejects_statement_document() {
        let result: Result<ProblemStatementNamespace, _> =
            serde_yaml::from_str("description: not a namespace\ntasks: []\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_namespace() {
        let ns: ProblemStatementNamespace = serde_yaml::from_str("{}").unwrap();
        assert!(ns.is_empty());
    }
}
