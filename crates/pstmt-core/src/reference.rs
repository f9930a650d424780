//! # Problem Statement References
//!
//! A statement may declare that it implements other statements of its
//! namespace. A reference selects its target through a tagged union; the
//! only selector today is a plain `name`, resolved against the keys of the
//! enclosing namespace.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// How a reference selects its target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceSelector {
    /// Key of a sibling statement in the same namespace.
    Name(String),
}

/// Reference from one problem statement to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ReferenceDocument")]
pub struct ProblemStatementReference {
    /// Free-text note on why the reference exists.
    #[serde(default)]
    pub description: String,
    /// Target selector, flattened so that `{ name: X }` reads naturally.
    #[serde(flatten)]
    pub selector: ReferenceSelector,
}

/// Wire shape of a reference. serde cannot combine `flatten` with
/// `deny_unknown_fields`, so the selector keys are spelled out here.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ReferenceDocument {
    #[serde(default)]
    description: String,
    #[serde(default)]
    name: Option<String>,
}

impl TryFrom<ReferenceDocument> for ProblemStatementReference {
    type Error = ModelError;

    fn try_from(doc: ReferenceDocument) -> Result<Self, Self::Error> {
        let selector = match doc.name {
            Some(name) => ReferenceSelector::Name(name),
            None => return Err(ModelError::MissingReferenceSelector),
        };
        Ok(Self {
            description: doc.description,
            selector,
        })
    }
}

impl ProblemStatementReference {
    /// Reference to the sibling statement keyed `name`.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            description: String::new(),
            selector: ReferenceSelector::Name(name.into()),
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The plain name this reference selects, if it selects by name.
    pub fn name(&self) -> Option<&str> {
        match &self.selector {
            ReferenceSelector::Name(name) => Some(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        let r = ProblemStatementReference::by_name("base").with_description("extends base");
        assert_eq!(r.name(), Some("base"));
        assert_eq!(r.description, "extends base");
    }

    #[test]
    fn test_selector_is_flattened_on_the_wire() {
        let r: ProblemStatementReference =
            serde_json::from_str(r#"{"description": "d", "name": "B"}"#).unwrap();
        assert_eq!(r.selector, ReferenceSelector::Name("B".to_string()));

        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["name"], "B");
    }

    #[test]
    fn test_missing_selector_does_not_load() {
        let result: Result<ProblemStatementReference, _> =
            serde_json::from_str(r#"{"description": "d"}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("no selector"), "got: {err}");
    }

    #[test]
    fn test_unknown_reference_key_does_not_load() {
        let result: Result<ProblemStatementReference, _> =
            serde_json::from_str(r#"{"name": "B", "nmae": "C"}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("nmae"), "got: {err}");
    }

    #[test]
    fn test_reference_round_trips_through_wire_shape() {
        let r = ProblemStatementReference::by_name("B").with_description("d");
        let json = serde_json::to_string(&r).unwrap();
        let back: ProblemStatementReference = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
