//! # Task Type Discriminants
//!
//! `TaskType` names which variant of a [`Type`](crate::Type) union is
//! populated. It is never stored on its own: it is derived from the union by
//! [`Type::active_task_type`](crate::Type::active_task_type). Every `match`
//! on `TaskType` must be exhaustive, so adding a variant forces every
//! consumer to handle it at compile time.
//!
//! `PredictionsOrder` describes how a top-k task orders its predicted labels.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ModelError;

/// The kind of prediction a task head produces.
///
/// | Name | Output |
/// |------|--------|
/// | `UNKNOWN` | Unspecified |
/// | `BINARY_CLASSIFICATION` | Two classes sharing the label column's type |
/// | `MULTI_CLASS_CLASSIFICATION` | One label out of `n_classes` |
/// | `TOP_K_CLASSIFICATION` | Ordered sequence of predicted labels |
/// | `ONE_DIMENSIONAL_REGRESSION` | One real value |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskType {
    /// No task type could be determined.
    Unknown,
    /// Two-class classification.
    BinaryClassification,
    /// Single label out of `n_classes`.
    MultiClassClassification,
    /// Ordered top-k label prediction.
    TopKClassification,
    /// Single real-valued output.
    OneDimensionalRegression,
}

impl TaskType {
    /// Returns all task types in declaration order.
    pub fn all() -> &'static [TaskType] {
        &[
            Self::Unknown,
            Self::BinaryClassification,
            Self::MultiClassClassification,
            Self::TopKClassification,
            Self::OneDimensionalRegression,
        ]
    }

    /// Returns the wire name of this task type. Matches the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::BinaryClassification => "BINARY_CLASSIFICATION",
            Self::MultiClassClassification => "MULTI_CLASS_CLASSIFICATION",
            Self::TopKClassification => "TOP_K_CLASSIFICATION",
            Self::OneDimensionalRegression => "ONE_DIMENSIONAL_REGRESSION",
        }
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = ModelError;

    /// Parse a task type from its wire name. Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNKNOWN" => Ok(Self::Unknown),
            "BINARY_CLASSIFICATION" => Ok(Self::BinaryClassification),
            "MULTI_CLASS_CLASSIFICATION" => Ok(Self::MultiClassClassification),
            "TOP_K_CLASSIFICATION" => Ok(Self::TopKClassification),
            "ONE_DIMENSIONAL_REGRESSION" => Ok(Self::OneDimensionalRegression),
            other => Err(ModelError::UnknownTaskType(other.to_string())),
        }
    }
}

/// Order of the predicted label sequence of a top-k task.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PredictionsOrder {
    /// Order is not specified.
    #[default]
    Unspecified,
    /// Highest score first.
    ScoreDesc,
    /// Lowest score first.
    ScoreAsc,
}

impl PredictionsOrder {
    /// Returns the wire name of this ordering.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "UNSPECIFIED",
            Self::ScoreDesc => "SCORE_DESC",
            Self::ScoreAsc => "SCORE_ASC",
        }
    }
}

impl std::fmt::Display for PredictionsOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PredictionsOrder {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNSPECIFIED" => Ok(Self::Unspecified),
            "SCORE_DESC" => Ok(Self::ScoreDesc),
            "SCORE_ASC" => Ok(Self::ScoreAsc),
            other => Err(ModelError::UnknownPredictionsOrder(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_task_types_count() {
        assert_eq!(TaskType::all().len(), 5);
    }

    #[test]
    fn test_as_str_parses_back() {
        for task_type in TaskType::all() {
            let s = task_type.as_str();
            let parsed: TaskType = s
                .parse()
                .unwrap_or_else(|e| panic!("Failed to parse {s:?}: {e}"));
            assert_eq!(*task_type, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("regression".parse::<TaskType>().is_err());
        assert!("binary_classification".parse::<TaskType>().is_err()); // case-sensitive
        assert!("".parse::<TaskType>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for task_type in TaskType::all() {
            let json = serde_json::to_string(task_type).unwrap();
            assert_eq!(json, format!("\"{}\"", task_type.as_str()));
        }
    }

    #[test]
    fn test_predictions_order_default_and_parse() {
        assert_eq!(PredictionsOrder::default(), PredictionsOrder::Unspecified);
        assert_eq!(
            "SCORE_DESC".parse::<PredictionsOrder>().unwrap(),
            PredictionsOrder::ScoreDesc
        );
        let err = "DESC".parse::<PredictionsOrder>().unwrap_err();
        assert_eq!(err, ModelError::UnknownPredictionsOrder("DESC".to_string()));
    }
}
