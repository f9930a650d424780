//! # Tasks and Task-Type Unions
//!
//! A `Task` is one output head of a (possibly multi-output) model. Its
//! `Type` says what the head predicts and which columns hold the label and
//! the per-example weight.
//!
//! ## Union Representation
//!
//! `Type` is an "exactly one of" union over four variant records. It is
//! stored as one optional slot per variant so that a document with no
//! variant, or with several, still loads and can be reported on. The
//! well-formed view is [`Type::variant`]; the discriminant is
//! [`Type::active_task_type`].

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::objective::{ObjectiveFunction, PerformanceMetric};
use crate::task_type::{PredictionsOrder, TaskType};

/// Number of predicted labels a top-k task emits when none is given.
pub const DEFAULT_PREDICTED_LABELS: u32 = 1;

// ─── Variant Records ─────────────────────────────────────────────────

/// Two-class output. Predictions share the label column's type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BinaryClassification {
    /// Label column.
    #[serde(default)]
    pub label: String,
    /// Per-example weight column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_weight: Option<String>,
}

/// Single predicted label out of `n_classes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MultiClassClassification {
    /// Label column.
    #[serde(default)]
    pub label: String,
    /// Per-example weight column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_weight: Option<String>,
    /// Number of classes. Inferred from the data when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_classes: Option<u32>,
}

/// Ordered sequence of predicted labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopKClassification {
    /// Label column.
    #[serde(default)]
    pub label: String,
    /// Per-example weight column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_weight: Option<String>,
    /// Number of classes. Inferred from the data when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_classes: Option<u32>,
    /// Length of the predicted label sequence. Defaults to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_predicted_labels: Option<u32>,
    /// How the predicted labels are ordered.
    #[serde(default)]
    pub predictions_order: PredictionsOrder,
}

/// Single real-valued output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OneDimensionalRegression {
    /// Label column.
    #[serde(default)]
    pub label: String,
    /// Per-example weight column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

impl BinaryClassification {
    /// Binary classification over `label` with no example weight.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            example_weight: None,
        }
    }

    /// Set the per-example weight column.
    pub fn with_example_weight(mut self, column: impl Into<String>) -> Self {
        self.example_weight = Some(column.into());
        self
    }
}

impl MultiClassClassification {
    /// Multi-class classification over `label`; class count inferred.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Set the per-example weight column.
    pub fn with_example_weight(mut self, column: impl Into<String>) -> Self {
        self.example_weight = Some(column.into());
        self
    }

    /// Fix the number of classes.
    pub fn with_n_classes(mut self, n_classes: u32) -> Self {
        self.n_classes = Some(n_classes);
        self
    }

    /// Whether `n_classes` was given explicitly.
    pub fn has_n_classes(&self) -> bool {
        self.n_classes.is_some()
    }
}

impl TopKClassification {
    /// Top-k classification over `label` with every optional field absent.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Set the per-example weight column.
    pub fn with_example_weight(mut self, column: impl Into<String>) -> Self {
        self.example_weight = Some(column.into());
        self
    }

    /// Fix the number of classes.
    pub fn with_n_classes(mut self, n_classes: u32) -> Self {
        self.n_classes = Some(n_classes);
        self
    }

    /// Set the length of the predicted label sequence.
    pub fn with_n_predicted_labels(mut self, n: u32) -> Self {
        self.n_predicted_labels = Some(n);
        self
    }

    /// Set the ordering of the predicted labels.
    pub fn with_predictions_order(mut self, order: PredictionsOrder) -> Self {
        self.predictions_order = order;
        self
    }

    /// Whether `n_classes` was given explicitly.
    pub fn has_n_classes(&self) -> bool {
        self.n_classes.is_some()
    }

    /// Whether `n_predicted_labels` was given explicitly.
    pub fn has_n_predicted_labels(&self) -> bool {
        self.n_predicted_labels.is_some()
    }

    /// Effective length of the predicted label sequence.
    pub fn n_predicted_labels_or_default(&self) -> u32 {
        self.n_predicted_labels.unwrap_or(DEFAULT_PREDICTED_LABELS)
    }
}

impl OneDimensionalRegression {
    /// Regression onto `label` with no example weight.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            weight: None,
        }
    }

    /// Set the per-example weight column.
    pub fn with_weight(mut self, column: impl Into<String>) -> Self {
        self.weight = Some(column.into());
        self
    }
}

// ─── Type Union ──────────────────────────────────────────────────────

/// "Exactly one of" union over the four task-type variants.
///
/// Construct well-formed values with `From<variant>` or the per-variant
/// constructors. A deserialized value may have zero or several slots
/// populated; [`Type::active_task_type`] reports that as
/// [`ModelError::MalformedType`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Type {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary_classification: Option<BinaryClassification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_class_classification: Option<MultiClassClassification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k_classification: Option<TopKClassification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_dimensional_regression: Option<OneDimensionalRegression>,
}

/// Borrowed view of the single populated variant of a well-formed `Type`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypeVariant<'a> {
    BinaryClassification(&'a BinaryClassification),
    MultiClassClassification(&'a MultiClassClassification),
    TopKClassification(&'a TopKClassification),
    OneDimensionalRegression(&'a OneDimensionalRegression),
}

impl<'a> TypeVariant<'a> {
    /// Discriminant of this variant.
    pub fn task_type(&self) -> TaskType {
        match self {
            Self::BinaryClassification(_) => TaskType::BinaryClassification,
            Self::MultiClassClassification(_) => TaskType::MultiClassClassification,
            Self::TopKClassification(_) => TaskType::TopKClassification,
            Self::OneDimensionalRegression(_) => TaskType::OneDimensionalRegression,
        }
    }

    /// Label column of this variant.
    pub fn label(&self) -> &'a str {
        match *self {
            Self::BinaryClassification(v) => &v.label,
            Self::MultiClassClassification(v) => &v.label,
            Self::TopKClassification(v) => &v.label,
            Self::OneDimensionalRegression(v) => &v.label,
        }
    }

    /// Per-example weight column, if any.
    ///
    /// Regression names this column `weight`; the classification variants
    /// name it `example_weight`.
    pub fn example_weight(&self) -> Option<&'a str> {
        match *self {
            Self::BinaryClassification(v) => v.example_weight.as_deref(),
            Self::MultiClassClassification(v) => v.example_weight.as_deref(),
            Self::TopKClassification(v) => v.example_weight.as_deref(),
            Self::OneDimensionalRegression(v) => v.weight.as_deref(),
        }
    }
}

impl Type {
    /// Number of populated variant slots.
    pub fn populated_count(&self) -> usize {
        [
            self.binary_classification.is_some(),
            self.multi_class_classification.is_some(),
            self.top_k_classification.is_some(),
            self.one_dimensional_regression.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    /// The single populated variant.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MalformedType`] if zero or more than one
    /// variant is populated.
    pub fn variant(&self) -> Result<TypeVariant<'_>, ModelError> {
        let populated = self.populated_count();
        if populated != 1 {
            return Err(ModelError::MalformedType { populated });
        }
        if let Some(v) = &self.binary_classification {
            Ok(TypeVariant::BinaryClassification(v))
        } else if let Some(v) = &self.multi_class_classification {
            Ok(TypeVariant::MultiClassClassification(v))
        } else if let Some(v) = &self.top_k_classification {
            Ok(TypeVariant::TopKClassification(v))
        } else if let Some(v) = &self.one_dimensional_regression {
            Ok(TypeVariant::OneDimensionalRegression(v))
        } else {
            Err(ModelError::MalformedType { populated: 0 })
        }
    }

    /// Which task type this union holds.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MalformedType`] if zero or more than one
    /// variant is populated.
    pub fn active_task_type(&self) -> Result<TaskType, ModelError> {
        self.variant().map(|v| v.task_type())
    }

    /// Whether exactly one variant is populated.
    pub fn is_well_formed(&self) -> bool {
        self.populated_count() == 1
    }

    /// Label column of the active variant.
    pub fn label(&self) -> Result<&str, ModelError> {
        self.variant().map(|v| v.label())
    }

    /// Per-example weight column of the active variant.
    pub fn example_weight(&self) -> Result<Option<&str>, ModelError> {
        self.variant().map(|v| v.example_weight())
    }
}

/// Free-function form of [`Type::active_task_type`].
pub fn active_task_type(ty: &Type) -> Result<TaskType, ModelError> {
    ty.active_task_type()
}

impl From<BinaryClassification> for Type {
    fn from(v: BinaryClassification) -> Self {
        Self {
            binary_classification: Some(v),
            ..Self::default()
        }
    }
}

impl From<MultiClassClassification> for Type {
    fn from(v: MultiClassClassification) -> Self {
        Self {
            multi_class_classification: Some(v),
            ..Self::default()
        }
    }
}

impl From<TopKClassification> for Type {
    fn from(v: TopKClassification) -> Self {
        Self {
            top_k_classification: Some(v),
            ..Self::default()
        }
    }
}

impl From<OneDimensionalRegression> for Type {
    fn from(v: OneDimensionalRegression) -> Self {
        Self {
            one_dimensional_regression: Some(v),
            ..Self::default()
        }
    }
}

// ─── Task ────────────────────────────────────────────────────────────

/// One model output head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Task {
    /// What the head predicts.
    #[serde(rename = "type")]
    pub ty: Type,
    /// Name, unique among the tasks of one problem statement.
    #[serde(default)]
    pub name: String,
    /// Relative weight of this task's loss. Either every task of a
    /// statement sets it or none does.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_weight: Option<f64>,
    /// Loss the head is trained against.
    #[serde(default)]
    pub objective_function: ObjectiveFunction,
    /// Metrics monitored for this head, in order. Not optimized.
    #[serde(default)]
    pub performance_metric: Vec<PerformanceMetric>,
}

impl Task {
    /// Task `name` of type `ty` with no weight, objective or metrics.
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            task_weight: None,
            objective_function: ObjectiveFunction::default(),
            performance_metric: Vec::new(),
        }
    }

    /// Set the relative loss weight.
    pub fn with_task_weight(mut self, weight: f64) -> Self {
        self.task_weight = Some(weight);
        self
    }

    /// Set the objective function.
    pub fn with_objective_function(mut self, objective: ObjectiveFunction) -> Self {
        self.objective_function = objective;
        self
    }

    /// Append a monitored metric.
    pub fn with_performance_metric(mut self, metric: PerformanceMetric) -> Self {
        self.performance_metric.push(metric);
        self
    }

    /// Whether `task_weight` was set explicitly.
    pub fn has_task_weight(&self) -> bool {
        self.task_weight.is_some()
    }

    /// Task type of this head's union.
    pub fn active_task_type(&self) -> Result<TaskType, ModelError> {
        self.ty.active_task_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_variant_maps_to_its_task_type() {
        let cases: Vec<(Type, TaskType)> = vec![
            (
                BinaryClassification::new("clicked").into(),
                TaskType::BinaryClassification,
            ),
            (
                MultiClassClassification::new("genre").into(),
                TaskType::MultiClassClassification,
            ),
            (
                TopKClassification::new("next_item").into(),
                TaskType::TopKClassification,
            ),
            (
                OneDimensionalRegression::new("price").into(),
                TaskType::OneDimensionalRegression,
            ),
        ];
        for (ty, expected) in cases {
            assert_eq!(active_task_type(&ty).unwrap(), expected);
            assert!(ty.is_well_formed());
        }
    }

    #[test]
    fn test_empty_type_is_malformed() {
        let err = Type::default().active_task_type().unwrap_err();
        assert_eq!(err, ModelError::MalformedType { populated: 0 });
    }

    #[test]
    fn test_two_variants_is_malformed() {
        let mut ty: Type = BinaryClassification::new("clicked").into();
        ty.one_dimensional_regression = Some(OneDimensionalRegression::new("price"));
        assert_eq!(ty.populated_count(), 2);
        assert_eq!(
            ty.active_task_type(),
            Err(ModelError::MalformedType { populated: 2 })
        );
        assert!(ty.label().is_err());
    }

    #[test]
    fn test_label_and_example_weight_follow_active_variant() {
        let ty: Type = OneDimensionalRegression::new("price")
            .with_weight("w")
            .into();
        assert_eq!(ty.label().unwrap(), "price");
        assert_eq!(ty.example_weight().unwrap(), Some("w"));

        let ty: Type = BinaryClassification::new("clicked").into();
        assert_eq!(ty.example_weight().unwrap(), None);
    }

    #[test]
    fn test_variant_columns_outlive_the_view() {
        fn columns(ty: &Type) -> Option<(&str, Option<&str>)> {
            let variant = ty.variant().ok()?;
            Some((variant.label(), variant.example_weight()))
        }

        let ty: Type = TopKClassification::new("next_item")
            .with_example_weight("w")
            .into();
        assert_eq!(columns(&ty), Some(("next_item", Some("w"))));
        assert_eq!(columns(&Type::default()), None);
    }

    #[test]
    fn test_top_k_defaults_are_distinct_from_presence() {
        let top_k = TopKClassification::new("next_item");
        assert!(!top_k.has_n_predicted_labels());
        assert_eq!(top_k.n_predicted_labels_or_default(), DEFAULT_PREDICTED_LABELS);
        assert!(!top_k.has_n_classes());
        assert_eq!(top_k.predictions_order, PredictionsOrder::Unspecified);

        let top_k = top_k
            .with_n_predicted_labels(5)
            .with_n_classes(1000)
            .with_predictions_order(PredictionsOrder::ScoreDesc);
        assert!(top_k.has_n_predicted_labels());
        assert_eq!(top_k.n_predicted_labels_or_default(), 5);
        assert_eq!(top_k.n_classes, Some(1000));
    }

    #[test]
    fn test_task_weight_presence() {
        let task = Task::new("ctr", BinaryClassification::new("clicked"));
        assert!(!task.has_task_weight());
        let task = task.with_task_weight(0.0);
        assert!(task.has_task_weight(), "explicit zero is still present");
    }

    #[test]
    fn test_deserialize_task_from_yaml() {
        let yaml = r#"
name: next_item
task_weight: 2.5
type:
  top_k_classification:
    label: item_id
    n_predicted_labels: 10
    predictions_order: SCORE_DESC
objective_function:
  softmax_cross_entropy: {}
performance_metric:
  - recall_at_k: { k: 10 }
"#;
        let task: Task = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(task.name, "next_item");
        assert_eq!(task.task_weight, Some(2.5));
        assert_eq!(task.active_task_type().unwrap(), TaskType::TopKClassification);
        let top_k = task.ty.top_k_classification.as_ref().unwrap();
        assert_eq!(top_k.n_predicted_labels, Some(10));
        assert_eq!(top_k.predictions_order, PredictionsOrder::ScoreDesc);
        assert!(task.objective_function.is_present());
        assert_eq!(task.performance_metric.len(), 1);
    }

    #[test]
    fn test_deserialize_type_with_no_variant_loads() {
        let task: Task = serde_yaml::from_str("name: t\ntype: {}\n").unwrap();
        assert!(task.active_task_type().is_err());
        assert!(!task.has_task_weight());
        assert!(!task.objective_function.is_present());
    }

    #[test]
    fn test_deserialize_unknown_variant_key_fails() {
        let yaml = "name: t\ntype:\n  ranking: { label: grade }\n";
        assert!(serde_yaml::from_str::<Task>(yaml).is_err());

        let yaml = "name: t\ntype:\n  binary_classification: { label: y, weight: w }\n";
        assert!(serde_yaml::from_str::<Task>(yaml).is_err());
    }

    #[test]
    fn test_deserialize_task_without_type_fails() {
        let result: Result<Task, _> = serde_yaml::from_str("name: t\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_absent_optionals_are_not_serialized() {
        let task = Task::new("price", OneDimensionalRegression::new("price"));
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("task_weight").is_none());
        assert!(json["type"]["one_dimensional_regression"].get("weight").is_none());
        assert!(json["type"].get("binary_classification").is_none());
    }
}
