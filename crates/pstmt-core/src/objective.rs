//! # Objective Functions and Performance Metrics
//!
//! Both are described by an external collaborator. This crate carries them
//! through untouched: loading, validation and serialization never look
//! inside beyond asking whether a value was supplied.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameterized loss description a task is trained against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectiveFunction(pub Value);

/// A monitored (or, for meta-optimization targets, optimized) metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerformanceMetric(pub Value);

impl ObjectiveFunction {
    /// Wrap an externally defined objective description.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Whether a description was supplied.
    pub fn is_present(&self) -> bool {
        !self.0.is_null()
    }

    /// Access the raw description.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl PerformanceMetric {
    /// Wrap an externally defined metric description.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Whether a description was supplied.
    pub fn is_present(&self) -> bool {
        !self.0.is_null()
    }

    /// Access the raw description.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}
