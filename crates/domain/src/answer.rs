//! Answer values submitted by models and expected by the answer key.
//!
//! Submitted and expected answers share one closed tagged union so the
//! comparator policies can be written as exhaustive matches instead of
//! runtime type inspection. Deserialization is untagged: plain JSON scalars,
//! arrays, and objects map onto the variants directly. JSON `null` has no
//! variant and is rejected at the boundary.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A dynamically-shaped answer value.
///
/// Variant order matters for untagged deserialization: booleans and whole
/// numbers must be tried before `Real` so `42` stays an integer and `true`
/// stays a boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// A boolean answer.
    Boolean(bool),
    /// A whole-number answer.
    Integer(i64),
    /// A real-number answer.
    Real(f64),
    /// A free-form text answer.
    Text(String),
    /// An ordered sequence of answers; comparison is order-sensitive.
    Sequence(Vec<AnswerValue>),
    /// A string-keyed mapping of answers. `BTreeMap` keeps the canonical
    /// JSON rendering deterministic.
    Mapping(BTreeMap<String, AnswerValue>),
}

impl AnswerValue {
    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Real(r) => Some(*r),
            _ => None,
        }
    }

    /// Whether the value is numeric (integer or real).
    pub fn is_numeric(&self) -> bool {
        self.as_f64().is_some()
    }

    /// Canonical text form used by the normalized-string comparison
    /// fallback: trimmed and lowercased. Sequences and mappings render as
    /// their canonical JSON (mapping keys sorted) before normalization.
    pub fn canonical_text(&self) -> String {
        match self {
            Self::Boolean(b) => b.to_string(),
            Self::Integer(i) => i.to_string(),
            Self::Real(r) => r.to_string(),
            Self::Text(s) => s.trim().to_lowercase(),
            Self::Sequence(_) | Self::Mapping(_) => serde_json::to_string(self)
                .unwrap_or_default()
                .to_lowercase(),
        }
    }
}

impl From<i64> for AnswerValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<AnswerValue>> for AnswerValue {
    fn from(value: Vec<AnswerValue>) -> Self {
        Self::Sequence(value)
    }
}

impl From<BTreeMap<String, AnswerValue>> for AnswerValue {
    fn from(value: BTreeMap<String, AnswerValue>) -> Self {
        Self::Mapping(value)
    }
}
