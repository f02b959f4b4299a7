//! The persisted submission record.

use crate::answer::AnswerValue;
use crate::dataset::DatasetKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category applied when a submission does not name one.
pub const DEFAULT_CATEGORY: &str = "general";

/// A scored submission.
///
/// Immutable once persisted; there are no update or delete operations.
/// `accuracy` is always recomputed server-side from `outputs` and never
/// trusted from the caller. `timestamp` is server-assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Identifier of the submitting model.
    pub model_name: String,
    /// Dataset the outputs were produced against.
    pub dataset: DatasetKind,
    /// Per-question submitted answers, keyed by question-id. The key set
    /// need not cover the full dataset; the score is relative to the
    /// subset submitted.
    pub outputs: BTreeMap<String, AnswerValue>,
    /// Fraction of submitted outputs that matched, in `[0.0, 1.0]`.
    pub accuracy: f64,
    /// Server-assigned submission time.
    pub timestamp: DateTime<Utc>,
    /// Leaderboard category, defaulting to [`DEFAULT_CATEGORY`].
    pub category: String,
}

impl Submission {
    /// CSV column order for exports, matching the record's field order.
    pub const CSV_HEADER: [&'static str; 6] = [
        "model_name",
        "dataset",
        "outputs",
        "accuracy",
        "timestamp",
        "category",
    ];
}
