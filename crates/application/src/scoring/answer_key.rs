//! Expected-answer lookup.
//!
//! The answer key is injected into the [`Evaluator`](super::Evaluator) as a
//! trait object so the fixed in-memory table can be swapped for an external
//! store without touching the scoring logic.

use reasoning_board_domain::AnswerValue;
use std::collections::BTreeMap;

/// Read-only lookup of canonical expected answers by question-id.
pub trait AnswerKey: Send + Sync {
    /// Look up the expected answer for a question, if the key knows it.
    fn lookup(&self, question_id: &str) -> Option<&AnswerValue>;
}

/// A fixed in-memory answer table.
///
/// Loaded once, never mutated. [`StaticAnswerKey::builtin`] carries the
/// bundled question set; production deployments are expected to replace
/// this with a store-backed implementation of [`AnswerKey`].
#[derive(Debug, Clone)]
pub struct StaticAnswerKey {
    answers: BTreeMap<String, AnswerValue>,
}

impl StaticAnswerKey {
    /// Create a key from an explicit answer table.
    pub fn new(answers: BTreeMap<String, AnswerValue>) -> Self {
        Self { answers }
    }

    /// The bundled answer table.
    pub fn builtin() -> Self {
        let answers = BTreeMap::from([
            ("math_1".to_string(), AnswerValue::Integer(42)),
            ("math_2".to_string(), AnswerValue::Real(3.14159)),
            ("logic_1".to_string(), AnswerValue::Boolean(true)),
            ("logic_2".to_string(), AnswerValue::from("valid")),
            (
                "cs_1".to_string(),
                AnswerValue::Sequence(vec![
                    AnswerValue::from("sort"),
                    AnswerValue::from("merge"),
                    AnswerValue::from("quick"),
                ]),
            ),
            (
                "cs_2".to_string(),
                AnswerValue::Mapping(BTreeMap::from([
                    ("time".to_string(), AnswerValue::from("O(n)")),
                    ("space".to_string(), AnswerValue::from("O(1)")),
                ])),
            ),
        ]);
        Self { answers }
    }

    /// Number of questions the key knows.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether the key is empty.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl Default for StaticAnswerKey {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AnswerKey for StaticAnswerKey {
    fn lookup(&self, question_id: &str) -> Option<&AnswerValue> {
        self.answers.get(question_id)
    }
}
