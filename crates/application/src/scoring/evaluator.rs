//! Accuracy evaluation over a submission's outputs.

use crate::scoring::answer_key::AnswerKey;
use crate::scoring::comparator::answers_match;
use reasoning_board_domain::{AnswerValue, DatasetKind};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Scores a submission's outputs against an injected [`AnswerKey`].
///
/// Evaluation is deterministic given the outputs, the dataset, and the
/// current answer key contents, and has no side effects beyond logging.
#[derive(Clone)]
pub struct Evaluator {
    answer_key: Arc<dyn AnswerKey>,
}

impl Evaluator {
    /// Create an evaluator over the given answer key.
    pub fn new(answer_key: Arc<dyn AnswerKey>) -> Self {
        Self { answer_key }
    }

    /// Compute the accuracy ratio for one submission.
    ///
    /// Returns `correct / total` over the submitted outputs, or `0.0` when
    /// no outputs were submitted. A question-id the answer key does not
    /// know counts toward the total but can never be correct.
    #[instrument(skip(self, outputs), fields(dataset = %dataset, total = outputs.len()))]
    pub fn evaluate(&self, outputs: &BTreeMap<String, AnswerValue>, dataset: DatasetKind) -> f64 {
        if outputs.is_empty() {
            return 0.0;
        }

        let mut correct = 0usize;
        for (question_id, submitted) in outputs {
            match self.answer_key.lookup(question_id) {
                Some(expected) => {
                    if answers_match(dataset, expected, submitted) {
                        correct += 1;
                    }
                }
                None => {
                    warn!(question_id = %question_id, "question-id not in answer key; counted as incorrect");
                }
            }
        }

        let accuracy = correct as f64 / outputs.len() as f64;
        debug!(correct, accuracy, "evaluation complete");
        accuracy
    }
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::StaticAnswerKey;

    fn evaluator() -> Evaluator {
        Evaluator::new(Arc::new(StaticAnswerKey::builtin()))
    }

    fn outputs(entries: &[(&str, AnswerValue)]) -> BTreeMap<String, AnswerValue> {
        entries
            .iter()
            .map(|(id, value)| (id.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn empty_outputs_score_zero_for_every_dataset() {
        let evaluator = evaluator();
        for dataset in DatasetKind::ALL {
            assert_eq!(evaluator.evaluate(&BTreeMap::new(), dataset), 0.0);
        }
    }

    #[test]
    fn exact_math_answer_scores_full() {
        let accuracy = evaluator().evaluate(
            &outputs(&[("math_1", AnswerValue::Integer(42))]),
            DatasetKind::Math,
        );
        assert_eq!(accuracy, 1.0);
    }

    #[test]
    fn math_answer_within_tolerance_scores_full() {
        let accuracy = evaluator().evaluate(
            &outputs(&[("math_1", AnswerValue::Real(42.0000001))]),
            DatasetKind::Math,
        );
        assert_eq!(accuracy, 1.0);
    }

    #[test]
    fn wrong_boolean_scores_zero() {
        let accuracy = evaluator().evaluate(
            &outputs(&[("logic_1", AnswerValue::Boolean(false))]),
            DatasetKind::Logic,
        );
        assert_eq!(accuracy, 0.0);
    }

    #[test]
    fn partial_credit_is_the_correct_fraction() {
        let accuracy = evaluator().evaluate(
            &outputs(&[
                ("math_1", AnswerValue::Integer(42)),
                ("math_2", AnswerValue::Real(2.71828)),
            ]),
            DatasetKind::Math,
        );
        assert_eq!(accuracy, 0.5);
    }

    #[test]
    fn unknown_question_counts_toward_total_but_never_matches() {
        let accuracy = evaluator().evaluate(
            &outputs(&[
                ("math_1", AnswerValue::Integer(42)),
                ("math_999", AnswerValue::from("")),
            ]),
            DatasetKind::Math,
        );
        // The empty-string submission does not get credit for an unknown
        // question; only math_1 scores.
        assert_eq!(accuracy, 0.5);
    }
}
