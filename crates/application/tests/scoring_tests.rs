//! Tests for the evaluation core: comparator policies, answer key lookup,
//! and accuracy reduction.

use proptest::prelude::*;
use reasoning_board_application::scoring::{answers_match, Evaluator, StaticAnswerKey};
use reasoning_board_application::NUMERIC_TOLERANCE;
use reasoning_board_domain::{AnswerValue, DatasetKind};
use std::collections::BTreeMap;
use std::sync::Arc;

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
fn math_exact_integer_scores_full() {
    let accuracy = evaluator().evaluate(
        &outputs(&[("math_1", AnswerValue::Integer(42))]),
        DatasetKind::Math,
    );
    assert_eq!(accuracy, 1.0);
}

#[test]
fn math_within_tolerance_scores_full() {
    let accuracy = evaluator().evaluate(
        &outputs(&[("math_1", AnswerValue::Real(42.000_000_1))]),
        DatasetKind::Math,
    );
    assert_eq!(accuracy, 1.0);
}

#[test]
fn logic_wrong_boolean_scores_zero() {
    let accuracy = evaluator().evaluate(
        &outputs(&[("logic_1", AnswerValue::Boolean(false))]),
        DatasetKind::Logic,
    );
    assert_eq!(accuracy, 0.0);
}

#[test]
fn cs_sequence_in_order_scores_full() {
    let accuracy = evaluator().evaluate(
        &outputs(&[(
            "cs_1",
            AnswerValue::Sequence(vec![
                AnswerValue::from("sort"),
                AnswerValue::from("merge"),
                AnswerValue::from("quick"),
            ]),
        )]),
        DatasetKind::Cs,
    );
    assert_eq!(accuracy, 1.0);
}

#[test]
fn cs_sequence_reordered_scores_zero() {
    let accuracy = evaluator().evaluate(
        &outputs(&[(
            "cs_1",
            AnswerValue::Sequence(vec![
                AnswerValue::from("quick"),
                AnswerValue::from("merge"),
                AnswerValue::from("sort"),
            ]),
        )]),
        DatasetKind::Cs,
    );
    assert_eq!(accuracy, 0.0);
}

#[test]
fn all_correct_outputs_score_one() {
    let accuracy = evaluator().evaluate(
        &outputs(&[
            ("math_1", AnswerValue::Integer(42)),
            ("math_2", AnswerValue::Real(3.14159)),
        ]),
        DatasetKind::Math,
    );
    assert_eq!(accuracy, 1.0);
}

#[test]
fn no_correct_outputs_score_zero() {
    let accuracy = evaluator().evaluate(
        &outputs(&[
            ("math_1", AnswerValue::Integer(7)),
            ("math_2", AnswerValue::Real(2.71828)),
        ]),
        DatasetKind::Math,
    );
    assert_eq!(accuracy, 0.0);
}

#[test]
fn empty_outputs_score_zero_without_panicking() {
    for dataset in DatasetKind::ALL {
        assert_eq!(evaluator().evaluate(&BTreeMap::new(), dataset), 0.0);
    }
}

#[test]
fn accuracy_ignores_entry_insertion_order() {
    let forward = outputs(&[
        ("math_1", AnswerValue::Integer(42)),
        ("math_2", AnswerValue::Real(1.0)),
        ("math_999", AnswerValue::from("anything")),
    ]);
    let mut reversed = BTreeMap::new();
    for (id, value) in forward.iter().rev() {
        reversed.insert(id.clone(), value.clone());
    }

    let evaluator = evaluator();
    assert_eq!(
        evaluator.evaluate(&forward, DatasetKind::Math),
        evaluator.evaluate(&reversed, DatasetKind::Math),
    );
}

#[test]
fn unknown_dataset_string_is_a_typed_error() {
    // Unknown datasets never reach the evaluator; the boundary parse fails.
    let err = "unknown_dataset".parse::<DatasetKind>().unwrap_err();
    assert_eq!(err.to_string(), "Unsupported dataset: unknown_dataset");
}

#[test]
fn custom_answer_key_is_honored() {
    let key = StaticAnswerKey::new(BTreeMap::from([(
        "q1".to_string(),
        AnswerValue::from("yes"),
    )]));
    let evaluator = Evaluator::new(Arc::new(key));

    let accuracy = evaluator.evaluate(
        &outputs(&[("q1", AnswerValue::from("  YES "))]),
        DatasetKind::Logic,
    );
    assert_eq!(accuracy, 1.0);
}

proptest! {
    #[test]
    fn numeric_match_agrees_with_tolerance(submitted in -1e9f64..1e9f64) {
        let expected = AnswerValue::Integer(42);
        let matched = answers_match(
            DatasetKind::Math,
            &expected,
            &AnswerValue::Real(submitted),
        );
        prop_assert_eq!(matched, (submitted - 42.0).abs() < NUMERIC_TOLERANCE);
    }

    #[test]
    fn accuracy_is_always_a_valid_ratio(
        answers in proptest::collection::btree_map(
            "[a-z]{1,8}_[0-9]{1,3}",
            -1000i64..1000i64,
            0..8,
        )
    ) {
        let outputs: BTreeMap<String, AnswerValue> = answers
            .into_iter()
            .map(|(id, value)| (id, AnswerValue::Integer(value)))
            .collect();

        for dataset in DatasetKind::ALL {
            let accuracy = evaluator().evaluate(&outputs, dataset);
            prop_assert!((0.0..=1.0).contains(&accuracy));
        }
    }
}
