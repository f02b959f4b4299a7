//! Per-dataset answer comparison policies.
//!
//! Each dataset has one policy, dispatched exhaustively over
//! [`DatasetKind`]. Policies that do not recognize the expected value's
//! shape fall back to normalized-text equality.

use reasoning_board_domain::{AnswerValue, DatasetKind};

/// Absolute tolerance for numeric math answers.
pub const NUMERIC_TOLERANCE: f64 = 1e-6;

/// Decide whether a submitted answer matches the expected answer under the
/// dataset's comparison policy.
pub fn answers_match(
    dataset: DatasetKind,
    expected: &AnswerValue,
    submitted: &AnswerValue,
) -> bool {
    match dataset {
        DatasetKind::Math => match_math(expected, submitted),
        DatasetKind::Logic => match_logic(expected, submitted),
        DatasetKind::Cs => match_cs(expected, submitted),
    }
}

/// Numeric expected answers accept any numeric submission within
/// [`NUMERIC_TOLERANCE`]; a non-numeric submission never matches them.
fn match_math(expected: &AnswerValue, submitted: &AnswerValue) -> bool {
    match expected.as_f64() {
        Some(expected_num) => submitted
            .as_f64()
            .map(|submitted_num| (submitted_num - expected_num).abs() < NUMERIC_TOLERANCE)
            .unwrap_or(false),
        None => text_match(expected, submitted),
    }
}

/// Boolean expected answers require a boolean submission equal by value.
fn match_logic(expected: &AnswerValue, submitted: &AnswerValue) -> bool {
    match expected {
        AnswerValue::Boolean(expected_bool) => {
            matches!(submitted, AnswerValue::Boolean(submitted_bool) if submitted_bool == expected_bool)
        }
        _ => text_match(expected, submitted),
    }
}

/// Structured expected answers require structural equality: same variant,
/// same elements, order-sensitive for sequences.
fn match_cs(expected: &AnswerValue, submitted: &AnswerValue) -> bool {
    match expected {
        AnswerValue::Sequence(_) | AnswerValue::Mapping(_) => submitted == expected,
        _ => text_match(expected, submitted),
    }
}

fn text_match(expected: &AnswerValue, submitted: &AnswerValue) -> bool {
    submitted.canonical_text() == expected.canonical_text()
}
