//! Evaluation and scoring core.
//!
//! The scoring pipeline is: look up the expected answer for each submitted
//! question-id ([`AnswerKey`]), apply the dataset's comparator policy
//! ([`answers_match`]), and reduce the outcomes to an accuracy ratio
//! ([`Evaluator`]).

pub mod answer_key;
pub mod comparator;
pub mod evaluator;

pub use answer_key::{AnswerKey, StaticAnswerKey};
pub use comparator::{answers_match, NUMERIC_TOLERANCE};
pub use evaluator::Evaluator;
