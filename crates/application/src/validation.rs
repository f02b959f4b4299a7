//! Inbound request validation.

use reasoning_board_domain::{AnswerValue, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of a `POST /api/submit` request.
///
/// Every field carries a serde default so that an absent field reaches
/// [`SubmitRequest::validate`] as empty instead of failing JSON
/// deserialization; the submit contract fixes the 400 response for missing
/// fields to one message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRequest {
    /// Identifier of the submitting model.
    #[serde(default)]
    pub model_name: String,
    /// Dataset name; parsed to a `DatasetKind` after validation.
    #[serde(default)]
    pub dataset: String,
    /// Per-question submitted answers.
    #[serde(default)]
    pub outputs: BTreeMap<String, AnswerValue>,
    /// Optional leaderboard category.
    #[serde(default)]
    pub category: Option<String>,
}

impl SubmitRequest {
    /// Check the required-fields rule: `model_name`, `dataset`, and
    /// `outputs` must all be present and non-empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model_name.is_empty() || self.dataset.is_empty() || self.outputs.is_empty() {
            return Err(ValidationError::MissingRequiredFields);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SubmitRequest {
        SubmitRequest {
            model_name: "gpt-test".to_string(),
            dataset: "math".to_string(),
            outputs: BTreeMap::from([("math_1".to_string(), AnswerValue::Integer(42))]),
            category: None,
        }
    }

    #[test]
    fn accepts_complete_request() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn rejects_missing_model_name() {
        let request = SubmitRequest {
            model_name: String::new(),
            ..valid_request()
        };
        assert_eq!(
            request.validate(),
            Err(ValidationError::MissingRequiredFields)
        );
    }

    #[test]
    fn rejects_missing_dataset() {
        let request = SubmitRequest {
            dataset: String::new(),
            ..valid_request()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn rejects_empty_outputs() {
        let request = SubmitRequest {
            outputs: BTreeMap::new(),
            ..valid_request()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn absent_json_fields_deserialize_to_empty() {
        let request: SubmitRequest = serde_json::from_str("{}").unwrap();
        assert!(request.validate().is_err());
        assert!(request.category.is_none());
    }
}
