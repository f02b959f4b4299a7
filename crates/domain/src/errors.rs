//! Validation error types surfaced to submitters.

/// Validation failures on inbound submissions.
///
/// The submit contract fixes the client-visible message for missing fields,
/// so the variant carries no detail about which field was absent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One or more of `model_name`, `dataset`, `outputs` is absent or empty.
    #[error("Missing required fields")]
    MissingRequiredFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_message_is_fixed() {
        assert_eq!(
            ValidationError::MissingRequiredFields.to_string(),
            "Missing required fields"
        );
    }
}
