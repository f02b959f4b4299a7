//! CSV export of the full submission collection.

use super::{SubmissionFilter, SubmissionRepositoryPort};
use crate::{ApplicationError, ApplicationResult};
use reasoning_board_domain::Submission;
use std::sync::Arc;
use tracing::instrument;

/// Renders the stored collection as comma-separated text.
pub struct ExportService {
    repository: Arc<dyn SubmissionRepositoryPort>,
}

impl ExportService {
    /// Create an export service over a repository.
    pub fn new(repository: Arc<dyn SubmissionRepositoryPort>) -> Self {
        Self { repository }
    }

    /// Render every stored submission as CSV.
    ///
    /// The header row is always present; zero submissions produce a
    /// header-only document rather than an error.
    #[instrument(skip(self))]
    pub async fn export_csv(&self) -> ApplicationResult<String> {
        let submissions = self.repository.find(&SubmissionFilter::default()).await?;
        render_csv(&submissions)
    }
}

impl std::fmt::Debug for ExportService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportService").finish_non_exhaustive()
    }
}

fn render_csv(submissions: &[Submission]) -> ApplicationResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(Submission::CSV_HEADER)
        .map_err(|e| ApplicationError::Internal(e.to_string()))?;

    for submission in submissions {
        let outputs = serde_json::to_string(&submission.outputs)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        let accuracy = submission.accuracy.to_string();
        let timestamp = submission.timestamp.to_rfc3339();

        writer
            .write_record([
                submission.model_name.as_str(),
                submission.dataset.as_str(),
                outputs.as_str(),
                accuracy.as_str(),
                timestamp.as_str(),
                submission.category.as_str(),
            ])
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ApplicationError::Internal(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ApplicationError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reasoning_board_domain::{AnswerValue, DatasetKind};
    use std::collections::BTreeMap;

    #[test]
    fn empty_collection_renders_header_only() {
        let csv = render_csv(&[]).unwrap();
        assert_eq!(csv, "model_name,dataset,outputs,accuracy,timestamp,category\n");
    }

    #[test]
    fn rows_carry_all_submission_fields() {
        let submission = Submission {
            model_name: "gpt-test".to_string(),
            dataset: DatasetKind::Math,
            outputs: BTreeMap::from([("math_1".to_string(), AnswerValue::Integer(42))]),
            accuracy: 1.0,
            timestamp: "2026-01-15T12:00:00Z".parse().unwrap(),
            category: "general".to_string(),
        };

        let csv = render_csv(std::slice::from_ref(&submission)).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("model_name,dataset,outputs,accuracy,timestamp,category")
        );

        let row = lines.next().unwrap();
        assert!(row.starts_with("gpt-test,math,"));
        // The outputs JSON cell contains commas, so the csv writer must
        // have quoted it.
        assert!(row.contains("\"{\"\"math_1\"\":42}\""));
        assert!(row.contains("general"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn commas_in_model_names_are_escaped() {
        let submission = Submission {
            model_name: "vendor, inc. model".to_string(),
            dataset: DatasetKind::Cs,
            outputs: BTreeMap::from([("cs_1".to_string(), AnswerValue::from("x"))]),
            accuracy: 0.0,
            timestamp: "2026-01-15T12:00:00Z".parse().unwrap(),
            category: "general".to_string(),
        };

        let csv = render_csv(std::slice::from_ref(&submission)).unwrap();
        assert!(csv.contains("\"vendor, inc. model\""));
    }
}
