//! PostgreSQL-backed submission persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use tracing::{debug, instrument};
use uuid::Uuid;

use reasoning_board_application::{ApplicationError, SubmissionFilter, SubmissionRepositoryPort};
use reasoning_board_domain::{DatasetKind, Submission};

use crate::{Error, Result};

/// PostgreSQL implementation of the submission repository port.
///
/// Outputs are stored as a JSONB document; the row id stays internal to
/// this layer and is never exposed on domain records.
pub struct PgSubmissionRepository {
    pool: PgPool,
}

impl PgSubmissionRepository {
    /// Create a repository over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_submission(row: sqlx::postgres::PgRow) -> Result<Submission> {
        let dataset: String = row.get("dataset");
        let dataset = dataset
            .parse::<DatasetKind>()
            .map_err(|e| Error::CorruptRecord(e.to_string()))?;

        let outputs: serde_json::Value = row.get("outputs");
        let outputs = serde_json::from_value(outputs)?;

        Ok(Submission {
            model_name: row.get("model_name"),
            dataset,
            outputs,
            accuracy: row.get("accuracy"),
            timestamp: row.get::<DateTime<Utc>, _>("submitted_at"),
            category: row.get("category"),
        })
    }
}

#[async_trait]
impl SubmissionRepositoryPort for PgSubmissionRepository {
    #[instrument(skip(self, submission), fields(model_name = %submission.model_name, dataset = %submission.dataset))]
    async fn insert(&self, submission: &Submission) -> std::result::Result<(), ApplicationError> {
        let id = Uuid::now_v7();
        let outputs = serde_json::to_value(&submission.outputs).map_err(Error::Serialization)?;

        sqlx::query(
            r#"
            INSERT INTO submissions (
                id, model_name, dataset, outputs, accuracy, submitted_at, category
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(id)
        .bind(&submission.model_name)
        .bind(submission.dataset.as_str())
        .bind(outputs)
        .bind(submission.accuracy)
        .bind(submission.timestamp)
        .bind(&submission.category)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        debug!(submission_id = %id, "submission stored");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find(
        &self,
        filter: &SubmissionFilter,
    ) -> std::result::Result<Vec<Submission>, ApplicationError> {
        // Build the WHERE clause from the optional exact-match filters.
        let mut conditions = vec!["1=1".to_string()];
        let mut param_count = 0;

        if filter.category.is_some() {
            param_count += 1;
            conditions.push(format!("category = ${}", param_count));
        }
        if filter.dataset.is_some() {
            param_count += 1;
            conditions.push(format!("dataset = ${}", param_count));
        }

        let sql = format!(
            r#"
            SELECT model_name, dataset, outputs, accuracy, submitted_at, category
            FROM submissions
            WHERE {}
            ORDER BY accuracy DESC, submitted_at ASC
            "#,
            conditions.join(" AND ")
        );

        let mut query = sqlx::query(&sql);
        if let Some(ref category) = filter.category {
            query = query.bind(category.as_str());
        }
        if let Some(dataset) = filter.dataset {
            query = query.bind(dataset.as_str());
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        let mut submissions = Vec::with_capacity(rows.len());
        for row in rows {
            submissions.push(Self::row_to_submission(row)?);
        }

        Ok(submissions)
    }
}

impl std::fmt::Debug for PgSubmissionRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgSubmissionRepository").finish_non_exhaustive()
    }
}
