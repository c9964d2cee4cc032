//! PostgreSQL implementation of DecisionRepository.
//!
//! Persists decisions to a single `decisions` table. The structured
//! request fields (options, priorities) and the analysis record are
//! stored as `jsonb` columns; row identity and ownership are plain
//! columns so lookups stay indexable.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::domain::decision::{AnalysisRecord, PriorityWeight, SavedDecision};
use crate::domain::foundation::{DecisionId, UserId};
use crate::ports::{DecisionRepository, RepositoryError};

/// PostgreSQL implementation of DecisionRepository.
#[derive(Clone)]
pub struct PostgresDecisionRepository {
    pool: PgPool,
}

impl PostgresDecisionRepository {
    /// Creates a new PostgresDecisionRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DecisionRepository for PostgresDecisionRepository {
    async fn save(&self, decision: &SavedDecision) -> Result<DecisionId, RepositoryError> {
        let options = serde_json::to_value(&decision.options)
            .map_err(|e| RepositoryError::corrupt(e.to_string()))?;
        let priorities = serde_json::to_value(&decision.priorities)
            .map_err(|e| RepositoryError::corrupt(e.to_string()))?;
        let analysis = serde_json::to_value(&decision.analysis_result)
            .map_err(|e| RepositoryError::corrupt(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO decisions (
                id, user_id, title, context, options, priorities,
                analysis_result, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(decision.id.as_uuid())
        .bind(decision.user_id.as_str())
        .bind(&decision.title)
        .bind(&decision.context)
        .bind(options)
        .bind(priorities)
        .bind(analysis)
        .bind(decision.created_at)
        .bind(decision.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::database(format!("Failed to insert decision: {e}")))?;

        Ok(decision.id)
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<SavedDecision>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, title, context, options, priorities,
                   analysis_result, created_at, updated_at
            FROM decisions
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::database(format!("Failed to fetch decisions: {e}")))?;

        rows.into_iter().map(row_to_decision).collect()
    }

    async fn find_by_id(
        &self,
        id: &DecisionId,
        user_id: &UserId,
    ) -> Result<Option<SavedDecision>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, title, context, options, priorities,
                   analysis_result, created_at, updated_at
            FROM decisions
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::database(format!("Failed to fetch decision: {e}")))?;

        row.map(row_to_decision).transpose()
    }

    async fn delete(&self, id: &DecisionId, user_id: &UserId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM decisions WHERE id = $1 AND user_id = $2")
            .bind(id.as_uuid())
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to delete decision: {e}")))?;

        Ok(result.rows_affected() > 0)
    }
}

/// Maps a database row back into a SavedDecision.
fn row_to_decision(row: sqlx::postgres::PgRow) -> Result<SavedDecision, RepositoryError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| RepositoryError::database(e.to_string()))?;
    let user_id: String = row
        .try_get("user_id")
        .map_err(|e| RepositoryError::database(e.to_string()))?;
    let title: String = row
        .try_get("title")
        .map_err(|e| RepositoryError::database(e.to_string()))?;
    let context: String = row
        .try_get("context")
        .map_err(|e| RepositoryError::database(e.to_string()))?;
    let options: serde_json::Value = row
        .try_get("options")
        .map_err(|e| RepositoryError::database(e.to_string()))?;
    let priorities: serde_json::Value = row
        .try_get("priorities")
        .map_err(|e| RepositoryError::database(e.to_string()))?;
    let analysis: serde_json::Value = row
        .try_get("analysis_result")
        .map_err(|e| RepositoryError::database(e.to_string()))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| RepositoryError::database(e.to_string()))?;
    let updated_at: DateTime<Utc> = row
        .try_get("updated_at")
        .map_err(|e| RepositoryError::database(e.to_string()))?;

    let options: Vec<String> = serde_json::from_value(options)
        .map_err(|e| RepositoryError::corrupt(format!("options column: {e}")))?;
    let priorities: Vec<PriorityWeight> = serde_json::from_value(priorities)
        .map_err(|e| RepositoryError::corrupt(format!("priorities column: {e}")))?;
    let analysis_result: AnalysisRecord = serde_json::from_value(analysis)
        .map_err(|e| RepositoryError::corrupt(format!("analysis_result column: {e}")))?;
    let user_id =
        UserId::new(user_id).map_err(|e| RepositoryError::corrupt(format!("user_id column: {e}")))?;

    Ok(SavedDecision {
        id: DecisionId::from(id),
        user_id,
        title,
        context,
        options,
        priorities,
        analysis_result,
        created_at,
        updated_at,
    })
}
