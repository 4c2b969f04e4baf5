use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Rubric, RubricCriterion, total_max_score};

/// Repository for judging rubric operations.
pub struct RubricRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RubricRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create the rubric for an (event, track) pair. `total_max_score` is
    /// derived from the criteria; the pair is unique, so a second create for
    /// the same event and track is rejected.
    pub async fn create(
        &self,
        event_id: Uuid,
        track_id: Option<&str>,
        criteria: Vec<RubricCriterion>,
    ) -> Result<Rubric> {
        let total = total_max_score(&criteria);

        let rubric = sqlx::query_as::<_, Rubric>(
            r#"
            INSERT INTO judging_rubrics (event_id, track_id, criteria, total_max_score)
            VALUES ($1, $2, $3, $4)
            RETURNING rubric_id, event_id, track_id, criteria, total_max_score,
                      created_at, updated_at
            "#,
        )
        .bind(event_id)
        .bind(track_id)
        .bind(Json(criteria))
        .bind(total)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23505") {
                    return StorageError::ConstraintViolation(
                        "A rubric already exists for this event and track".to_string(),
                    );
                }
            }
            StorageError::from(e)
        })?;

        Ok(rubric)
    }

    /// Replace a rubric's criteria wholesale, recomputing `total_max_score`.
    /// Existing scores keep the weights they were computed with.
    pub async fn update(&self, rubric_id: Uuid, criteria: Vec<RubricCriterion>) -> Result<Rubric> {
        let total = total_max_score(&criteria);

        let rubric = sqlx::query_as::<_, Rubric>(
            r#"
            UPDATE judging_rubrics
            SET criteria = $2, total_max_score = $3, updated_at = now()
            WHERE rubric_id = $1
            RETURNING rubric_id, event_id, track_id, criteria, total_max_score,
                      created_at, updated_at
            "#,
        )
        .bind(rubric_id)
        .bind(Json(criteria))
        .bind(total)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("rubric"))?;

        Ok(rubric)
    }

    pub async fn find_by_id(&self, rubric_id: Uuid) -> Result<Rubric> {
        let rubric = sqlx::query_as::<_, Rubric>(
            r#"
            SELECT rubric_id, event_id, track_id, criteria, total_max_score,
                   created_at, updated_at
            FROM judging_rubrics
            WHERE rubric_id = $1
            "#,
        )
        .bind(rubric_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("rubric"))?;

        Ok(rubric)
    }

    /// Look up the rubric for an event: exact track match when a track is
    /// given, otherwise the event-wide (track-less) rubric.
    pub async fn find_by_event_track(
        &self,
        event_id: Uuid,
        track_id: Option<&str>,
    ) -> Result<Rubric> {
        let rubric = sqlx::query_as::<_, Rubric>(
            r#"
            SELECT rubric_id, event_id, track_id, criteria, total_max_score,
                   created_at, updated_at
            FROM judging_rubrics
            WHERE event_id = $1 AND COALESCE(track_id, '') = COALESCE($2, '')
            "#,
        )
        .bind(event_id)
        .bind(track_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("rubric"))?;

        Ok(rubric)
    }
}
