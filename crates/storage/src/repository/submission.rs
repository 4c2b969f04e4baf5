use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::Result;
use crate::models::Submission;

/// Aggregated completed-score totals for one submission, input to the
/// ranking computation.
#[derive(Debug, Clone, FromRow)]
pub struct ScoreAggregate {
    pub submission_id: Uuid,
    pub weighted_total: f64,
    pub judge_count: i64,
}

/// Repository for the judging-relevant slice of submissions.
pub struct SubmissionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SubmissionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, submission_id: Uuid) -> Result<Option<Submission>> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            SELECT submission_id, event_id, team_id, track_id, project_name, tagline,
                   status, submitted_at, average_score, total_judges, rank,
                   created_at, updated_at
            FROM submissions
            WHERE submission_id = $1
            "#,
        )
        .bind(submission_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(submission)
    }

    /// The ranking cohort for an event: every submitted or already-judged
    /// submission with its completed-score totals. Including judged rows
    /// keeps ranking runs idempotent, so a run after late scores converges
    /// instead of skipping previously ranked submissions.
    pub async fn ranking_cohort(&self, event_id: Uuid) -> Result<Vec<ScoreAggregate>> {
        let aggregates = sqlx::query_as::<_, ScoreAggregate>(
            r#"
            SELECT sub.submission_id,
                   COALESCE(SUM(js.weighted_score), 0) AS weighted_total,
                   COUNT(js.score_id) AS judge_count
            FROM submissions sub
            LEFT JOIN judging_scores js
                ON js.submission_id = sub.submission_id AND js.status = 'completed'
            WHERE sub.event_id = $1 AND sub.status IN ('submitted', 'judged')
            GROUP BY sub.submission_id
            ORDER BY sub.submission_id
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(aggregates)
    }

    /// Overwrite a submission's denormalized ranking outputs and mark it
    /// judged.
    pub async fn apply_ranking(
        &self,
        submission_id: Uuid,
        average_score: f64,
        total_judges: i32,
        rank: i32,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE submissions
            SET average_score = $2, total_judges = $3, rank = $4,
                status = 'judged', updated_at = now()
            WHERE submission_id = $1
            "#,
        )
        .bind(submission_id)
        .bind(average_score)
        .bind(total_judges)
        .bind(rank)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
