use chrono::NaiveDateTime;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::scoring::{JudgeInfo, SubmissionScore};
use crate::error::Result;
use crate::models::{Score, ScoreEntry};

#[derive(FromRow)]
struct UpsertedScore {
    score_id: Uuid,
    inserted: bool,
}

#[derive(FromRow)]
struct ScoreWithJudgeRow {
    score_id: Uuid,
    submission_id: Uuid,
    judge_id: Uuid,
    rubric_id: Uuid,
    #[sqlx(json)]
    scores: Vec<ScoreEntry>,
    total_score: f64,
    weighted_score: f64,
    overall_comment: Option<String>,
    compared_with: Vec<Uuid>,
    status: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    judge_display_name: Option<String>,
    judge_avatar_url: Option<String>,
}

/// Repository for judging score operations.
pub struct ScoreRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoreRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Upsert a judge's score for a submission, keyed on the unique
    /// (submission, judge) pair. Resubmission overwrites the previous values
    /// in place, so retries never create duplicates. Returns the score id and
    /// whether this was the first-ever score for the pair (`xmax = 0` holds
    /// only for freshly inserted rows).
    #[allow(clippy::too_many_arguments)]
    pub async fn upsert(
        &self,
        submission_id: Uuid,
        judge_id: Uuid,
        rubric_id: Uuid,
        scores: Vec<ScoreEntry>,
        total_score: f64,
        weighted_score: f64,
        overall_comment: Option<&str>,
        compared_with: &[Uuid],
    ) -> Result<(Uuid, bool)> {
        let row = sqlx::query_as::<_, UpsertedScore>(
            r#"
            INSERT INTO judging_scores (
                submission_id, judge_id, rubric_id, scores, total_score,
                weighted_score, overall_comment, compared_with, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'completed')
            ON CONFLICT (submission_id, judge_id) DO UPDATE SET
                rubric_id = EXCLUDED.rubric_id,
                scores = EXCLUDED.scores,
                total_score = EXCLUDED.total_score,
                weighted_score = EXCLUDED.weighted_score,
                overall_comment = EXCLUDED.overall_comment,
                compared_with = EXCLUDED.compared_with,
                status = EXCLUDED.status,
                updated_at = now()
            RETURNING score_id, (xmax = 0) AS inserted
            "#,
        )
        .bind(submission_id)
        .bind(judge_id)
        .bind(rubric_id)
        .bind(Json(scores))
        .bind(total_score)
        .bind(weighted_score)
        .bind(overall_comment)
        .bind(compared_with)
        .fetch_one(self.pool)
        .await?;

        Ok((row.score_id, row.inserted))
    }

    /// All judges' scores for one submission, with judge display identity.
    pub async fn list_by_submission(&self, submission_id: Uuid) -> Result<Vec<SubmissionScore>> {
        let rows = sqlx::query_as::<_, ScoreWithJudgeRow>(
            r#"
            SELECT s.score_id, s.submission_id, s.judge_id, s.rubric_id, s.scores,
                   s.total_score, s.weighted_score, s.overall_comment, s.compared_with,
                   s.status, s.created_at, s.updated_at,
                   u.display_name AS judge_display_name,
                   u.avatar_url AS judge_avatar_url
            FROM judging_scores s
            LEFT JOIN users u ON u.user_id = s.judge_id
            WHERE s.submission_id = $1
            ORDER BY s.created_at
            "#,
        )
        .bind(submission_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(SubmissionScore::from).collect())
    }

    /// A judge's scores restricted to submissions of one event.
    pub async fn list_by_judge_and_event(
        &self,
        event_id: Uuid,
        judge_id: Uuid,
    ) -> Result<Vec<Score>> {
        let scores = sqlx::query_as::<_, Score>(
            r#"
            SELECT s.score_id, s.submission_id, s.judge_id, s.rubric_id, s.scores,
                   s.total_score, s.weighted_score, s.overall_comment, s.compared_with,
                   s.status, s.created_at, s.updated_at
            FROM judging_scores s
            INNER JOIN submissions sub ON sub.submission_id = s.submission_id
            WHERE s.judge_id = $1 AND sub.event_id = $2
            ORDER BY s.created_at
            "#,
        )
        .bind(judge_id)
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(scores)
    }
}

impl From<ScoreWithJudgeRow> for SubmissionScore {
    fn from(row: ScoreWithJudgeRow) -> Self {
        let judge = row.judge_display_name.map(|display_name| JudgeInfo {
            user_id: row.judge_id,
            display_name,
            avatar_url: row.judge_avatar_url,
        });

        Self {
            score: Score {
                score_id: row.score_id,
                submission_id: row.submission_id,
                judge_id: row.judge_id,
                rubric_id: row.rubric_id,
                scores: row.scores,
                total_score: row.total_score,
                weighted_score: row.weighted_score,
                overall_comment: row.overall_comment,
                compared_with: row.compared_with,
                status: row.status,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            judge,
        }
    }
}
