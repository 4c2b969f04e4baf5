use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::assignment::{
    AssignedSubmission, AssignmentDetail, AssignmentWithJudge, TeamInfo,
};
use crate::dto::scoring::JudgeInfo;
use crate::error::{Result, StorageError};
use crate::models::Assignment;

#[derive(FromRow)]
struct AssignmentWithJudgeRow {
    assignment_id: Uuid,
    event_id: Uuid,
    judge_id: Uuid,
    submission_ids: Vec<Uuid>,
    track_id: Option<String>,
    completed_count: i32,
    total_count: i32,
    created_at: chrono::NaiveDateTime,
    judge_display_name: Option<String>,
    judge_avatar_url: Option<String>,
}

#[derive(FromRow)]
struct AssignedSubmissionRow {
    submission_id: Uuid,
    team_id: Uuid,
    track_id: Option<String>,
    project_name: String,
    tagline: String,
    status: String,
    team_name: Option<String>,
    team_avatar_url: Option<String>,
    score_id: Option<Uuid>,
    is_scored: bool,
}

/// Repository for judge assignment operations.
pub struct AssignmentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AssignmentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Upsert the assignment for an (event, judge) pair: the submission list
    /// is replaced and `total_count` reset to its length. `completed_count`
    /// is recounted from the judge's completed scores within the new list
    /// rather than carried over, so shrinking or swapping the list cannot
    /// leave the counter out of step with it.
    pub async fn upsert(
        &self,
        event_id: Uuid,
        judge_id: Uuid,
        submission_ids: &[Uuid],
        track_id: Option<&str>,
    ) -> Result<Assignment> {
        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            INSERT INTO judging_assignments (
                event_id, judge_id, submission_ids, track_id, completed_count, total_count
            )
            VALUES (
                $1, $2, $3, $4,
                (SELECT COUNT(*) FROM judging_scores js
                 WHERE js.judge_id = $2
                   AND js.status = 'completed'
                   AND js.submission_id = ANY ($3)),
                $5
            )
            ON CONFLICT (event_id, judge_id) DO UPDATE SET
                submission_ids = EXCLUDED.submission_ids,
                total_count = EXCLUDED.total_count,
                completed_count = EXCLUDED.completed_count
            RETURNING assignment_id, event_id, judge_id, submission_ids, track_id,
                      completed_count, total_count, created_at
            "#,
        )
        .bind(event_id)
        .bind(judge_id)
        .bind(submission_ids)
        .bind(track_id)
        .bind(submission_ids.len() as i32)
        .fetch_one(self.pool)
        .await?;

        Ok(assignment)
    }

    /// Atomically bump `completed_count` after a judge's first score for a
    /// submission. Returns false when the judge has no assignment for the
    /// event; the caller treats that as a no-op.
    pub async fn increment_completed(&self, event_id: Uuid, judge_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE judging_assignments
            SET completed_count = completed_count + 1
            WHERE event_id = $1 AND judge_id = $2
            "#,
        )
        .bind(event_id)
        .bind(judge_id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// All assignments for an event with judge identity, for the organizer's
    /// progress view.
    pub async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<AssignmentWithJudge>> {
        let rows = sqlx::query_as::<_, AssignmentWithJudgeRow>(
            r#"
            SELECT a.assignment_id, a.event_id, a.judge_id, a.submission_ids, a.track_id,
                   a.completed_count, a.total_count, a.created_at,
                   u.display_name AS judge_display_name,
                   u.avatar_url AS judge_avatar_url
            FROM judging_assignments a
            LEFT JOIN users u ON u.user_id = a.judge_id
            WHERE a.event_id = $1
            ORDER BY a.created_at
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(AssignmentWithJudge::from).collect())
    }

    pub async fn find_by_event_judge(
        &self,
        event_id: Uuid,
        judge_id: Uuid,
    ) -> Result<Assignment> {
        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            SELECT assignment_id, event_id, judge_id, submission_ids, track_id,
                   completed_count, total_count, created_at
            FROM judging_assignments
            WHERE event_id = $1 AND judge_id = $2
            "#,
        )
        .bind(event_id)
        .bind(judge_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("assignment"))?;

        Ok(assignment)
    }

    /// One judge's assignment with per-submission enrichment: team summary
    /// plus whether this judge already has a completed score. Assigned ids
    /// that no longer resolve to a submission are dropped.
    pub async fn find_detail(&self, event_id: Uuid, judge_id: Uuid) -> Result<AssignmentDetail> {
        let assignment = self.find_by_event_judge(event_id, judge_id).await?;

        let rows = sqlx::query_as::<_, AssignedSubmissionRow>(
            r#"
            SELECT sub.submission_id, sub.team_id, sub.track_id, sub.project_name,
                   sub.tagline, sub.status,
                   t.name AS team_name,
                   t.avatar_url AS team_avatar_url,
                   js.score_id,
                   COALESCE(js.status = 'completed', false) AS is_scored
            FROM unnest($1::uuid[]) WITH ORDINALITY AS assigned(id, ord)
            INNER JOIN submissions sub ON sub.submission_id = assigned.id
            LEFT JOIN teams t ON t.team_id = sub.team_id
            LEFT JOIN judging_scores js
                ON js.submission_id = sub.submission_id AND js.judge_id = $2
            ORDER BY assigned.ord
            "#,
        )
        .bind(&assignment.submission_ids)
        .bind(judge_id)
        .fetch_all(self.pool)
        .await?;

        let submissions = rows.into_iter().map(AssignedSubmission::from).collect();

        Ok(AssignmentDetail {
            assignment,
            submissions,
        })
    }
}

impl From<AssignmentWithJudgeRow> for AssignmentWithJudge {
    fn from(row: AssignmentWithJudgeRow) -> Self {
        let judge = row.judge_display_name.map(|display_name| JudgeInfo {
            user_id: row.judge_id,
            display_name,
            avatar_url: row.judge_avatar_url,
        });

        Self {
            assignment: Assignment {
                assignment_id: row.assignment_id,
                event_id: row.event_id,
                judge_id: row.judge_id,
                submission_ids: row.submission_ids,
                track_id: row.track_id,
                completed_count: row.completed_count,
                total_count: row.total_count,
                created_at: row.created_at,
            },
            judge,
        }
    }
}

impl From<AssignedSubmissionRow> for AssignedSubmission {
    fn from(row: AssignedSubmissionRow) -> Self {
        let team = row.team_name.map(|name| TeamInfo {
            team_id: row.team_id,
            name,
            avatar_url: row.team_avatar_url,
        });

        Self {
            submission_id: row.submission_id,
            team_id: row.team_id,
            track_id: row.track_id,
            project_name: row.project_name,
            tagline: row.tagline,
            status: row.status,
            team,
            is_scored: row.is_scored,
            score_id: row.score_id,
        }
    }
}
