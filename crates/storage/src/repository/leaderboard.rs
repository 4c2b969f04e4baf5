use chrono::NaiveDateTime;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Leaderboard, LeaderboardEntry};

/// A submission row feeding the live leaderboard view, joined with its team's
/// display fields.
#[derive(Debug, Clone, FromRow)]
pub struct LiveStandingRow {
    pub submission_id: Uuid,
    pub team_id: Uuid,
    pub project_name: String,
    pub average_score: Option<f64>,
    pub submitted_at: Option<NaiveDateTime>,
    pub team_name: Option<String>,
    pub team_avatar_url: Option<String>,
}

/// A podium row for the cross-event top list.
#[derive(Debug, Clone, FromRow)]
pub struct GlobalTopRow {
    pub team_id: Uuid,
    pub team_name: String,
    pub project_name: String,
    pub event_title: String,
    pub rank: i32,
    pub average_score: Option<f64>,
    pub event_date: Option<NaiveDateTime>,
}

/// Repository for materialized leaderboards and the reads that feed them.
pub struct LeaderboardRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LeaderboardRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_event_track(
        &self,
        event_id: Uuid,
        track_id: Option<&str>,
    ) -> Result<Option<Leaderboard>> {
        let leaderboard = sqlx::query_as::<_, Leaderboard>(
            r#"
            SELECT leaderboard_id, event_id, track_id, entries, last_updated_at, is_published
            FROM leaderboards
            WHERE event_id = $1 AND COALESCE(track_id, '') = COALESCE($2, '')
            "#,
        )
        .bind(event_id)
        .bind(track_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(leaderboard)
    }

    /// Upsert the snapshot for an (event, track) pair and mark it published.
    pub async fn upsert_published(
        &self,
        event_id: Uuid,
        track_id: Option<&str>,
        entries: Vec<LeaderboardEntry>,
    ) -> Result<Leaderboard> {
        let leaderboard = sqlx::query_as::<_, Leaderboard>(
            r#"
            INSERT INTO leaderboards (event_id, track_id, entries, last_updated_at, is_published)
            VALUES ($1, $2, $3, now(), true)
            ON CONFLICT (event_id, COALESCE(track_id, '')) DO UPDATE SET
                entries = EXCLUDED.entries,
                last_updated_at = now(),
                is_published = true
            RETURNING leaderboard_id, event_id, track_id, entries, last_updated_at, is_published
            "#,
        )
        .bind(event_id)
        .bind(track_id)
        .bind(Json(entries))
        .fetch_one(self.pool)
        .await?;

        Ok(leaderboard)
    }

    /// Flip an existing snapshot back to unpublished without discarding its
    /// entries. A missing row is a no-op, which makes unpublish idempotent.
    pub async fn unpublish(&self, event_id: Uuid, track_id: Option<&str>) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE leaderboards
            SET is_published = false
            WHERE event_id = $1 AND COALESCE(track_id, '') = COALESCE($2, '')
            "#,
        )
        .bind(event_id)
        .bind(track_id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Submissions feeding the live (unpublished) leaderboard view: judged or
    /// submitted, optionally filtered by track. Ordering happens in the
    /// service layer.
    pub async fn live_standings(
        &self,
        event_id: Uuid,
        track_id: Option<&str>,
    ) -> Result<Vec<LiveStandingRow>> {
        let rows = sqlx::query_as::<_, LiveStandingRow>(
            r#"
            SELECT sub.submission_id, sub.team_id, sub.project_name,
                   sub.average_score, sub.submitted_at,
                   t.name AS team_name,
                   t.avatar_url AS team_avatar_url
            FROM submissions sub
            LEFT JOIN teams t ON t.team_id = sub.team_id
            WHERE sub.event_id = $1
              AND sub.status IN ('judged', 'submitted')
              AND ($2::text IS NULL OR sub.track_id = $2)
            "#,
        )
        .bind(event_id)
        .bind(track_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Judged submissions for a publish run, optionally filtered by track.
    pub async fn judged_standings(
        &self,
        event_id: Uuid,
        track_id: Option<&str>,
    ) -> Result<Vec<LiveStandingRow>> {
        let rows = sqlx::query_as::<_, LiveStandingRow>(
            r#"
            SELECT sub.submission_id, sub.team_id, sub.project_name,
                   sub.average_score, sub.submitted_at,
                   t.name AS team_name,
                   t.avatar_url AS team_avatar_url
            FROM submissions sub
            LEFT JOIN teams t ON t.team_id = sub.team_id
            WHERE sub.event_id = $1
              AND sub.status = 'judged'
              AND ($2::text IS NULL OR sub.track_id = $2)
            "#,
        )
        .bind(event_id)
        .bind(track_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Podium finishers (rank 1-3) of the ten most recently finished
    /// completed events. Submissions whose team no longer resolves are
    /// skipped.
    pub async fn global_top_rows(&self) -> Result<Vec<GlobalTopRow>> {
        let rows = sqlx::query_as::<_, GlobalTopRow>(
            r#"
            WITH recent_events AS (
                SELECT event_id, title, end_date
                FROM events
                WHERE status = 'completed'
                ORDER BY end_date DESC NULLS LAST
                LIMIT 10
            )
            SELECT sub.team_id,
                   t.name AS team_name,
                   sub.project_name,
                   e.title AS event_title,
                   sub.rank,
                   sub.average_score,
                   e.end_date AS event_date
            FROM recent_events e
            INNER JOIN submissions sub ON sub.event_id = e.event_id
            INNER JOIN teams t ON t.team_id = sub.team_id
            WHERE sub.rank IS NOT NULL AND sub.rank <= 3
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
