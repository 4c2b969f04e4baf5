use std::cmp::Ordering;

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::leaderboard::{GlobalTopEntry, LeaderboardView};
use crate::error::Result;
use crate::models::{Leaderboard, LeaderboardEntry};
use crate::repository::leaderboard::{GlobalTopRow, LeaderboardRepository, LiveStandingRow};

const LIVE_VIEW_LIMIT: usize = 50;
const GLOBAL_TOP_DEFAULT_LIMIT: i64 = 20;

/// Ordering for the live leaderboard view: scored submissions first by
/// average descending, then unscored ones by earliest submission time.
pub fn live_order(a: &LiveStandingRow, b: &LiveStandingRow) -> Ordering {
    match (a.average_score, b.average_score) {
        (Some(score_a), Some(score_b)) => {
            score_b.partial_cmp(&score_a).unwrap_or(Ordering::Equal)
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.submitted_at.cmp(&b.submitted_at),
    }
}

/// Ordering for the cross-event top list: rank ascending, then score
/// descending for equal ranks.
pub fn global_top_order(a: &GlobalTopEntry, b: &GlobalTopEntry) -> Ordering {
    a.rank
        .cmp(&b.rank)
        .then_with(|| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal))
}

fn entry_from_standing(rank: i32, row: &LiveStandingRow) -> LeaderboardEntry {
    LeaderboardEntry {
        rank,
        team_id: row.team_id,
        team_name: row
            .team_name
            .clone()
            .unwrap_or_else(|| "Unknown Team".to_string()),
        project_name: row.project_name.clone(),
        score: row.average_score.unwrap_or(0.0),
        avatar_url: row.team_avatar_url.clone(),
    }
}

/// The leaderboard for an event (or event/track pair).
///
/// A published snapshot is served verbatim, frozen against any later score
/// changes. Without one, a live view is computed from current submissions and
/// returned without being persisted.
pub async fn get_by_event(
    pool: &PgPool,
    event_id: Uuid,
    track_id: Option<&str>,
) -> Result<LeaderboardView> {
    let repo = LeaderboardRepository::new(pool);

    if let Some(cached) = repo.find_by_event_track(event_id, track_id).await?
        && cached.is_published
    {
        return Ok(LeaderboardView::from(cached));
    }

    let mut standings = repo.live_standings(event_id, track_id).await?;
    standings.sort_by(live_order);
    standings.truncate(LIVE_VIEW_LIMIT);

    let entries = standings
        .iter()
        .enumerate()
        .map(|(index, row)| entry_from_standing(index as i32 + 1, row))
        .collect();

    Ok(LeaderboardView::live(
        event_id,
        track_id.map(String::from),
        entries,
    ))
}

/// Freeze the current standings into a published snapshot.
///
/// Recomputes over judged submissions, ranks them densely by average score
/// and upserts the row with `is_published = true`. Publishing again simply
/// refreshes the snapshot.
pub async fn publish(pool: &PgPool, event_id: Uuid, track_id: Option<&str>) -> Result<Leaderboard> {
    let repo = LeaderboardRepository::new(pool);

    let mut standings = repo.judged_standings(event_id, track_id).await?;
    standings.sort_by(|a, b| {
        let score_a = a.average_score.unwrap_or(0.0);
        let score_b = b.average_score.unwrap_or(0.0);
        score_b.partial_cmp(&score_a).unwrap_or(Ordering::Equal)
    });

    let entries = standings
        .iter()
        .enumerate()
        .map(|(index, row)| entry_from_standing(index as i32 + 1, row))
        .collect();

    repo.upsert_published(event_id, track_id, entries).await
}

/// Thaw a published snapshot; reads fall back to live computation. The
/// entries are kept so a later publish has nothing to rebuild from scratch.
pub async fn unpublish(pool: &PgPool, event_id: Uuid, track_id: Option<&str>) -> Result<()> {
    LeaderboardRepository::new(pool)
        .unpublish(event_id, track_id)
        .await?;
    Ok(())
}

/// Cross-event podium aggregate: rank 1-3 finishers of recent completed
/// events, ordered by rank then score. Recomputed on every call.
pub async fn global_top(pool: &PgPool, limit: Option<i64>) -> Result<Vec<GlobalTopEntry>> {
    let rows = LeaderboardRepository::new(pool).global_top_rows().await?;

    let mut entries: Vec<GlobalTopEntry> = rows.into_iter().map(GlobalTopEntry::from).collect();
    entries.sort_by(global_top_order);

    let limit = limit.unwrap_or(GLOBAL_TOP_DEFAULT_LIMIT).max(0) as usize;
    entries.truncate(limit);

    Ok(entries)
}

impl From<GlobalTopRow> for GlobalTopEntry {
    fn from(row: GlobalTopRow) -> Self {
        Self {
            team_id: row.team_id,
            team_name: row.team_name,
            project_name: row.project_name,
            event_title: row.event_title,
            rank: row.rank,
            score: row.average_score.unwrap_or(0.0),
            event_date: row.event_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn standing(
        average_score: Option<f64>,
        submitted_at: Option<NaiveDateTime>,
    ) -> LiveStandingRow {
        LiveStandingRow {
            submission_id: Uuid::new_v4(),
            team_id: Uuid::new_v4(),
            project_name: "project".to_string(),
            average_score,
            submitted_at,
            team_name: Some("team".to_string()),
            team_avatar_url: None,
        }
    }

    fn ts(secs: i64) -> NaiveDateTime {
        chrono::DateTime::from_timestamp(secs, 0).unwrap().naive_utc()
    }

    #[test]
    fn test_live_order_both_scored() {
        let high = standing(Some(20.0), None);
        let low = standing(Some(10.0), None);
        assert_eq!(live_order(&high, &low), Ordering::Less);
        assert_eq!(live_order(&low, &high), Ordering::Greater);
    }

    #[test]
    fn test_live_order_scored_beats_unscored() {
        let scored = standing(Some(1.0), None);
        let unscored = standing(None, Some(ts(0)));
        assert_eq!(live_order(&scored, &unscored), Ordering::Less);
        assert_eq!(live_order(&unscored, &scored), Ordering::Greater);
    }

    #[test]
    fn test_live_order_unscored_by_submission_time() {
        let early = standing(None, Some(ts(100)));
        let late = standing(None, Some(ts(200)));
        assert_eq!(live_order(&early, &late), Ordering::Less);
    }

    #[test]
    fn test_live_sort_full_ordering() {
        let mut rows = vec![
            standing(None, Some(ts(200))),
            standing(Some(10.0), None),
            standing(None, Some(ts(100))),
            standing(Some(30.0), None),
        ];
        rows.sort_by(live_order);

        assert_eq!(rows[0].average_score, Some(30.0));
        assert_eq!(rows[1].average_score, Some(10.0));
        assert_eq!(rows[2].submitted_at, Some(ts(100)));
        assert_eq!(rows[3].submitted_at, Some(ts(200)));
    }

    fn top_entry(rank: i32, score: f64) -> GlobalTopEntry {
        GlobalTopEntry {
            team_id: Uuid::new_v4(),
            team_name: "team".to_string(),
            project_name: "project".to_string(),
            event_title: "event".to_string(),
            rank,
            score,
            event_date: None,
        }
    }

    #[test]
    fn test_global_top_rank_then_score() {
        let mut entries = vec![top_entry(2, 50.0), top_entry(1, 10.0), top_entry(1, 40.0)];
        entries.sort_by(global_top_order);

        assert_eq!((entries[0].rank, entries[0].score), (1, 40.0));
        assert_eq!((entries[1].rank, entries[1].score), (1, 10.0));
        assert_eq!((entries[2].rank, entries[2].score), (2, 50.0));
    }

    #[test]
    fn test_entry_from_standing_defaults() {
        let mut row = standing(None, None);
        row.team_name = None;

        let entry = entry_from_standing(1, &row);
        assert_eq!(entry.team_name, "Unknown Team");
        assert_eq!(entry.score, 0.0);
        assert_eq!(entry.rank, 1);
    }
}
