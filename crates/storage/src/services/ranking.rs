use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::repository::submission::{ScoreAggregate, SubmissionRepository};

/// A submission's computed standing within a ranking run.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSubmission {
    pub submission_id: Uuid,
    pub average_score: f64,
    pub total_judges: i32,
    pub rank: i32,
}

/// Turn per-submission score aggregates into ranked standings.
///
/// The average is the mean of the judges' weighted totals, an absolute point
/// value (never normalized against the rubric's max). A submission with no
/// completed scores averages 0 and therefore sorts below anything with a
/// positive average. Ranks are dense and 1-based by sorted position; equal
/// averages keep their cohort order and still get distinct ranks.
pub fn rank_submissions(aggregates: Vec<ScoreAggregate>) -> Vec<RankedSubmission> {
    let mut standings: Vec<RankedSubmission> = aggregates
        .into_iter()
        .map(|agg| {
            let average_score = if agg.judge_count == 0 {
                0.0
            } else {
                agg.weighted_total / agg.judge_count as f64
            };

            RankedSubmission {
                submission_id: agg.submission_id,
                average_score,
                total_judges: agg.judge_count as i32,
                rank: 0,
            }
        })
        .collect();

    // Stable sort: ties keep cohort order.
    standings.sort_by(|a, b| {
        b.average_score
            .partial_cmp(&a.average_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for (position, standing) in standings.iter_mut().enumerate() {
        standing.rank = position as i32 + 1;
    }

    standings
}

/// Recompute rankings for an event and write them back.
///
/// The cohort covers both submitted and already-judged submissions, so the
/// operation is idempotent: running it again after late scores arrive
/// converges on the new ordering. Each submission is patched wholesale with
/// its average, judge count, rank and the `judged` status. Returns the number
/// of submissions ranked.
pub async fn calculate_rankings(pool: &PgPool, event_id: Uuid) -> Result<u64> {
    let repo = SubmissionRepository::new(pool);

    let aggregates = repo.ranking_cohort(event_id).await?;
    let standings = rank_submissions(aggregates);

    let mut count = 0u64;
    for standing in &standings {
        repo.apply_ranking(
            standing.submission_id,
            standing.average_score,
            standing.total_judges,
            standing.rank,
        )
        .await?;
        count += 1;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(id: Uuid, weighted_total: f64, judge_count: i64) -> ScoreAggregate {
        ScoreAggregate {
            submission_id: id,
            weighted_total,
            judge_count,
        }
    }

    #[test]
    fn test_ranking_orders_by_average_descending() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let standings = rank_submissions(vec![
            aggregate(a, 10.0, 1),
            aggregate(b, 30.0, 1),
            aggregate(c, 20.0, 1),
        ]);

        let rank_of = |id: Uuid| standings.iter().find(|s| s.submission_id == id).unwrap().rank;
        assert_eq!(rank_of(b), 1);
        assert_eq!(rank_of(c), 2);
        assert_eq!(rank_of(a), 3);
    }

    #[test]
    fn test_average_is_mean_of_weighted_totals() {
        let id = Uuid::new_v4();
        let standings = rank_submissions(vec![aggregate(id, 54.0, 3)]);

        assert_eq!(standings[0].average_score, 18.0);
        assert_eq!(standings[0].total_judges, 3);
    }

    #[test]
    fn test_unscored_submission_ranks_last() {
        let scored = Uuid::new_v4();
        let unscored = Uuid::new_v4();
        let standings = rank_submissions(vec![
            aggregate(unscored, 0.0, 0),
            aggregate(scored, 5.0, 1),
        ]);

        assert_eq!(standings[0].submission_id, scored);
        assert_eq!(standings[1].submission_id, unscored);
        assert_eq!(standings[1].average_score, 0.0);
        assert_eq!(standings[1].total_judges, 0);
        assert_eq!(standings[1].rank, 2);
    }

    #[test]
    fn test_ties_get_distinct_dense_ranks() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let standings = rank_submissions(vec![aggregate(a, 10.0, 1), aggregate(b, 10.0, 1)]);

        // Stable sort keeps cohort order for equal averages.
        assert_eq!(standings[0].submission_id, a);
        assert_eq!(standings[0].rank, 1);
        assert_eq!(standings[1].submission_id, b);
        assert_eq!(standings[1].rank, 2);
    }

    #[test]
    fn test_empty_cohort() {
        assert!(rank_submissions(Vec::new()).is_empty());
    }
}
