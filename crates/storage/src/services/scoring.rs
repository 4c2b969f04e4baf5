use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::scoring::SubmitScoreRequest;
use crate::error::Result;
use crate::models::{RubricCriterion, ScoreEntry};
use crate::repository::assignment::AssignmentRepository;
use crate::repository::rubric::RubricRepository;
use crate::repository::score::ScoreRepository;
use crate::repository::submission::SubmissionRepository;

/// Raw and weighted totals for one judge's entries against a rubric.
///
/// The total is the plain sum of all entries. The weighted total multiplies
/// each entry by the matching criterion's weight; entries whose criterion id
/// does not appear in the rubric count toward the total but are ignored for
/// weighting. Weights are captured here, at submission time, and never
/// re-derived.
pub fn score_totals(criteria: &[RubricCriterion], entries: &[ScoreEntry]) -> (f64, f64) {
    let mut total = 0.0;
    let mut weighted = 0.0;

    for entry in entries {
        total += entry.score;
        if let Some(criterion) = criteria.iter().find(|c| c.id == entry.criteria_id) {
            weighted += entry.score * criterion.weight;
        }
    }

    (total, weighted)
}

/// Record a judge's score for a submission.
///
/// Upserts on the (submission, judge) pair, so a retry or revised submission
/// overwrites the existing record instead of duplicating it. Only the
/// first-ever score for the pair bumps the judge's assignment progress
/// counter; a missing submission or assignment skips the bump silently and
/// the score is still recorded.
pub async fn submit_score(pool: &PgPool, req: SubmitScoreRequest) -> Result<Uuid> {
    let rubric = RubricRepository::new(pool).find_by_id(req.rubric_id).await?;

    let entries: Vec<ScoreEntry> = req.scores.into_iter().map(ScoreEntry::from).collect();
    let (total_score, weighted_score) = score_totals(&rubric.criteria, &entries);

    let (score_id, inserted) = ScoreRepository::new(pool)
        .upsert(
            req.submission_id,
            req.judge_id,
            req.rubric_id,
            entries,
            total_score,
            weighted_score,
            req.overall_comment.as_deref(),
            &req.compared_with,
        )
        .await?;

    if inserted {
        let submission = SubmissionRepository::new(pool)
            .find_by_id(req.submission_id)
            .await?;

        if let Some(submission) = submission {
            // A judge may score without an assignment; the update then
            // matches no row and the counter has nothing to track.
            AssignmentRepository::new(pool)
                .increment_completed(submission.event_id, req.judge_id)
                .await?;
        }
    }

    Ok(score_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criterion(id: &str, max_score: f64, weight: f64) -> RubricCriterion {
        RubricCriterion {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: String::new(),
            max_score,
            weight,
        }
    }

    fn entry(criteria_id: &str, score: f64) -> ScoreEntry {
        ScoreEntry {
            criteria_id: criteria_id.to_string(),
            score,
            comment: None,
        }
    }

    #[test]
    fn test_weighted_aggregation() {
        let criteria = vec![criterion("a", 10.0, 1.5), criterion("b", 10.0, 1.0)];
        let entries = vec![entry("a", 8.0), entry("b", 6.0)];

        let (total, weighted) = score_totals(&criteria, &entries);
        assert_eq!(total, 14.0);
        assert_eq!(weighted, 18.0);
    }

    #[test]
    fn test_unmatched_criterion_counts_toward_total_only() {
        let criteria = vec![criterion("a", 10.0, 2.0)];
        let entries = vec![entry("a", 5.0), entry("ghost", 7.0)];

        let (total, weighted) = score_totals(&criteria, &entries);
        assert_eq!(total, 12.0);
        assert_eq!(weighted, 10.0);
    }

    #[test]
    fn test_empty_entries() {
        let criteria = vec![criterion("a", 10.0, 1.0)];
        let (total, weighted) = score_totals(&criteria, &[]);
        assert_eq!(total, 0.0);
        assert_eq!(weighted, 0.0);
    }

    #[test]
    fn test_scores_above_max_are_accepted() {
        // No bounds validation against max_score by design of the caller
        // contract; the value flows through as-is.
        let criteria = vec![criterion("a", 10.0, 1.0)];
        let entries = vec![entry("a", 42.0)];

        let (total, weighted) = score_totals(&criteria, &entries);
        assert_eq!(total, 42.0);
        assert_eq!(weighted, 42.0);
    }
}
