use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A single weighted criterion inside a rubric. Its `id` is referenced by
/// score entries and must stay stable once scores exist.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RubricCriterion {
    pub id: String,
    pub name: String,
    pub description: String,
    pub max_score: f64,
    pub weight: f64,
}

/// Weighted-criteria scoring template for an event, or an event/track pair
/// when `track_id` is set. Criteria are an embedded value, replaced wholesale
/// on edit.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Rubric {
    pub rubric_id: Uuid,
    pub event_id: Uuid,
    pub track_id: Option<String>,
    #[sqlx(json)]
    pub criteria: Vec<RubricCriterion>,
    pub total_max_score: f64,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

/// Maximum achievable weighted score for a criteria set. Recomputed the same
/// way on create and on every wholesale criteria replacement.
pub fn total_max_score(criteria: &[RubricCriterion]) -> f64 {
    criteria.iter().map(|c| c.max_score * c.weight).sum()
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

    #[test]
    fn test_total_max_score_weighted_sum() {
        let criteria = vec![criterion("a", 10.0, 1.5), criterion("b", 10.0, 1.0)];
        assert_eq!(total_max_score(&criteria), 25.0);
    }

    #[test]
    fn test_total_max_score_empty_criteria() {
        assert_eq!(total_max_score(&[]), 0.0);
    }

    #[test]
    fn test_total_max_score_unweighted_criteria() {
        let criteria = vec![criterion("a", 20.0, 1.0), criterion("b", 30.0, 1.0)];
        assert_eq!(total_max_score(&criteria), 50.0);
    }
}
