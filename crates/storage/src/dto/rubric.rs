use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::RubricCriterion;

/// Request payload for creating a rubric.
///
/// Criterion weights and max scores are accepted as-is; keeping them sensible
/// is the organizer's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRubricRequest {
    pub event_id: Uuid,

    #[validate(length(max = 255))]
    pub track_id: Option<String>,

    pub criteria: Vec<CriterionInput>,
}

/// Request payload for replacing a rubric's criteria wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRubricRequest {
    pub criteria: Vec<CriterionInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CriterionInput {
    #[validate(length(min = 1, max = 255, message = "Criterion id is required"))]
    pub id: String,

    #[validate(length(min = 1, max = 255, message = "Criterion name is required"))]
    pub name: String,

    #[validate(length(max = 2000))]
    pub description: String,

    pub max_score: f64,
    pub weight: f64,
}

impl CreateRubricRequest {
    pub fn validate_criteria(&self) -> Result<(), String> {
        validate_criteria(&self.criteria)
    }
}

impl UpdateRubricRequest {
    pub fn validate_criteria(&self) -> Result<(), String> {
        validate_criteria(&self.criteria)
    }
}

fn validate_criteria(criteria: &[CriterionInput]) -> Result<(), String> {
    for criterion in criteria {
        if criterion.id.trim().is_empty() {
            return Err("criterion id must not be empty".to_string());
        }
        if criterion.name.trim().is_empty() {
            return Err("criterion name must not be empty".to_string());
        }
    }
    Ok(())
}

impl From<CriterionInput> for RubricCriterion {
    fn from(input: CriterionInput) -> Self {
        Self {
            id: input.id,
            name: input.name,
            description: input.description,
            max_score: input.max_score,
            weight: input.weight,
        }
    }
}

/// Query parameters for rubric lookup: exact track match when `track_id` is
/// given, the event-wide rubric otherwise.
#[derive(Debug, Deserialize, IntoParams)]
pub struct RubricQuery {
    pub event_id: Uuid,
    pub track_id: Option<String>,
}
