use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Assessment {
    pub id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<i32>,
    pub title: String,
    pub passing_score: i32,
    pub xp_points: i32,
    pub max_retakes: i32,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewAssessment {
    pub unit_id: Option<i32>,
    pub course_id: Option<i32>,
    pub title: String,
    pub passing_score: i32,
    #[serde(default)]
    pub xp_points: i32,
    pub max_retakes: i32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Attempt {
    pub id: Uuid,
    pub assessment_id: i32,
    pub score: i32,
    pub passed: bool,
    pub answers: Value,
    pub completed_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AttemptSubmission {
    #[schema(minimum = 0, maximum = 100)]
    pub score: i32,
    pub answers: Value,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AttemptOutcome {
    pub attempt: Attempt,
    pub passed: bool,
    pub message: String,
    /// None when the assessment allows unlimited retakes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempts_remaining: Option<i32>,
}
