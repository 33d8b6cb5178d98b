use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Progress {
    pub course_id: i32,
    #[schema(minimum = 0, maximum = 100)]
    pub percent_complete: i32,
    pub completed: bool,
    pub last_accessed: NaiveDateTime,
}

/// Direct progress write; bypasses the completion evaluator, so the stored
/// percentage is whatever the client last reported (clamped, and forced to
/// 100 when `completed` is set).
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct ProgressUpdate {
    pub course_id: i32,
    #[schema(minimum = 0, maximum = 100)]
    pub percent_complete: i32,
    pub completed: Option<bool>,
}
