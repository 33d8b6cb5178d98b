use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::unit::Unit;
use crate::user::Role;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainingArea {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewTrainingArea {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Module {
    pub id: i32,
    pub training_area_id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewModule {
    pub training_area_id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CourseType {
    Sequential,
    Free,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Course {
    pub id: i32,
    pub module_id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub course_type: CourseType,
    pub position: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewCourse {
    pub module_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub course_type: CourseType,
    pub position: i32,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CourseUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub course_type: Option<CourseType>,
    pub position: Option<i32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CourseWithUnits {
    #[serde(flatten)]
    pub course: Course,
    pub units: Vec<Unit>,
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct UnitAttachment {
    pub unit_id: i32,
    pub position: i32,
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct MandatoryAssignment {
    pub role: Role,
}
