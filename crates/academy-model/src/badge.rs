use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
    Assessment,
    AssessmentPerfect,
    AssessmentMaster,
    CourseCompletion,
    AreaCompletion,
    Explorer,
    Blocks,
    Certificates,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Badge {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub kind: BadgeKind,
    pub xp_points: i32,
    pub active: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewBadge {
    pub name: String,
    pub description: Option<String>,
    pub kind: BadgeKind,
    #[serde(default)]
    pub xp_points: i32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EarnedBadge {
    #[serde(flatten)]
    pub badge: Badge,
    pub earned_at: NaiveDateTime,
}
