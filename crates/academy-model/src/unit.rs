use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::assessment::Assessment;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Unit {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewUnit {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Video,
    Text,
    Interactive,
    Image,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Block {
    pub id: i32,
    pub unit_id: i32,
    pub kind: BlockKind,
    pub title: String,
    pub position: i32,
    pub xp_points: i32,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewBlock {
    pub kind: BlockKind,
    pub title: String,
    pub position: i32,
    #[serde(default)]
    pub xp_points: i32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UnitDetail {
    #[serde(flatten)]
    pub unit: Unit,
    pub blocks: Vec<Block>,
    /// Every assessment attached to the unit; all of them must be passed
    /// before the unit counts as complete.
    pub assessments: Vec<Assessment>,
}

/// Outcome of marking a block complete. XP is credited only on the first
/// completion, so `xp_awarded` is zero whenever `already_completed` holds.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct CompletedBlock {
    pub block_id: i32,
    pub already_completed: bool,
    pub xp_awarded: i32,
}
