use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct GenerateCertificate {
    pub course_id: i32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Certificate {
    pub id: Uuid,
    pub course_id: i32,
    #[schema(example = "VX-a1b2c3d4-17-1767225600")]
    pub certificate_number: String,
    pub issued_at: NaiveDateTime,
}
