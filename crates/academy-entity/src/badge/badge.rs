use sea_orm::entity::prelude::*;

/// Predicate key for the badge award engine. Every kind maps to one
/// hand-coded eligibility check over the user's full history.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum BadgeKind {
    #[sea_orm(string_value = "assessment")]
    Assessment,
    #[sea_orm(string_value = "assessment_perfect")]
    AssessmentPerfect,
    #[sea_orm(string_value = "assessment_master")]
    AssessmentMaster,
    #[sea_orm(string_value = "course_completion")]
    CourseCompletion,
    #[sea_orm(string_value = "area_completion")]
    AreaCompletion,
    #[sea_orm(string_value = "explorer")]
    Explorer,
    #[sea_orm(string_value = "blocks")]
    Blocks,
    #[sea_orm(string_value = "certificates")]
    Certificates,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "badges")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub kind: BadgeKind,
    pub xp_points: i32,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_badge::Entity")]
    UserBadge,
}

impl Related<super::user_badge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserBadge.def()
    }
}

impl Related<crate::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_badge::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_badge::Relation::Badge.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
