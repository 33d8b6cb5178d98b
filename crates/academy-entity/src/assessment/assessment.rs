use sea_orm::entity::prelude::*;

/// A scored quiz attached to a unit, or directly to a course when `unit_id`
/// is null (course-level assessment).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assessments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub unit_id: Option<i32>,
    pub course_id: Option<i32>,
    pub title: String,
    pub passing_score: i32,
    pub xp_points: i32,
    pub max_retakes: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::unit::unit::Entity",
        from = "Column::UnitId",
        to = "crate::unit::unit::Column::Id"
    )]
    Unit,
    #[sea_orm(
        belongs_to = "crate::course::course::Entity",
        from = "Column::CourseId",
        to = "crate::course::course::Column::Id"
    )]
    Course,
    #[sea_orm(has_many = "super::attempt::Entity")]
    Attempt,
}

impl Related<crate::unit::unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Unit.def()
    }
}

impl Related<super::attempt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attempt.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
