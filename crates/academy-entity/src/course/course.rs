use sea_orm::entity::prelude::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum CourseType {
    /// Courses in the same module must be completed in `position` order.
    #[sea_orm(string_value = "sequential")]
    Sequential,
    #[sea_orm(string_value = "free")]
    Free,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub module_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub course_type: CourseType,
    /// Ordering within the module, used by the sequential access gate.
    pub position: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::module::Entity",
        from = "Column::ModuleId",
        to = "super::module::Column::Id"
    )]
    Module,
    #[sea_orm(has_many = "super::unit_link::Entity")]
    UnitLink,
    #[sea_orm(has_many = "crate::progress::Entity")]
    Progress,
    #[sea_orm(has_many = "crate::certificate::Entity")]
    Certificate,
}

impl Related<super::module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl Related<crate::unit::unit::Entity> for Entity {
    fn to() -> RelationDef {
        super::unit_link::Relation::Unit.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::unit_link::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
