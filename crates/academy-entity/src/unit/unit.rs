use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "units")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::block::Entity")]
    Block,
    #[sea_orm(has_many = "crate::assessment::assessment::Entity")]
    Assessment,
    #[sea_orm(has_many = "crate::course::unit_link::Entity")]
    UnitLink,
}

impl Related<super::block::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Block.def()
    }
}

impl Related<crate::course::course::Entity> for Entity {
    fn to() -> RelationDef {
        crate::course::unit_link::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(crate::course::unit_link::Relation::Unit.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
