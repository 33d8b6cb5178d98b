use academy_entity::assessment::assessment::Model as AssessmentModel;
use academy_entity::unit::block::{BlockKind as BlockKindModel, Model as BlockModel};
use academy_entity::unit::unit::Model as UnitModel;

use crate::convert::{FromDbModel, FromModel, IntoModel};
use crate::unit::{Block, BlockKind, Unit, UnitDetail};

impl FromDbModel<UnitModel> for Unit {
    fn from_db_model(model: UnitModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

impl FromDbModel<BlockKindModel> for BlockKind {
    fn from_db_model(model: BlockKindModel) -> Self {
        match model {
            BlockKindModel::Video => Self::Video,
            BlockKindModel::Text => Self::Text,
            BlockKindModel::Interactive => Self::Interactive,
            BlockKindModel::Image => Self::Image,
        }
    }
}

impl FromModel<BlockKind> for BlockKindModel {
    fn from_model(model: BlockKind) -> Self {
        match model {
            BlockKind::Video => Self::Video,
            BlockKind::Text => Self::Text,
            BlockKind::Interactive => Self::Interactive,
            BlockKind::Image => Self::Image,
        }
    }
}

impl FromDbModel<BlockModel> for Block {
    fn from_db_model(model: BlockModel) -> Self {
        Self {
            id: model.id,
            unit_id: model.unit_id,
            kind: BlockKind::from_db_model(model.kind),
            title: model.title,
            position: model.position,
            xp_points: model.xp_points,
        }
    }
}

impl FromDbModel<(UnitModel, Vec<BlockModel>, Vec<AssessmentModel>)> for UnitDetail {
    fn from_db_model((unit, blocks, assessments): (UnitModel, Vec<BlockModel>, Vec<AssessmentModel>)) -> Self {
        Self {
            unit: unit.into_model(),
            blocks: blocks.into_iter().map(IntoModel::into_model).collect(),
            assessments: assessments.into_iter().map(IntoModel::into_model).collect(),
        }
    }
}
