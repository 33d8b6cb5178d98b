use academy_entity::course::area::Model as TrainingAreaModel;
use academy_entity::course::course::{CourseType as CourseTypeModel, Model as CourseModel};
use academy_entity::course::module::Model as ModuleModel;
use academy_entity::unit::unit::Model as UnitModel;

use crate::convert::{FromDbModel, FromModel, IntoModel};
use crate::course::{Course, CourseType, CourseWithUnits, Module, TrainingArea};

impl FromDbModel<TrainingAreaModel> for TrainingArea {
    fn from_db_model(model: TrainingAreaModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

impl FromDbModel<ModuleModel> for Module {
    fn from_db_model(model: ModuleModel) -> Self {
        Self {
            id: model.id,
            training_area_id: model.training_area_id,
            name: model.name,
            description: model.description,
        }
    }
}

impl FromDbModel<CourseTypeModel> for CourseType {
    fn from_db_model(model: CourseTypeModel) -> Self {
        match model {
            CourseTypeModel::Sequential => Self::Sequential,
            CourseTypeModel::Free => Self::Free,
        }
    }
}

impl FromModel<CourseType> for CourseTypeModel {
    fn from_model(model: CourseType) -> Self {
        match model {
            CourseType::Sequential => Self::Sequential,
            CourseType::Free => Self::Free,
        }
    }
}

impl FromDbModel<CourseModel> for Course {
    fn from_db_model(model: CourseModel) -> Self {
        Self {
            id: model.id,
            module_id: model.module_id,
            name: model.name,
            description: model.description,
            course_type: CourseType::from_db_model(model.course_type),
            position: model.position,
            created_at: model.created_at,
        }
    }
}

impl FromDbModel<(CourseModel, Vec<UnitModel>)> for CourseWithUnits {
    fn from_db_model((course, units): (CourseModel, Vec<UnitModel>)) -> Self {
        Self {
            course: course.into_model(),
            units: units.into_iter().map(IntoModel::into_model).collect(),
        }
    }
}
