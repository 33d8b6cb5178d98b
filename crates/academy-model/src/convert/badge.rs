use academy_entity::badge::badge::{BadgeKind as BadgeKindModel, Model as BadgeModel};
use academy_entity::badge::user_badge::Model as UserBadgeModel;

use crate::badge::{Badge, BadgeKind, EarnedBadge};
use crate::convert::{FromDbModel, FromModel, IntoModel};

impl FromDbModel<BadgeKindModel> for BadgeKind {
    fn from_db_model(model: BadgeKindModel) -> Self {
        match model {
            BadgeKindModel::Assessment => Self::Assessment,
            BadgeKindModel::AssessmentPerfect => Self::AssessmentPerfect,
            BadgeKindModel::AssessmentMaster => Self::AssessmentMaster,
            BadgeKindModel::CourseCompletion => Self::CourseCompletion,
            BadgeKindModel::AreaCompletion => Self::AreaCompletion,
            BadgeKindModel::Explorer => Self::Explorer,
            BadgeKindModel::Blocks => Self::Blocks,
            BadgeKindModel::Certificates => Self::Certificates,
        }
    }
}

impl FromModel<BadgeKind> for BadgeKindModel {
    fn from_model(model: BadgeKind) -> Self {
        match model {
            BadgeKind::Assessment => Self::Assessment,
            BadgeKind::AssessmentPerfect => Self::AssessmentPerfect,
            BadgeKind::AssessmentMaster => Self::AssessmentMaster,
            BadgeKind::CourseCompletion => Self::CourseCompletion,
            BadgeKind::AreaCompletion => Self::AreaCompletion,
            BadgeKind::Explorer => Self::Explorer,
            BadgeKind::Blocks => Self::Blocks,
            BadgeKind::Certificates => Self::Certificates,
        }
    }
}

impl FromDbModel<BadgeModel> for Badge {
    fn from_db_model(model: BadgeModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            kind: BadgeKind::from_db_model(model.kind),
            xp_points: model.xp_points,
            active: model.active,
        }
    }
}

impl FromDbModel<(BadgeModel, UserBadgeModel)> for EarnedBadge {
    fn from_db_model((badge, earned): (BadgeModel, UserBadgeModel)) -> Self {
        Self {
            badge: badge.into_model(),
            earned_at: earned.earned_at,
        }
    }
}
