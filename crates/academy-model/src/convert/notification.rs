use academy_entity::notification::{Model as NotificationModel, NotificationKind as NotificationKindModel};

use crate::convert::FromDbModel;
use crate::notification::{Notification, NotificationKind};

impl FromDbModel<NotificationKindModel> for NotificationKind {
    fn from_db_model(model: NotificationKindModel) -> Self {
        match model {
            NotificationKindModel::BadgeEarned => Self::BadgeEarned,
            NotificationKindModel::AssessmentPassed => Self::AssessmentPassed,
            NotificationKindModel::CourseCompleted => Self::CourseCompleted,
            NotificationKindModel::CertificateIssued => Self::CertificateIssued,
        }
    }
}

impl FromDbModel<NotificationModel> for Notification {
    fn from_db_model(model: NotificationModel) -> Self {
        Self {
            id: model.id,
            kind: NotificationKind::from_db_model(model.kind),
            title: model.title,
            message: model.message,
            metadata: model.metadata,
            read: model.read,
            created_at: model.created_at,
        }
    }
}
