use academy_entity::assessment::assessment::Model as AssessmentModel;
use academy_entity::assessment::attempt::Model as AttemptModel;

use crate::assessment::{Assessment, Attempt};
use crate::convert::FromDbModel;

impl FromDbModel<AssessmentModel> for Assessment {
    fn from_db_model(model: AssessmentModel) -> Self {
        Self {
            id: model.id,
            unit_id: model.unit_id,
            course_id: model.course_id,
            title: model.title,
            passing_score: model.passing_score,
            xp_points: model.xp_points,
            max_retakes: model.max_retakes,
        }
    }
}

impl FromDbModel<AttemptModel> for Attempt {
    fn from_db_model(model: AttemptModel) -> Self {
        Self {
            id: model.id,
            assessment_id: model.assessment_id,
            score: model.score,
            passed: model.passed,
            answers: model.answers,
            completed_at: model.completed_at,
        }
    }
}
