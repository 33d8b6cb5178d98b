use academy_entity::progress::Model as ProgressModel;

use crate::convert::FromDbModel;
use crate::progress::Progress;

impl FromDbModel<ProgressModel> for Progress {
    fn from_db_model(model: ProgressModel) -> Self {
        Self {
            course_id: model.course_id,
            percent_complete: model.percent_complete,
            completed: model.completed,
            last_accessed: model.last_accessed,
        }
    }
}
