use academy_entity::certificate::Model as CertificateModel;

use crate::certificate::Certificate;
use crate::convert::FromDbModel;

impl FromDbModel<CertificateModel> for Certificate {
    fn from_db_model(model: CertificateModel) -> Self {
        Self {
            id: model.id,
            course_id: model.course_id,
            certificate_number: model.certificate_number,
            issued_at: model.issued_at,
        }
    }
}
