use super::api;

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder};
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

struct SecurityAddon;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::v0::status::get_status,
        api::v0::users::get_me,
        api::v0::users::list_users,
        api::v0::users::create_user,
        api::v0::users::set_role,
        api::v0::users::delete_user,
        api::v0::courses::list_courses,
        api::v0::courses::get_course,
        api::v0::courses::get_course_units,
        api::v0::courses::create_course,
        api::v0::courses::update_course,
        api::v0::courses::attach_unit,
        api::v0::courses::set_mandatory,
        api::v0::courses::create_area,
        api::v0::courses::create_module,
        api::v0::units::create_unit,
        api::v0::units::get_unit,
        api::v0::units::create_block,
        api::v0::blocks::complete_block,
        api::v0::assessments::get_assessment,
        api::v0::assessments::create_assessment,
        api::v0::assessments::submit_assessment,
        api::v0::progress::get_progress,
        api::v0::progress::record_progress,
        api::v0::badges::get_catalog,
        api::v0::badges::get_earned_badges,
        api::v0::badges::create_badge,
        api::v0::certificates::get_certificates,
        api::v0::certificates::generate_certificate,
        api::v0::notifications::get_notifications,
        api::v0::notifications::mark_read,
    ),
    modifiers(&SecurityAddon),
    tags()
)]
struct ApiDoc;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        // we can unwrap safely, since there already are components registered.
        let components = openapi.components.as_mut().expect("components not registered");
        components.add_security_scheme(
            "token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some("Api Token"))
                    .build(),
            ),
        );
    }
}

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        // There is no need to create `RapiDoc::with_openapi` because the OpenApi is served
        // via SwaggerUi instead we only make rapidoc to point to the existing doc.
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
}
