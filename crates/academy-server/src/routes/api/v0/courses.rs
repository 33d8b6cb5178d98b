use crate::permissions::Permission;
use crate::routes::api::v0::courses::error::CourseError;
use crate::user::ExtractUser;
use academy_core::access;
use academy_model::convert::{IntoDbModel, IntoModel};
use academy_model::course::{
    Course, CourseUpdate, MandatoryAssignment, Module, NewCourse, NewModule, NewTrainingArea, TrainingArea,
    UnitAttachment,
};
use academy_model::unit::UnitDetail;
use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use http::StatusCode;
use protect_axum::protect;
use sea_orm::DatabaseConnection;
use tokio::try_join;

mod error;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route("/areas", post(create_area))
        .route("/modules", post(create_module))
        .nest(
            "/{course_id}",
            Router::new()
                .route("/", get(get_course).put(update_course))
                .route("/units", get(get_course_units).post(attach_unit))
                .route("/mandatory", post(set_mandatory)),
        )
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/courses",
    responses(
        (status = OK, body = Vec<Course>, description = "Courses the user may open right now"),
    ),
    tag = "v0/courses",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn list_courses(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Response, CourseError> {
    let courses = access::accessible_courses(&conn, user.id, user.role.into_db_model()).await?;
    let courses: Vec<Course> = courses.into_iter().map(IntoModel::into_model).collect();
    Ok(Json(courses).into_response())
}

#[utoipa::path(
    get,
    path = "/api/v0/courses/{course_id}",
    responses(
        (status = OK, body = Course, description = "A single course"),
        (status = NOT_FOUND, description = "Unknown course"),
    ),
    tag = "v0/courses",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn get_course(
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<i32>,
) -> Result<Response, CourseError> {
    let course: Course = academy_db::course::Query::by_id(&conn, course_id)
        .await?
        .ok_or(CourseError::CourseNotFound)?
        .into_model();
    Ok(Json(course).into_response())
}

#[utoipa::path(
    get,
    path = "/api/v0/courses/{course_id}/units",
    responses(
        (status = OK, body = Vec<UnitDetail>, description = "The course's units in order, with their blocks and assessments"),
        (status = NOT_FOUND, description = "Unknown course"),
    ),
    tag = "v0/courses",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn get_course_units(
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<i32>,
) -> Result<Response, CourseError> {
    academy_db::course::Query::by_id(&conn, course_id)
        .await?
        .ok_or(CourseError::CourseNotFound)?;

    let units = academy_db::course::Query::units(&conn, course_id).await?;
    let mut details = Vec::with_capacity(units.len());
    for unit in units {
        let (blocks, assessments) = try_join!(
            academy_db::unit::Query::blocks(&conn, unit.id),
            academy_db::assessment::Query::for_unit(&conn, unit.id),
        )?;
        let detail: UnitDetail = (unit, blocks, assessments).into_model();
        details.push(detail);
    }

    Ok(Json(details).into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/courses",
    request_body = NewCourse,
    responses(
        (status = CREATED, body = Course, description = "The created course"),
    ),
    tag = "v0/courses",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Manage", ty = "Permission")]
pub(crate) async fn create_course(
    Extension(conn): Extension<DatabaseConnection>,
    Json(new_course): Json<NewCourse>,
) -> Result<Response, CourseError> {
    let course = academy_db::course::Mutation::create(
        &conn,
        new_course.module_id,
        new_course.name,
        new_course.description,
        new_course.course_type.into_db_model(),
        new_course.position,
    )
    .await?;
    let course: Course = course.into_model();
    Ok((StatusCode::CREATED, Json(course)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/v0/courses/{course_id}",
    request_body = CourseUpdate,
    responses(
        (status = OK, body = Course, description = "The updated course"),
        (status = NOT_FOUND, description = "Unknown course"),
    ),
    tag = "v0/courses",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Manage", ty = "Permission")]
pub(crate) async fn update_course(
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<i32>,
    Json(update): Json<CourseUpdate>,
) -> Result<Response, CourseError> {
    let course = academy_db::course::Query::by_id(&conn, course_id)
        .await?
        .ok_or(CourseError::CourseNotFound)?;
    let course = academy_db::course::Mutation::update(
        &conn,
        course,
        update.name,
        update.description,
        update.course_type.map(IntoDbModel::into_db_model),
        update.position,
    )
    .await?;
    let course: Course = course.into_model();
    Ok(Json(course).into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/courses/{course_id}/units",
    request_body = UnitAttachment,
    responses(
        (status = NO_CONTENT, description = "Unit attached to the course"),
        (status = NOT_FOUND, description = "Unknown course or unit"),
    ),
    tag = "v0/courses",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Manage", ty = "Permission")]
pub(crate) async fn attach_unit(
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<i32>,
    Json(attachment): Json<UnitAttachment>,
) -> Result<Response, CourseError> {
    academy_db::course::Query::by_id(&conn, course_id)
        .await?
        .ok_or(CourseError::CourseNotFound)?;
    academy_db::unit::Query::by_id(&conn, attachment.unit_id)
        .await?
        .ok_or(CourseError::UnitNotFound)?;

    academy_db::course::Mutation::attach_unit(&conn, course_id, attachment.unit_id, attachment.position).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/courses/{course_id}/mandatory",
    request_body = MandatoryAssignment,
    responses(
        (status = NO_CONTENT, description = "Course marked mandatory for the role"),
        (status = NOT_FOUND, description = "Unknown course"),
    ),
    tag = "v0/courses",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn set_mandatory(
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<i32>,
    Json(assignment): Json<MandatoryAssignment>,
) -> Result<Response, CourseError> {
    academy_db::course::Query::by_id(&conn, course_id)
        .await?
        .ok_or(CourseError::CourseNotFound)?;

    academy_db::course::Mutation::set_mandatory(&conn, course_id, assignment.role.into_db_model()).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/courses/areas",
    request_body = NewTrainingArea,
    responses(
        (status = CREATED, body = TrainingArea, description = "The created training area"),
    ),
    tag = "v0/courses",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Manage", ty = "Permission")]
pub(crate) async fn create_area(
    Extension(conn): Extension<DatabaseConnection>,
    Json(new_area): Json<NewTrainingArea>,
) -> Result<Response, CourseError> {
    let area: TrainingArea = academy_db::course::Mutation::create_area(&conn, new_area.name, new_area.description)
        .await?
        .into_model();
    Ok((StatusCode::CREATED, Json(area)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/courses/modules",
    request_body = NewModule,
    responses(
        (status = CREATED, body = Module, description = "The created module"),
    ),
    tag = "v0/courses",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Manage", ty = "Permission")]
pub(crate) async fn create_module(
    Extension(conn): Extension<DatabaseConnection>,
    Json(new_module): Json<NewModule>,
) -> Result<Response, CourseError> {
    let module = academy_db::course::Mutation::create_module(
        &conn,
        new_module.training_area_id,
        new_module.name,
        new_module.description,
    )
    .await?;
    let module: Module = module.into_model();
    Ok((StatusCode::CREATED, Json(module)).into_response())
}
