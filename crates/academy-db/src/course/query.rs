use academy_entity::course::area::{self, Entity as TrainingArea};
use academy_entity::course::course::{self, Entity as Course, Model as CourseModel};
use academy_entity::course::mandatory::{self, Entity as MandatoryCourse};
use academy_entity::course::module::{self, Entity as Module};
use academy_entity::course::unit_link::{self, Entity as UnitLink};
use academy_entity::unit::unit::{Entity as Unit, Model as UnitModel};
use academy_entity::user::Role;
use sea_orm::prelude::*;
use sea_orm::QueryOrder;
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn all<C: ConnectionTrait>(conn: &C) -> Result<Vec<CourseModel>, DbErr> {
        Course::find()
            .order_by_asc(course::Column::ModuleId)
            .order_by_asc(course::Column::Position)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to list courses");
            })
    }

    pub async fn by_id<C: ConnectionTrait>(conn: &C, course_id: i32) -> Result<Option<CourseModel>, DbErr> {
        Course::find_by_id(course_id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, course_id, "failed to load course");
        })
    }

    pub async fn by_module<C: ConnectionTrait>(conn: &C, module_id: i32) -> Result<Vec<CourseModel>, DbErr> {
        Course::find()
            .filter(course::Column::ModuleId.eq(module_id))
            .order_by_asc(course::Column::Position)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, module_id, "failed to load courses by module");
            })
    }

    /// Units associated with the course, in course-defined order.
    pub async fn units<C: ConnectionTrait>(conn: &C, course_id: i32) -> Result<Vec<UnitModel>, DbErr> {
        let links = UnitLink::find()
            .filter(unit_link::Column::CourseId.eq(course_id))
            .find_also_related(Unit)
            .order_by_asc(unit_link::Column::Position)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, course_id, "failed to load course units");
            })?;
        Ok(links.into_iter().filter_map(|(_, unit)| unit).collect())
    }

    /// Courses whose unit list includes the given unit. Used to decide which
    /// courses to re-evaluate after a unit-level event.
    pub async fn containing_unit<C: ConnectionTrait>(conn: &C, unit_id: i32) -> Result<Vec<CourseModel>, DbErr> {
        let links = UnitLink::find()
            .filter(unit_link::Column::UnitId.eq(unit_id))
            .find_also_related(Course)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, unit_id, "failed to load containing courses");
            })?;
        Ok(links.into_iter().filter_map(|(_, course)| course).collect())
    }

    pub async fn mandatory_for_role<C: ConnectionTrait>(conn: &C, role: Role) -> Result<Vec<CourseModel>, DbErr> {
        let rows = MandatoryCourse::find()
            .filter(mandatory::Column::Role.eq(role))
            .find_also_related(Course)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load mandatory courses");
            })?;
        Ok(rows.into_iter().filter_map(|(_, course)| course).collect())
    }

    /// Modules belonging to training areas whose name contains `needle`.
    pub async fn modules_in_areas_matching<C: ConnectionTrait>(
        conn: &C,
        needle: &str,
    ) -> Result<Vec<module::Model>, DbErr> {
        let areas = TrainingArea::find()
            .filter(area::Column::Name.contains(needle))
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, needle, "failed to match training areas");
            })?;
        if areas.is_empty() {
            return Ok(Vec::new());
        }
        let area_ids: Vec<i32> = areas.into_iter().map(|a| a.id).collect();
        Module::find()
            .filter(module::Column::TrainingAreaId.is_in(area_ids))
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load area modules");
            })
    }
}
