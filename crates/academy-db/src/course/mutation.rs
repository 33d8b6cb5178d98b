use academy_entity::course::area;
use academy_entity::course::course::{self, CourseType, Entity as Course, Model as CourseModel};
use academy_entity::course::mandatory;
use academy_entity::course::module;
use academy_entity::course::unit_link::{self, Entity as UnitLink};
use academy_entity::user::Role;
use chrono::Utc;
use sea_orm::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, IntoActiveValue};
use std::error::Error;

pub struct Mutation;

impl Mutation {
    pub async fn create_area<C: ConnectionTrait>(
        conn: &C,
        name: String,
        description: Option<String>,
    ) -> Result<area::Model, DbErr> {
        let row = area::ActiveModel {
            name: name.into_active_value(),
            description: description.into_active_value(),
            ..Default::default()
        };
        row.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to create training area");
        })
    }

    pub async fn create_module<C: ConnectionTrait>(
        conn: &C,
        training_area_id: i32,
        name: String,
        description: Option<String>,
    ) -> Result<module::Model, DbErr> {
        let row = module::ActiveModel {
            training_area_id: training_area_id.into_active_value(),
            name: name.into_active_value(),
            description: description.into_active_value(),
            ..Default::default()
        };
        row.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, training_area_id, "failed to create module");
        })
    }

    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        module_id: i32,
        name: String,
        description: Option<String>,
        course_type: CourseType,
        position: i32,
    ) -> Result<CourseModel, DbErr> {
        let course = course::ActiveModel {
            module_id: module_id.into_active_value(),
            name: name.into_active_value(),
            description: description.into_active_value(),
            course_type: ActiveValue::Set(course_type),
            position: position.into_active_value(),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        course.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, module_id, "failed to create course");
        })
    }

    pub async fn update<C: ConnectionTrait>(
        conn: &C,
        course: CourseModel,
        name: Option<String>,
        description: Option<String>,
        course_type: Option<CourseType>,
        position: Option<i32>,
    ) -> Result<CourseModel, DbErr> {
        let course_id = course.id;
        let mut active: course::ActiveModel = course.into();
        if let Some(name) = name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(course_type) = course_type {
            active.course_type = ActiveValue::Set(course_type);
        }
        if let Some(position) = position {
            active.position = ActiveValue::Set(position);
        }
        active.update(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, course_id, "failed to update course");
        })
    }

    /// Attaching twice only moves the unit to the new position.
    pub async fn attach_unit<C: ConnectionTrait>(
        conn: &C,
        course_id: i32,
        unit_id: i32,
        position: i32,
    ) -> Result<(), DbErr> {
        let link = unit_link::ActiveModel {
            course_id: ActiveValue::Set(course_id),
            unit_id: ActiveValue::Set(unit_id),
            position: ActiveValue::Set(position),
        };
        let on_conflict = OnConflict::columns([unit_link::Column::CourseId, unit_link::Column::UnitId])
            .update_column(unit_link::Column::Position)
            .to_owned();
        UnitLink::insert(link)
            .on_conflict(on_conflict)
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, course_id, unit_id, "failed to attach unit");
            })?;
        Ok(())
    }

    pub async fn set_mandatory<C: ConnectionTrait>(conn: &C, course_id: i32, role: Role) -> Result<(), DbErr> {
        let row = mandatory::ActiveModel {
            course_id: ActiveValue::Set(course_id),
            role: ActiveValue::Set(role),
        };
        let mut on_conflict = OnConflict::columns([mandatory::Column::CourseId, mandatory::Column::Role]);
        on_conflict.do_nothing();
        mandatory::Entity::insert(row)
            .on_conflict(on_conflict)
            .do_nothing()
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, course_id, "failed to mark course mandatory");
            })?;
        Ok(())
    }
}
