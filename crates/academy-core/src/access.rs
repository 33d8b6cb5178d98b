use academy_entity::course::course::{CourseType, Model as CourseModel};
use academy_entity::user::Role;
use sea_orm::{ConnectionTrait, DbErr};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Courses the user may open right now: every free course, sequential
/// courses whose predecessors within the same module are all completed, and
/// the mandatory courses for the user's role regardless of gating.
pub async fn accessible_courses<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    role: Role,
) -> Result<Vec<CourseModel>, DbErr> {
    let courses = academy_db::course::Query::all(conn).await?;
    let completed: HashSet<i32> = academy_db::progress::Query::completed_course_ids(conn, user_id)
        .await?
        .into_iter()
        .collect();
    let mandatory: HashSet<i32> = academy_db::course::Query::mandatory_for_role(conn, role)
        .await?
        .into_iter()
        .map(|course| course.id)
        .collect();

    // `courses` is ordered by (module, position), so one forward pass per
    // module sees predecessors before their successors.
    let mut predecessors_done: HashMap<i32, bool> = HashMap::new();
    let mut accessible = Vec::new();
    for course in courses {
        let unlocked = predecessors_done.entry(course.module_id).or_insert(true);
        let open = match course.course_type {
            CourseType::Free => true,
            CourseType::Sequential => *unlocked,
        };
        *unlocked = *unlocked && completed.contains(&course.id);
        if open || mandatory.contains(&course.id) {
            accessible.push(course);
        }
    }
    Ok(accessible)
}
