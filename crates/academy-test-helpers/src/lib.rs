mod sqlite;

pub use sqlite::*;
use std::borrow::Cow;

use academy_migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};

pub trait TestDb {
    fn db_uri(&self) -> Cow<'_, str>;
}

/// Connect to a test database and bring the schema up to date.
pub async fn connect_migrated(db: &impl TestDb) -> Result<DatabaseConnection, DbErr> {
    let conn = Database::connect(db.db_uri().as_ref()).await?;
    Migrator::up(&conn, None).await?;
    Ok(conn)
}
