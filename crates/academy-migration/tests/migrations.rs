use academy_migration::{Migrator, MigratorTrait};
use academy_test_helpers::{SqliteDb, TestDb};
use sea_orm::Database;
use test_log::test;

#[test(tokio::test)]
async fn test_up_down_up() {
    let db = SqliteDb::new().unwrap();
    let conn = Database::connect(db.db_uri().as_ref()).await.unwrap();

    Migrator::up(&conn, None).await.unwrap();
    Migrator::down(&conn, None).await.unwrap();
    Migrator::up(&conn, None).await.unwrap();

    assert!(Migrator::get_pending_migrations(&conn).await.unwrap().is_empty());
}

#[test(tokio::test)]
async fn test_up_twice_is_a_noop() {
    let db = SqliteDb::new().unwrap();
    let conn = Database::connect(db.db_uri().as_ref()).await.unwrap();

    Migrator::up(&conn, None).await.unwrap();
    Migrator::up(&conn, None).await.unwrap();

    assert!(Migrator::get_pending_migrations(&conn).await.unwrap().is_empty());
}
