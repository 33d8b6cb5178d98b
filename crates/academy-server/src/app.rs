use crate::permissions::extract;
use crate::routes;
use axum::routing::get;
use axum::{Extension, Router};
use axum_prometheus::PrometheusMetricLayerBuilder;
use http::{header, Method};
use protect_axum::GrantsLayer;
use sea_orm::DatabaseConnection;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

pub(crate) fn create_app(origins: Vec<String>, conn: DatabaseConnection) -> anyhow::Result<Router> {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayerBuilder::new()
        .with_prefix("api")
        .with_default_metrics()
        .build_pair();

    let api_cors = CorsLayer::new()
        .allow_origin(
            origins
                .iter()
                .map(|origin| origin.parse())
                .collect::<Result<Vec<_>, _>>()?,
        )
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::AUTHORIZATION, header::ORIGIN])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .max_age(Duration::from_secs(3600));

    let app = Router::new()
        .merge(routes::swagger::create_router())
        .nest(
            "/api/v0",
            Router::new()
                .nest("/status", routes::api::v0::status::create_router())
                .nest("/users", routes::api::v0::users::create_router())
                .nest("/courses", routes::api::v0::courses::create_router())
                .nest("/units", routes::api::v0::units::create_router())
                .nest("/blocks", routes::api::v0::blocks::create_router())
                .nest("/assessments", routes::api::v0::assessments::create_router())
                .nest("/progress", routes::api::v0::progress::create_router())
                .nest("/badges", routes::api::v0::badges::create_router())
                .nest("/certificates", routes::api::v0::certificates::create_router())
                .nest("/notifications", routes::api::v0::notifications::create_router())
                .layer(api_cors),
        )
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(
            // Router layers are called bottom to top
            // ServiceBuilder layers are called top to bottom
            ServiceBuilder::new()
                .layer(prometheus_layer)
                .layer(Extension(conn))
                .layer(GrantsLayer::with_extractor(extract)),
        )
        .with_state(());
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_entity::user::Role;
    use academy_test_helpers::{connect_migrated, SqliteDb};
    use axum::body::{to_bytes, Body};
    use http::{Request, StatusCode};
    use test_log::test;
    use tower::ServiceExt;

    async fn test_app() -> (SqliteDb, DatabaseConnection, Router) {
        let db = SqliteDb::new().unwrap();
        let conn = connect_migrated(&db).await.unwrap();
        let app = create_app(Vec::new(), conn.clone()).unwrap();
        (db, conn, app)
    }

    #[test(tokio::test)]
    async fn test_status_is_public() {
        let (_db, _conn, app) = test_app().await;

        let response = app
            .oneshot(Request::get("/api/v0/status").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(StatusCode::OK, response.status());
    }

    #[test(tokio::test)]
    async fn test_me_requires_a_token() {
        let (_db, _conn, app) = test_app().await;

        let response = app
            .oneshot(Request::get("/api/v0/users/me").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(StatusCode::UNAUTHORIZED, response.status());
    }

    #[test(tokio::test)]
    async fn test_me_returns_the_token_owner() {
        let (_db, conn, app) = test_app().await;
        let user = academy_db::user::Mutation::create(&conn, "Trainee".to_string(), "t@vx.example".to_string(), Role::User)
            .await
            .unwrap();
        academy_db::user::Mutation::create_token(&conn, user.id, "test-token".to_string())
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::get("/api/v0/users/me")
                    .header("authorization", "Bearer test-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(StatusCode::OK, response.status());

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let me: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(user.id.to_string(), me["id"].as_str().unwrap());
        assert_eq!("user", me["role"].as_str().unwrap());
    }

    #[test(tokio::test)]
    async fn test_unit_detail_lists_every_assessment() {
        let (_db, conn, app) = test_app().await;
        let user = academy_db::user::Mutation::create(&conn, "Trainee".to_string(), "t@vx.example".to_string(), Role::User)
            .await
            .unwrap();
        academy_db::user::Mutation::create_token(&conn, user.id, "test-token".to_string())
            .await
            .unwrap();

        let unit = academy_db::unit::Mutation::create(&conn, "Safety".to_string(), None)
            .await
            .unwrap();
        academy_db::assessment::Mutation::create(&conn, Some(unit.id), None, "Theory check".to_string(), 70, 0, -1)
            .await
            .unwrap();
        academy_db::assessment::Mutation::create(&conn, Some(unit.id), None, "Practice check".to_string(), 80, 0, -1)
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::get(format!("/api/v0/units/{}", unit.id))
                    .header("authorization", "Bearer test-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(StatusCode::OK, response.status());

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let detail: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let titles: Vec<&str> = detail["assessments"]
            .as_array()
            .unwrap()
            .iter()
            .map(|assessment| assessment["title"].as_str().unwrap())
            .collect();
        assert_eq!(vec!["Theory check", "Practice check"], titles);
    }

    #[test(tokio::test)]
    async fn test_admin_routes_reject_plain_users() {
        let (_db, conn, app) = test_app().await;
        let user = academy_db::user::Mutation::create(&conn, "Trainee".to_string(), "t@vx.example".to_string(), Role::User)
            .await
            .unwrap();
        academy_db::user::Mutation::create_token(&conn, user.id, "test-token".to_string())
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::get("/api/v0/users")
                    .header("authorization", "Bearer test-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(StatusCode::FORBIDDEN, response.status());
    }
}
