//! Router-level tests that never touch a database.
//!
//! The pool is built with `connect_lazy`, which opens no connection until a
//! query runs; the routes exercised here issue none.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::mysql::MySqlPoolOptions;
use tower::ServiceExt;

use sakila_api::api::{create_router, AppState};

fn test_router() -> axum::Router {
    let pool = MySqlPoolOptions::new()
        .connect_lazy("mysql://root@localhost:3306/sakila")
        .expect("valid connection URL");
    create_router(AppState::new(pool))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn home_returns_greeting() {
    let response = test_router()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    assert_eq!(
        body_json(response).await,
        serde_json::json!("Welcome to Sakila Database")
    );
}

#[tokio::test]
async fn non_integer_film_id_is_rejected_by_the_router() {
    let response = test_router()
        .oneshot(Request::get("/film/abc").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn negative_film_id_is_rejected_by_the_router() {
    let response = test_router()
        .oneshot(Request::get("/film/-1/actors").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let response = test_router()
        .oneshot(Request::get("/films").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn film_routes_only_accept_get() {
    let response = test_router()
        .oneshot(Request::post("/film/1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
