mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use axum::{Router, routing::get};
use axum_test::TestServer;
use robot_backend::api::handlers::{root_handler, status_handler};
use robot_backend::routes::app_router;
use tower::ServiceExt;

#[tokio::test]
async fn test_root_banner() {
    let app = Router::new().route("/", get(root_handler));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["message"], "Robot backend online");
}

#[tokio::test]
async fn test_status_online() {
    let app = Router::new().route("/status", get(status_handler));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/status").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["mode"], "online");
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let app = app_router(common::default_test_state(), false);

    let response = app
        .oneshot(Request::get("/status/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["mode"], "online");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = app_router(common::default_test_state(), false);

    let response = app
        .oneshot(Request::get("/organization").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
