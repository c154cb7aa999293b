//! Liveness endpoints polled by the robot.

use axum::Json;

use crate::api::dto::status::{RootResponse, StatusResponse};

/// `GET /`
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        status: "ok",
        message: "Robot backend online",
    })
}

/// `GET /status`
///
/// The robot switches to offline mode when this stops answering.
pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        mode: "online",
    })
}
