//! API route configuration.

use crate::api::handlers::{
    ask_handler, health_handler, orginfo_query_handler, root_handler, status_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Liveness and health routes. Not rate limited so the robot can poll freely.
///
/// # Endpoints
///
/// - `GET /`        - Service banner
/// - `GET /status`  - Online check used by the robot
/// - `GET /health`  - Collaborator configuration state
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
}

/// Lookup routes that reach external collaborators.
///
/// # Endpoints
///
/// - `POST /ask`            - Free-form question answered for the display
/// - `POST /orginfo_query`  - Organization lookup on orginfo.uz
pub fn lookup_routes() -> Router<AppState> {
    Router::new()
        .route("/ask", post(ask_handler))
        .route("/orginfo_query", post(orginfo_query_handler))
}
