//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`               - Service banner (public)
//! - `GET  /status`         - Online check (public)
//! - `GET  /health`         - Collaborator configuration (public)
//! - `POST /ask`            - Question answering (rate limited)
//! - `POST /orginfo_query`  - Organization lookup (rate limited)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_governor::key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let lookup_router = if behind_proxy {
        api::routes::lookup_routes().route_layer(rate_limit::layer(SmartIpKeyExtractor))
    } else {
        api::routes::lookup_routes().route_layer(rate_limit::layer(PeerIpKeyExtractor))
    };

    let router = Router::new()
        .merge(api::routes::public_routes())
        .merge(lookup_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
