//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse, ProviderCheck};
use crate::state::AppState;

/// Returns service health with the credential state of each collaborator.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Status
///
/// - **healthy**: at least one search provider is configured
/// - **degraded**: no search provider; lookups can only follow direct links
///
/// Always answers `200 OK`: a missing collaborator degrades answers but never
/// makes the service unavailable.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "completion_api": { "status": "ok" },
///     "search_providers": [
///       { "name": "serpapi", "status": "ok" },
///       { "name": "google_cse", "status": "disabled", "message": "Credentials not configured" }
///     ]
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let providers = state.resolution_service.chain().provider_status();
    let any_provider = providers.iter().any(|p| p.configured);

    let search_providers = providers
        .into_iter()
        .map(|p| ProviderCheck {
            name: p.name.to_string(),
            check: CheckStatus::from_configured(p.configured),
        })
        .collect();

    Json(HealthResponse {
        status: if any_provider { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            completion_api: CheckStatus::from_configured(state.ask_service.is_configured()),
            search_providers,
        },
    })
}
