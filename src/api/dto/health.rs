//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with collaborator status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Credential state for each external collaborator.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub completion_api: CheckStatus,
    /// In chain order.
    pub search_providers: Vec<ProviderCheck>,
}

/// Individual collaborator status.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn from_configured(configured: bool) -> Self {
        if configured {
            Self {
                status: "ok".to_string(),
                message: None,
            }
        } else {
            Self {
                status: "disabled".to_string(),
                message: Some("Credentials not configured".to_string()),
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProviderCheck {
    pub name: String,
    #[serde(flatten)]
    pub check: CheckStatus,
}
