//! Shared HTTP client plumbing.

use crate::error::ClientError;
use std::time::Duration;

/// User agent sent to the registry and to the search APIs.
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; RobotBot/1.0; +https://robot-bot)";

/// Longest response body snippet kept in a [`ClientError::Status`].
const ERROR_BODY_LIMIT: usize = 512;

/// Builds a `reqwest` client with a fixed per-request timeout.
///
/// # Errors
///
/// Returns [`ClientError::Http`] if the TLS backend cannot be initialized.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, ClientError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Passes 2xx responses through and turns everything else into
/// [`ClientError::Status`] with a truncated body.
pub async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let body: String = body.chars().take(ERROR_BODY_LIMIT).collect();

    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}
