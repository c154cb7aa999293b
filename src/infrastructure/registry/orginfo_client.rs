//! `reqwest`-backed [`PageSource`] for registry organization pages.

use crate::domain::clients::PageSource;
use crate::error::ClientError;
use crate::infrastructure::http::{build_client, ensure_success};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Downloads orginfo.uz organization pages.
///
/// One GET per call, no retries; the timeout comes from `HTTP_TIMEOUT_SECONDS`.
pub struct OrginfoClient {
    http: reqwest::Client,
}

impl OrginfoClient {
    /// Creates a client with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self {
            http: build_client(timeout)?,
        })
    }
}

#[async_trait]
impl PageSource for OrginfoClient {
    async fn fetch_page(&self, url: &str) -> Result<String, ClientError> {
        debug!(url, "Fetching registry page");

        let response = self.http.get(url).send().await?;
        let response = ensure_success(response).await?;
        let body = response.text().await?;

        debug!(url, bytes = body.len(), "Registry page fetched");
        Ok(body)
    }
}
