//! SerpAPI search provider.

use super::{parse_body, registry_links, result_list, site_query};
use crate::domain::clients::SearchProvider;
use crate::error::ClientError;
use crate::infrastructure::http::{build_client, ensure_success};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

const DEFAULT_ENDPOINT: &str = "https://serpapi.com/search";

/// Paid Google search through SerpAPI; first in the provider chain.
///
/// Without `SERPAPI_KEY` the provider is inert and returns no links.
pub struct SerpApiProvider {
    http: reqwest::Client,
    api_key: Option<String>,
    endpoint: String,
}

impl SerpApiProvider {
    /// Creates the provider.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the HTTP client cannot be built.
    pub fn new(api_key: Option<String>, timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self {
            http: build_client(timeout)?,
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Overrides the search endpoint (used against local stubs).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl SearchProvider for SerpApiProvider {
    fn name(&self) -> &'static str {
        "serpapi"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn search(&self, phrase: &str, max_results: usize) -> Result<Vec<String>, ClientError> {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("SerpAPI key not set, skipping provider");
            return Ok(Vec::new());
        };

        let query = site_query(phrase);
        let num = max_results.to_string();

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("engine", "google"),
                ("q", query.as_str()),
                ("api_key", api_key),
                ("num", num.as_str()),
            ])
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let body = parse_body(&response.text().await?)?;
        let links = registry_links(result_list(&body, "organic_results")?, max_results);

        debug!(count = links.len(), "SerpAPI search finished");
        Ok(links)
    }
}
