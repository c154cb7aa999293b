//! Google Custom Search provider.

use super::{parse_body, registry_links, result_list, site_query};
use crate::domain::clients::SearchProvider;
use crate::error::ClientError;
use crate::infrastructure::http::{build_client, ensure_success};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Credentials for the Custom Search JSON API. Both parts are required.
#[derive(Debug, Clone)]
pub struct GoogleCseCredentials {
    pub api_key: String,
    pub engine_id: String,
}

/// General web search through Google Custom Search; second in the chain.
pub struct GoogleCseProvider {
    http: reqwest::Client,
    credentials: Option<GoogleCseCredentials>,
    endpoint: String,
}

impl GoogleCseProvider {
    /// Creates the provider. It stays inert unless both the API key and the
    /// search engine ID are present.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the HTTP client cannot be built.
    pub fn new(
        api_key: Option<String>,
        engine_id: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let credentials = match (api_key, engine_id) {
            (Some(api_key), Some(engine_id)) => Some(GoogleCseCredentials { api_key, engine_id }),
            _ => None,
        };

        Ok(Self {
            http: build_client(timeout)?,
            credentials,
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
impl SearchProvider for GoogleCseProvider {
    fn name(&self) -> &'static str {
        "google_cse"
    }

    fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    async fn search(&self, phrase: &str, max_results: usize) -> Result<Vec<String>, ClientError> {
        let Some(credentials) = &self.credentials else {
            debug!("Google CSE credentials not set, skipping provider");
            return Ok(Vec::new());
        };

        let query = site_query(phrase);

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("key", credentials.api_key.as_str()),
                ("cx", credentials.engine_id.as_str()),
                ("q", query.as_str()),
            ])
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let body = parse_body(&response.text().await?)?;
        let links = registry_links(result_list(&body, "items")?, max_results);

        debug!(count = links.len(), "Google CSE search finished");
        Ok(links)
    }
}
