//! Search backend contract.

use crate::error::ClientError;
use async_trait::async_trait;

/// A search backend that finds registry organization pages for a phrase.
///
/// # Implementations
///
/// - [`crate::infrastructure::search::SerpApiProvider`] - SerpAPI (Google engine)
/// - [`crate::infrastructure::search::GoogleCseProvider`] - Google Custom Search
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Short name used in logs and metrics.
    fn name(&self) -> &'static str;

    /// Returns true when the provider has the credentials it needs.
    fn is_configured(&self) -> bool;

    /// Searches registry pages for `phrase`.
    ///
    /// Returns at most `max_results` links, each containing the registry
    /// organization path. An unconfigured provider returns an empty list
    /// without touching the network.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failures, non-2xx statuses or an
    /// unreadable response body.
    async fn search(&self, phrase: &str, max_results: usize) -> Result<Vec<String>, ClientError>;
}
