//! Registry page download contract.

use crate::error::ClientError;
use async_trait::async_trait;

/// Downloads the HTML of a registry organization page.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches the page body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failures, timeouts and non-2xx statuses.
    async fn fetch_page(&self, url: &str) -> Result<String, ClientError>;
}
