//! Chat-completion contract.

use crate::error::ClientError;
use async_trait::async_trait;

/// A text-generation API taking a system instruction and one user message.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns true when an API key is available.
    fn is_configured(&self) -> bool;

    /// Requests a single completion capped at `max_tokens`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotConfigured`] without a key, and other
    /// [`ClientError`] variants on transport or response failures.
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<String, ClientError>;
}
