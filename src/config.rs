//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Every collaborator credential is optional: a missing key disables that
//! capability instead of aborting startup.
//!
//! ## Example
//!
//! ```bash
//! export OPENAI_API_KEY="sk-..."
//! export SERPAPI_KEY="..."
//! export GOOGLE_API_KEY="..."
//! export GOOGLE_CSE_ID="..."
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Rate-limit by forwarded client IP (default: `false`)
//! - `OPENAI_API_KEY` - Completion API key (unset disables query normalization and `/ask`)
//! - `OPENAI_MODEL` - Completion model (default: `gpt-4o-mini`)
//! - `OPENAI_BASE_URL` - Completion API base (default: `https://api.openai.com/v1`)
//! - `SERPAPI_KEY` - Primary search provider
//! - `GOOGLE_API_KEY` / `GOOGLE_CSE_ID` - Secondary search provider, both required
//! - `HTTP_TIMEOUT_SECONDS` - Per-call timeout for every collaborator (default: 10)
//! - `ORGINFO_FETCH_CONCURRENCY` - Parallel registry page fetches (default: 1, max: 8)
//!
//! Variables set to an empty string are treated as unset.

use crate::infrastructure::llm::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::utils::secrets::describe_secret;
use anyhow::Result;
use std::env;
use std::time::Duration;
use url::Url;

/// Upper bound for `ORGINFO_FETCH_CONCURRENCY`.
pub const MAX_FETCH_CONCURRENCY: usize = 8;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,

    // ── Completion API ──────────────────────────────────────────────────────
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,

    // ── Search providers ────────────────────────────────────────────────────
    pub serpapi_key: Option<String>,
    pub google_api_key: Option<String>,
    pub google_cse_id: Option<String>,

    /// Timeout applied to each outbound call (`HTTP_TIMEOUT_SECONDS`, default: 10).
    pub http_timeout_seconds: u64,
    /// Registry pages downloaded at once per request (`ORGINFO_FETCH_CONCURRENCY`, default: 1).
    pub fetch_concurrency: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Never fails today; unparsable numbers fall back to their defaults.
    /// The `Result` keeps the signature stable for required settings.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env_opt("LISTEN").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let log_level = env_opt("RUST_LOG").unwrap_or_else(|| "info".to_string());
        let log_format = env_opt("LOG_FORMAT").unwrap_or_else(|| "text".to_string());

        let behind_proxy = env_opt("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let openai_model = env_opt("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let openai_base_url =
            env_opt("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let http_timeout_seconds = env_opt("HTTP_TIMEOUT_SECONDS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let fetch_concurrency = env_opt("ORGINFO_FETCH_CONCURRENCY")
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            openai_api_key: env_opt("OPENAI_API_KEY"),
            openai_model,
            openai_base_url,
            serpapi_key: env_opt("SERPAPI_KEY"),
            google_api_key: env_opt("GOOGLE_API_KEY"),
            google_cse_id: env_opt("GOOGLE_CSE_ID"),
            http_timeout_seconds,
            fetch_concurrency,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `openai_base_url` is not an HTTP(S) URL
    /// - `http_timeout_seconds` is zero
    /// - `fetch_concurrency` is outside `1..=8`
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        match Url::parse(&self.openai_base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => anyhow::bail!(
                "OPENAI_BASE_URL must be an absolute 'http://' or 'https://' URL, got '{}'",
                self.openai_base_url
            ),
        }

        if self.http_timeout_seconds == 0 {
            anyhow::bail!("HTTP_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.fetch_concurrency == 0 || self.fetch_concurrency > MAX_FETCH_CONCURRENCY {
            anyhow::bail!(
                "ORGINFO_FETCH_CONCURRENCY must be between 1 and {}, got {}",
                MAX_FETCH_CONCURRENCY,
                self.fetch_concurrency
            );
        }

        Ok(())
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds)
    }

    /// Returns whether both Google Custom Search credentials are present.
    pub fn is_google_cse_enabled(&self) -> bool {
        self.google_api_key.is_some() && self.google_cse_id.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!(
            "  OpenAI: {} (model {}, {})",
            describe_secret(self.openai_api_key.as_deref()),
            self.openai_model,
            self.openai_base_url
        );
        tracing::info!(
            "  SerpAPI: {}",
            describe_secret(self.serpapi_key.as_deref())
        );

        if self.is_google_cse_enabled() {
            tracing::info!(
                "  Google CSE: {} (enabled)",
                describe_secret(self.google_api_key.as_deref())
            );
        } else {
            tracing::info!("  Google CSE: disabled");
        }

        tracing::info!("  HTTP timeout: {}s", self.http_timeout_seconds);
        tracing::info!("  Fetch concurrency: {}", self.fetch_concurrency);
    }
}

/// Reads a variable, treating an empty or blank value as unset.
fn env_opt(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
