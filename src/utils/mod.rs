//! Helpers shared across layers.
//!
//! - [`fallback`] - Log-and-substitute helper used by every fail-soft stage
//! - [`secrets`] - Masking of API keys for log output
//! - [`text`] - Character-safe truncation of replies

pub mod fallback;
pub mod secrets;
pub mod text;
