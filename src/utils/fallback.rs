//! Fail-soft substitution for collaborator calls.
//!
//! Every stage of the resolution pipeline degrades instead of failing: a
//! search error becomes "no links", a completion error becomes the raw text,
//! a fetch error becomes a placeholder card. This helper is the single place
//! where that substitution is logged.

use std::fmt::Display;
use tracing::warn;

/// Unwraps `result`, or logs the error under `stage` and returns `default()`.
///
/// # Examples
///
/// ```
/// use robot_backend::utils::fallback::or_default;
///
/// let links: Result<Vec<String>, String> = Err("timeout".to_string());
/// assert!(or_default("search", links, Vec::new).is_empty());
///
/// let phrase: Result<String, String> = Ok("ООО Ромашка".to_string());
/// assert_eq!(or_default("normalizer", phrase, String::new), "ООО Ромашка");
/// ```
pub fn or_default<T, E, F>(stage: &str, result: Result<T, E>, default: F) -> T
where
    E: Display,
    F: FnOnce() -> T,
{
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!(stage, error = %e, "Stage failed, using fallback");
            default()
        }
    }
}
