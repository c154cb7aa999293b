//! Masking of credentials before they reach the logs.

/// Masks an API key, keeping only a short prefix for identification.
///
/// Keys of 8 characters or fewer are masked entirely.
///
/// - `sk-proj-abcdef123456` → `sk-p***`
/// - `short` → `***`
pub fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 8 {
        return "***".to_string();
    }

    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}***")
}

/// Renders an optional key for a configuration summary.
pub fn describe_secret(secret: Option<&str>) -> String {
    match secret {
        Some(s) => format!("{} (set)", mask_secret(s)),
        None => "not set".to_string(),
    }
}
