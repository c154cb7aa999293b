//! Canonical orginfo.uz organization page URLs.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Registry organization page anywhere inside free text.
static REGISTRY_URL_IN_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://orginfo\.uz/organization/[0-9a-f]+/?").unwrap()
});

/// A provider link that starts with a registry organization page URL.
///
/// The tail may only continue with a path, query or fragment, so
/// `/organization/abc1xyz` is rejected instead of being cut to `abc1`.
static REGISTRY_URL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(https?://orginfo\.uz/organization/[0-9a-f]+/?)(?:[/?#].*)?$").unwrap()
});

/// A link known to point at a registry organization page.
///
/// Only constructible through [`CandidateUrl::parse`] or
/// [`CandidateUrl::find_in`], so downstream code never sees an arbitrary link.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateUrl(String);

impl CandidateUrl {
    /// Validates a link returned by a search provider.
    ///
    /// Returns `None` for links that do not start with the canonical page URL.
    /// Sub-pages, query strings and fragments are cut back to the page URL
    /// (a sub-page also loses the separating slash).
    ///
    /// # Examples
    ///
    /// ```
    /// use robot_backend::domain::entities::CandidateUrl;
    ///
    /// let url = CandidateUrl::parse("https://orginfo.uz/organization/1a2b3c/").unwrap();
    /// assert_eq!(url.as_str(), "https://orginfo.uz/organization/1a2b3c/");
    ///
    /// assert!(CandidateUrl::parse("https://orginfo.uz/search?q=1a2b").is_none());
    /// ```
    pub fn parse(link: &str) -> Option<Self> {
        REGISTRY_URL_PREFIX
            .captures(link.trim())
            .and_then(|caps| caps.get(1))
            .map(|m| Self(m.as_str().to_string()))
    }

    /// Finds the first registry page URL embedded in free text.
    ///
    /// # Examples
    ///
    /// ```
    /// use robot_backend::domain::entities::CandidateUrl;
    ///
    /// let url = CandidateUrl::find_in("check https://orginfo.uz/organization/1a2b3c4d/ please");
    /// assert_eq!(url.unwrap().as_str(), "https://orginfo.uz/organization/1a2b3c4d/");
    /// ```
    pub fn find_in(text: &str) -> Option<Self> {
        REGISTRY_URL_IN_TEXT
            .find(text)
            .map(|m| Self(m.as_str().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CandidateUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CandidateUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
