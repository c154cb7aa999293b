//! Search providers for registry organization pages.
//!
//! Both providers scope the phrase with `site:orginfo.uz`, read a provider
//! specific JSON list and keep only entries whose `link` is a canonical
//! organization page.
//!
//! - [`SerpApiProvider`] - SerpAPI, Google engine (`organic_results`)
//! - [`GoogleCseProvider`] - Google Custom Search JSON API (`items`)

mod google_cse;
mod serpapi;

pub use google_cse::GoogleCseProvider;
pub use serpapi::SerpApiProvider;

use crate::domain::entities::CandidateUrl;
use crate::error::ClientError;
use serde_json::Value;

/// Scopes a phrase to the registry site.
pub fn site_query(phrase: &str) -> String {
    format!("site:orginfo.uz {phrase}")
}

/// Reads the list under `key` from a provider response.
///
/// A missing key means "no results"; a present key of the wrong type is a
/// malformed response.
pub fn result_list<'a>(body: &'a Value, key: &str) -> Result<&'a [Value], ClientError> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(&[][..]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(other) => Err(ClientError::Parse(format!(
            "expected `{key}` to be a list, got {other}"
        ))),
    }
}

/// Collects up to `max_results` registry links from result entries.
///
/// Entries without a string `link`, or whose link is not a canonical
/// organization page, are skipped before the cap is applied. Links come back
/// in their canonical form and in provider order.
pub fn registry_links(items: &[Value], max_results: usize) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.get("link").and_then(Value::as_str))
        .filter_map(CandidateUrl::parse)
        .take(max_results)
        .map(CandidateUrl::into_string)
        .collect()
}

/// Parses a provider response body as JSON.
pub fn parse_body(body: &str) -> Result<Value, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_site_query() {
        assert_eq!(site_query("ООО Ромашка"), "site:orginfo.uz ООО Ромашка");
    }

    #[test]
    fn test_registry_links_filters_foreign_and_malformed_entries() {
        let items = json!([
            { "link": "https://orginfo.uz/organization/aa11/" },
            { "link": "https://orginfo.uz/ru/search?q=aa11" },
            { "link": 42 },
            { "title": "no link at all" },
            "not an object",
            null,
            { "link": "https://example.com/page" },
            { "link": "http://orginfo.uz/organization/bb22" }
        ]);

        let links = registry_links(items.as_array().unwrap(), 5);

        assert_eq!(
            links,
            vec![
                "https://orginfo.uz/organization/aa11/".to_string(),
                "http://orginfo.uz/organization/bb22".to_string(),
            ]
        );
        assert!(links.iter().all(|l| CandidateUrl::parse(l).is_some()));
    }

    #[test]
    fn test_registry_links_truncates_in_order() {
        let items: Vec<Value> = (0..8)
            .map(|i| json!({ "link": format!("https://orginfo.uz/organization/{i:02x}/") }))
            .collect();

        let links = registry_links(&items, 5);

        assert_eq!(links.len(), 5);
        assert_eq!(links[0], "https://orginfo.uz/organization/00/");
        assert_eq!(links[4], "https://orginfo.uz/organization/04/");
    }

    #[test]
    fn test_registry_links_skips_non_canonical_before_truncating() {
        let mut items: Vec<Value> = (0..5)
            .map(|i| json!({ "link": format!("https://www.orginfo.uz/organization/aa{i:02}/") }))
            .collect();
        items.push(json!({ "link": "https://orginfo.uz/organization/xyz9/" }));
        items.push(json!({ "link": "https://orginfo.uz/organization/abc123/" }));

        let links = registry_links(&items, 5);

        assert_eq!(links, vec!["https://orginfo.uz/organization/abc123/".to_string()]);
    }

    #[test]
    fn test_registry_links_returns_canonical_page_url() {
        let items = json!([{ "link": "https://orginfo.uz/organization/abc123/founders?lang=ru" }]);

        let links = registry_links(items.as_array().unwrap(), 5);

        assert_eq!(links, vec!["https://orginfo.uz/organization/abc123".to_string()]);
    }

    #[test]
    fn test_registry_links_zero_max() {
        let items = json!([{ "link": "https://orginfo.uz/organization/aa/" }]);
        assert!(registry_links(items.as_array().unwrap(), 0).is_empty());
    }

    #[test]
    fn test_result_list_missing_key_is_empty() {
        let body = json!({ "search_metadata": { "status": "Success" } });
        assert!(result_list(&body, "organic_results").unwrap().is_empty());
    }

    #[test]
    fn test_result_list_wrong_type_is_parse_error() {
        let body = json!({ "items": "oops" });
        assert!(matches!(
            result_list(&body, "items"),
            Err(ClientError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_body_rejects_non_json() {
        assert!(matches!(
            parse_body("<html>rate limited</html>"),
            Err(ClientError::Parse(_))
        ));
    }
}
