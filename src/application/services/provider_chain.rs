//! Ordered search provider fallback.

use std::sync::Arc;

use crate::domain::clients::SearchProvider;
use crate::domain::entities::CandidateUrl;
use crate::utils::fallback::or_default;
use tracing::{debug, info};

/// Name and credential state of one provider, as reported by `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderStatus {
    pub name: &'static str,
    pub configured: bool,
}

/// Search providers tried in a fixed priority order.
///
/// The first provider yielding at least one [`CandidateUrl`] wins; the rest
/// are not called. Provider errors count as an empty result.
pub struct ProviderChain {
    providers: Vec<Arc<dyn SearchProvider>>,
}

impl ProviderChain {
    pub fn new(providers: Vec<Arc<dyn SearchProvider>>) -> Self {
        Self { providers }
    }

    pub fn provider_status(&self) -> Vec<ProviderStatus> {
        self.providers
            .iter()
            .map(|p| ProviderStatus {
                name: p.name(),
                configured: p.is_configured(),
            })
            .collect()
    }

    /// Returns up to `max_results` canonical registry URLs for `phrase`.
    ///
    /// Links not matching the canonical organization page shape are dropped
    /// before the non-empty check, so a provider returning only foreign links
    /// hands over to the next one. Provider order is preserved, duplicates are not removed.
    pub async fn find_candidate_urls(&self, phrase: &str, max_results: usize) -> Vec<CandidateUrl> {
        for provider in &self.providers {
            let name = provider.name();
            let links = or_default(name, provider.search(phrase, max_results).await, Vec::new);

            let candidates: Vec<CandidateUrl> = links
                .iter()
                .filter_map(|link| CandidateUrl::parse(link))
                .take(max_results)
                .collect();

            metrics::counter!("orginfo_provider_results_total", "provider" => name)
                .increment(candidates.len() as u64);

            if !candidates.is_empty() {
                info!(provider = name, count = candidates.len(), "Registry pages found");
                return candidates;
            }

            debug!(provider = name, links = links.len(), "No usable links, trying next provider");
        }

        info!(phrase, "No provider returned registry pages");
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clients::MockSearchProvider;
    use crate::error::ClientError;

    fn provider(name: &'static str) -> MockSearchProvider {
        let mut mock = MockSearchProvider::new();
        mock.expect_name().return_const(name);
        mock
    }

    fn links(urls: &[&str]) -> Vec<String> {
        urls.iter().map(|u| u.to_string()).collect()
    }

    #[tokio::test]
    async fn test_first_provider_wins() {
        let mut primary = provider("primary");
        primary
            .expect_search()
            .withf(|phrase, max| phrase == "Ромашка" && *max == 5)
            .times(1)
            .returning(|_, _| Ok(links(&["https://orginfo.uz/organization/abc123/"])));

        let mut secondary = provider("secondary");
        secondary.expect_search().times(0);

        let chain = ProviderChain::new(vec![Arc::new(primary), Arc::new(secondary)]);

        let candidates = chain.find_candidate_urls("Ромашка", 5).await;

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].as_str(), "https://orginfo.uz/organization/abc123/");
    }

    #[tokio::test]
    async fn test_failed_provider_falls_through() {
        let mut primary = provider("primary");
        primary
            .expect_search()
            .times(1)
            .returning(|_, _| Err(ClientError::Parse("bad json".to_string())));

        let mut secondary = provider("secondary");
        secondary
            .expect_search()
            .times(1)
            .returning(|_, _| Ok(links(&["https://orginfo.uz/organization/def456"])));

        let chain = ProviderChain::new(vec![Arc::new(primary), Arc::new(secondary)]);

        let candidates = chain.find_candidate_urls("Ромашка", 5).await;

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].as_str(), "https://orginfo.uz/organization/def456");
    }

    #[tokio::test]
    async fn test_non_canonical_links_fall_through() {
        let mut primary = provider("primary");
        primary.expect_search().times(1).returning(|_, _| {
            Ok(links(&[
                "https://orginfo.uz/organization/search?q=x",
                "https://example.com/orginfo.uz/organization/",
            ]))
        });

        let mut secondary = provider("secondary");
        secondary
            .expect_search()
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let chain = ProviderChain::new(vec![Arc::new(primary), Arc::new(secondary)]);

        assert!(chain.find_candidate_urls("Ромашка", 5).await.is_empty());
    }

    #[tokio::test]
    async fn test_order_preserved_and_capped() {
        let mut primary = provider("primary");
        primary.expect_search().times(1).returning(|_, _| {
            Ok(links(&[
                "https://orginfo.uz/organization/aaa/",
                "https://orginfo.uz/organization/bbb/",
                "https://orginfo.uz/organization/aaa/",
                "https://orginfo.uz/organization/ccc/",
            ]))
        });

        let chain = ProviderChain::new(vec![Arc::new(primary)]);

        let candidates: Vec<String> = chain
            .find_candidate_urls("Ромашка", 3)
            .await
            .into_iter()
            .map(CandidateUrl::into_string)
            .collect();

        assert_eq!(
            candidates,
            vec![
                "https://orginfo.uz/organization/aaa/",
                "https://orginfo.uz/organization/bbb/",
                "https://orginfo.uz/organization/aaa/",
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_chain() {
        let chain = ProviderChain::new(Vec::new());
        assert!(chain.find_candidate_urls("Ромашка", 5).await.is_empty());
    }

    #[test]
    fn test_provider_status() {
        let mut primary = provider("serpapi");
        primary.expect_is_configured().return_const(false);
        let mut secondary = provider("google_cse");
        secondary.expect_is_configured().return_const(true);

        let chain = ProviderChain::new(vec![Arc::new(primary), Arc::new(secondary)]);

        assert_eq!(
            chain.provider_status(),
            vec![
                ProviderStatus {
                    name: "serpapi",
                    configured: false
                },
                ProviderStatus {
                    name: "google_cse",
                    configured: true
                },
            ]
        );
    }
}
