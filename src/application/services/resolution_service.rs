//! Free text → organization summary orchestration.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::info;

use crate::application::services::{ProviderChain, QueryNormalizer, RegistryFetcher};
use crate::domain::entities::CandidateUrl;

/// Most candidate pages fetched for a single request.
pub const MAX_CANDIDATES: usize = 5;

pub const EMPTY_QUERY_MESSAGE: &str =
    "Отправьте текст с ИНН, названием компании или ФИО директора.";

pub const NO_MATCHES_MESSAGE: &str = "Не удалось найти организации по вашему запросу через orginfo.uz. \
     Уточните ИНН или название компании.";

/// Separator between organization cards in a multi-match answer.
pub const CARD_SEPARATOR: &str = "\n\n--------------------\n\n";

/// Resolves free-form user text into a formatted organization summary.
///
/// Pipeline:
/// 1. Empty input → prompt for a query
/// 2. Registry link in the text → fetch that page only
/// 3. Otherwise normalize → search → fetch every candidate
///
/// Every stage degrades instead of failing, so the answer is always a
/// non-empty string.
pub struct ResolutionService {
    normalizer: QueryNormalizer,
    chain: ProviderChain,
    fetcher: Arc<RegistryFetcher>,
    fetch_concurrency: usize,
}

impl ResolutionService {
    /// Creates the orchestrator.
    ///
    /// `fetch_concurrency` bounds in-flight page downloads; it is clamped to at least 1.
    pub fn new(
        normalizer: QueryNormalizer,
        chain: ProviderChain,
        fetcher: Arc<RegistryFetcher>,
        fetch_concurrency: usize,
    ) -> Self {
        Self {
            normalizer,
            chain,
            fetcher,
            fetch_concurrency: fetch_concurrency.max(1),
        }
    }

    pub fn chain(&self) -> &ProviderChain {
        &self.chain
    }

    /// Resolves `user_text` into one or more organization cards.
    ///
    /// Cards appear in candidate order regardless of fetch concurrency.
    pub async fn resolve_organization_query(&self, user_text: &str) -> String {
        let text = user_text.trim();
        if text.is_empty() {
            return EMPTY_QUERY_MESSAGE.to_string();
        }

        if let Some(url) = CandidateUrl::find_in(text) {
            info!(url = %url, "Registry link in query, skipping search");
            return self.fetcher.fetch_organization(url.as_str()).await;
        }

        let phrase = self.normalizer.build_search_phrase(text).await;
        info!(phrase = %phrase, "Searching registry");

        let candidates = self.chain.find_candidate_urls(&phrase, MAX_CANDIDATES).await;
        if candidates.is_empty() {
            return NO_MATCHES_MESSAGE.to_string();
        }

        let cards: Vec<String> = stream::iter(candidates)
            .map(|url| {
                let fetcher = Arc::clone(&self.fetcher);
                async move { fetcher.fetch_organization(url.as_str()).await }
            })
            .buffered(self.fetch_concurrency)
            .collect()
            .await;

        cards.join(CARD_SEPARATOR)
    }
}
