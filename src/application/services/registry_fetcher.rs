//! Registry page download, extraction and rendering.

use std::sync::Arc;

use crate::domain::clients::PageSource;
use crate::domain::formatter::format_record;
use crate::infrastructure::markup::extract_fields;
use crate::utils::fallback::or_default;
use tracing::instrument;

/// Placeholder card for a page that could not be downloaded.
pub const FETCH_FAILED_MESSAGE: &str =
    "Не удалось получить или разобрать данные с orginfo.uz по указанной ссылке.";

/// Turns a registry page URL into a rendered organization card.
///
/// A failure only affects the card for that URL: the caller always gets a
/// string, either the card or [`FETCH_FAILED_MESSAGE`].
pub struct RegistryFetcher {
    page_source: Arc<dyn PageSource>,
}

impl RegistryFetcher {
    pub fn new(page_source: Arc<dyn PageSource>) -> Self {
        Self { page_source }
    }

    /// Downloads `url`, extracts the organization fields and formats them.
    #[instrument(skip(self))]
    pub async fn fetch_organization(&self, url: &str) -> String {
        let card = self.page_source.fetch_page(url).await.map(|html| {
            let record = extract_fields(&html);
            format_record(&record)
        });

        let outcome = if card.is_ok() { "ok" } else { "failed" };
        metrics::counter!("orginfo_fetch_total", "outcome" => outcome).increment(1);

        or_default("registry_fetch", card, || FETCH_FAILED_MESSAGE.to_string())
    }
}
