//! Free text → search phrase.

use std::sync::Arc;

use crate::domain::clients::TextGenerator;
use crate::error::ClientError;
use crate::utils::fallback::or_default;
use tracing::debug;

/// Token budget for the search phrase.
pub const PHRASE_MAX_TOKENS: u32 = 40;

const PHRASE_SYSTEM_PROMPT: &str = "Ты помогаешь находить юридические лица Узбекистана на orginfo.uz. \
    Во входном тексте может быть ИНН, название компании, ФИО руководителя, город или что-то ещё. \
    Верни одну короткую поисковую фразу, которую подставят в запрос Google вида \
    site:orginfo.uz <фраза>. Без пояснений и лишних слов, только строка поиска.";

/// Builds the phrase handed to the search providers.
///
/// Degrades to the input text whenever the completion API is missing,
/// failing, or answers with nothing.
pub struct QueryNormalizer {
    generator: Arc<dyn TextGenerator>,
}

impl QueryNormalizer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Returns a short search phrase for `free_text`; never empty for non-empty input.
    pub async fn build_search_phrase(&self, free_text: &str) -> String {
        if !self.generator.is_configured() {
            debug!("Completion API not configured, searching with raw text");
            return free_text.to_string();
        }

        let phrase = self
            .generator
            .complete(PHRASE_SYSTEM_PROMPT, free_text, PHRASE_MAX_TOKENS)
            .await
            .and_then(|completion| {
                let trimmed = completion.trim();
                if trimmed.is_empty() {
                    Err(ClientError::Parse("empty search phrase".to_string()))
                } else {
                    Ok(trimmed.to_string())
                }
            });

        or_default("query_normalizer", phrase, || free_text.to_string())
    }
}
