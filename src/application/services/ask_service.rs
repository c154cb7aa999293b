//! General question answering for the robot display.
//!
//! Questions go to the chat-completion API with a brief-answer prompt, since
//! replies end up on a 128x64 screen. Two shortcuts bypass the generic path:
//! a registry link is answered with the organization card, and a question
//! about the weather in Tashkent is grounded with a live weather fact.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use crate::application::services::RegistryFetcher;
use crate::domain::clients::{TextGenerator, WeatherSource};
use crate::domain::entities::CandidateUrl;
use crate::domain::weather::{WEATHER_FAILED_MESSAGE, weather_fact};
use crate::error::ClientError;
use crate::utils::fallback::or_default;
use crate::utils::text::truncate_chars;

pub const NOT_CONFIGURED_MESSAGE: &str = "GPT не настроен: нет OPENAI_API_KEY";
pub const COMPLETION_FAILED_MESSAGE: &str = "Ошибка при обращении к OpenAI API.";

/// Token budget for an answer.
pub const ANSWER_MAX_TOKENS: u32 = 180;
/// Longest answer handed back to the display.
pub const MAX_ANSWER_CHARS: usize = 600;

const SHORT_MODE_PREFIX: &str = "Ответь очень коротко (1–2 предложения): ";

const ANSWER_SYSTEM_PROMPT: &str = "Ты голосовой помощник маленького робота. \
    Ответ показывается на экране 128x64, поэтому отвечай по-русски кратко и по делу, \
    без списков и форматирования.";

const WEATHER_SYSTEM_PROMPT: &str = "Ты голосовой помощник маленького робота. \
    Тебе передают актуальные данные о погоде; опирайся только на них и ответь \
    одним-двумя короткими предложениями по-русски.";

/// Requested answer length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerMode {
    #[default]
    Normal,
    Short,
}

impl AnswerMode {
    fn apply(self, question: &str) -> String {
        match self {
            Self::Normal => question.to_string(),
            Self::Short => format!("{SHORT_MODE_PREFIX}{question}"),
        }
    }
}

pub struct AskService {
    generator: Arc<dyn TextGenerator>,
    fetcher: Arc<RegistryFetcher>,
    weather: Arc<dyn WeatherSource>,
}

impl AskService {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        fetcher: Arc<RegistryFetcher>,
        weather: Arc<dyn WeatherSource>,
    ) -> Self {
        Self {
            generator,
            fetcher,
            weather,
        }
    }

    /// Returns whether the completion API has credentials.
    pub fn is_configured(&self) -> bool {
        self.generator.is_configured()
    }

    /// Answers a free-form question. Never fails; errors become fixed messages.
    ///
    /// A registry link is served even without an API key, because it needs
    /// no completion.
    pub async fn ask(&self, question: &str, mode: AnswerMode) -> String {
        let question = question.trim();

        if let Some(url) = CandidateUrl::find_in(question) {
            info!(url = %url, "Registry link in question");
            return self.fetcher.fetch_organization(url.as_str()).await;
        }

        if !self.generator.is_configured() {
            return NOT_CONFIGURED_MESSAGE.to_string();
        }

        let question = mode.apply(question);

        let (system_prompt, user_prompt) = if is_tashkent_weather(&question) {
            let fact = self.weather_fact().await;
            debug!(fact = %fact, "Grounding answer with weather");
            (
                WEATHER_SYSTEM_PROMPT,
                format!(
                    "Вопрос пользователя: {question}\n\nДанные о погоде:\n{fact}\n\nСформулируй короткий ответ."
                ),
            )
        } else {
            (ANSWER_SYSTEM_PROMPT, question)
        };

        let answer = self
            .generator
            .complete(system_prompt, &user_prompt, ANSWER_MAX_TOKENS)
            .await
            .and_then(|completion| {
                let trimmed = completion.trim();
                if trimmed.is_empty() {
                    Err(ClientError::Parse("empty answer".to_string()))
                } else {
                    Ok(truncate_chars(trimmed, MAX_ANSWER_CHARS).to_string())
                }
            });

        or_default("ask", answer, || COMPLETION_FAILED_MESSAGE.to_string())
    }

    async fn weather_fact(&self) -> String {
        let fact = self
            .weather
            .current_weather()
            .await
            .map(|weather| weather_fact(&weather));

        or_default("weather", fact, || WEATHER_FAILED_MESSAGE.to_string())
    }
}

fn is_tashkent_weather(question: &str) -> bool {
    let lowered = question.to_lowercase();
    lowered.contains("погода") && lowered.contains("ташкент")
}
