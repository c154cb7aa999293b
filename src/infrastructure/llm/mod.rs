//! Chat-completion API client.

mod openai;

pub use openai::{DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAiClient};
