//! Response shared by the question and resolution endpoints.

use serde::Serialize;

/// Plain-text answer ready for display.
#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub answer: String,
}

impl AnswerResponse {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}
