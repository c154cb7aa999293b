//! DTOs for the question endpoint.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::application::services::AnswerMode;

/// Question from the robot.
#[derive(Debug, Deserialize, Validate)]
pub struct AskRequest {
    #[validate(
        custom(function = "not_blank"),
        length(max = 2000, message = "Question is too long")
    )]
    pub question: String,

    /// `normal` (default) or `short`.
    #[serde(default)]
    pub mode: AnswerMode,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("Question must not be empty".into());
        return Err(error);
    }
    Ok(())
}
