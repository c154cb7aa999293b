//! Handler for the question endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::answer::AnswerResponse;
use crate::api::dto::ask::AskRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Answers a free-form question for the robot display.
///
/// # Endpoint
///
/// `POST /ask`
///
/// # Request Body
///
/// ```json
/// { "question": "Какая погода в Ташкенте?", "mode": "short" }
/// ```
///
/// # Response
///
/// ```json
/// { "answer": "В Ташкенте ясно, около 18 °C." }
/// ```
///
/// Collaborator failures come back as a readable `answer`, not as an HTTP error.
///
/// # Errors
///
/// Returns 400 Bad Request if the question is blank or too long.
pub async fn ask_handler(
    State(state): State<AppState>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<AnswerResponse>, AppError> {
    payload.validate()?;

    let answer = state.ask_service.ask(&payload.question, payload.mode).await;

    Ok(Json(AnswerResponse::new(answer)))
}
