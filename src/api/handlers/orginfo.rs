//! Handler for the organization lookup endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::answer::AnswerResponse;
use crate::api::dto::orginfo::OrginfoQueryRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves free text into organization cards from orginfo.uz.
///
/// # Endpoint
///
/// `POST /orginfo_query`
///
/// # Request Body
///
/// ```json
/// { "query": "ИНН 301234567" }
/// ```
///
/// # Response
///
/// ```json
/// { "answer": "🏢 ООО «Ромашка»\nИНН: 301234567\n..." }
/// ```
///
/// Blank queries, empty searches and failed downloads are all answered with
/// a message in `answer`.
///
/// # Errors
///
/// Returns 400 Bad Request if the query is too long.
pub async fn orginfo_query_handler(
    State(state): State<AppState>,
    Json(payload): Json<OrginfoQueryRequest>,
) -> Result<Json<AnswerResponse>, AppError> {
    payload.validate()?;

    let answer = state
        .resolution_service
        .resolve_organization_query(&payload.query)
        .await;

    Ok(Json(AnswerResponse::new(answer)))
}
