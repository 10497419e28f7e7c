use axum::extract::State;
use axum::Json;

use crate::error::{ApiError, AppJson};
use crate::modules::chat::schema::{ChatRequest, DocumentAnswer};
use crate::services::{contract, prompt};
use crate::AppState;

pub async fn chat(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ChatRequest>,
) -> Result<Json<DocumentAnswer>, ApiError> {
    if payload.document_context.is_empty() {
        return Err(ApiError::BadRequest("Missing document context".to_string()));
    }
    if payload.messages.is_empty() {
        return Err(ApiError::BadRequest("Missing messages".to_string()));
    }

    let system_prompt = prompt::build_document_prompt(&payload.document_context);

    let raw = state
        .llm
        .complete(&system_prompt, &payload.messages, 0.1, 2048)
        .await?;

    let answer: DocumentAnswer = contract::normalize(&raw)?;

    Ok(Json(answer))
}
