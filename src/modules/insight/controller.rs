use axum::extract::State;
use axum::Json;

use crate::error::{ApiError, AppJson};
use crate::modules::insight::schema::{InsightRequest, InsightTurn};
use crate::services::{contract, prompt};
use crate::AppState;

pub async fn insight(
    State(state): State<AppState>,
    AppJson(payload): AppJson<InsightRequest>,
) -> Result<Json<InsightTurn>, ApiError> {
    if payload.schema.is_empty() {
        return Err(ApiError::BadRequest("Missing schema".to_string()));
    }
    if payload.messages.is_empty() {
        return Err(ApiError::BadRequest("Missing messages".to_string()));
    }

    let system_prompt = prompt::build_insight_prompt(&payload.schema);

    let raw = state
        .llm
        .complete(&system_prompt, &payload.messages, 0.2, 2048)
        .await?;

    let turn: InsightTurn = contract::normalize(&raw)?;

    Ok(Json(turn))
}
