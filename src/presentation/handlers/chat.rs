use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::domain::{ChatRequest, ChatResponse};
use crate::presentation::state::AppState;

use super::api_types::ChatPayload;
use super::error::ApiError;

#[tracing::instrument(skip(state, payload))]
pub async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatPayload>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(payload) = payload.map_err(|e| {
        tracing::warn!(error = %e, "Malformed chat request");
        ApiError::bad_request(e.body_text())
    })?;

    let messages = payload
        .messages
        .filter(|m| !m.is_empty())
        .ok_or_else(|| ApiError::bad_request("No messages provided"))?;

    let provider = &state.settings.provider;
    let request = ChatRequest::new(messages)
        .with_model(payload.model.unwrap_or_else(|| provider.chat_model.clone()))
        .with_temperature(payload.temperature.unwrap_or(provider.temperature));

    let response = state
        .gateway
        .chat_completion(&request)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error in chat endpoint"))?;

    tracing::info!(model = %response.model, choices = response.choices.len(), "Chat completion successful");
    Ok(Json(response))
}
