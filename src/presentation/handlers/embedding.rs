use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::domain::{EmbeddingRequest, EmbeddingResponse};
use crate::presentation::state::AppState;

use super::api_types::EmbeddingPayload;
use super::error::ApiError;

#[tracing::instrument(skip(state, payload))]
pub async fn embedding_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmbeddingPayload>, JsonRejection>,
) -> Result<Json<EmbeddingResponse>, ApiError> {
    let Json(payload) = payload.map_err(|e| {
        tracing::warn!(error = %e, "Malformed embedding request");
        ApiError::bad_request(e.body_text())
    })?;

    let text = payload
        .text
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::bad_request("No text provided"))?;

    let model = payload
        .model
        .unwrap_or_else(|| state.settings.provider.embedding_model.clone());
    let request = EmbeddingRequest::new(text).with_model(model);

    let response = state
        .gateway
        .text_embedding(&request)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error in embedding endpoint"))?;

    Ok(Json(response))
}
