use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};

use crate::domain::{AudioInput, TranscriptionResult};
use crate::presentation::state::AppState;

use super::error::ApiError;

const FILE_FIELD: &str = "file";

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TranscriptionResult>, ApiError> {
    let mut multipart = multipart.map_err(|e| {
        tracing::warn!(error = %e, "Transcribe request without multipart body");
        ApiError::bad_request("No file provided")
    })?;

    let (filename, data) = loop {
        let field = multipart.next_field().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to read multipart");
            ApiError::bad_request(format!("Failed to read multipart: {}", e))
        })?;

        let Some(field) = field else {
            tracing::warn!("Transcribe request with no file field");
            return Err(ApiError::bad_request("No file provided"));
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        // A part without a filename is a plain form value, not an upload.
        let Some(filename) = field.file_name().map(str::to_string) else {
            tracing::warn!("File field carries no filename");
            return Err(ApiError::bad_request("No file provided"));
        };
        let data = field.bytes().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to read file bytes");
            ApiError::bad_request(format!("Failed to read file: {}", e))
        })?;

        break (filename, data);
    };

    if filename.is_empty() || data.is_empty() {
        tracing::warn!(filename = %filename, bytes = data.len(), "Empty file upload");
        return Err(ApiError::bad_request("No file selected"));
    }

    tracing::debug!(filename = %filename, bytes = data.len(), "Audio upload received");

    let input = AudioInput::new(data.to_vec(), &filename);
    let result = state.transcription_service.transcribe(input).await?;

    Ok(Json(result))
}
