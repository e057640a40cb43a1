use std::sync::Arc;
use std::time::Instant;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{AudioInput, TranscriptionResult};

pub struct TranscriptionService {
    engine: Arc<dyn TranscriptionEngine>,
}

impl TranscriptionService {
    pub fn new(engine: Arc<dyn TranscriptionEngine>) -> Self {
        Self { engine }
    }

    /// Runs the engine on the blocking pool, one task per call.
    pub async fn transcribe(
        &self,
        input: AudioInput,
    ) -> Result<TranscriptionResult, TranscriptionError> {
        let engine = Arc::clone(&self.engine);
        let started = Instant::now();
        let bytes = input.data().len();

        let result = tokio::task::spawn_blocking(move || engine.transcribe(&input))
            .await
            .map_err(|e| {
                TranscriptionError::RecognitionFailed(format!("transcription task: {}", e))
            })?;

        match &result {
            Ok(transcript) => tracing::info!(
                bytes,
                words = transcript.words.len(),
                chars = transcript.text.len(),
                elapsed_secs = started.elapsed().as_secs_f32(),
                "Transcription completed"
            ),
            Err(e) => tracing::error!(
                bytes,
                error = %e,
                elapsed_secs = started.elapsed().as_secs_f32(),
                "Transcription failed"
            ),
        }

        result
    }
}
