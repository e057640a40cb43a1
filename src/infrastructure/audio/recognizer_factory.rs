use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{RecognitionSession, SpeechRecognizer, TranscriptionError};

pub struct RecognizerFactory;

impl RecognizerFactory {
    /// Ensures the model directory exists, then loads the acoustic model.
    pub fn create(model_path: &Path) -> Result<Arc<dyn SpeechRecognizer>, TranscriptionError> {
        if !model_path.exists() {
            std::fs::create_dir_all(model_path)?;
            tracing::info!(model_path = %model_path.display(), "Created model directory");
        }

        Self::load(model_path)
    }

    #[cfg(feature = "vosk")]
    fn load(model_path: &Path) -> Result<Arc<dyn SpeechRecognizer>, TranscriptionError> {
        let recognizer = super::vosk_recognizer::VoskSpeechRecognizer::load(model_path)?;
        Ok(Arc::new(recognizer))
    }

    #[cfg(not(feature = "vosk"))]
    fn load(model_path: &Path) -> Result<Arc<dyn SpeechRecognizer>, TranscriptionError> {
        tracing::warn!(
            model_path = %model_path.display(),
            "Built without the `vosk` feature; /transcribe will fail until rebuilt with it"
        );
        Ok(Arc::new(UnavailableRecognizer))
    }
}

/// Stand-in used when no recognition backend is compiled in.
pub struct UnavailableRecognizer;

impl SpeechRecognizer for UnavailableRecognizer {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    fn start_session(
        &self,
        _sample_rate: f32,
    ) -> Result<Box<dyn RecognitionSession>, TranscriptionError> {
        Err(TranscriptionError::RecognitionFailed(
            "no speech recognition backend compiled in (enable the `vosk` feature)".to_string(),
        ))
    }
}
