use std::path::Path;

use vosk::{DecodingState, Model, Recognizer};

use crate::application::ports::{
    RecognitionSession, RecognizerOutput, SpeechRecognizer, TranscriptionError,
};
use crate::domain::WordTimestamp;

/// Kaldi acoustic model loaded once through libvosk.
pub struct VoskSpeechRecognizer {
    model: Model,
}

impl VoskSpeechRecognizer {
    pub fn load(model_path: &Path) -> Result<Self, TranscriptionError> {
        tracing::info!(model_path = %model_path.display(), "Loading Vosk model");

        let model = Model::new(model_path.to_string_lossy()).ok_or_else(|| {
            TranscriptionError::ModelLoadFailed(format!(
                "could not load Vosk model from {}",
                model_path.display()
            ))
        })?;

        tracing::info!("Vosk model loaded");
        Ok(Self { model })
    }
}

impl SpeechRecognizer for VoskSpeechRecognizer {
    fn name(&self) -> &'static str {
        "vosk"
    }

    fn start_session(
        &self,
        sample_rate: f32,
    ) -> Result<Box<dyn RecognitionSession>, TranscriptionError> {
        let mut recognizer = Recognizer::new(&self.model, sample_rate).ok_or_else(|| {
            TranscriptionError::RecognitionFailed(format!(
                "could not create recognizer at {} Hz",
                sample_rate
            ))
        })?;
        recognizer.set_words(true);

        Ok(Box::new(VoskSession { recognizer }))
    }
}

struct VoskSession {
    recognizer: Recognizer,
}

impl RecognitionSession for VoskSession {
    fn accept_waveform(&mut self, frames: &[i16]) -> Result<(), TranscriptionError> {
        match self.recognizer.accept_waveform(frames) {
            Ok(DecodingState::Failed) => Err(TranscriptionError::RecognitionFailed(
                "decoder rejected waveform".to_string(),
            )),
            Ok(_) => Ok(()),
            Err(e) => Err(TranscriptionError::RecognitionFailed(format!(
                "accept waveform: {:?}",
                e
            ))),
        }
    }

    fn final_result(&mut self) -> Result<RecognizerOutput, TranscriptionError> {
        let Some(single) = self.recognizer.final_result().single() else {
            return Ok(RecognizerOutput::default());
        };

        let words = single
            .result
            .iter()
            .map(|w| WordTimestamp::new(w.word, w.start, w.end))
            .collect();

        Ok(RecognizerOutput {
            text: Some(single.text.to_string()),
            words: Some(words),
        })
    }
}
