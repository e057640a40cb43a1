use crate::domain::WordTimestamp;

use super::TranscriptionError;

/// A loaded acoustic model. Shared read-only across requests; every call to
/// [`SpeechRecognizer::start_session`] gets its own decoding state.
pub trait SpeechRecognizer: Send + Sync {
    fn name(&self) -> &'static str;

    fn start_session(
        &self,
        sample_rate: f32,
    ) -> Result<Box<dyn RecognitionSession>, TranscriptionError>;
}

pub trait RecognitionSession {
    /// Feeds a chunk of mono 16-bit frames. Partial hypotheses are not surfaced.
    fn accept_waveform(&mut self, frames: &[i16]) -> Result<(), TranscriptionError>;

    fn final_result(&mut self) -> Result<RecognizerOutput, TranscriptionError>;
}

/// Final hypothesis as reported by the engine; either field may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecognizerOutput {
    pub text: Option<String>,
    pub words: Option<Vec<WordTimestamp>>,
}
