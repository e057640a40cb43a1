use crate::domain::{AudioInput, TranscriptionResult};

use super::TranscriptionError;

/// Full audio-to-text path. Implementations block; callers are expected to
/// run them off the async executor.
pub trait TranscriptionEngine: Send + Sync {
    fn transcribe(&self, input: &AudioInput) -> Result<TranscriptionResult, TranscriptionError>;
}
