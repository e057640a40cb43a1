use std::path::Path;

use crate::domain::DecodedAudio;

use super::TranscriptionError;

/// Turns an encoded audio file into interleaved float samples.
pub trait AudioDecoder: Send + Sync {
    fn decode(
        &self,
        path: &Path,
        extension: Option<&str>,
    ) -> Result<DecodedAudio, TranscriptionError>;
}
