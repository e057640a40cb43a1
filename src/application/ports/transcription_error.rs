#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("speech recognition failed: {0}")]
    RecognitionFailed(String),
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
    #[error("temporary file error: {0}")]
    Io(#[from] std::io::Error),
}
