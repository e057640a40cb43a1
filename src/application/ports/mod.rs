mod audio_decoder;
mod llm_gateway;
mod speech_recognizer;
mod transcription_engine;
mod transcription_error;

pub use audio_decoder::AudioDecoder;
pub use llm_gateway::{GatewayError, LlmGateway};
pub use speech_recognizer::{RecognitionSession, RecognizerOutput, SpeechRecognizer};
pub use transcription_engine::TranscriptionEngine;
pub use transcription_error::TranscriptionError;
