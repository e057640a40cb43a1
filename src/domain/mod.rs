mod audio;
mod chat;
mod embedding;
mod transcription;

pub use audio::{
    AudioInput, DecodedAudio, NormalizedAudio, PCM16_SCALE, downmix_to_mono, quantize_sample,
};
pub use chat::{
    ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatUsage, DEFAULT_CHAT_MODEL,
    DEFAULT_TEMPERATURE,
};
pub use embedding::{
    DEFAULT_EMBEDDING_MODEL, EmbeddingData, EmbeddingRequest, EmbeddingResponse, EmbeddingUsage,
};
pub use transcription::{TranscriptionResult, WordTimestamp};
