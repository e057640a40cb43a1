mod api_types;
mod chat;
mod embedding;
mod error;
mod health;
mod transcribe;

pub use api_types::{ChatPayload, EmbeddingPayload, HealthResponse};
pub use chat::chat_handler;
pub use embedding::embedding_handler;
pub use error::{ApiError, ErrorResponse};
pub use health::health_handler;
pub use transcribe::transcribe_handler;
