use serde::{Deserialize, Serialize};

use crate::domain::ChatMessage;

/// Body of `POST /chat`. Everything is optional so a missing field can be
/// reported with a specific message instead of a generic parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatPayload {
    pub messages: Option<Vec<ChatMessage>>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
}

/// Body of `POST /embedding`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbeddingPayload {
    pub text: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
