use async_trait::async_trait;

use crate::domain::{ChatRequest, ChatResponse, EmbeddingRequest, EmbeddingResponse};

#[async_trait]
pub trait LlmGateway: Send + Sync {
    async fn chat_completion(&self, request: &ChatRequest) -> Result<ChatResponse, GatewayError>;

    async fn text_embedding(
        &self,
        request: &EmbeddingRequest,
    ) -> Result<EmbeddingResponse, GatewayError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("provider configuration error: {0}")]
    Config(String),
    #[error("upstream request failed: {0}")]
    Transport(String),
    #[error("upstream returned status {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),
}
