use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::application::ports::{GatewayError, LlmGateway};
use crate::domain::{
    ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatUsage, EmbeddingData,
    EmbeddingRequest, EmbeddingResponse, EmbeddingUsage,
};

pub const DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com/v1";
pub const API_KEY_ENV_VAR: &str = "DEEPSEEK_API_KEY";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Picks the explicit key when present, otherwise the environment value.
/// Blank values count as missing.
pub fn resolve_api_key(
    explicit: Option<String>,
    from_env: Option<String>,
) -> Result<String, GatewayError> {
    explicit
        .filter(|k| !k.trim().is_empty())
        .or_else(|| from_env.filter(|k| !k.trim().is_empty()))
        .ok_or_else(|| {
            GatewayError::Config(format!(
                "DeepSeek API key is required. Provide it or set the {} environment variable.",
                API_KEY_ENV_VAR
            ))
        })
}

/// OpenAI-compatible client for the DeepSeek API.
pub struct DeepSeekClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for DeepSeekClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeepSeekClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl DeepSeekClient {
    /// Fails immediately when neither `api_key` nor `DEEPSEEK_API_KEY` is set.
    pub fn new(api_key: Option<String>) -> Result<Self, GatewayError> {
        Self::builder(api_key)?.build()
    }

    pub fn builder(api_key: Option<String>) -> Result<DeepSeekClientBuilder, GatewayError> {
        Self::builder_with_fallback(api_key, std::env::var(API_KEY_ENV_VAR).ok())
    }

    /// Like [`DeepSeekClient::builder`], with the environment value supplied by the caller.
    pub fn builder_with_fallback(
        api_key: Option<String>,
        env_api_key: Option<String>,
    ) -> Result<DeepSeekClientBuilder, GatewayError> {
        let api_key = resolve_api_key(api_key, env_api_key)?;
        Ok(DeepSeekClientBuilder {
            api_key,
            base_url: DEEPSEEK_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, GatewayError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                message: upstream_error_message(&body),
            });
        }

        response
            .json::<R>()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))
    }
}

pub struct DeepSeekClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl DeepSeekClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<DeepSeekClient, GatewayError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| GatewayError::Config(format!("http client: {}", e)))?;

        Ok(DeepSeekClient {
            client,
            api_key: self.api_key,
            base_url: self.base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Pulls `error.message` out of an OpenAI-style error body, else returns the raw body.
fn upstream_error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct Envelope {
        error: Detail,
    }
    #[derive(Deserialize)]
    struct Detail {
        message: String,
    }

    serde_json::from_str::<Envelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}

#[derive(Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatCompletionWire {
    id: String,
    object: String,
    created: u64,
    model: String,
    #[serde(default)]
    choices: Vec<ChoiceWire>,
    usage: Option<ChatUsageWire>,
}

#[derive(Deserialize)]
struct ChoiceWire {
    index: u32,
    message: MessageWire,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct MessageWire {
    role: String,
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatUsageWire {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
}

impl From<ChatCompletionWire> for ChatResponse {
    fn from(wire: ChatCompletionWire) -> Self {
        Self {
            id: wire.id,
            object: wire.object,
            created: wire.created,
            model: wire.model,
            choices: wire
                .choices
                .into_iter()
                .map(|c| ChatChoice {
                    index: c.index,
                    message: ChatMessage {
                        role: c.message.role,
                        content: c.message.content.unwrap_or_default(),
                    },
                    finish_reason: c.finish_reason,
                })
                .collect(),
            usage: wire
                .usage
                .map(|u| ChatUsage {
                    prompt_tokens: u.prompt_tokens,
                    completion_tokens: u.completion_tokens,
                    total_tokens: u.total_tokens,
                })
                .unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
struct EmbeddingBody<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingWire {
    object: String,
    #[serde(default)]
    data: Vec<EmbeddingItemWire>,
    model: String,
    usage: Option<EmbeddingUsageWire>,
}

#[derive(Deserialize)]
struct EmbeddingItemWire {
    object: String,
    embedding: Vec<f32>,
    index: u32,
}

#[derive(Deserialize)]
struct EmbeddingUsageWire {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
}

impl From<EmbeddingWire> for EmbeddingResponse {
    fn from(wire: EmbeddingWire) -> Self {
        Self {
            object: wire.object,
            data: wire
                .data
                .into_iter()
                .map(|d| EmbeddingData {
                    object: d.object,
                    embedding: d.embedding,
                    index: d.index,
                })
                .collect(),
            model: wire.model,
            usage: wire
                .usage
                .map(|u| EmbeddingUsage {
                    prompt_tokens: u.prompt_tokens,
                    total_tokens: u.total_tokens,
                })
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl LlmGateway for DeepSeekClient {
    async fn chat_completion(&self, request: &ChatRequest) -> Result<ChatResponse, GatewayError> {
        tracing::info!(
            model = %request.model,
            messages = request.messages.len(),
            temperature = request.temperature,
            "Calling DeepSeek chat completions"
        );

        let body = ChatCompletionBody {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature,
        };

        let wire: ChatCompletionWire = self
            .post_json("chat/completions", &body)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "DeepSeek chat completion failed"))?;

        Ok(wire.into())
    }

    async fn text_embedding(
        &self,
        request: &EmbeddingRequest,
    ) -> Result<EmbeddingResponse, GatewayError> {
        tracing::info!(model = %request.model, chars = request.text.len(), "Calling DeepSeek embeddings");

        let body = EmbeddingBody {
            model: &request.model,
            input: &request.text,
        };

        let wire: EmbeddingWire = self
            .post_json("embeddings", &body)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "DeepSeek embedding failed"))?;

        Ok(wire.into())
    }
}
