use std::path::PathBuf;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};
use serde::Deserialize;

use crate::domain::{DEFAULT_CHAT_MODEL, DEFAULT_EMBEDDING_MODEL, DEFAULT_TEMPERATURE};
use crate::infrastructure::llm::DEEPSEEK_BASE_URL;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub recognizer: RecognizerSettings,
    pub provider: ProviderSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecognizerSettings {
    pub model_path: PathBuf,
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    pub base_url: String,
    /// Falls back to `DEEPSEEK_API_KEY` when unset.
    #[serde(default)]
    pub api_key: Option<String>,
    pub chat_model: String,
    pub embedding_model: String,
    pub temperature: f32,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
    #[serde(default)]
    pub filter: Option<String>,
}

impl ServerSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

impl RecognizerSettings {
    pub fn temp_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

impl Settings {
    /// Defaults, then `appsettings.<env>.toml` if present, then `APP__*` variables.
    pub fn builder(
        environment: Environment,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.max_upload_mb", 50)?
            .set_default("recognizer.model_path", "model")?
            .set_default("provider.base_url", DEEPSEEK_BASE_URL)?
            .set_default("provider.chat_model", DEFAULT_CHAT_MODEL)?
            .set_default("provider.embedding_model", DEFAULT_EMBEDDING_MODEL)?
            .set_default("provider.temperature", DEFAULT_TEMPERATURE as f64)?
            .set_default("provider.request_timeout_secs", 120)?
            .set_default("logging.json", environment.prefers_json_logs())?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            ))
    }

    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::builder(environment)?.build()?.try_deserialize()
    }
}
