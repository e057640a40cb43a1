mod deepseek_client;

pub use deepseek_client::{
    API_KEY_ENV_VAR, DEEPSEEK_BASE_URL, DeepSeekClient, DeepSeekClientBuilder, resolve_api_key,
};
