use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use voxbridge::application::services::TranscriptionService;
use voxbridge::infrastructure::audio::{RecognizerFactory, SymphoniaAudioDecoder, WavPipelineEngine};
use voxbridge::infrastructure::llm::DeepSeekClient;
use voxbridge::infrastructure::observability::{TracingConfig, init_tracing};
use voxbridge::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .parse()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment).context("Failed to load settings")?;

    let mut tracing_config = TracingConfig::new(environment.as_str(), settings.logging.json);
    if let Some(filter) = &settings.logging.filter {
        tracing_config = tracing_config.with_default_filter(filter);
    }
    init_tracing(&tracing_config);

    // Fail before binding if the provider credential is missing.
    let gateway = DeepSeekClient::builder(settings.provider.api_key.clone())?
        .base_url(&settings.provider.base_url)
        .timeout(Duration::from_secs(settings.provider.request_timeout_secs))
        .build()?;
    tracing::info!(base_url = %gateway.base_url(), "Provider gateway ready");

    let recognizer = RecognizerFactory::create(&settings.recognizer.model_path)
        .context("Failed to initialize speech recognizer")?;
    let engine = WavPipelineEngine::new(
        Arc::new(SymphoniaAudioDecoder),
        recognizer,
        settings.recognizer.temp_dir(),
    );
    let transcription_service = Arc::new(TranscriptionService::new(Arc::new(engine)));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState::new(transcription_service, Arc::new(gateway), settings);
    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
