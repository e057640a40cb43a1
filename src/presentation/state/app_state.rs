use std::sync::Arc;

use crate::application::ports::LlmGateway;
use crate::application::services::TranscriptionService;
use crate::presentation::config::Settings;

/// Services built once at startup and shared read-only by every handler.
#[derive(Clone)]
pub struct AppState {
    pub transcription_service: Arc<TranscriptionService>,
    pub gateway: Arc<dyn LlmGateway>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(
        transcription_service: Arc<TranscriptionService>,
        gateway: Arc<dyn LlmGateway>,
        settings: Settings,
    ) -> Self {
        Self {
            transcription_service,
            gateway,
            settings: Arc::new(settings),
        }
    }
}
