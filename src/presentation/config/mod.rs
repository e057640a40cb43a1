mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    LoggingSettings, ProviderSettings, RecognizerSettings, ServerSettings, Settings,
};
