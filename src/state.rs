use std::sync::Arc;

use crate::asr::interface::SpeechRecognizer;
use crate::asr::remote::RemoteRecognizer;
use crate::config::Config;
use crate::llm::interface::LanguageModel;
use crate::llm::ollama::OllamaClient;

/// Shared handle to the configuration and the two external collaborators.
/// Each request owns its own temp file; nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub recognizer: Arc<dyn SpeechRecognizer>,
    pub llm: Arc<dyn LanguageModel>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let recognizer = Arc::new(RemoteRecognizer::new(
            config.recognition_config.base_url.clone(),
            config.recognition_config.language.clone(),
        ));
        let llm = Arc::new(OllamaClient::new(config.model_config.base_url.clone()));

        Self {
            config,
            recognizer,
            llm,
        }
    }
}
