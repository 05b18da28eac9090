use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        generation_service::GenerationService,
        model_service::{ChatBackend, ModelService, OpenAiChatBackend},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let backend = Arc::new(OpenAiChatBackend::new(&config));
        Self::with_backend(config, backend)
    }

    /// Wires the services around an arbitrary chat backend.
    pub fn with_backend(config: Config, backend: Arc<dyn ChatBackend>) -> AppResult<Self> {
        let model_service = Arc::new(ModelService::new(
            backend,
            config.model_backends.clone(),
            config.model_timeout(),
        )?);
        log::info!(
            "Model fallback order: {}",
            model_service.models().join(" -> ")
        );

        let generation_service = Arc::new(GenerationService::new(model_service));

        Ok(Self { generation_service })
    }
}
