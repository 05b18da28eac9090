use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::{
    constants::prompts,
    errors::{AppError, AppResult},
    models::domain::{
        AudioContent, AudioLength, CodeContent, ContentVariant, DepthLevel, TextContent,
        VisualContent,
    },
    recovery::{self, RecoveryError},
    services::model_service::ModelService,
};

/// Prompt, generate, recover: one call per content variant.
pub struct GenerationService {
    model_service: Arc<ModelService>,
}

impl GenerationService {
    pub fn new(model_service: Arc<ModelService>) -> Self {
        Self { model_service }
    }

    pub async fn generate_text(&self, topic: &str, depth: DepthLevel) -> AppResult<TextContent> {
        let prompt = prompts::text_explanation_prompt(topic, depth);
        self.generate_record(ContentVariant::Text, &prompt).await
    }

    pub async fn generate_code(
        &self,
        topic: &str,
        complexity: DepthLevel,
    ) -> AppResult<CodeContent> {
        let prompt = prompts::code_generation_prompt(topic, complexity);
        self.generate_record(ContentVariant::Code, &prompt).await
    }

    pub async fn generate_audio(&self, topic: &str, length: AudioLength) -> AppResult<AudioContent> {
        let prompt = prompts::audio_script_prompt(topic, length);
        self.generate_record(ContentVariant::Audio, &prompt).await
    }

    pub async fn generate_visual(&self, topic: &str) -> AppResult<VisualContent> {
        let prompt = prompts::visual_generation_prompt(topic);
        self.generate_record(ContentVariant::Visual, &prompt).await
    }

    async fn generate_record<T: DeserializeOwned>(
        &self,
        variant: ContentVariant,
        prompt: &str,
    ) -> AppResult<T> {
        let raw = self.model_service.generate(prompt).await.map_err(|e| {
            log::error!("{} generation failed: {}", variant, e);
            AppError::from(e)
        })?;

        recovery::recover_record(&raw).map_err(|e| {
            log::error!("{} generation: could not recover a record ({}): {}", variant, e.kind(), e);
            log::warn!("{} generation raw model output:\n{}", variant, raw);
            if let RecoveryError::UnrecoverableJson { sanitized, .. } = &e {
                log::error!("{} generation sanitized text:\n{}", variant, sanitized);
            }
            AppError::RecoveryFailed(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::services::model_service::{MockChatBackend, ModelError};
    use crate::test_utils::fixtures;

    fn service_returning(output: &'static str) -> GenerationService {
        let mut backend = MockChatBackend::new();
        backend
            .expect_complete()
            .times(1)
            .returning(move |_, _| Ok(output.to_string()));

        let model_service = ModelService::new(
            Arc::new(backend),
            vec!["model-a".to_string()],
            Duration::from_secs(5),
        )
        .unwrap();
        GenerationService::new(Arc::new(model_service))
    }

    #[actix_web::test]
    async fn test_generate_code_recovers_chatty_output() {
        let service = service_returning(fixtures::CHATTY_CODE_OUTPUT);
        let record = service.generate_code("Linear Regression", DepthLevel::Brief).await.unwrap();

        assert_eq!(record.title, "Linear Regression Demo");
        assert!(record.code.contains('\n'));
    }

    #[actix_web::test]
    async fn test_generate_text_repairs_latex() {
        let service = service_returning(fixtures::LATEX_TEXT_OUTPUT);
        let record = service.generate_text("Logistic Regression", DepthLevel::Moderate).await.unwrap();

        assert_eq!(record.sections.len(), 1);
        assert!(record.sections[0].content.contains("\\sigma(z)"));
    }

    #[actix_web::test]
    async fn test_generate_audio_without_json_fails() {
        let service = service_returning("I'm sorry, I can't help with that.");
        let err = service.generate_audio("Dropout", AudioLength::Brief).await.unwrap_err();

        assert!(matches!(
            err,
            AppError::RecoveryFailed(RecoveryError::NoJsonBoundaryFound)
        ));
    }

    #[actix_web::test]
    async fn test_generate_visual_shape_mismatch() {
        let service = service_returning(r#"{"title": "CNNs", "diagrams": []}"#);
        let err = service.generate_visual("CNNs").await.unwrap_err();

        assert!(matches!(
            err,
            AppError::RecoveryFailed(RecoveryError::ShapeMismatch(_))
        ));
    }

    #[actix_web::test]
    async fn test_backend_exhaustion_maps_to_app_error() {
        let mut backend = MockChatBackend::new();
        backend
            .expect_complete()
            .times(1)
            .returning(|_, _| Err(ModelError::Timeout(5)));

        let model_service = ModelService::new(
            Arc::new(backend),
            vec!["model-a".to_string()],
            Duration::from_secs(5),
        )
        .unwrap();
        let service = GenerationService::new(Arc::new(model_service));

        let err = service.generate_visual("CNNs").await.unwrap_err();
        assert!(matches!(err, AppError::BackendExhausted));
    }
}
