use std::{sync::Arc, time::Duration};

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Model request failed: {0}")]
    Request(String),

    #[error("Model request timed out after {0} seconds")]
    Timeout(u64),

    #[error("All {attempted} model backends failed or returned empty text")]
    BackendsExhausted { attempted: usize },

    #[error("No model backends configured")]
    NoBackendsConfigured,
}

/// A chat-completion endpoint that can serve any of the configured models.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, ModelError>;
}

/// Talks to an OpenAI-compatible chat completion API (Groq by default).
pub struct OpenAiChatBackend {
    client: Client<OpenAIConfig>,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiChatBackend {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.model_api_key.expose_secret())
            .with_api_base(&config.model_api_base);

        Self {
            client: Client::with_config(openai_config),
            temperature: config.model_temperature,
            max_tokens: config.model_max_tokens,
        }
    }

    fn build_request(&self, model: &str, prompt: &str) -> serde_json::Value {
        json!({
            "model": model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionBody {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionBody {
    fn into_first_content(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default()
    }
}

#[async_trait]
impl ChatBackend for OpenAiChatBackend {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, ModelError> {
        let request = self.build_request(model, prompt);
        let body: ChatCompletionBody = self
            .client
            .chat()
            .create_byot(request)
            .await
            .map_err(|e| ModelError::Request(e.to_string()))?;

        Ok(body.into_first_content())
    }
}

/// Generates text by walking the configured model list in order.
pub struct ModelService {
    backend: Arc<dyn ChatBackend>,
    models: Vec<String>,
    attempt_timeout: Duration,
}

impl ModelService {
    pub fn new(
        backend: Arc<dyn ChatBackend>,
        models: Vec<String>,
        attempt_timeout: Duration,
    ) -> Result<Self, ModelError> {
        if models.is_empty() {
            return Err(ModelError::NoBackendsConfigured);
        }

        Ok(Self {
            backend,
            models,
            attempt_timeout,
        })
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Returns the first non-empty response. Each model is tried at most once;
    /// individual failures are logged and never surfaced.
    pub async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        let total = self.models.len();

        for (index, model) in self.models.iter().enumerate() {
            log::info!("Attempting generation with model {} ({}/{})", model, index + 1, total);

            let outcome = tokio::time::timeout(self.attempt_timeout, self.backend.complete(model, prompt))
                .await
                .unwrap_or(Err(ModelError::Timeout(self.attempt_timeout.as_secs())));

            match outcome {
                Ok(text) if !text.trim().is_empty() => {
                    log::info!("Model {} produced {} bytes", model, text.len());
                    return Ok(text);
                }
                Ok(_) => log::warn!("Model {} returned an empty response", model),
                Err(e) => log::warn!("Model {} failed: {}", model, e),
            }
        }

        log::error!("All {} model backends exhausted", total);
        Err(ModelError::BackendsExhausted { attempted: total })
    }
}
