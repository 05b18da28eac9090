use std::{collections::VecDeque, sync::Arc};

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::Mutex;

use learnsphere_server::{
    app_state::AppState,
    config::Config,
    services::model_service::{ChatBackend, ModelError},
};

/// Replays canned outcomes in order and records which model each call named.
pub struct ScriptedBackend {
    outcomes: Mutex<VecDeque<Result<String, ModelError>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn new(outcomes: Vec<Result<String, ModelError>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(text: &str) -> Arc<Self> {
        Self::new(vec![Ok(text.to_string())])
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn complete(&self, model: &str, _prompt: &str) -> Result<String, ModelError> {
        self.calls.lock().await.push(model.to_string());
        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(ModelError::Request("script exhausted".to_string())))
    }
}

pub fn test_config(models: &[&str]) -> Config {
    Config {
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        cors_allowed_origin: "http://localhost:3000".to_string(),
        model_api_key: SecretString::from("test_api_key".to_string()),
        model_api_base: "http://localhost:9999/v1".to_string(),
        model_backends: models.iter().map(|m| m.to_string()).collect(),
        model_temperature: 0.7,
        model_max_tokens: 512,
        model_timeout_seconds: 5,
    }
}

pub fn test_state(models: &[&str], backend: Arc<ScriptedBackend>) -> AppState {
    AppState::with_backend(test_config(models), backend).unwrap()
}
