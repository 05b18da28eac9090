use std::{env, time::Duration};

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

pub const DEFAULT_MODEL_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL_BACKENDS: &str =
    "llama-3.3-70b-versatile,llama-3.1-70b-versatile,mixtral-8x7b-32768";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: String,
    pub model_api_key: SecretString,
    pub model_api_base: String,
    /// Model identifiers, tried in this order.
    pub model_backends: Vec<String>,
    pub model_temperature: f32,
    pub model_max_tokens: u32,
    pub model_timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            model_api_key: SecretString::from(
                env::var("MODEL_API_KEY")
                    .or_else(|_| env::var("GROQ_API_KEY"))
                    .unwrap_or_default(),
            ),
            model_api_base: env::var("MODEL_API_BASE")
                .unwrap_or_else(|_| DEFAULT_MODEL_API_BASE.to_string()),
            model_backends: parse_backend_list(
                &env::var("MODEL_BACKENDS").unwrap_or_else(|_| DEFAULT_MODEL_BACKENDS.to_string()),
            ),
            model_temperature: env::var("MODEL_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.7),
            model_max_tokens: env::var("MODEL_MAX_TOKENS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(8000),
            model_timeout_seconds: env::var("MODEL_TIMEOUT_SECONDS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(60),
        }
    }

    /// Rejects configuration the server cannot start with.
    pub fn validate(&self) -> AppResult<()> {
        if self.model_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::ConfigError(
                "MODEL_API_KEY (or GROQ_API_KEY) must be set".to_string(),
            ));
        }

        if self.model_backends.is_empty() {
            return Err(AppError::ConfigError(
                "MODEL_BACKENDS must name at least one model".to_string(),
            ));
        }

        if self.model_max_tokens == 0 {
            return Err(AppError::ConfigError(
                "MODEL_MAX_TOKENS must be greater than zero".to_string(),
            ));
        }

        if self.model_timeout_seconds == 0 {
            return Err(AppError::ConfigError(
                "MODEL_TIMEOUT_SECONDS must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn model_timeout(&self) -> Duration {
        Duration::from_secs(self.model_timeout_seconds)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: "http://localhost:3000".to_string(),
            model_api_key: SecretString::from("test_api_key".to_string()),
            model_api_base: "http://localhost:9999/v1".to_string(),
            model_backends: vec!["model-a".to_string(), "model-b".to_string()],
            model_temperature: 0.7,
            model_max_tokens: 512,
            model_timeout_seconds: 5,
        }
    }
}

/// Splits a comma-separated backend list, dropping blank entries.
pub fn parse_backend_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
