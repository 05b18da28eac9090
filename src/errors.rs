use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::{
    recovery::RecoveryError,
    services::{http_helpers::failure_json, model_service::ModelError},
};

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),

    #[error("Failed to generate content: all model backends were exhausted")]
    BackendExhausted,

    #[error(transparent)]
    RecoveryFailed(#[from] RecoveryError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::BackendExhausted => "BACKEND_EXHAUSTED",
            AppError::RecoveryFailed(_) => "RECOVERY_FAILED",
            AppError::ConfigError(_) => "CONFIG_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::BackendExhausted => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::RecoveryFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        log::warn!("Request failed [{}]: {}", self.error_code(), self);
        failure_json(self.status_code(), self.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let message = err
            .field_errors()
            .into_values()
            .flatten()
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .next()
            .unwrap_or_else(|| err.to_string());
        AppError::ValidationError(message)
    }
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::BackendsExhausted { .. } => AppError::BackendExhausted,
            ModelError::NoBackendsConfigured => AppError::ConfigError(err.to_string()),
            other => AppError::InternalError(other.to_string()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
