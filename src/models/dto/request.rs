use serde::Deserialize;
use serde_json::Value;
use validator::{Validate, ValidationError};

fn validate_topic(topic: &str) -> Result<(), ValidationError> {
    if topic.trim().is_empty() {
        return Err(ValidationError::new("required").with_message("Topic is required".into()));
    }
    Ok(())
}

// Option fields are read as raw JSON so that a non-string value falls back
// to the default instead of rejecting the whole body.
fn option_str(value: &Option<Value>) -> Option<&str> {
    value.as_ref().and_then(Value::as_str)
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateTextRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_topic"))]
    pub topic: String,

    #[serde(default)]
    pub depth: Option<Value>,
}

impl GenerateTextRequest {
    pub fn depth(&self) -> Option<&str> {
        option_str(&self.depth)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateCodeRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_topic"))]
    pub topic: String,

    #[serde(default)]
    pub complexity: Option<Value>,
}

impl GenerateCodeRequest {
    pub fn complexity(&self) -> Option<&str> {
        option_str(&self.complexity)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateAudioRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_topic"))]
    pub topic: String,

    #[serde(default)]
    pub length: Option<Value>,
}

impl GenerateAudioRequest {
    pub fn length(&self) -> Option<&str> {
        option_str(&self.length)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateVisualRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_topic"))]
    pub topic: String,
}
