use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextSection {
    pub heading: String,
    /// Markdown; may contain LaTeX-style formulas.
    pub content: String,
}

/// A sectioned written explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextContent {
    pub title: String,
    pub sections: Vec<TextSection>,
    pub summary: String,
}

/// A runnable code sample with the metadata needed to run it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CodeContent {
    pub title: String,
    pub language: String,
    pub code: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
    pub explanation: String,
    pub execution_instructions: String,
}

/// A conversational script meant to be read aloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AudioContent {
    pub title: String,
    pub script: String,
    /// Free-form estimate such as "3 minutes".
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisualDescription {
    pub label: String,
    pub description: String,
    pub svg_content: String,
}

/// A set of labelled SVG diagrams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VisualContent {
    pub title: String,
    pub descriptions: Vec<VisualDescription>,
}
