#[cfg(test)]
pub mod fixtures {
    /// Audio record wrapped in a markdown fence with prose around it.
    pub const FENCED_AUDIO_OUTPUT: &str = "Here is your lesson:\n```json\n{\n  \"title\": \"Attention in Transformers\",\n  \"script\": \"Imagine reading a sentence... and highlighting the words that matter most.\",\n  \"duration\": \"3 minutes\"\n}\n```\nEnjoy!";

    /// Code record with a preamble, raw line breaks inside `code` and a trailing comma.
    pub const CHATTY_CODE_OUTPUT: &str = "Sure! Here is a complete example:\n\n{\n  \"title\": \"Linear Regression Demo\",\n  \"language\": \"python\",\n  \"code\": \"import numpy as np\nfrom sklearn.linear_model import LinearRegression\n\nX = np.array([[1], [2], [3]])\nmodel = LinearRegression().fit(X, [2, 4, 6])\nprint(model.coef_)\",\n  \"dependencies\": [\"numpy\", \"scikit-learn\",],\n  \"explanation\": \"Fits y = 2x.\",\n  \"executionInstructions\": \"pip install numpy scikit-learn, then run the script.\"\n}\n\nLet me know if you need anything else!";

    /// Text record with an unescaped LaTeX command and a raw line break.
    pub const LATEX_TEXT_OUTPUT: &str = "{\n  \"title\": \"Logistic Regression\",\n  \"sections\": [\n    {\n      \"heading\": \"The Sigmoid\",\n      \"content\": \"The model applies \\sigma(z) = 1 / (1 + e^{-z}).\nIts output is a probability.\"\n    }\n  ],\n  \"summary\": \"A linear model squashed by \\sigma.\"\n}";

    /// Visual record that is already strict JSON.
    pub const CLEAN_VISUAL_OUTPUT: &str = r#"{"title": "Neural Network Architecture", "descriptions": [{"label": "Input Layer", "description": "Where data enters the network.", "svgContent": "<svg viewBox='0 0 800 500' xmlns='http://www.w3.org/2000/svg'><rect width='800' height='500' fill='#0B0F14'/></svg>"}]}"#;

    /// Brace-delimited but structurally broken beyond repair.
    pub const BROKEN_OUTPUT: &str = "{\"title\": \"Broken\", \"sections\": [ {\"heading\": \"x\" ]}";
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::{AudioContent, TextContent, VisualContent};
    use crate::recovery::{recover, recover_record, RecoveryError};

    #[test]
    fn test_fixtures_recover_into_their_shapes() {
        let audio: AudioContent = recover_record(FENCED_AUDIO_OUTPUT).unwrap();
        assert_eq!(audio.duration, "3 minutes");

        let text: TextContent = recover_record(LATEX_TEXT_OUTPUT).unwrap();
        assert_eq!(text.summary, "A linear model squashed by \\sigma.");

        let visual: VisualContent = recover_record(CLEAN_VISUAL_OUTPUT).unwrap();
        assert_eq!(visual.descriptions.len(), 1);
    }

    #[test]
    fn test_broken_fixture_is_unrecoverable() {
        assert!(matches!(
            recover(BROKEN_OUTPUT),
            Err(RecoveryError::UnrecoverableJson { .. })
        ));
    }
}
