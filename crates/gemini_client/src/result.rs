use serde::Serialize;

use crate::error::GenerationError;

/// Returned in place of an empty generation so the client can tell it apart
/// from a missing field.
pub const EMPTY_GENERATION_TEXT: &str = "Generated content is empty.";

/// Outcome of one generation as sent to the browser: exactly one of
/// `{"generated_text": ...}` or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GenerationResult {
    Generated { generated_text: String },
    Failed { error: String },
}

impl GenerationResult {
    pub fn generated(text: impl Into<String>) -> Self {
        Self::Generated {
            generated_text: text.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            error: message.into(),
        }
    }
}

impl From<Result<String, GenerationError>> for GenerationResult {
    fn from(result: Result<String, GenerationError>) -> Self {
        match result {
            Ok(text) => Self::generated(text),
            Err(e) => Self::failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generated_serializes_single_field() {
        let value = serde_json::to_value(GenerationResult::generated("Hi there!")).unwrap();
        assert_eq!(value, json!({ "generated_text": "Hi there!" }));
    }

    #[test]
    fn failed_serializes_single_field() {
        let result = GenerationResult::from(Err(GenerationError::NotConfigured));
        assert!(matches!(result, GenerationResult::Failed { .. }));
        let value = serde_json::to_value(result).unwrap();
        assert_eq!(
            value,
            json!({ "error": "Server error: Gemini API Key not configured." })
        );
    }
}
