use reqwest::StatusCode;
use thiserror::Error;

/// Failures of a single generation call. The `Display` text is what the
/// browser client sees in the `error` field.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Server error: Gemini API Key not configured.")]
    NotConfigured,

    #[error("AI service error: {}. Check API Key and limits.", .status.as_u16())]
    Upstream { status: StatusCode, body: String },

    #[error("An unknown error occurred with AI service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("AI generation failed: Unexpected response structure.")]
    UnexpectedStructure,

    #[error("An unexpected server error occurred: {0}")]
    Unexpected(String),
}

pub type Result<T> = std::result::Result<T, GenerationError>;
