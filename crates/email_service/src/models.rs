use std::fmt;

/// Style value meaning "no style beyond the tone".
pub const DEFAULT_STYLE: &str = "Default";

/// Email-editing operation that shares the tone/style prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailAction {
    Complete,
    Refine,
}

impl EmailAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailAction::Complete => "complete",
            EmailAction::Refine => "refine",
        }
    }
}

impl fmt::Display for EmailAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated complete/refine request. Lives for one request only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailEditRequest {
    pub email_text: String,
    pub tone: String,
    pub style: String,
    pub keywords: String,
    pub document_text: String,
}

impl EmailEditRequest {
    /// Request with the optional fields at their defaults.
    pub fn new(email_text: impl Into<String>, tone: impl Into<String>) -> Self {
        Self {
            email_text: email_text.into(),
            tone: tone.into(),
            style: DEFAULT_STYLE.to_string(),
            keywords: String::new(),
            document_text: String::new(),
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = keywords.into();
        self
    }

    pub fn with_document_text(mut self, document_text: impl Into<String>) -> Self {
        self.document_text = document_text.into();
        self
    }
}

/// A validated summarize request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    pub email_text: String,
}
