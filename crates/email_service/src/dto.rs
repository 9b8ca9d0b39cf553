//! JSON bodies accepted by the email routes and their validation.
use serde::Deserialize;

use crate::error::AppError;
use crate::models::{EmailEditRequest, SummaryRequest, DEFAULT_STYLE};

pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields.";
pub const MISSING_EMAIL_TEXT: &str = "Missing 'email_text' in request.";

/// Body of `/complete_email` and `/refine_email`
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EmailEditRequestDTO {
    #[serde(default)]
    pub email_text: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub document_text: Option<String>,
}

/// Body of `/summarize_email`
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SummaryRequestDTO {
    #[serde(default)]
    pub email_text: Option<String>,
}

/// Missing, null and empty strings count as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl TryFrom<EmailEditRequestDTO> for EmailEditRequest {
    type Error = AppError;

    fn try_from(dto: EmailEditRequestDTO) -> Result<Self, Self::Error> {
        let (Some(email_text), Some(tone)) = (present(dto.email_text), present(dto.tone)) else {
            return Err(AppError::MissingFields(MISSING_REQUIRED_FIELDS.to_string()));
        };

        Ok(EmailEditRequest {
            email_text,
            tone,
            style: dto.style.unwrap_or_else(|| DEFAULT_STYLE.to_string()),
            keywords: dto.keywords.unwrap_or_default(),
            document_text: dto.document_text.unwrap_or_default(),
        })
    }
}

impl TryFrom<SummaryRequestDTO> for SummaryRequest {
    type Error = AppError;

    fn try_from(dto: SummaryRequestDTO) -> Result<Self, Self::Error> {
        present(dto.email_text)
            .map(|email_text| SummaryRequest { email_text })
            .ok_or_else(|| AppError::MissingFields(MISSING_EMAIL_TEXT.to_string()))
    }
}
