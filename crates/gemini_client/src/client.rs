//! Google Gemini `generateContent` client.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::GeminiConfig;
use crate::error::{GenerationError, Result};
use crate::protocol::{GeminiRequest, GeminiResponse};
use crate::provider::TextGenerator;
use crate::result::EMPTY_GENERATION_TEXT;

/// Non-streaming Gemini client. One outbound request per `generate` call.
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(GenerationError::Transport)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let Some(api_key) = self.config.credential() else {
            log::error!("Gemini API key is not configured; set GEMINI_API_KEY");
            return Err(GenerationError::NotConfigured);
        };

        let url = self.endpoint();
        let request = GeminiRequest::single_turn(prompt);

        log::debug!(
            "Gemini generateContent: model='{}', prompt_chars={}",
            self.config.model,
            prompt.chars().count()
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                // The URL carries the key as a query parameter.
                let e = e.without_url();
                log::error!("Gemini request failed: {}", e);
                GenerationError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Gemini API error: HTTP {}: {}", status, body);
            return Err(GenerationError::Upstream { status, body });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Transport(e.without_url()))?;

        let parsed: GeminiResponse = serde_json::from_str(&body).map_err(|e| {
            log::error!("Gemini returned a non-JSON body: {}", e);
            GenerationError::Unexpected(e.to_string())
        })?;

        match parsed.first_text() {
            Some("") => {
                log::warn!("Gemini returned an empty generation");
                Ok(EMPTY_GENERATION_TEXT.to_string())
            }
            Some(text) => Ok(text.to_string()),
            None => {
                log::error!("Unexpected Gemini API response structure: {}", body);
                Err(GenerationError::UnexpectedStructure)
            }
        }
    }
}
