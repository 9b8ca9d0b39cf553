use async_trait::async_trait;

use crate::error::Result;

/// Something that turns a prompt into generated text.
///
/// The HTTP layer only depends on this trait so tests can swap the provider.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run a single generation. Never retried by the implementation.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
