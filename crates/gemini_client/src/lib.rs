pub mod client;
pub mod config;
pub mod error;
pub mod protocol;
pub mod provider;
pub mod result;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use error::GenerationError;
pub use provider::TextGenerator;
pub use result::{GenerationResult, EMPTY_GENERATION_TEXT};
