//! Outbound calls to a generative text model.
//!
//! The advisor only depends on [`GenerativeModel`]; the Gemini client is
//! the production implementation and [`DisabledModel`] stands in when no
//! API key is configured.

pub mod gemini;

use async_trait::async_trait;

pub use gemini::GeminiClient;

#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    #[error("No generative model is configured")]
    NotConfigured,

    #[error("Request to the generative model failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Generative model returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Generative model returned no text")]
    EmptyResponse,
}

#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Send one prompt and return the generated text
    async fn generate(&self, prompt: &str) -> Result<String, GenAiError>;
}

/// Model used when no API key is set; every call fails with `NotConfigured`
#[derive(Debug, Clone, Default)]
pub struct DisabledModel;

#[async_trait]
impl GenerativeModel for DisabledModel {
    async fn generate(&self, _prompt: &str) -> Result<String, GenAiError> {
        Err(GenAiError::NotConfigured)
    }
}
