//! Completion gateway: trait-based abstraction over the external
//! text-completion service, with a fake implementation for testing.

mod config;
mod fake;
mod openai;

pub use config::{ConfigError, GatewayConfig};
pub use fake::FakeProvider;
pub use openai::OpenAiProvider;

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::assemble::CompletionPayload;

/// Error type for gateway operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("AI 응답이 비어있습니다")]
    EmptyResponse,

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for completion providers.
///
/// Implementations should be stateless and thread-safe. A provider sends the
/// assembled payload as one instruction message plus one context message and
/// returns the model's raw text response. No provider retries.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send the payload and return the raw response text.
    async fn complete(&self, payload: &CompletionPayload) -> Result<String, LlmError>;

    /// Provider name (e.g. "openai", "fake").
    fn provider_name(&self) -> &'static str;

    /// Model name (e.g. "gpt-4.1").
    fn model_name(&self) -> &str;
}

/// Build a provider from environment configuration.
///
/// - `DRAFTMILL_AI_PROVIDER`: "openai" (default) | "fake"
/// - `OPENAI_API_KEY`: credential for the openai provider
///
/// A missing credential yields [`LlmError::NotConfigured`]; the server runs
/// without a provider in that case and answers generation requests with the
/// fixed placeholder post instead of calling out.
pub fn create_provider_from_env() -> Result<Box<dyn LlmProvider>, LlmError> {
    let provider =
        std::env::var("DRAFTMILL_AI_PROVIDER").unwrap_or_else(|_| "openai".to_string());

    match provider.as_str() {
        "fake" => Ok(Box::new(FakeProvider::default())),
        "openai" => {
            let config =
                GatewayConfig::from_env().map_err(|e| LlmError::NotConfigured(e.to_string()))?;
            Ok(Box::new(OpenAiProvider::new(config)))
        }
        other => Err(LlmError::NotConfigured(format!(
            "Unknown provider: {other}"
        ))),
    }
}
