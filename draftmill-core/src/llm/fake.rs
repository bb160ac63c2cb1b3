//! Fake completion provider for testing.
//!
//! Returns deterministic responses based on substring matching against the
//! payload, so tests run without network access or API costs.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use super::{LlmError, LlmProvider};
use crate::assemble::CompletionPayload;

/// A fake completion provider.
///
/// Responses are matched by checking whether the payload (system or user
/// text) contains a registered substring. If nothing matches, the default
/// response is returned, or an error when none is set.
#[derive(Debug)]
pub struct FakeProvider {
    /// Map of payload substring -> response
    responses: RwLock<HashMap<String, String>>,
    /// Default response if no match found
    default_response: Option<String>,
    /// Number of complete() invocations, for asserting call counts.
    calls: AtomicUsize,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: Some("{}".to_string()),
            calls: AtomicUsize::new(0),
        }
    }
}

impl FakeProvider {
    /// Create a FakeProvider with no registered responses and no default.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a FakeProvider answering payloads that contain a substring.
    pub fn with_response(payload_contains: &str, response: &str) -> Self {
        let mut provider = Self::new();
        provider.add_response(payload_contains, response);
        provider
    }

    /// Register a response for payloads containing a substring.
    pub fn add_response(&mut self, payload_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(payload_contains.to_string(), response.to_string());
    }

    /// Set the response used when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// How many times complete() was called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn complete(&self, payload: &CompletionPayload) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let haystack =
            format!("{}\n{}", payload.system_text, payload.user_text).to_lowercase();

        let responses = self.responses.read().unwrap();
        for (pattern, response) in responses.iter() {
            if haystack.contains(&pattern.to_lowercase()) {
                return Ok(response.clone());
            }
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: no response configured for payload (first 100 chars): {}",
                payload
                    .user_text
                    .chars()
                    .take(100)
                    .collect::<String>()
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(user_text: &str) -> CompletionPayload {
        CompletionPayload {
            system_text: "시스템".to_string(),
            user_text: user_text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_fake_provider_matching() {
        let provider = FakeProvider::with_response("hello", "world");
        let result = provider.complete(&payload("say hello")).await.unwrap();
        assert_eq!(result, "world");
    }

    #[tokio::test]
    async fn test_fake_provider_case_insensitive() {
        let provider = FakeProvider::with_response("HELLO", "world");
        let result = provider.complete(&payload("hello there")).await.unwrap();
        assert_eq!(result, "world");
    }

    #[tokio::test]
    async fn test_fake_provider_no_match_errors() {
        let provider = FakeProvider::new();
        assert!(provider.complete(&payload("anything")).await.is_err());
    }

    #[tokio::test]
    async fn test_fake_provider_default_response() {
        let provider = FakeProvider::new().with_default_response("default");
        let result = provider.complete(&payload("anything")).await.unwrap();
        assert_eq!(result, "default");
    }

    #[tokio::test]
    async fn test_fake_provider_counts_calls() {
        let provider = FakeProvider::default();
        assert_eq!(provider.calls(), 0);
        provider.complete(&payload("one")).await.unwrap();
        provider.complete(&payload("two")).await.unwrap();
        assert_eq!(provider.calls(), 2);
    }
}
