//! LLM: chat-completion adapter for the reflection proxy.
//!
//! DESIGN
//! ======
//! Configuration comes from environment variables. `LlmClient` wraps the
//! `OpenAI` chat completions client behind the [`LlmChat`] trait so route
//! handlers can be tested against a mock.

pub mod config;
pub mod openai;
pub mod types;

use config::LlmConfig;
pub use types::LlmChat;
use types::{ChatResponse, CompletionRequest, LlmError};

// =============================================================================
// CLIENT
// =============================================================================

/// Concrete LLM client backed by an OpenAI-compatible API.
///
/// Configured from environment variables by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: openai::OpenAiClient,
}

impl LlmClient {
    /// Build an LLM client from environment variables.
    ///
    /// - `OPENAI_API_KEY`: the completion credential (required)
    /// - `LLM_OPENAI_BASE_URL`: custom base URL for OpenAI-compatible APIs
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let inner = openai::OpenAiClient::new(config.api_key, &config.openai_base_url, config.timeouts)?;
        Ok(Self { inner })
    }

    /// Return the configured API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn chat(&self, request: &CompletionRequest<'_>) -> Result<ChatResponse, LlmError> {
        self.inner.chat(request).await
    }
}
