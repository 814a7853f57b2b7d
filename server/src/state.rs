//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds parsed configuration, the optional LLM client, the optional
//! Google OAuth config, in-memory sessions, and a shared outbound HTTP client.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::llm::LlmChat;
use crate::services::auth::GoogleConfig;
use crate::services::session::SessionStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Optional LLM client. `None` if `OPENAI_API_KEY` is not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
    /// Optional Google OAuth config. `None` disables sign-in routes.
    pub google: Option<GoogleConfig>,
    pub sessions: SessionStore,
    /// Outbound client for identity-provider and backend calls.
    pub http: reqwest::Client,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig, llm: Option<Arc<dyn LlmChat>>, google: Option<GoogleConfig>) -> Self {
        Self {
            config: Arc::new(config),
            llm,
            google,
            sessions: SessionStore::new(),
            http: reqwest::Client::new(),
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
