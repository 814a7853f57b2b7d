//! Completion proxy: `POST /api/ai-reflect`.
//!
//! Accepts `{ messages: [{role, content}, ...] }`, forwards the turns
//! verbatim to the completion backend with fixed sampling parameters, and
//! answers `{ reflection }`. Failures answer `{ error }`.
//!
//! Validation runs before the credential check, and both run before any
//! outbound call.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::llm::types::{CompletionRequest, Message};
use crate::state::AppState;

pub const REFLECT_MODEL: &str = "gpt-4o";
pub const REFLECT_MAX_TOKENS: u32 = 200;
pub const REFLECT_TEMPERATURE: f32 = 0.7;
pub const NO_RESPONSE_FALLBACK: &str = "No response from AI.";

#[derive(Debug, Deserialize)]
pub struct ReflectRequest {
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
}

#[derive(Debug, Serialize)]
pub struct ReflectResponse {
    pub reflection: String,
}

/// Failure modes of the proxy, each rendered as `{ "error": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum ReflectError {
    #[error("No messages provided.")]
    NoMessages,
    #[error("OpenAI API key not set.")]
    MissingApiKey,
    #[error("{0}")]
    Upstream(String),
}

impl ReflectError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NoMessages => StatusCode::BAD_REQUEST,
            Self::MissingApiKey | Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ReflectError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// `POST /api/ai-reflect`
pub async fn ai_reflect(
    State(state): State<AppState>,
    payload: Result<Json<ReflectRequest>, JsonRejection>,
) -> Result<Json<ReflectResponse>, ReflectError> {
    let messages = match payload {
        Ok(Json(ReflectRequest { messages: Some(messages) })) if !messages.is_empty() => messages,
        Ok(_) => {
            tracing::warn!("ai-reflect: empty or missing messages");
            return Err(ReflectError::NoMessages);
        }
        Err(rejection) => {
            tracing::warn!(error = %rejection, "ai-reflect: malformed body");
            return Err(ReflectError::NoMessages);
        }
    };

    let Some(llm) = state.llm.as_ref() else {
        tracing::error!("ai-reflect: completion credential not configured");
        return Err(ReflectError::MissingApiKey);
    };

    let request = CompletionRequest {
        model: REFLECT_MODEL,
        max_tokens: REFLECT_MAX_TOKENS,
        temperature: REFLECT_TEMPERATURE,
        messages: &messages,
    };
    match llm.chat(&request).await {
        Ok(response) => {
            tracing::info!(
                messages = messages.len(),
                model = %response.model,
                input_tokens = response.input_tokens,
                output_tokens = response.output_tokens,
                "ai-reflect: completed"
            );
            let reflection = response
                .content
                .unwrap_or_else(|| NO_RESPONSE_FALLBACK.to_owned());
            Ok(Json(ReflectResponse { reflection }))
        }
        Err(e) => {
            tracing::error!(error = %e, messages = messages.len(), "ai-reflect: upstream call failed");
            Err(ReflectError::Upstream(e.to_string()))
        }
    }
}

#[cfg(test)]
#[path = "reflect_test.rs"]
mod tests;
