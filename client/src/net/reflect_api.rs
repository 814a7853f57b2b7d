//! Client for the server-side completion proxy (`POST /api/ai-reflect`).

#[cfg(test)]
#[path = "reflect_api_test.rs"]
mod reflect_api_test;

use std::sync::Arc;

use super::http::{ApiRequest, Transport, api_request, failure_message};
use super::types::{CompletionMessage, ReflectRequest, ReflectResponse};

pub const REFLECT_ENDPOINT: &str = "/api/ai-reflect";

#[derive(Clone)]
pub struct ReflectApi {
    transport: Arc<dyn Transport>,
    endpoint: String,
}

impl ReflectApi {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_endpoint(transport, REFLECT_ENDPOINT)
    }

    #[must_use]
    pub fn with_endpoint(transport: Arc<dyn Transport>, endpoint: &str) -> Self {
        Self { transport, endpoint: endpoint.to_owned() }
    }

    /// Send the turns and return the reflection text, `None` when the proxy
    /// answered without one.
    ///
    /// # Errors
    ///
    /// Returns the narrowed failure message on transport or status failure.
    pub async fn reflect(&self, messages: &[CompletionMessage]) -> Result<Option<String>, String> {
        let request = ApiRequest::post(&self.endpoint)
            .with_json(&ReflectRequest { messages })
            .map_err(|e| failure_message(&e))?;
        let response: Option<ReflectResponse> = api_request(self.transport.as_ref(), &request).await?;
        Ok(response
            .and_then(|r| r.reflection)
            .filter(|text| !text.is_empty()))
    }
}
