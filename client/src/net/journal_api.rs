//! Journal resource client.
//!
//! Four calls against the journal backend, all scoped by the signed-in
//! user's email. Writes return nothing; callers re-fetch the list to
//! observe server-assigned ids and timestamps.

#[cfg(test)]
#[path = "journal_api_test.rs"]
mod journal_api_test;

use std::sync::Arc;

use super::http::{ApiRequest, Transport, api_request, api_request_unit, failure_message};
use super::types::{JournalDraft, JournalEntry};

/// Backend base URL baked in at build time from `JOURNAL_BACKEND_URL`.
pub const DEFAULT_BACKEND_URL: &str = match option_env!("JOURNAL_BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum JournalApiError {
    #[error("{0}")]
    RequestFailed(String),
}

impl JournalApiError {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::RequestFailed(message) => message,
        }
    }
}

impl From<String> for JournalApiError {
    fn from(message: String) -> Self {
        Self::RequestFailed(message)
    }
}

#[derive(Clone)]
pub struct JournalApi {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl JournalApi {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, base_url: &str) -> Self {
        Self { transport, base_url: base_url.trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/journals", self.base_url)
    }

    fn entry_url(&self, id: &str) -> String {
        format!("{}/journals/{id}", self.base_url)
    }

    /// `GET /journals?email=`: entries in backend order.
    ///
    /// # Errors
    ///
    /// Returns [`JournalApiError::RequestFailed`] on transport or status failure.
    pub async fn list(&self, email: &str) -> Result<Vec<JournalEntry>, JournalApiError> {
        let request = ApiRequest::get(self.collection_url()).with_query("email", email);
        Ok(api_request(self.transport.as_ref(), &request).await?)
    }

    /// `POST /journals` with `{title, content, email}`.
    ///
    /// # Errors
    ///
    /// Returns [`JournalApiError::RequestFailed`] on transport or status failure.
    pub async fn create(&self, draft: &JournalDraft) -> Result<(), JournalApiError> {
        let request = ApiRequest::post(self.collection_url())
            .with_json(draft)
            .map_err(|e| JournalApiError::RequestFailed(failure_message(&e)))?;
        Ok(api_request_unit(self.transport.as_ref(), &request).await?)
    }

    /// `PUT /journals/{id}` replacing title and content.
    ///
    /// # Errors
    ///
    /// Returns [`JournalApiError::RequestFailed`] on transport or status failure.
    pub async fn update(&self, id: &str, draft: &JournalDraft) -> Result<(), JournalApiError> {
        let request = ApiRequest::put(self.entry_url(id))
            .with_json(draft)
            .map_err(|e| JournalApiError::RequestFailed(failure_message(&e)))?;
        Ok(api_request_unit(self.transport.as_ref(), &request).await?)
    }

    /// `DELETE /journals/{id}?email=`. A repeat call surfaces the backend's
    /// not-found error unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`JournalApiError::RequestFailed`] on transport or status failure.
    pub async fn delete(&self, id: &str, email: &str) -> Result<(), JournalApiError> {
        let request = ApiRequest::delete(self.entry_url(id)).with_query("email", email);
        Ok(api_request_unit(self.transport.as_ref(), &request).await?)
    }
}
