//! HTTP client wrapper.
//!
//! Issues a configured request through a [`Transport`] and narrows every
//! failure to a single string. Callers only ever show or log that string,
//! so structured error detail stops here.
//!
//! ERROR HANDLING
//! ==============
//! A non-2xx response whose JSON body carries a non-empty `message` field
//! yields that message. Anything else (transport failure, unreadable body,
//! undecodable success payload) yields [`GENERIC_FAILURE`].

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Fallback failure text when the error body has no usable message.
pub const GENERIC_FAILURE: &str = "Something went wrong";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A configured request: method, absolute URL, query pairs, optional JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), query: Vec::new(), body: None }
    }

    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    #[must_use]
    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::Put, url)
    }

    #[must_use]
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete, url)
    }

    #[must_use]
    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_owned(), value.to_owned()));
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Encode`] if `body` cannot be represented as JSON.
    pub fn with_json(mut self, body: &impl Serialize) -> Result<Self, HttpError> {
        let value = serde_json::to_value(body).map_err(|e| HttpError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Value of the first query pair named `key`.
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Status and raw body text of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("request encode failed: {0}")]
    Encode(String),
    #[error("transport failed: {0}")]
    Transport(String),
    #[error("unexpected status {status}")]
    Status { status: u16, body: String },
    #[error("response decode failed: {0}")]
    Decode(String),
}

/// Moves a request over the wire. Any completed exchange is `Ok`, whatever
/// its status; only a failure to complete the exchange is `Err`.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, HttpError>;
}

/// Browser `fetch` transport via `gloo-net`. Unavailable during SSR.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, HttpError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::{Method as GlooMethod, RequestBuilder};

            let method = match request.method {
                Method::Get => GlooMethod::GET,
                Method::Post => GlooMethod::POST,
                Method::Put => GlooMethod::PUT,
                Method::Delete => GlooMethod::DELETE,
            };
            let builder = RequestBuilder::new(&request.url)
                .method(method)
                .query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            let prepared = match &request.body {
                Some(body) => builder.json(body).map_err(|e| HttpError::Encode(e.to_string()))?,
                None => builder.build().map_err(|e| HttpError::Transport(e.to_string()))?,
            };
            let resp = prepared
                .send()
                .await
                .map_err(|e| HttpError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| HttpError::Transport(e.to_string()))?;
            Ok(RawResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(HttpError::Transport("not available on server".to_owned()))
        }
    }
}

/// Send `request` and check the status only. The body of a 2xx response is
/// ignored, whatever its content type.
pub(crate) async fn execute_unit(transport: &dyn Transport, request: &ApiRequest) -> Result<(), HttpError> {
    let response = transport.send(request).await?;
    if response.is_success() {
        Ok(())
    } else {
        Err(HttpError::Status { status: response.status, body: response.body })
    }
}

/// Send `request` and decode a 2xx body as `T`. An empty body decodes as
/// JSON `null`, so `T = ()` suits endpoints that answer with nothing.
pub(crate) async fn execute<T: DeserializeOwned>(
    transport: &dyn Transport,
    request: &ApiRequest,
) -> Result<T, HttpError> {
    let response = transport.send(request).await?;
    if !response.is_success() {
        return Err(HttpError::Status { status: response.status, body: response.body });
    }
    let text = if response.body.trim().is_empty() { "null" } else { response.body.as_str() };
    serde_json::from_str(text).map_err(|e| HttpError::Decode(e.to_string()))
}

/// Execute a request, returning the decoded body or a display-ready message.
///
/// # Errors
///
/// Returns the failure message described in the module docs.
pub async fn api_request<T: DeserializeOwned>(transport: &dyn Transport, request: &ApiRequest) -> Result<T, String> {
    execute(transport, request).await.map_err(|e| {
        log::debug!("{:?} {} failed: {e}", request.method, request.url);
        failure_message(&e)
    })
}

/// Execute a write whose response body is not needed. Any 2xx succeeds.
///
/// # Errors
///
/// Returns the failure message described in the module docs.
pub async fn api_request_unit(transport: &dyn Transport, request: &ApiRequest) -> Result<(), String> {
    execute_unit(transport, request).await.map_err(|e| {
        log::debug!("{:?} {} failed: {e}", request.method, request.url);
        failure_message(&e)
    })
}

/// Narrow a transport error to the string shown to users.
#[must_use]
pub fn failure_message(err: &HttpError) -> String {
    match err {
        HttpError::Status { body, .. } => message_from_body(body).unwrap_or_else(|| GENERIC_FAILURE.to_owned()),
        HttpError::Encode(_) | HttpError::Transport(_) | HttpError::Decode(_) => GENERIC_FAILURE.to_owned(),
    }
}

fn message_from_body(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")?
        .as_str()
        .filter(|m| !m.trim().is_empty())
        .map(str::to_owned)
}
