//! In-memory journal backend and completion proxy for controller tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::Semaphore;

use super::http::{ApiRequest, HttpError, Method, RawResponse, Transport};
use super::types::{CompletionMessage, JournalDraft, JournalEntry};

pub const MOCK_BASE_URL: &str = "http://backend.test";

#[derive(Default)]
struct Inner {
    entries: Vec<JournalEntry>,
    next_id: u64,
    requests: Vec<ApiRequest>,
    forced: VecDeque<Result<RawResponse, String>>,
    reflect_replies: VecDeque<RawResponse>,
    reflect_calls: Vec<Vec<CompletionMessage>>,
    gate: Option<Arc<Semaphore>>,
}

/// Serves `/journals` CRUD and `/api/ai-reflect` from memory.
#[derive(Default)]
pub struct MockBackend {
    inner: Mutex<Inner>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<JournalEntry>) -> Self {
        let backend = Self::default();
        {
            let mut inner = backend.inner.lock().unwrap();
            inner.next_id = entries.len() as u64;
            inner.entries = entries;
        }
        backend
    }

    /// Answer the next request (of any kind) with this status and body.
    pub fn respond_next(&self, status: u16, body: &str) {
        self.inner
            .lock()
            .unwrap()
            .forced
            .push_back(Ok(RawResponse::new(status, body)));
    }

    /// Fail the next request at the transport level.
    pub fn drop_next(&self) {
        self.inner
            .lock()
            .unwrap()
            .forced
            .push_back(Err("connection refused".into()));
    }

    /// Queue a proxy reply. Unqueued calls answer `{"reflection":"Reflected."}`.
    pub fn queue_reflection(&self, status: u16, body: &str) {
        self.inner
            .lock()
            .unwrap()
            .reflect_replies
            .push_back(RawResponse::new(status, body));
    }

    /// Park proxy calls until [`MockBackend::release_reflections`].
    pub fn hold_reflections(&self) {
        self.inner.lock().unwrap().gate = Some(Arc::new(Semaphore::new(0)));
    }

    pub fn release_reflections(&self, count: usize) {
        if let Some(gate) = self.inner.lock().unwrap().gate.as_ref() {
            gate.add_permits(count);
        }
    }

    pub fn entries(&self) -> Vec<JournalEntry> {
        self.inner.lock().unwrap().entries.clone()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn reflect_calls(&self) -> Vec<Vec<CompletionMessage>> {
        self.inner.lock().unwrap().reflect_calls.clone()
    }

    fn route(inner: &mut Inner, request: &ApiRequest) -> RawResponse {
        let path = request
            .url
            .strip_prefix(MOCK_BASE_URL)
            .unwrap_or(&request.url)
            .to_owned();
        let draft = || {
            request
                .body
                .clone()
                .and_then(|b| serde_json::from_value::<JournalDraft>(b).ok())
        };
        let not_found = || RawResponse::new(404, r#"{"message":"Journal not found"}"#);

        match (request.method, path.as_str()) {
            (Method::Get, "/journals") => {
                let email = request.query_value("email").unwrap_or_default();
                let owned: Vec<&JournalEntry> = inner.entries.iter().filter(|e| e.email == email).collect();
                RawResponse::new(200, serde_json::to_string(&owned).unwrap())
            }
            (Method::Post, "/journals") => {
                let Some(draft) = draft() else {
                    return RawResponse::new(400, r#"{"message":"Invalid body"}"#);
                };
                inner.next_id += 1;
                let created_at = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).single();
                inner.entries.push(JournalEntry {
                    id: inner.next_id.to_string(),
                    title: draft.title,
                    content: draft.content,
                    email: draft.email,
                    created_at,
                });
                RawResponse::new(201, r#"{"message":"Journal created"}"#)
            }
            (Method::Put, p) if p.starts_with("/journals/") => {
                let id = &p["/journals/".len()..];
                let Some(draft) = draft() else {
                    return RawResponse::new(400, r#"{"message":"Invalid body"}"#);
                };
                match inner.entries.iter_mut().find(|e| e.id == id) {
                    Some(entry) => {
                        entry.title = draft.title;
                        entry.content = draft.content;
                        RawResponse::new(200, r#"{"message":"Journal updated"}"#)
                    }
                    None => not_found(),
                }
            }
            (Method::Delete, p) if p.starts_with("/journals/") => {
                let id = &p["/journals/".len()..];
                let email = request.query_value("email").unwrap_or_default();
                let before = inner.entries.len();
                inner.entries.retain(|e| !(e.id == id && e.email == email));
                if inner.entries.len() == before {
                    not_found()
                } else {
                    RawResponse::new(200, r#"{"message":"Journal deleted"}"#)
                }
            }
            (Method::Post, "/api/ai-reflect") => {
                let messages = request
                    .body
                    .as_ref()
                    .and_then(|b| b.get("messages").cloned())
                    .and_then(|m| serde_json::from_value::<Vec<CompletionMessage>>(m).ok())
                    .unwrap_or_default();
                inner.reflect_calls.push(messages);
                inner
                    .reflect_replies
                    .pop_front()
                    .unwrap_or_else(|| RawResponse::new(200, r#"{"reflection":"Reflected."}"#))
            }
            _ => RawResponse::new(404, r#"{"message":"Not found"}"#),
        }
    }
}

#[async_trait(?Send)]
impl Transport for MockBackend {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, HttpError> {
        let gate = {
            let inner = self.inner.lock().unwrap();
            if request.url.ends_with("/api/ai-reflect") { inner.gate.clone() } else { None }
        };
        if let Some(gate) = gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }

        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(request.clone());
        if let Some(forced) = inner.forced.pop_front() {
            return forced.map_err(HttpError::Transport);
        }
        Ok(Self::route(&mut inner, request))
    }
}
