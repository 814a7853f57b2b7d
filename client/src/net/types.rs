//! Wire DTOs for the journal backend, the completion proxy, and auth.
//!
//! DESIGN
//! ======
//! The journal backend is a Mongo-style REST service, so records carry
//! `_id` and camelCase timestamps. Both `_id` and `id` are accepted on read.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Missing and `null` both read as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A journal entry as returned by `GET /journals`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Server-assigned identifier. Never generated on the client.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    /// Owner email.
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for create and update calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalDraft {
    pub title: String,
    pub content: String,
    pub email: String,
}

/// One role-tagged turn sent to the completion proxy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: String,
}

impl CompletionMessage {
    #[must_use]
    pub fn new(role: &str, content: impl Into<String>) -> Self {
        Self { role: role.to_owned(), content: content.into() }
    }
}

/// Completion proxy request body.
#[derive(Clone, Debug, Serialize)]
pub struct ReflectRequest<'a> {
    pub messages: &'a [CompletionMessage],
}

/// Completion proxy success body. `reflection` may be absent.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ReflectResponse {
    #[serde(default)]
    pub reflection: Option<String>,
}

/// Signed-in user, as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}
