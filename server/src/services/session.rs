//! Session management.
//!
//! ARCHITECTURE
//! ============
//! The journal backend owns user persistence, so sessions live in process
//! memory: an opaque random token maps to the signed-in user's profile.
//! Restarting the server signs everyone out.
//!
//! TRADE-OFFS
//! ==========
//! Expired sessions are evicted lazily on lookup rather than by a sweeper
//! task; the map only grows with sign-ins that are never revisited.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use tokio::sync::RwLock;

/// Default session lifetime.
pub const SESSION_TTL: Duration = Duration::from_secs(60 * 60 * 24 * 7);

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Profile attached to a session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionUser {
    /// Email used to scope journal entries.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL, if available.
    pub image: Option<String>,
}

struct SessionEntry {
    user: SessionUser,
    expires_at: Instant,
}

/// Shared token -> user map. Cheap to clone.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, SessionEntry>>>,
    ttl: Duration,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(SESSION_TTL)
    }

    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self { inner: Arc::new(RwLock::new(HashMap::new())), ttl }
    }

    /// Create a session for the given user, returning the token. Expired
    /// sessions are pruned first.
    pub async fn create(&self, user: SessionUser) -> String {
        let token = generate_token();
        let now = Instant::now();
        let entry = SessionEntry { user, expires_at: now + self.ttl };
        let mut sessions = self.inner.write().await;
        sessions.retain(|_, existing| existing.expires_at > now);
        sessions.insert(token.clone(), entry);
        token
    }

    /// Validate a session token and return the associated user.
    pub async fn validate(&self, token: &str) -> Option<SessionUser> {
        {
            let sessions = self.inner.read().await;
            match sessions.get(token) {
                Some(entry) if entry.expires_at > Instant::now() => return Some(entry.user.clone()),
                Some(_) => {}
                None => return None,
            }
        }
        // Expired: evict under the write lock.
        self.inner.write().await.remove(token);
        None
    }

    /// Delete a session by token. Unknown tokens are ignored.
    pub async fn delete(&self, token: &str) {
        self.inner.write().await.remove(token);
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
