use super::*;

fn user(email: &str) -> SessionUser {
    SessionUser { email: email.into(), name: "Ada".into(), image: None }
}

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// SessionStore
// =============================================================================

#[tokio::test]
async fn create_then_validate_returns_user() {
    let store = SessionStore::new();
    let token = store.create(user("a@b.com")).await;
    assert_eq!(store.validate(&token).await, Some(user("a@b.com")));
}

#[tokio::test]
async fn validate_unknown_token_is_none() {
    let store = SessionStore::new();
    assert!(store.validate("nope").await.is_none());
}

#[tokio::test]
async fn delete_removes_session() {
    let store = SessionStore::new();
    let token = store.create(user("a@b.com")).await;
    store.delete(&token).await;
    assert!(store.validate(&token).await.is_none());
    assert_eq!(store.len().await, 0);
}

#[tokio::test]
async fn expired_session_is_evicted_on_lookup() {
    let store = SessionStore::with_ttl(Duration::ZERO);
    let token = store.create(user("a@b.com")).await;
    assert_eq!(store.len().await, 1);
    assert!(store.validate(&token).await.is_none());
    assert_eq!(store.len().await, 0);
}

#[tokio::test]
async fn create_prunes_expired_sessions() {
    let store = SessionStore::with_ttl(Duration::ZERO);
    let stale = store.create(user("a@b.com")).await;
    let fresh = store.create(user("c@d.com")).await;
    assert_eq!(store.len().await, 1);
    assert!(!store.inner.read().await.contains_key(&stale));
    assert!(store.inner.read().await.contains_key(&fresh));
}

#[tokio::test]
async fn clones_share_sessions() {
    let store = SessionStore::new();
    let other = store.clone();
    let token = store.create(user("a@b.com")).await;
    assert!(other.validate(&token).await.is_some());
}
