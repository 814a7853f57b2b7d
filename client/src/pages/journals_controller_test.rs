use std::sync::Arc;

use leptos::prelude::*;

use super::*;
use crate::net::http::{Method, Transport};
use crate::net::mock::{MOCK_BASE_URL, MockBackend};
use crate::net::types::JournalEntry;
use crate::state::reflection::{GREETING, INSIGHT_REQUEST, ReflectionPhase, SYSTEM_PROMPT};
use crate::state::toast::ToastKind;

const EMAIL: &str = "a@b.com";

fn entry(id: &str, title: &str, content: &str) -> JournalEntry {
    JournalEntry { id: id.into(), title: title.into(), content: content.into(), email: EMAIL.into(), created_at: None }
}

fn controller_with(entries: Vec<JournalEntry>) -> (Arc<MockBackend>, JournalsController) {
    let backend = Arc::new(MockBackend::with_entries(entries));
    let transport: Arc<dyn Transport> = backend.clone();
    let controller = JournalsController::new(
        JournalApi::new(transport.clone(), MOCK_BASE_URL),
        ReflectApi::new(transport),
        EMAIL,
        ToastStore::new(),
    );
    (backend, controller)
}

fn two_entries() -> Vec<JournalEntry> {
    vec![entry("1", "Monday", "hello"), entry("2", "Tuesday", "rain again")]
}

fn last_toast(c: &JournalsController) -> Option<(ToastKind, String)> {
    c.toasts.messages_untracked().pop()
}

async fn wait_until(mut ready: impl FnMut() -> bool) {
    while !ready() {
        tokio::task::yield_now().await;
    }
}

// =============================================================================
// fetch
// =============================================================================

#[tokio::test]
async fn fetch_mirrors_backend_order() {
    let (_, c) = controller_with(two_entries());
    c.fetch_entries().await;
    assert_eq!(c.journal.entries.get_untracked(), two_entries());
    assert!(!c.ui.loading.get_untracked());
    assert_eq!(c.ui.error.get_untracked(), None);
}

#[tokio::test]
async fn fetch_only_returns_own_entries() {
    let mut entries = two_entries();
    entries.push(JournalEntry { email: "other@b.com".into(), ..entry("9", "Theirs", "x") });
    let (_, c) = controller_with(entries);
    c.fetch_entries().await;
    assert_eq!(c.journal.entries.get_untracked().len(), 2);
}

#[tokio::test]
async fn fetch_failure_sets_error_and_toast() {
    let (backend, c) = controller_with(two_entries());
    backend.respond_next(500, r#"{"message":"database offline"}"#);
    c.fetch_entries().await;
    assert_eq!(c.ui.error.get_untracked().as_deref(), Some("database offline"));
    assert_eq!(last_toast(&c), Some((ToastKind::Error, LOAD_FAILED.to_owned())));
    assert!(c.journal.entries.get_untracked().is_empty());
    assert!(!c.ui.loading.get_untracked());
}

#[tokio::test]
async fn fetch_transport_failure_uses_generic_message() {
    let (backend, c) = controller_with(two_entries());
    backend.drop_next();
    c.fetch_entries().await;
    assert_eq!(c.ui.error.get_untracked().as_deref(), Some(crate::net::http::GENERIC_FAILURE));
}

// =============================================================================
// create
// =============================================================================

#[tokio::test]
async fn create_closes_modal_and_refetches() {
    let (backend, c) = controller_with(two_entries());
    c.fetch_entries().await;
    c.open_create_modal();

    assert!(c.create_entry("Wednesday", "sunny").await);
    assert!(!c.ui.modal_open.get_untracked());
    assert!(!c.ui.saving.get_untracked());
    assert_eq!(last_toast(&c), Some((ToastKind::Success, SAVED.to_owned())));

    let entries = c.journal.entries.get_untracked();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[2].title, "Wednesday");
    assert_eq!(entries[2].id, "3");
    assert!(entries[2].created_at.is_some());
    assert_eq!(backend.entries(), entries);
}

#[tokio::test]
async fn create_with_blank_fields_sends_nothing() {
    let (backend, c) = controller_with(Vec::new());
    c.open_create_modal();
    assert!(!c.create_entry("   ", "body").await);
    assert!(!c.create_entry("title", "").await);
    assert!(backend.requests().is_empty());
    assert!(c.ui.modal_open.get_untracked());
    assert!(c.ui.form_touched.get_untracked());
}

#[tokio::test]
async fn create_failure_keeps_modal_open() {
    let (backend, c) = controller_with(Vec::new());
    c.open_create_modal();
    backend.respond_next(400, r#"{"message":"Title too long"}"#);
    assert!(!c.create_entry("t", "c").await);
    assert!(c.ui.modal_open.get_untracked());
    assert_eq!(c.ui.error.get_untracked().as_deref(), Some("Title too long"));
    assert_eq!(last_toast(&c), Some((ToastKind::Error, SAVE_FAILED.to_owned())));
    assert!(!c.ui.saving.get_untracked());
}

// =============================================================================
// select / delete
// =============================================================================

#[tokio::test]
async fn delete_then_list_is_empty() {
    let (_, c) = controller_with(vec![entry("1", "A", "hello")]);
    c.fetch_entries().await;
    c.delete_entry("1").await;
    assert!(c.journal.entries.get_untracked().is_empty());
    assert_eq!(last_toast(&c), Some((ToastKind::Success, DELETED.to_owned())));
    assert!(!c.ui.loading.get_untracked());
}

#[tokio::test]
async fn delete_sends_email_scope() {
    let (backend, c) = controller_with(two_entries());
    c.delete_entry("2").await;
    let delete = backend
        .requests()
        .into_iter()
        .find(|r| r.method == Method::Delete)
        .unwrap();
    assert_eq!(delete.url, format!("{MOCK_BASE_URL}/journals/2"));
    assert_eq!(delete.query_value("email"), Some(EMAIL));
}

#[tokio::test]
async fn deleting_selected_entry_clears_selection_and_session() {
    let (_, c) = controller_with(two_entries());
    c.fetch_entries().await;
    c.select_entry("1");
    c.open_reflection().await;
    assert!(c.reflection.panel_open.get_untracked());

    c.delete_entry("1").await;
    assert_eq!(c.journal.selected_id.get_untracked(), None);
    assert_eq!(c.reflection.phase_untracked(), ReflectionPhase::Idle);
    assert!(c.reflection.history.get_untracked().is_empty());
}

#[tokio::test]
async fn deleting_other_entry_keeps_selection() {
    let (_, c) = controller_with(two_entries());
    c.fetch_entries().await;
    c.select_entry("1");
    c.delete_entry("2").await;
    assert_eq!(c.journal.selected_id.get_untracked().as_deref(), Some("1"));
}

#[tokio::test]
async fn repeat_delete_surfaces_not_found() {
    let (_, c) = controller_with(two_entries());
    c.delete_entry("1").await;
    c.delete_entry("1").await;
    assert_eq!(c.ui.error.get_untracked().as_deref(), Some("Journal not found"));
    assert_eq!(last_toast(&c), Some((ToastKind::Error, DELETE_FAILED.to_owned())));
}

// =============================================================================
// edit
// =============================================================================

#[tokio::test]
async fn open_edit_without_selection_warns() {
    let (_, c) = controller_with(two_entries());
    c.open_edit();
    assert_eq!(c.journal.editing.get_untracked(), None);
    assert_eq!(last_toast(&c), Some((ToastKind::Error, SELECT_FIRST.to_owned())));
}

#[tokio::test]
async fn update_replaces_and_refetches_without_loading_flag() {
    let (backend, c) = controller_with(two_entries());
    c.fetch_entries().await;
    c.select_entry("2");
    c.open_edit();
    assert_eq!(c.journal.editing.get_untracked().map(|e| e.title), Some("Tuesday".to_owned()));

    assert!(c.update_entry("Tuesday, revised", "sun at last").await);
    assert_eq!(c.journal.editing.get_untracked(), None);
    assert_eq!(last_toast(&c), Some((ToastKind::Success, UPDATED.to_owned())));
    let selected = c.journal.selected_untracked().unwrap();
    assert_eq!(selected.title, "Tuesday, revised");
    assert_eq!(selected.content, "sun at last");
    assert_eq!(backend.entries()[1].content, "sun at last");
}

#[tokio::test]
async fn update_failure_keeps_edit_open() {
    let (backend, c) = controller_with(two_entries());
    c.fetch_entries().await;
    c.select_entry("1");
    c.open_edit();
    backend.respond_next(500, "");
    assert!(!c.update_entry("x", "y").await);
    assert!(c.journal.editing.get_untracked().is_some());
    assert_eq!(last_toast(&c), Some((ToastKind::Error, UPDATE_FAILED.to_owned())));
}

#[tokio::test]
async fn update_without_edit_open_is_noop() {
    let (backend, c) = controller_with(two_entries());
    assert!(!c.update_entry("x", "y").await);
    assert!(backend.requests().is_empty());
}

// =============================================================================
// reflection
// =============================================================================

#[tokio::test]
async fn open_reflection_without_selection_is_rejected() {
    let (backend, c) = controller_with(two_entries());
    c.fetch_entries().await;
    c.open_reflection().await;
    assert_eq!(c.reflection.phase_untracked(), ReflectionPhase::Idle);
    assert!(backend.reflect_calls().is_empty());
    assert_eq!(last_toast(&c), Some((ToastKind::Error, SELECT_FIRST.to_owned())));
}

#[tokio::test]
async fn open_reflection_seeds_and_sends_entry_content_only() {
    let (backend, c) = controller_with(two_entries());
    c.fetch_entries().await;
    c.select_entry("2");
    backend.queue_reflection(200, r#"{"reflection":"Rain can be restful."}"#);
    c.open_reflection().await;

    assert_eq!(
        c.reflection.history.get_untracked(),
        vec![ChatTurn::assistant(GREETING), ChatTurn::user(INSIGHT_REQUEST), ChatTurn::assistant("Rain can be restful.")]
    );
    assert_eq!(c.reflection.phase_untracked(), ReflectionPhase::Active);

    let calls = backend.reflect_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        vec![CompletionMessage::new("system", SYSTEM_PROMPT), CompletionMessage::new("user", "rain again")]
    );
}

#[tokio::test]
async fn follow_up_sends_full_history() {
    let (backend, c) = controller_with(two_entries());
    c.fetch_entries().await;
    c.select_entry("1");
    c.open_reflection().await;
    c.send_follow_up("  why am I tired?  ").await;

    let calls = backend.reflect_calls();
    assert_eq!(calls.len(), 2);
    let roles: Vec<&str> = calls[1].iter().map(|m| m.role.as_str()).collect();
    assert_eq!(roles, ["system", "assistant", "user", "assistant", "user"]);
    assert_eq!(calls[1][4].content, "why am I tired?");
    assert_eq!(c.reflection.history.get_untracked().len(), 5);
}

#[tokio::test]
async fn blank_follow_up_is_ignored() {
    let (backend, c) = controller_with(two_entries());
    c.fetch_entries().await;
    c.select_entry("1");
    c.open_reflection().await;
    c.send_follow_up("   ").await;
    assert_eq!(backend.reflect_calls().len(), 1);
}

#[tokio::test]
async fn proxy_failure_becomes_assistant_turn() {
    let (backend, c) = controller_with(two_entries());
    c.fetch_entries().await;
    c.select_entry("1");
    backend.queue_reflection(500, r#"{"error":"OpenAI API key not set."}"#);
    c.open_reflection().await;

    let history = c.reflection.history.get_untracked();
    assert_eq!(history.last(), Some(&ChatTurn::assistant(REQUEST_FAILED)));
    assert!(!c.reflection.loading.get_untracked());
    assert_eq!(c.ui.error.get_untracked(), None);
}

#[tokio::test]
async fn missing_reflection_field_uses_fallback() {
    let (backend, c) = controller_with(two_entries());
    c.fetch_entries().await;
    c.select_entry("1");
    backend.queue_reflection(200, "{}");
    c.open_reflection().await;
    assert_eq!(c.reflection.history.get_untracked().last(), Some(&ChatTurn::assistant(NO_RESPONSE)));
}

#[tokio::test]
async fn switching_entry_hides_panel_and_clears_history() {
    let (_, c) = controller_with(two_entries());
    c.fetch_entries().await;
    c.select_entry("1");
    c.open_reflection().await;
    c.select_entry("2");
    assert_eq!(c.reflection.phase_untracked(), ReflectionPhase::Idle);
    assert!(c.reflection.history.get_untracked().is_empty());
}

#[tokio::test]
async fn reselecting_same_entry_keeps_session() {
    let (_, c) = controller_with(two_entries());
    c.fetch_entries().await;
    c.select_entry("1");
    c.open_reflection().await;
    c.select_entry("1");
    assert_eq!(c.reflection.history.get_untracked().len(), 3);
}

#[tokio::test]
async fn stale_reply_after_entry_switch_is_dropped() {
    let (backend, c) = controller_with(two_entries());
    c.fetch_entries().await;
    c.select_entry("1");
    backend.hold_reflections();

    tokio::join!(c.open_reflection(), async {
        wait_until(|| c.reflection.loading.get_untracked()).await;
        c.select_entry("2");
        backend.release_reflections(1);
    });

    assert_eq!(backend.reflect_calls().len(), 1);
    assert!(c.reflection.history.get_untracked().is_empty());
    assert_eq!(c.reflection.phase_untracked(), ReflectionPhase::Idle);
}

#[tokio::test]
async fn stale_reply_does_not_leak_into_reopened_session() {
    let (backend, c) = controller_with(two_entries());
    c.fetch_entries().await;
    c.select_entry("1");
    backend.hold_reflections();

    tokio::join!(c.open_reflection(), async {
        wait_until(|| c.reflection.loading.get_untracked()).await;
        c.close_reflection();
        backend.release_reflections(2);
        c.open_reflection().await;
    });

    let history = c.reflection.history.get_untracked();
    assert_eq!(history.len(), 3);
    assert_eq!(history[2], ChatTurn::assistant("Reflected."));
    assert_eq!(c.reflection.phase_untracked(), ReflectionPhase::Active);
}

#[tokio::test]
async fn close_reflection_returns_to_idle() {
    let (_, c) = controller_with(two_entries());
    c.fetch_entries().await;
    c.select_entry("1");
    c.open_reflection().await;
    c.close_reflection();
    assert_eq!(c.reflection.phase_untracked(), ReflectionPhase::Idle);
    c.send_follow_up("hello?").await;
    assert!(c.reflection.history.get_untracked().is_empty());
}
