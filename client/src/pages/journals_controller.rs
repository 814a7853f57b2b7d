//! Dashboard orchestration.
//!
//! SYSTEM CONTEXT
//! ==============
//! `JournalsController` is the single writer of every dashboard store. Pages
//! and components receive read-only views; user actions come back here as
//! method calls. Every write is followed by a full re-fetch of the entry
//! list instead of a local patch.
//!
//! Reflection requests carry the session generation they were issued
//! under. A reset (entry switch, close) bumps the generation, so a reply
//! that lands afterwards is dropped instead of leaking into the new session.

#[cfg(test)]
#[path = "journals_controller_test.rs"]
mod journals_controller_test;

use leptos::prelude::*;

use crate::components::journal_modal::validate_form;
use crate::net::journal_api::JournalApi;
use crate::net::reflect_api::ReflectApi;
use crate::net::types::{CompletionMessage, JournalDraft};
use crate::state::journal::JournalStore;
use crate::state::reflection::{
    ChatTurn, NO_RESPONSE, REQUEST_FAILED, ReflectionStore, follow_up_messages, initial_insight_messages, seed_turns,
};
use crate::state::toast::ToastStore;
use crate::state::ui::UiStore;

pub const LOAD_FAILED: &str = "Failed to load journal entries. Please check your connection or try again.";
pub const SAVE_FAILED: &str = "Failed to save journal entry. Please try again.";
pub const UPDATE_FAILED: &str = "Failed to update journal entry. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete journal entry. Please try again.";
pub const SAVED: &str = "Journal entry saved!";
pub const UPDATED: &str = "Journal entry updated!";
pub const DELETED: &str = "Journal entry deleted!";
pub const SELECT_FIRST: &str = "Please select a journal entry first.";

#[derive(Clone)]
pub struct JournalsController {
    journals: JournalApi,
    reflect: ReflectApi,
    email: String,
    pub ui: UiStore,
    pub journal: JournalStore,
    pub reflection: ReflectionStore,
    pub toasts: ToastStore,
}

impl JournalsController {
    #[must_use]
    pub fn new(journals: JournalApi, reflect: ReflectApi, email: impl Into<String>, toasts: ToastStore) -> Self {
        Self {
            journals,
            reflect,
            email: email.into(),
            ui: UiStore::new(),
            journal: JournalStore::new(),
            reflection: ReflectionStore::new(),
            toasts,
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    // =========================================================================
    // ENTRIES
    // =========================================================================

    /// Replace the collection with the backend's list, showing the loading
    /// flag while in flight.
    pub async fn fetch_entries(&self) {
        self.ui.loading.set(true);
        self.ui.error.set(None);
        self.load().await;
        self.ui.loading.set(false);
    }

    /// Re-fetch without the loading flag so the list stays on screen.
    pub async fn refresh_silently(&self) {
        self.load().await;
    }

    async fn load(&self) {
        match self.journals.list(&self.email).await {
            Ok(entries) => {
                log::debug!("loaded {} journal entries", entries.len());
                self.journal.entries.set(entries);
            }
            Err(e) => {
                log::warn!("journal list failed: {e}");
                self.ui.error.set(Some(e.message().to_owned()));
                self.toasts.error(LOAD_FAILED);
            }
        }
    }

    pub fn open_create_modal(&self) {
        self.ui.form_touched.set(false);
        self.ui.modal_open.set(true);
    }

    pub fn close_modal(&self) {
        self.ui.modal_open.set(false);
        self.ui.form_touched.set(false);
    }

    pub fn mark_form_touched(&self) {
        self.ui.form_touched.set(true);
    }

    /// Create an entry. Returns `true` on success; the modal closes only then.
    pub async fn create_entry(&self, title: &str, content: &str) -> bool {
        if !validate_form(title, content).is_valid() {
            self.mark_form_touched();
            return false;
        }

        self.ui.saving.set(true);
        self.ui.error.set(None);
        let draft = JournalDraft { title: title.to_owned(), content: content.to_owned(), email: self.email.clone() };
        let created = match self.journals.create(&draft).await {
            Ok(()) => {
                self.toasts.success(SAVED);
                self.close_modal();
                true
            }
            Err(e) => {
                log::warn!("journal create failed: {e}");
                self.ui.error.set(Some(e.message().to_owned()));
                self.toasts.error(SAVE_FAILED);
                false
            }
        };
        self.ui.saving.set(false);

        if created {
            self.fetch_entries().await;
        }
        created
    }

    /// Select an entry. Switching to a different entry ends the reflection
    /// session.
    pub fn select_entry(&self, id: &str) {
        if self.journal.selected_id.get_untracked().as_deref() == Some(id) {
            return;
        }
        self.reflection.reset();
        self.journal.selected_id.set(Some(id.to_owned()));
    }

    pub async fn delete_entry(&self, id: &str) {
        self.ui.loading.set(true);
        self.ui.error.set(None);
        match self.journals.delete(id, &self.email).await {
            Ok(()) => {
                self.toasts.success(DELETED);
                if self.journal.selected_id.get_untracked().as_deref() == Some(id) {
                    self.journal.selected_id.set(None);
                    self.reflection.reset();
                }
                self.fetch_entries().await;
            }
            Err(e) => {
                log::warn!("journal delete failed: {e}");
                self.ui.error.set(Some(e.message().to_owned()));
                self.toasts.error(DELETE_FAILED);
            }
        }
        self.ui.loading.set(false);
    }

    /// Open the edit modal prefilled from the selected entry.
    pub fn open_edit(&self) {
        let Some(entry) = self.journal.selected_untracked() else {
            self.toasts.error(SELECT_FIRST);
            return;
        };
        self.ui.form_touched.set(false);
        self.journal.editing.set(Some(entry));
    }

    pub fn close_edit(&self) {
        self.journal.editing.set(None);
        self.ui.form_touched.set(false);
    }

    /// Replace title and content of the entry being edited.
    pub async fn update_entry(&self, title: &str, content: &str) -> bool {
        let Some(id) = self.journal.editing.with_untracked(|e| e.as_ref().map(|e| e.id.clone())) else {
            return false;
        };
        if !validate_form(title, content).is_valid() {
            self.mark_form_touched();
            return false;
        }

        self.ui.saving.set(true);
        self.ui.error.set(None);
        let draft = JournalDraft { title: title.to_owned(), content: content.to_owned(), email: self.email.clone() };
        let updated = match self.journals.update(&id, &draft).await {
            Ok(()) => {
                self.toasts.success(UPDATED);
                self.close_edit();
                true
            }
            Err(e) => {
                log::warn!("journal update failed: {e}");
                self.ui.error.set(Some(e.message().to_owned()));
                self.toasts.error(UPDATE_FAILED);
                false
            }
        };
        self.ui.saving.set(false);

        if updated {
            self.refresh_silently().await;
        }
        updated
    }

    // =========================================================================
    // REFLECTION
    // =========================================================================

    /// Start a fresh session for the selected entry: seed turns, show the
    /// panel, and ask for the initial insight on the entry content alone.
    pub async fn open_reflection(&self) {
        let Some(entry) = self.journal.selected_untracked() else {
            self.toasts.error(SELECT_FIRST);
            return;
        };

        let generation = self.reflection.reset();
        self.reflection.history.set(seed_turns());
        self.reflection.panel_open.set(true);
        self.send_reflection(generation, initial_insight_messages(&entry.content))
            .await;
    }

    /// Append a user turn and send the whole history. Blank input and sends
    /// with the panel closed are ignored.
    pub async fn send_follow_up(&self, text: &str) {
        let text = text.trim();
        if text.is_empty() || !self.reflection.panel_open.get_untracked() {
            return;
        }

        let generation = self.reflection.generation.get_untracked();
        self.reflection.push(ChatTurn::user(text));
        let messages = self.reflection.history.with_untracked(|h| follow_up_messages(h));
        self.send_reflection(generation, messages).await;
    }

    async fn send_reflection(&self, generation: u64, messages: Vec<CompletionMessage>) {
        self.reflection.loading.set(true);
        let result = self.reflect.reflect(&messages).await;

        if self.reflection.generation.get_untracked() != generation {
            log::debug!("dropping reflection reply for ended session {generation}");
            return;
        }

        let reply = match result {
            Ok(Some(text)) => text,
            Ok(None) => NO_RESPONSE.to_owned(),
            Err(e) => {
                log::warn!("reflection request failed: {e}");
                REQUEST_FAILED.to_owned()
            }
        };
        self.reflection.push(ChatTurn::assistant(reply));
        self.reflection.loading.set(false);
    }

    pub fn close_reflection(&self) {
        self.reflection.reset();
    }
}
