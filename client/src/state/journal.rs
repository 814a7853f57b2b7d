//! Journal entry collection and selection.
//!
//! The collection mirrors the last successful fetch. It is never patched
//! locally after a write; the controller re-fetches instead.

#[cfg(test)]
#[path = "journal_test.rs"]
mod journal_test;

use leptos::prelude::*;

use crate::net::types::JournalEntry;

#[must_use]
pub fn find_entry<'a>(entries: &'a [JournalEntry], id: &str) -> Option<&'a JournalEntry> {
    entries.iter().find(|e| e.id == id)
}

#[derive(Clone, Copy, Debug)]
pub struct JournalStore {
    pub entries: RwSignal<Vec<JournalEntry>>,
    pub selected_id: RwSignal<Option<String>>,
    /// Entry being edited; `Some` means the edit modal is open.
    pub editing: RwSignal<Option<JournalEntry>>,
}

impl JournalStore {
    #[must_use]
    pub fn new() -> Self {
        Self { entries: RwSignal::new(Vec::new()), selected_id: RwSignal::new(None), editing: RwSignal::new(None) }
    }

    #[must_use]
    pub fn view(&self) -> JournalView {
        JournalView {
            entries: self.entries.read_only(),
            selected_id: self.selected_id.read_only(),
            editing: self.editing.read_only(),
        }
    }

    /// Selected entry, resolved against the current collection.
    #[must_use]
    pub fn selected_untracked(&self) -> Option<JournalEntry> {
        let id = self.selected_id.get_untracked()?;
        self.entries
            .with_untracked(|entries| find_entry(entries, &id).cloned())
    }
}

impl Default for JournalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct JournalView {
    pub entries: ReadSignal<Vec<JournalEntry>>,
    pub selected_id: ReadSignal<Option<String>>,
    pub editing: ReadSignal<Option<JournalEntry>>,
}

impl JournalView {
    /// Selected entry (tracked). `None` if nothing is selected or the id is
    /// no longer in the collection.
    #[must_use]
    pub fn selected(&self) -> Option<JournalEntry> {
        let id = self.selected_id.get()?;
        self.entries.with(|entries| find_entry(entries, &id).cloned())
    }
}
