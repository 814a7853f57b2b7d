//! Dashboard UI flags.
//!
//! DESIGN
//! ======
//! Each flag is its own signal so no flag is derived from another. The
//! dashboard controller holds the writable [`UiStore`]; components get the
//! read-only [`UiView`] from context.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct UiStore {
    /// Entry list fetch or delete in flight.
    pub loading: RwSignal<bool>,
    /// Create or update in flight.
    pub saving: RwSignal<bool>,
    /// Last request failure, shown as banner text.
    pub error: RwSignal<Option<String>>,
    /// Create modal visibility.
    pub modal_open: RwSignal<bool>,
    /// Whether the open form has been edited since it opened.
    pub form_touched: RwSignal<bool>,
}

impl UiStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
            modal_open: RwSignal::new(false),
            form_touched: RwSignal::new(false),
        }
    }

    #[must_use]
    pub fn view(&self) -> UiView {
        UiView {
            loading: self.loading.read_only(),
            saving: self.saving.read_only(),
            error: self.error.read_only(),
            modal_open: self.modal_open.read_only(),
            form_touched: self.form_touched.read_only(),
        }
    }
}

impl Default for UiStore {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct UiView {
    pub loading: ReadSignal<bool>,
    pub saving: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
    pub modal_open: ReadSignal<bool>,
    pub form_touched: ReadSignal<bool>,
}
