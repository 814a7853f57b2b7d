//! Transient notifications.
//!
//! Toasts are appended with a fresh id and removed after [`TOAST_TTL_MS`]
//! in the browser. Off-browser (SSR, tests) they stay until dismissed.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

pub const TOAST_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy, Debug)]
pub struct ToastStore {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastStore {
    #[must_use]
    pub fn new() -> Self {
        Self { toasts: RwSignal::new(Vec::new()), next_id: RwSignal::new(1) }
    }

    #[must_use]
    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message.into())
    }

    pub fn push(&self, kind: ToastKind, message: String) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|t| t.push(Toast { id, kind, message }));

        #[cfg(feature = "hydrate")]
        {
            let store = *self;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
                store.dismiss(id);
            });
        }
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| t.retain(|toast| toast.id != id));
    }

    /// Messages currently shown, oldest first.
    #[must_use]
    pub fn messages_untracked(&self) -> Vec<(ToastKind, String)> {
        self.toasts
            .with_untracked(|t| t.iter().map(|toast| (toast.kind, toast.message.clone())).collect())
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}
