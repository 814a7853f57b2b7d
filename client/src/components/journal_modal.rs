//! Create and edit modal for a journal entry.
//!
//! Field errors appear only after the form has been touched. Submission goes
//! to the dashboard controller, which re-validates before any request.

#[cfg(test)]
#[path = "journal_modal_test.rs"]
mod journal_modal_test;

use leptos::prelude::*;

use crate::state::ui::UiView;

pub const TITLE_REQUIRED: &str = "Title is required";
pub const CONTENT_REQUIRED: &str = "Content is required";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub title: Option<&'static str>,
    pub content: Option<&'static str>,
}

impl FormErrors {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Both fields are required after trimming.
#[must_use]
pub fn validate_form(title: &str, content: &str) -> FormErrors {
    FormErrors {
        title: title.trim().is_empty().then_some(TITLE_REQUIRED),
        content: content.trim().is_empty().then_some(CONTENT_REQUIRED),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    Edit,
}

impl ModalMode {
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Create => "Add New Journal",
            Self::Edit => "Edit Journal",
        }
    }

    #[must_use]
    pub fn submit_label(self, saving: bool) -> &'static str {
        match (self, saving) {
            (_, true) => "Saving...",
            (Self::Create, false) => "Save Entry",
            (Self::Edit, false) => "Save Changes",
        }
    }
}

#[component]
pub fn JournalModal(
    mode: ModalMode,
    #[prop(optional)] initial_title: String,
    #[prop(optional)] initial_content: String,
    on_submit: Callback<(String, String)>,
    on_touch: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ui = expect_context::<UiView>();
    let title = RwSignal::new(initial_title);
    let content = RwSignal::new(initial_content);

    let errors = move || {
        if ui.form_touched.get() {
            validate_form(&title.get(), &content.get())
        } else {
            FormErrors::default()
        }
    };

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if ui.saving.get_untracked() {
            return;
        }
        on_touch.run(());
        on_submit.run((title.get_untracked(), content.get_untracked()));
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="journal-modal__backdrop" on:click=move |_| on_close.run(())>
            <div
                class="journal-modal"
                role="dialog"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="journal-modal__header">
                    <h2>{mode.heading()}</h2>
                    <button class="journal-modal__close" title="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <form class="journal-modal__form" on:submit=on_form_submit>
                    <label class="journal-modal__label">
                        "Title"
                        <input
                            class="journal-modal__input"
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| {
                                title.set(event_target_value(&ev));
                                on_touch.run(());
                            }
                        />
                    </label>
                    <Show when=move || errors().title.is_some()>
                        <p class="journal-modal__error">{move || errors().title.unwrap_or_default()}</p>
                    </Show>
                    <label class="journal-modal__label">
                        "Content"
                        <textarea
                            class="journal-modal__textarea"
                            rows="10"
                            prop:value=move || content.get()
                            on:input=move |ev| {
                                content.set(event_target_value(&ev));
                                on_touch.run(());
                            }
                        ></textarea>
                    </label>
                    <Show when=move || errors().content.is_some()>
                        <p class="journal-modal__error">{move || errors().content.unwrap_or_default()}</p>
                    </Show>
                    <div class="journal-modal__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || ui.saving.get()>
                            {move || mode.submit_label(ui.saving.get())}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
