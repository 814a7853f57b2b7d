//! Detail view for the selected entry.

use leptos::prelude::*;

use crate::state::journal::JournalView;
use crate::util::text::{display_title, format_date, format_time, word_count_label};

pub const NOTHING_SELECTED: &str = "Select or add a journal entry to get started.";

#[component]
pub fn EntryDetails(on_edit: Callback<()>, on_reflect: Callback<()>) -> impl IntoView {
    let journal = expect_context::<JournalView>();

    move || match journal.selected() {
        None => view! { <div class="entry-details entry-details--empty">{NOTHING_SELECTED}</div> }.into_any(),
        Some(entry) => view! {
            <article class="entry-details">
                <header class="entry-details__header">
                    <h2 class="entry-details__title">{display_title(&entry.title).to_owned()}</h2>
                    <div class="entry-details__actions">
                        <button class="btn" on:click=move |_| on_edit.run(())>"Edit"</button>
                        <button class="btn btn--primary" on:click=move |_| on_reflect.run(())>
                            "AI Reflect"
                        </button>
                    </div>
                </header>
                <div class="entry-details__meta">
                    <span>{format_date(entry.created_at)}</span>
                    <span>{format_time(entry.created_at)}</span>
                    <span>{word_count_label(&entry.content)}</span>
                </div>
                <div class="entry-details__content">{entry.content.clone()}</div>
            </article>
        }
        .into_any(),
    }
}
