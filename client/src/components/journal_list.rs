//! Sidebar list of the user's entries.

use leptos::prelude::*;

use crate::state::journal::JournalView;
use crate::state::ui::UiView;
use crate::util::text::{display_title, format_date, preview};

pub const EMPTY_LIST: &str = "No journal entries yet. Start writing!";

#[component]
pub fn JournalList(on_select: Callback<String>, on_delete: Callback<String>) -> impl IntoView {
    let journal = expect_context::<JournalView>();
    let ui = expect_context::<UiView>();

    view! {
        <div class="journal-list">
            <Show
                when=move || !ui.loading.get()
                fallback=|| view! { <p class="journal-list__status">"Loading..."</p> }
            >
                <Show
                    when=move || journal.entries.with(|e| !e.is_empty())
                    fallback=|| view! { <p class="journal-list__status">{EMPTY_LIST}</p> }
                >
                    <ul class="journal-list__items">
                        <For
                            each=move || journal.entries.get()
                            key=|entry| (entry.id.clone(), entry.title.clone(), entry.content.clone())
                            let:entry
                        >
                            {
                                let id = entry.id.clone();
                                let select_id = id.clone();
                                let delete_id = id.clone();
                                let is_selected = move || journal.selected_id.get().as_deref() == Some(id.as_str());
                                view! {
                                    <li
                                        class="journal-list__item"
                                        class:journal-list__item--selected=is_selected
                                        on:click=move |_| on_select.run(select_id.clone())
                                    >
                                        <div class="journal-list__title">{display_title(&entry.title).to_owned()}</div>
                                        <div class="journal-list__preview">{preview(&entry.content).to_owned()}</div>
                                        <div class="journal-list__meta">
                                            <span>{format_date(entry.created_at)}</span>
                                            <button
                                                class="journal-list__delete"
                                                title="Delete entry"
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    on_delete.run(delete_id.clone());
                                                }
                                            >
                                                "🗑"
                                            </button>
                                        </div>
                                    </li>
                                }
                            }
                        </For>
                    </ul>
                </Show>
            </Show>
        </div>
    }
}
