//! Toast stack in the corner of the dashboard.

use leptos::prelude::*;

use crate::state::toast::Toast;

#[component]
pub fn Toaster(toasts: ReadSignal<Vec<Toast>>, on_dismiss: Callback<u64>) -> impl IntoView {
    view! {
        <div class="toaster" aria-live="polite">
            <For each=move || toasts.get() key=|toast| toast.id let:toast>
                <div class=format!("toast {}", toast.kind.css_modifier()) role="status">
                    <span class="toast__message">{toast.message.clone()}</span>
                    <button class="toast__dismiss" title="Dismiss" on:click=move |_| on_dismiss.run(toast.id)>
                        "✕"
                    </button>
                </div>
            </For>
        </div>
    }
}
