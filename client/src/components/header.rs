//! Dashboard header: product name, theme toggle, sign-out.

use leptos::prelude::*;

use crate::util::dark_mode;

#[component]
pub fn Header(on_sign_out: Callback<()>) -> impl IntoView {
    let dark = RwSignal::new(false);

    // Preference is browser-only; read it after hydration.
    Effect::new(move || {
        let stored = dark_mode::read_preference();
        dark_mode::apply(stored);
        dark.set(stored);
    });

    view! {
        <header class="app-header">
            <span class="app-header__brand">"Vieromind"</span>
            <span class="app-header__spacer"></span>
            <button
                class="btn app-header__theme"
                title="Toggle theme"
                on:click=move |_| dark.set(dark_mode::toggle(dark.get_untracked()))
            >
                {move || dark_mode::theme_label(dark.get())}
            </button>
            <button class="btn app-header__sign-out" on:click=move |_| on_sign_out.run(())>
                "Sign out"
            </button>
        </header>
    }
}
