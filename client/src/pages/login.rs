//! Sign-in page: a single Google sign-in card.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api::{GOOGLE_SIGN_IN_PATH, sign_in_error_message};
use crate::state::auth::AuthState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    // Already signed in: go to the dashboard.
    Effect::new(move || {
        if auth.with(AuthState::signed_in) {
            navigate("/", NavigateOptions::default());
        }
    });

    let error = move || query.with(|q| q.get("error").map(|code| sign_in_error_message(&code)));

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome to Vieromind"</h1>
                <p class="login-card__subtitle">"Sign in to continue with your Google account"</p>
                <Show when=move || error().is_some()>
                    <p class="login-message login-message--error">{move || error().unwrap_or_default()}</p>
                </Show>
                <a
                    href=GOOGLE_SIGN_IN_PATH
                    class="login-button"
                    on:click=move |ev| {
                        ev.prevent_default();
                        #[cfg(feature = "hydrate")]
                        {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().set_href(GOOGLE_SIGN_IN_PATH);
                            }
                        }
                    }
                >
                    "Sign in with Google"
                </a>
            </div>
        </div>
    }
}
