//! Supervisory wrapper for a rendering subtree.
//!
//! Catches errors thrown while rendering `children` (a `Result::Err` in the
//! view tree) and shows the fallback instead. Failures inside event handlers
//! or spawned tasks are not caught here; those surface through toasts and
//! the error banner.

use leptos::prelude::*;

pub const FALLBACK_HEADING: &str = "Something went wrong.";

#[component]
pub fn AppErrorBoundary(children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| {
            view! {
                <div class="error-boundary" role="alert">
                    <h2>{FALLBACK_HEADING}</h2>
                    <ul class="error-boundary__messages">
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect_view()
                        }}
                    </ul>
                </div>
            }
        }>{children()}</ErrorBoundary>
    }
}
