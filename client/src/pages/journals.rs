//! Home route: the journal dashboard for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Builds the [`JournalsController`] for the session's email, publishes the
//! read-only store views as context, and wires component callbacks back to
//! controller methods. Redirects to `/login` once auth resolves signed out.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::entry_details::EntryDetails;
use crate::components::error_boundary::AppErrorBoundary;
use crate::components::header::Header;
use crate::components::journal_list::JournalList;
use crate::components::journal_modal::{JournalModal, ModalMode};
use crate::components::reflection_panel::ReflectionPanel;
use crate::components::sidebar_user::SidebarUser;
use crate::components::toaster::Toaster;
use crate::net::http::{BrowserTransport, Transport};
use crate::net::journal_api::{DEFAULT_BACKEND_URL, JournalApi};
use crate::net::reflect_api::ReflectApi;
use crate::pages::journals_controller::JournalsController;
use crate::state::auth::AuthState;
use crate::state::toast::ToastStore;

/// Run a controller action from an event handler. Event handlers only fire
/// in the browser.
fn spawn(task: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "hydrate"))]
    drop(task);
}

#[component]
pub fn JournalsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || auth.with(AuthState::signed_in)
            fallback=move || {
                view! {
                    <div class="journals-page journals-page--pending">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to sign in..." }}</p>
                    </div>
                }
            }
        >
            <AppErrorBoundary>
                <Dashboard email=auth.with_untracked(|a| a.email().unwrap_or_default().to_owned())/>
            </AppErrorBoundary>
        </Show>
    }
}

#[component]
fn Dashboard(email: String) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let transport: Arc<dyn Transport> = Arc::new(BrowserTransport);
    let controller = JournalsController::new(
        JournalApi::new(transport.clone(), DEFAULT_BACKEND_URL),
        ReflectApi::new(transport),
        email,
        ToastStore::new(),
    );

    provide_context(controller.ui.view());
    provide_context(controller.journal.view());
    provide_context(controller.reflection.view());

    {
        let c = controller.clone();
        spawn(async move { c.fetch_entries().await });
    }

    let ui = controller.ui.view();
    let journal = controller.journal.view();
    let toasts = controller.toasts;

    let on_select = {
        let c = controller.clone();
        Callback::new(move |id: String| c.select_entry(&id))
    };
    let on_delete = {
        let c = controller.clone();
        Callback::new(move |id: String| {
            let c = c.clone();
            spawn(async move { c.delete_entry(&id).await });
        })
    };
    let on_new = {
        let c = controller.clone();
        move |_| c.open_create_modal()
    };
    let on_create = {
        let c = controller.clone();
        Callback::new(move |(title, content): (String, String)| {
            let c = c.clone();
            spawn(async move {
                c.create_entry(&title, &content).await;
            });
        })
    };
    let on_update = {
        let c = controller.clone();
        Callback::new(move |(title, content): (String, String)| {
            let c = c.clone();
            spawn(async move {
                c.update_entry(&title, &content).await;
            });
        })
    };
    let on_touch = {
        let c = controller.clone();
        Callback::new(move |()| c.mark_form_touched())
    };
    let on_close_create = {
        let c = controller.clone();
        Callback::new(move |()| c.close_modal())
    };
    let on_close_edit = {
        let c = controller.clone();
        Callback::new(move |()| c.close_edit())
    };
    let on_edit = {
        let c = controller.clone();
        Callback::new(move |()| c.open_edit())
    };
    let on_reflect = {
        let c = controller.clone();
        Callback::new(move |()| {
            let c = c.clone();
            spawn(async move { c.open_reflection().await });
        })
    };
    let on_send = {
        let c = controller.clone();
        Callback::new(move |text: String| {
            let c = c.clone();
            spawn(async move { c.send_follow_up(&text).await });
        })
    };
    let on_close_reflection = {
        let c = controller.clone();
        Callback::new(move |()| c.close_reflection())
    };
    let on_dismiss = Callback::new(move |id: u64| toasts.dismiss(id));
    let on_sign_out = Callback::new(move |()| {
        spawn(async move {
            crate::net::api::logout().await;
            auth.update(|a| a.user = None);
        });
    });

    view! {
        <div class="journals-page">
            <Header on_sign_out=on_sign_out/>
            <div class="journals-page__body">
                <aside class="journals-page__sidebar">
                    <SidebarUser user=auth.with_untracked(|a| a.user.clone())/>
                    <button class="btn btn--primary journals-page__new" on:click=on_new>
                        "+ New Entry"
                    </button>
                    <JournalList on_select=on_select on_delete=on_delete/>
                </aside>
                <main class="journals-page__main">
                    <Show when=move || ui.error.get().is_some()>
                        <p class="journals-page__error" role="alert">{move || ui.error.get().unwrap_or_default()}</p>
                    </Show>
                    <EntryDetails on_edit=on_edit on_reflect=on_reflect/>
                    <ReflectionPanel on_send=on_send on_close=on_close_reflection/>
                </main>
            </div>

            <Show when=move || ui.modal_open.get()>
                <JournalModal
                    mode=ModalMode::Create
                    on_submit=on_create
                    on_touch=on_touch
                    on_close=on_close_create
                />
            </Show>
            {move || {
                journal
                    .editing
                    .get()
                    .map(|entry| {
                        view! {
                            <JournalModal
                                mode=ModalMode::Edit
                                initial_title=entry.title
                                initial_content=entry.content
                                on_submit=on_update
                                on_touch=on_touch
                                on_close=on_close_edit
                            />
                        }
                    })
            }}

            <Toaster toasts=toasts.toasts() on_dismiss=on_dismiss/>
        </div>
    }
}
