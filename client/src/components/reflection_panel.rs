//! Reflection chat panel.
//!
//! Renders the session transcript. Assistant turns are markdown; the most
//! recent assistant turn is revealed with a typewriter animation, older ones
//! render in full. The input stays enabled while a reply is pending.

use leptos::prelude::*;

use crate::state::reflection::{ChatRole, ChatTurn, ReflectionView, latest_assistant_index};
use crate::util::markdown::render_markdown_html;
use crate::util::typewriter;

pub const THINKING: &str = "Thinking...";
pub const INPUT_PLACEHOLDER: &str = "Type your message...";

#[component]
pub fn ReflectionPanel(on_send: Callback<String>, on_close: Callback<()>) -> impl IntoView {
    let reflection = expect_context::<ReflectionView>();
    let input = RwSignal::new(String::new());
    let revealed = RwSignal::new(0_usize);
    let animation_seq = RwSignal::new(0_u64);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Restart the reveal whenever a different assistant turn becomes the latest.
    Effect::new(move |prev: Option<Option<(usize, String)>>| {
        let latest = reflection
            .history
            .with(|h| latest_assistant_index(h).map(|i| (i, h[i].content.clone())));
        if prev.as_ref() != Some(&latest) {
            let total = latest.as_ref().map_or(0, |(_, content)| content.chars().count());
            animation_seq.update(|s| *s += 1);
            start_reveal(revealed, animation_seq, total);
        }
        latest
    });

    Effect::new(move || {
        let _ = reflection.history.with(Vec::len);
        let _ = reflection.loading.get();
        let _ = revealed.get();
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        input.set(String::new());
        on_send.run(text);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <Show when=move || reflection.panel_open.get()>
            <aside class="reflection-panel">
                <div class="reflection-panel__header">
                    <h3>"AI Reflection"</h3>
                    <button class="reflection-panel__close" title="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <div class="reflection-panel__messages" node_ref=messages_ref>
                    {move || {
                        let history = reflection.history.get();
                        let latest = latest_assistant_index(&history);
                        history
                            .into_iter()
                            .enumerate()
                            .map(|(idx, turn)| render_turn(turn, Some(idx) == latest, revealed))
                            .collect_view()
                    }}
                    <Show when=move || reflection.loading.get()>
                        <div class="reflection-panel__thinking">{THINKING}</div>
                    </Show>
                </div>
                <div class="reflection-panel__input-row">
                    <input
                        class="reflection-panel__input"
                        type="text"
                        placeholder=INPUT_PLACEHOLDER
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <button
                        class="btn btn--primary"
                        on:click=move |_| do_send()
                        disabled=move || input.get().trim().is_empty()
                    >
                        "Send"
                    </button>
                </div>
            </aside>
        </Show>
    }
}

fn render_turn(turn: ChatTurn, animate: bool, revealed: RwSignal<usize>) -> AnyView {
    match turn.role {
        ChatRole::User => view! {
            <div class="reflection-panel__turn reflection-panel__turn--user">
                <span>{turn.content}</span>
            </div>
        }
        .into_any(),
        ChatRole::Assistant if animate => {
            let content = turn.content;
            let html = move || render_markdown_html(typewriter::reveal_prefix(&content, revealed.get()));
            view! {
                <div class="reflection-panel__turn reflection-panel__turn--assistant">
                    <div class="reflection-panel__markdown" inner_html=html></div>
                </div>
            }
            .into_any()
        }
        ChatRole::Assistant => view! {
            <div class="reflection-panel__turn reflection-panel__turn--assistant">
                <div class="reflection-panel__markdown" inner_html=render_markdown_html(&turn.content)></div>
            </div>
        }
        .into_any(),
    }
}

/// Advance `revealed` to `total` on a timer. A newer animation (higher
/// `seq`) stops older loops.
fn start_reveal(revealed: RwSignal<usize>, seq: RwSignal<u64>, total: usize) {
    #[cfg(feature = "hydrate")]
    {
        let mine = seq.get_untracked();
        revealed.set(0);
        leptos::task::spawn_local(async move {
            let mut shown = 0;
            while !typewriter::is_complete(shown, total) {
                gloo_timers::future::TimeoutFuture::new(typewriter::TICK_MS).await;
                if seq.get_untracked() != mine {
                    return;
                }
                shown = typewriter::next_reveal(shown, total);
                revealed.set(shown);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = seq;
        revealed.set(total);
    }
}
