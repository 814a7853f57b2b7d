use super::*;

// =============================================================
// message construction
// =============================================================

#[test]
fn seed_turns_are_greeting_then_insight_request() {
    let seeds = seed_turns();
    assert_eq!(seeds.len(), 2);
    assert_eq!(seeds[0].role, ChatRole::Assistant);
    assert!(seeds[0].content.starts_with("Hi, I\u{2019}m your personal journaling companion."));
    assert_eq!(seeds[1], ChatTurn::user("Get insight on my entry"));
}

#[test]
fn initial_insight_sends_only_system_and_entry() {
    let messages = initial_insight_messages("I walked by the river.");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, "system");
    assert_eq!(messages[0].content, SYSTEM_PROMPT);
    assert_eq!(messages[1], CompletionMessage::new("user", "I walked by the river."));
}

#[test]
fn follow_up_maps_roles_and_keeps_order() {
    let history = vec![
        ChatTurn::assistant("greeting"),
        ChatTurn::user("insight please"),
        ChatTurn::assistant("reflection"),
        ChatTurn::user("why am I tired?"),
    ];
    let messages = follow_up_messages(&history);
    let roles: Vec<&str> = messages.iter().map(|m| m.role.as_str()).collect();
    assert_eq!(roles, vec!["system", "assistant", "user", "assistant", "user"]);
    assert_eq!(messages[4].content, "why am I tired?");
}

#[test]
fn follow_up_with_empty_history_is_system_only() {
    let messages = follow_up_messages(&[]);
    assert_eq!(messages, vec![system_message()]);
}

#[test]
fn system_prompt_names_every_section() {
    for section in [
        "Journal Reflection",
        "Mood Snapshot",
        "Key Observations",
        "For Further Reflection",
        "Recommended for You",
        "Your Progress",
    ] {
        assert!(SYSTEM_PROMPT.contains(section), "missing {section}");
    }
}

#[test]
fn latest_assistant_index_finds_last() {
    let history = vec![ChatTurn::assistant("a"), ChatTurn::user("b"), ChatTurn::assistant("c"), ChatTurn::user("d")];
    assert_eq!(latest_assistant_index(&history), Some(2));
    assert_eq!(latest_assistant_index(&[ChatTurn::user("x")]), None);
}

// =============================================================
// phase
// =============================================================

#[test]
fn phase_table() {
    assert_eq!(phase(false, false), ReflectionPhase::Idle);
    assert_eq!(phase(false, true), ReflectionPhase::Idle);
    assert_eq!(phase(true, true), ReflectionPhase::AwaitingResponse);
    assert_eq!(phase(true, false), ReflectionPhase::Active);
}

// =============================================================
// ReflectionStore
// =============================================================

#[test]
fn new_store_is_idle() {
    let store = ReflectionStore::new();
    assert_eq!(store.phase_untracked(), ReflectionPhase::Idle);
    assert!(store.history.get_untracked().is_empty());
    assert_eq!(store.generation.get_untracked(), 0);
}

#[test]
fn reset_clears_and_bumps_generation() {
    let store = ReflectionStore::new();
    store.history.set(seed_turns());
    store.panel_open.set(true);
    store.loading.set(true);

    let generation = store.reset();
    assert_eq!(generation, 1);
    assert!(store.history.get_untracked().is_empty());
    assert!(!store.panel_open.get_untracked());
    assert!(!store.loading.get_untracked());
}

#[test]
fn push_appends_in_order() {
    let store = ReflectionStore::new();
    store.push(ChatTurn::user("one"));
    store.push(ChatTurn::assistant("two"));
    assert_eq!(store.history.get_untracked(), vec![ChatTurn::user("one"), ChatTurn::assistant("two")]);
}

#[test]
fn view_reads_store_values() {
    let store = ReflectionStore::new();
    let view = store.view();
    store.panel_open.set(true);
    assert!(view.panel_open.get_untracked());
}
