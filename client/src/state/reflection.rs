//! Reflection chat session state.
//!
//! DESIGN
//! ======
//! One session is scoped to one selected entry. History is append-only and
//! chronological. Every reset bumps `generation`; a response that comes
//! back under an older generation belongs to a discarded session and is
//! dropped instead of appended.
//!
//! Phases: `Idle` (panel hidden, history empty), `AwaitingResponse` (panel
//! shown, request in flight) and `Active` (panel shown, idle input). Opening
//! passes straight from `Idle` to `AwaitingResponse`.

#[cfg(test)]
#[path = "reflection_test.rs"]
mod reflection_test;

use leptos::prelude::*;

use crate::net::types::CompletionMessage;

pub const SYSTEM_PROMPT: &str = "You are a professional journaling assistant. When given a journal entry, analyze it using the following structure:\n\n\
- Journal Reflection: Provide a concise, empathetic summary of the main points and overall sentiment (2-3 sentences).\n\
- Mood Snapshot: Use 1-3 relevant emojis and a brief explanation to capture the mood.\n\
- Key Observations: List 1-3 prominent themes, emotions, or patterns you notice. Use bullet points or short paragraphs.\n\
- For Further Reflection: Pose 1-2 open-ended, non-judgmental questions to encourage deeper thought, without leading to a specific answer.\n\
- Recommended for You: Suggest 2-3 personalized mental health or self-improvement resources (with a short title, category, and level such as Beginner/Intermediate/Advanced) based on the journal entry. Format as a list.\n\
- Your Progress: Estimate the user's current mood on a scale of 1-10 and display as 'Current Mood: X/10'.\n\n\
If the user asks about their mood or wants to chat, respond conversationally, empathetically, and concisely. Never ask the user to provide their journal entry; always assume you have it if it is present.";

pub const GREETING: &str = "Hi, I\u{2019}m your personal journaling companion. I\u{2019}m here to help you make sense of your thoughts, track your growth, and support your emotional clarity \u{2014} one entry at a time.";
pub const INSIGHT_REQUEST: &str = "Get insight on my entry";
pub const NO_RESPONSE: &str = "No response from AI.";
pub const REQUEST_FAILED: &str = "Failed to get AI reflection.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// Role name on the completion wire.
    #[must_use]
    pub fn wire_role(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: ChatRole::Assistant, content: content.into() }
    }
}

/// The two turns a new session starts with.
#[must_use]
pub fn seed_turns() -> Vec<ChatTurn> {
    vec![ChatTurn::assistant(GREETING), ChatTurn::user(INSIGHT_REQUEST)]
}

#[must_use]
pub fn system_message() -> CompletionMessage {
    CompletionMessage::new("system", SYSTEM_PROMPT)
}

/// First request of a session: the system prompt plus the entry content
/// only, not the seeded history.
#[must_use]
pub fn initial_insight_messages(entry_content: &str) -> Vec<CompletionMessage> {
    vec![system_message(), CompletionMessage::new("user", entry_content)]
}

/// Follow-up request: the system prompt plus the full role-mapped history.
#[must_use]
pub fn follow_up_messages(history: &[ChatTurn]) -> Vec<CompletionMessage> {
    std::iter::once(system_message())
        .chain(
            history
                .iter()
                .map(|turn| CompletionMessage::new(turn.role.wire_role(), turn.content.clone())),
        )
        .collect()
}

/// Index of the most recent assistant turn, the only one animated.
#[must_use]
pub fn latest_assistant_index(history: &[ChatTurn]) -> Option<usize> {
    history.iter().rposition(|turn| turn.role == ChatRole::Assistant)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReflectionPhase {
    Idle,
    AwaitingResponse,
    Active,
}

#[must_use]
pub fn phase(panel_open: bool, loading: bool) -> ReflectionPhase {
    match (panel_open, loading) {
        (false, _) => ReflectionPhase::Idle,
        (true, true) => ReflectionPhase::AwaitingResponse,
        (true, false) => ReflectionPhase::Active,
    }
}

/// Writable session containers, held by the dashboard controller.
#[derive(Clone, Copy, Debug)]
pub struct ReflectionStore {
    pub history: RwSignal<Vec<ChatTurn>>,
    pub panel_open: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub generation: RwSignal<u64>,
}

impl ReflectionStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: RwSignal::new(Vec::new()),
            panel_open: RwSignal::new(false),
            loading: RwSignal::new(false),
            generation: RwSignal::new(0),
        }
    }

    #[must_use]
    pub fn view(&self) -> ReflectionView {
        ReflectionView {
            history: self.history.read_only(),
            panel_open: self.panel_open.read_only(),
            loading: self.loading.read_only(),
        }
    }

    /// Discard the session and return to `Idle`. Returns the new generation.
    pub fn reset(&self) -> u64 {
        self.generation.update(|g| *g += 1);
        self.history.set(Vec::new());
        self.panel_open.set(false);
        self.loading.set(false);
        self.generation.get_untracked()
    }

    pub fn push(&self, turn: ChatTurn) {
        self.history.update(|h| h.push(turn));
    }

    #[must_use]
    pub fn phase_untracked(&self) -> ReflectionPhase {
        phase(self.panel_open.get_untracked(), self.loading.get_untracked())
    }
}

impl Default for ReflectionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only handle for components.
#[derive(Clone, Copy, Debug)]
pub struct ReflectionView {
    pub history: ReadSignal<Vec<ChatTurn>>,
    pub panel_open: ReadSignal<bool>,
    pub loading: ReadSignal<bool>,
}

impl ReflectionView {
    #[must_use]
    pub fn phase(&self) -> ReflectionPhase {
        phase(self.panel_open.get(), self.loading.get())
    }
}
