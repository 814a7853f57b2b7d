//! Character-by-character reveal for the newest assistant turn.
//!
//! The panel advances a revealed-character counter on a timer and renders
//! the prefix as markdown. Older turns render in full immediately.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

pub const TICK_MS: u32 = 16;
pub const CHARS_PER_TICK: usize = 4;

/// The first `chars` characters of `text`.
#[must_use]
pub fn reveal_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Counter value after one tick, capped at the text length.
#[must_use]
pub fn next_reveal(current: usize, total_chars: usize) -> usize {
    current.saturating_add(CHARS_PER_TICK).min(total_chars)
}

#[must_use]
pub fn is_complete(current: usize, total_chars: usize) -> bool {
    current >= total_chars
}
