//! Theme preference.
//!
//! The stored `theme` value (`"dark"` or `"light"`) in `localStorage` wins;
//! otherwise the system color scheme decides. Dark mode is a `dark` class on
//! the `<html>` element. Server rendering always starts light.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

/// Stored value for a theme.
#[must_use]
pub fn storage_value(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Parse a stored value; anything unrecognized counts as unset.
#[must_use]
pub fn parse_stored(raw: &str) -> Option<bool> {
    match raw {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

/// Toggle label naming the theme the button switches *to*.
#[must_use]
pub fn theme_label(dark: bool) -> &'static str {
    if dark { "☀️ Light" } else { "🌙 Dark" }
}

/// Read the theme preference: stored value, then system preference.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Some(dark) = storage.get_item(STORAGE_KEY).ok().flatten().as_deref().and_then(parse_stored) {
                return dark;
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Add or remove the `dark` class on `<html>`.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let classes = el.class_list();
            let result = if dark { classes.add_1("dark") } else { classes.remove_1("dark") };
            if result.is_err() {
                log::warn!("could not update theme class");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Flip the theme, apply it, and persist it.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, storage_value(next));
            }
        }
    }
    next
}
