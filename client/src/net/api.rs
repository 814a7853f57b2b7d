//! Session helpers for the app's own server (`/api/auth/*`).
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since the session cookie is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so auth fetch failures
//! degrade to the signed-out view without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;

pub const ME_ENDPOINT: &str = "/api/auth/me";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
pub const GOOGLE_SIGN_IN_PATH: &str = "/auth/google";

/// Human-readable text for a `/login?error=` code set by the OAuth callback.
#[must_use]
pub fn sign_in_error_message(code: &str) -> &'static str {
    match code {
        "registration" => "We couldn't set up your account. Please try again.",
        "denied" => "Google sign-in was cancelled.",
        _ => "Sign-in failed. Please try again.",
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ME_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await {
            log::warn!("logout failed: {e}");
        }
    }
}
