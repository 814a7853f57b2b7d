//! Google OAuth service: code exchange, profile fetch, backend registration.

use serde::{Deserialize, Serialize};

use super::session::SessionUser;

pub const GOOGLE_AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// Google OAuth configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub token_url: String,
    pub userinfo_url: String,
}

impl GoogleConfig {
    /// Load from `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET`, `GOOGLE_REDIRECT_URI`.
    /// Returns `None` if any are missing (sign-in will be disabled).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    #[must_use]
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Some(Self {
            client_id: non_empty("GOOGLE_CLIENT_ID")?,
            client_secret: non_empty("GOOGLE_CLIENT_SECRET")?,
            redirect_uri: non_empty("GOOGLE_REDIRECT_URI")?,
            token_url: GOOGLE_TOKEN_URL.to_owned(),
            userinfo_url: GOOGLE_USERINFO_URL.to_owned(),
        })
    }

    /// Build the Google authorization URL carrying the CSRF `state`.
    #[must_use]
    pub fn authorize_url(&self, state: &str) -> String {
        let params = [
            ("client_id", self.client_id.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("response_type", "code"),
            ("scope", "openid email profile"),
            ("state", state),
        ];
        match reqwest::Url::parse_with_params(GOOGLE_AUTHORIZE_URL, &params) {
            Ok(url) => url.into(),
            Err(_) => GOOGLE_AUTHORIZE_URL.to_owned(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Subset of the OpenID Connect userinfo payload.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleUser {
    pub sub: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl GoogleUser {
    /// Session profile for this user. Falls back to the email when Google
    /// returns no display name.
    #[must_use]
    pub fn to_session_user(&self) -> SessionUser {
        SessionUser {
            email: self.email.clone(),
            name: self.name.clone().unwrap_or_else(|| self.email.clone()),
            image: self.picture.clone(),
        }
    }
}

/// Body of `POST {backend}/users`.
#[derive(Debug, Serialize)]
pub struct RegisterUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub image: Option<&'a str>,
    pub metadata: RegisterMetadata<'a>,
}

#[derive(Debug, Serialize)]
pub struct RegisterMetadata<'a> {
    pub provider: &'a str,
    #[serde(rename = "providerAccountId")]
    pub provider_account_id: &'a str,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("google token exchange failed: {0}")]
    TokenExchange(String),
    #[error("google api error: {0}")]
    GoogleApi(String),
    #[error("user registration failed: {0}")]
    Registration(String),
}

/// Exchange an OAuth code for an access token.
pub async fn exchange_code(http: &reqwest::Client, config: &GoogleConfig, code: &str) -> Result<String, AuthError> {
    let resp = http
        .post(&config.token_url)
        .header("Accept", "application/json")
        .form(&[
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await
        .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

    let body = resp
        .text()
        .await
        .map_err(|e| AuthError::TokenExchange(e.to_string()))?;
    let token_resp: TokenResponse =
        serde_json::from_str(&body).map_err(|_| AuthError::TokenExchange(format!("unexpected response: {body}")))?;
    Ok(token_resp.access_token)
}

/// Fetch the authenticated Google user's profile.
pub async fn fetch_google_user(
    http: &reqwest::Client,
    config: &GoogleConfig,
    access_token: &str,
) -> Result<GoogleUser, AuthError> {
    let resp = http
        .get(&config.userinfo_url)
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|e| AuthError::GoogleApi(e.to_string()))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(AuthError::GoogleApi(format!("{status}: {body}")));
    }

    resp.json::<GoogleUser>()
        .await
        .map_err(|e| AuthError::GoogleApi(e.to_string()))
}

/// Register or refresh the user's profile on the journal backend.
///
/// Sign-in must not proceed when this fails.
pub async fn register_user(http: &reqwest::Client, backend_url: &str, user: &GoogleUser) -> Result<(), AuthError> {
    let profile = user.to_session_user();
    let body = RegisterUser {
        name: &profile.name,
        email: &profile.email,
        image: profile.image.as_deref(),
        metadata: RegisterMetadata { provider: "google", provider_account_id: &user.sub },
    };
    let resp = http
        .post(format!("{backend_url}/users"))
        .json(&body)
        .send()
        .await
        .map_err(|e| AuthError::Registration(e.to_string()))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(AuthError::Registration(format!("{status}: {body}")));
    }
    Ok(())
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
