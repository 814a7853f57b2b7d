mod config;
mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    // A missing .env is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let port = config.port;

    // Initialize LLM client (non-fatal: the proxy answers 500 if config missing).
    let llm: Option<Arc<dyn llm::LlmChat>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(base_url = client.base_url(), "LLM client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured, reflections disabled");
            None
        }
    };

    let google = services::auth::GoogleConfig::from_env();
    if google.is_none() {
        tracing::warn!("Google OAuth not configured, sign-in disabled");
    }

    tracing::info!(backend_url = %config.backend_url, "journal backend");
    let state = state::AppState::new(config, llm, google);

    let app = routes::leptos_app(state).expect("failed to build app router");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "vieromind listening");
    axum::serve(listener, app).await.expect("server failed");
}
