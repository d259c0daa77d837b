//! Go playground server.
//!
//! Serves a Monaco-based editor page and proxies its `/compile` and
//! `/share` calls to the Go playground. The application is organized into:
//!
//! - `config`: environment-driven settings
//! - `playground`: upstream playground client
//! - `handlers`: HTTP route handlers
//! - `templates`: HTML/CSS/JS for the editor page
//! - `page`: the page's controllers, independent of any browser

use std::process::ExitCode;
use std::sync::Arc;

use playground::{app, config::Config, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "playground=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let state = match AppState::new(config) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let addr = state.config.addr;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Playground server running at http://{}", addr);
    tracing::info!("Compile endpoint: {}", state.config.compile_url);
    tracing::info!("Share endpoint: {}", state.config.share_url);

    if let Err(e) = axum::serve(listener, app(state)).await {
        tracing::error!("Server failed: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
