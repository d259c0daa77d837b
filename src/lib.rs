//! Playground library - re-exports for testing and external use.
//!
//! The crate is split between the server (`config`, `handlers`,
//! `playground`, `templates`) and `page`, which holds the editor page's
//! controllers behind injectable capabilities.

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod page;
pub mod playground;
pub mod templates;
pub mod url_validator;

use config::Config;
use playground::Upstream;

// ============================================================================
// Application State
// ============================================================================

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub upstream: Upstream,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let upstream = Upstream::new(&config)?;
        Ok(Self { config, upstream })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn app(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::index))
        .route("/compile", post(handlers::compile))
        .route("/share", post(handlers::share));

    for (name, _) in handlers::SUPPORTED_FAVICONS {
        router = router.route(&format!("/{}", name), get(handlers::favicon));
    }

    let router = router.nest_service("/assets", ServeDir::new(&state.config.assets_dir));
    with_middleware(router).with_state(state)
}

/// Request logging, and a 500 instead of a dropped connection when a
/// handler panics.
pub fn with_middleware<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}

// Re-export commonly used types
pub use models::{CompileRequest, CompileResponse, Event, ShareResponse};

pub use page::{
    Button, EditorHost, EditorOptions, EditorWidget, ExHandler, HttpPlaygroundApi,
    MemorySettings, ModalLayer, ModalSession, ModalState, Page, PageError, PageView,
    PlaygroundApi, SettingsStore, DEFAULT_SNIPPET,
};

pub use templates::{render_page, STYLE};

pub use url_validator::{validate_upstream_url, UrlValidationError};

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_handler_panic_becomes_500() {
        async fn boom() -> &'static str {
            panic!("handler failed")
        }
        let router: Router = with_middleware(Router::new().route("/boom", get(boom)));

        let response = router
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
