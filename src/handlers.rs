//! HTTP route handlers for the playground server.
//!
//! The page itself is rendered from templates; `/compile` and `/share` are
//! thin proxies to the upstream Go playground.

use crate::error::{JsonError, ProxyError};
use crate::models::{CompileRequest, ShareResponse};
use crate::templates::render_page;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use std::sync::Arc;

// ============================================================================
// Index Handler
// ============================================================================

pub async fn index() -> Html<String> {
    Html(render_page())
}

// ============================================================================
// Compile Handler
// ============================================================================

pub async fn compile(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let request: CompileRequest = serde_json::from_slice(&body)
        .map_err(|e| ProxyError::InvalidRequest(e.to_string()))?;

    tracing::info!(bytes = request.body.len(), "compiling snippet");
    let reply = state.upstream.compile(&request).await?;

    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    Ok((status, [(CONTENT_TYPE, "application/json")], reply.body).into_response())
}

// ============================================================================
// Share Handler
// ============================================================================

pub async fn share(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Json<ShareResponse>, JsonError> {
    tracing::info!(bytes = body.len(), "sharing snippet");
    let share_url = state.upstream.share(body).await?;
    Ok(Json(ShareResponse { share_url }))
}

// ============================================================================
// Favicon Handler
// ============================================================================

/// Favicon files served from `<assets>/favicon/` and their content types.
pub const SUPPORTED_FAVICONS: &[(&str, &str)] = &[
    ("favicon.ico", "image/x-icon"),
    ("favicon-16x16.png", "image/png"),
    ("favicon-32x32.png", "image/png"),
    ("apple-touch-icon.png", "image/png"),
    ("android-chrome-192x192.png", "image/png"),
    ("android-chrome-512x512.png", "image/png"),
];

pub async fn favicon(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let requested = uri.path().rsplit('/').next().unwrap_or("");

    let content_type = match SUPPORTED_FAVICONS.iter().find(|(name, _)| *name == requested) {
        Some((_, ct)) => *ct,
        None => return StatusCode::NOT_FOUND.into_response(),
    };

    let path = state.config.assets_dir.join("favicon").join(requested);
    match tokio::fs::read(&path).await {
        Ok(content) => ([(CONTENT_TYPE, content_type)], content).into_response(),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "favicon not found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::{app, AppState};
    use axum::{body::Body, http::Request, routing::post, Router};
    use tower::ServiceExt;

    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn fake_playground() -> Router {
        Router::new()
            .route(
                "/compile",
                post(|body: String| async move {
                    if body.contains("syntax") {
                        r#"{"Errors":"prog.go:1:1: syntax error","Events":null}"#.to_string()
                    } else {
                        r#"{"Errors":"","Events":[{"Message":"Hello, Go!\n","Kind":"stdout","Delay":0}]}"#
                            .to_string()
                    }
                }),
            )
            .route("/share", post(|| async { "abc123" }))
    }

    fn app_for(base: &str, assets_dir: std::path::PathBuf) -> Router {
        let config = Config {
            compile_url: format!("{}/compile", base),
            share_url: format!("{}/share", base),
            assets_dir,
            ..Config::default()
        };
        app(Arc::new(AppState::new(config).unwrap()))
    }

    async fn test_app(assets_dir: std::path::PathBuf) -> Router {
        let base = spawn(fake_playground()).await;
        app_for(&base, assets_dir)
    }

    /// Router whose upstream address has nothing listening on it.
    async fn unreachable_app() -> Router {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        app_for(&base, "assets".into())
    }

    fn compile_request() -> Request<Body> {
        Request::post("/compile")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"version":2,"body":"package main"}"#))
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_index_serves_editor() {
        let app = test_app("assets".into()).await;
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("id=\"container\""));
        assert!(html.contains("run-btn"));
    }

    #[tokio::test]
    async fn test_compile_proxies_upstream() {
        let app = test_app("assets".into()).await;
        let response = app.oneshot(compile_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
        let body = body_string(response).await;
        assert!(body.contains("Hello, Go!"));
    }

    #[tokio::test]
    async fn test_compile_unreachable_upstream() {
        let response = unreachable_app().await.oneshot(compile_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, "Failed to send code to the Go Playground");
    }

    #[tokio::test]
    async fn test_compile_passes_upstream_status_through() {
        use crate::page::{
            Capabilities, HttpPlaygroundApi, MemoryClipboard, MemorySettings, MemoryWidget,
            EditorHost, ModalLayer, ModalSession, Page, PageError, PlaygroundApi, COMMAND_LINE,
            RUN_FAILURE,
        };

        let base = spawn(Router::new().route(
            "/compile",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        ))
        .await;
        let router = app_for(&base, "assets".into());

        let response = router.clone().oneshot(compile_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, "boom");

        // The page client treats the passed-through status as a failed run.
        let server = spawn(router).await;
        let api = HttpPlaygroundApi::new(server);
        assert!(matches!(api.compile("package main").await, Err(PageError::Status(500))));

        struct NoModal;
        impl ModalLayer for NoModal {
            fn attach(&self, _editor: &EditorHost) -> Box<dyn ModalSession> {
                unreachable!("vim mode is off")
            }
        }

        let page = Page::load(Capabilities {
            widget: Box::new(MemoryWidget::default()),
            modal_layer: Arc::new(NoModal),
            settings: Arc::new(MemorySettings::new()),
            api: Arc::new(api),
            clipboard: Arc::new(MemoryClipboard::default()),
        });
        page.run().await;
        assert_eq!(page.view().result_text, format!("{}\nError: {}", COMMAND_LINE, RUN_FAILURE));
    }

    #[tokio::test]
    async fn test_compile_rejects_malformed_json() {
        let app = test_app("assets".into()).await;
        let request = Request::post("/compile").body(Body::from("package main")).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_share_returns_public_url() {
        let app = test_app("assets".into()).await;
        let request = Request::post("/share")
            .header(CONTENT_TYPE, "text/plain")
            .body(Body::from("package main"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(value["shareURL"], "https://go.dev/play/p/abc123");
    }

    #[tokio::test]
    async fn test_share_unreachable_upstream_is_json() {
        let request = Request::post("/share")
            .header(CONTENT_TYPE, "text/plain")
            .body(Body::from("package main"))
            .unwrap();
        let response = unreachable_app().await.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
        let value: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(value, serde_json::json!({ "error": "Failed to send code to the Go Playground" }));
    }

    #[tokio::test]
    async fn test_favicon_served_with_content_type() {
        let dir = std::env::temp_dir().join(format!("playground-favicon-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("favicon")).unwrap();
        std::fs::write(dir.join("favicon").join("favicon-32x32.png"), b"\x89PNG").unwrap();

        let app = test_app(dir.clone()).await;
        let response = app
            .clone()
            .oneshot(Request::get("/favicon-32x32.png").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "image/png");

        // Supported name, but no file on disk.
        let response = app
            .oneshot(Request::get("/favicon.ico").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        std::fs::remove_dir_all(&dir).ok();
    }
}
