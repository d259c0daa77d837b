//! Errors returned by the proxy handlers.

use axum::{
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The page sent a body that could not be decoded.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// The upstream playground could not be reached.
    #[error("Failed to send code to the Go Playground")]
    Upstream(#[source] reqwest::Error),
    /// The upstream answered but its body could not be read.
    #[error("Failed to read response")]
    UpstreamRead(#[source] reqwest::Error),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::Upstream(_) | ProxyError::UpstreamRead(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = ?self, "proxy request failed");
        (self.status(), self.to_string()).into_response()
    }
}

/// Share failures are reported as JSON so the page can always parse them.
#[derive(Debug)]
pub struct JsonError(pub ProxyError);

impl From<ProxyError> for JsonError {
    fn from(err: ProxyError) -> Self {
        JsonError(err)
    }
}

impl IntoResponse for JsonError {
    fn into_response(self) -> Response {
        tracing::warn!(error = ?self.0, "share request failed");
        let body = serde_json::json!({ "error": self.0.to_string() }).to_string();
        (self.0.status(), [(CONTENT_TYPE, "application/json")], body).into_response()
    }
}
