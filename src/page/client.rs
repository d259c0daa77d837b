//! Playground API used by the page.
//!
//! `HttpPlaygroundApi` talks to this crate's own server (`/compile`,
//! `/share`) with the same requests the browser sends.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use serde::de::DeserializeOwned;

use super::PageError;
use crate::config::USER_AGENT as PLAYGROUND_USER_AGENT;
use crate::models::{CompileRequest, CompileResponse, ShareResponse};

/// Origin the page talks to when served locally.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[async_trait]
pub trait PlaygroundApi: Send + Sync {
    /// Compile and run `code`.
    async fn compile(&self, code: &str) -> Result<CompileResponse, PageError>;
    /// Store `code` and return its public URL.
    async fn share(&self, code: &str) -> Result<String, PageError>;
}

#[derive(Debug, Clone)]
pub struct HttpPlaygroundApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPlaygroundApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for HttpPlaygroundApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl PlaygroundApi for HttpPlaygroundApi {
    async fn compile(&self, code: &str) -> Result<CompileResponse, PageError> {
        let response = self
            .client
            .post(format!("{}/compile", self.base_url))
            .header(USER_AGENT, PLAYGROUND_USER_AGENT)
            .json(&CompileRequest::new(code))
            .send()
            .await?;
        decode(response).await
    }

    async fn share(&self, code: &str) -> Result<String, PageError> {
        let response = self
            .client
            .post(format!("{}/share", self.base_url))
            .header(USER_AGENT, PLAYGROUND_USER_AGENT)
            .header(CONTENT_TYPE, "text/plain")
            .body(code.to_string())
            .send()
            .await?;
        let share: ShareResponse = decode(response).await?;
        Ok(share.share_url)
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, PageError> {
    let status = response.status();
    if !status.is_success() {
        return Err(PageError::Status(status.as_u16()));
    }
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| PageError::Decode(e.to_string()))
}
