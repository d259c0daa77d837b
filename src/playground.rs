//! Client for the upstream Go playground.
//!
//! The server never runs code itself: compile requests and share requests
//! are forwarded to the configured playground endpoints.

use reqwest::header::{CONTENT_TYPE, USER_AGENT};

use crate::config::{Config, USER_AGENT as PLAYGROUND_USER_AGENT};
use crate::error::ProxyError;
use crate::models::CompileRequest;

/// Upper bound on the share reply, which is only a snippet id.
pub const MAX_SHARE_REPLY_BYTES: usize = 1 << 20;

/// Raw upstream compile reply, passed through to the page untouched.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct Upstream {
    client: reqwest::Client,
    compile_url: String,
    share_url: String,
    public_share_url: String,
}

impl Upstream {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;

        Ok(Self {
            client,
            compile_url: config.compile_url.clone(),
            share_url: config.share_url.clone(),
            public_share_url: config.public_share_url.clone(),
        })
    }

    /// Forward a compile request. The playground expects a form body.
    pub async fn compile(&self, request: &CompileRequest) -> Result<UpstreamReply, ProxyError> {
        let form = [
            ("version", request.version.to_string()),
            ("body", request.body.clone()),
        ];

        let response = self
            .client
            .post(&self.compile_url)
            .header(USER_AGENT, PLAYGROUND_USER_AGENT)
            .form(&form)
            .send()
            .await
            .map_err(ProxyError::Upstream)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(ProxyError::UpstreamRead)?;
        tracing::debug!(status, bytes = body.len(), "compile reply from playground");

        Ok(UpstreamReply {
            status,
            body: body.to_vec(),
        })
    }

    /// Store a snippet and return its public URL, or an empty string when
    /// the playground returned no id.
    pub async fn share(&self, code: String) -> Result<String, ProxyError> {
        let response = self
            .client
            .post(&self.share_url)
            .header(USER_AGENT, PLAYGROUND_USER_AGENT)
            .header(CONTENT_TYPE, "text/plain")
            .body(code)
            .send()
            .await
            .map_err(ProxyError::Upstream)?;

        let id = read_limited(response, MAX_SHARE_REPLY_BYTES).await?;
        let id = String::from_utf8_lossy(&id).trim().to_string();
        tracing::debug!(id = %id, "snippet shared");

        Ok(self.public_url(&id))
    }

    pub fn public_url(&self, id: &str) -> String {
        if id.is_empty() {
            String::new()
        } else {
            format!("{}/{}", self.public_share_url, id)
        }
    }
}

/// Read a response body, silently dropping anything past `limit` bytes.
async fn read_limited(
    mut response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, ProxyError> {
    let mut buf = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(ProxyError::UpstreamRead)? {
        let room = limit - buf.len();
        if chunk.len() >= room {
            buf.extend_from_slice(&chunk[..room]);
            break;
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}
