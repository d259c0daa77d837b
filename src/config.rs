//! Server configuration.
//!
//! Every setting has a default matching the public Go playground and can be
//! overridden through a `PLAYGROUND_*` environment variable.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::url_validator::{validate_upstream_url, UrlValidationError};

pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_COMPILE_URL: &str = "https://play.golang.org/compile";
pub const DEFAULT_SHARE_URL: &str = "https://play.golang.org/share";
pub const DEFAULT_PUBLIC_SHARE_URL: &str = "https://go.dev/play/p";
pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// User-Agent sent to the playground, by the page and by the proxy.
pub const USER_AGENT: &str = "learn.gopherguides.com/1.0";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: invalid listen address {value:?}")]
    InvalidAddr { var: &'static str, value: String },
    #[error("{var}: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: UrlValidationError,
    },
    #[error("{var}: expected a number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub compile_url: String,
    pub share_url: String,
    /// Prefix joined with the snippet id to build the public share link.
    pub public_share_url: String,
    pub assets_dir: PathBuf,
    pub upstream_timeout: Duration,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let addr_value = var("PLAYGROUND_ADDR", DEFAULT_ADDR);
        let addr = addr_value
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr {
                var: "PLAYGROUND_ADDR",
                value: addr_value.clone(),
            })?;

        let compile_url = checked_url("PLAYGROUND_COMPILE_URL", var("PLAYGROUND_COMPILE_URL", DEFAULT_COMPILE_URL))?;
        let share_url = checked_url("PLAYGROUND_SHARE_URL", var("PLAYGROUND_SHARE_URL", DEFAULT_SHARE_URL))?;
        let public_share_url = checked_url(
            "PLAYGROUND_PUBLIC_SHARE_URL",
            var("PLAYGROUND_PUBLIC_SHARE_URL", DEFAULT_PUBLIC_SHARE_URL),
        )?;

        let timeout_value = var(
            "PLAYGROUND_UPSTREAM_TIMEOUT_SECS",
            &DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string(),
        );
        let timeout_secs = timeout_value
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidTimeout {
                var: "PLAYGROUND_UPSTREAM_TIMEOUT_SECS",
                value: timeout_value.clone(),
            })?;

        Ok(Self {
            addr,
            compile_url,
            share_url,
            public_share_url: public_share_url.trim_end_matches('/').to_string(),
            assets_dir: PathBuf::from(var("PLAYGROUND_ASSETS_DIR", DEFAULT_ASSETS_DIR)),
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.parse().unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 8080))),
            compile_url: DEFAULT_COMPILE_URL.to_string(),
            share_url: DEFAULT_SHARE_URL.to_string(),
            public_share_url: DEFAULT_PUBLIC_SHARE_URL.to_string(),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        }
    }
}

fn checked_url(var: &'static str, value: String) -> Result<String, ConfigError> {
    validate_upstream_url(&value).map_err(|source| ConfigError::InvalidUrl { var, source })?;
    Ok(value)
}
