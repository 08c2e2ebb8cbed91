//! Host configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before this runs, so values there behave like
//! real environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::util::config::normalize_base;

pub const DEFAULT_PORT: u16 = 3000;

/// Startup failures. Nothing fails after the listener is bound.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub port: u16,
    /// Backend REST base published to the browser, without trailing `/`.
    pub api_base: String,
}

impl PortalConfig {
    /// Read the host configuration.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `PORTAL_API_BASE_URL`: backend base URL, default `http://localhost:8087/api`
    ///
    /// # Errors
    ///
    /// Returns [`HostError::InvalidPort`] when `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, HostError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let api_base = normalize_base(&std::env::var("PORTAL_API_BASE_URL").unwrap_or_default());
        Ok(Self { port, api_base })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, HostError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| HostError::InvalidPort(value.to_owned())),
    }
}
