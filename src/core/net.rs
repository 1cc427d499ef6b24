// src/core/net.rs
// Blocking HTTPS GET. One attempt per call, bounded timeout, no retries.

use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;

use crate::config::consts::USER_AGENT;

#[derive(Debug, Error)]
pub enum NetError {
    #[error("could not build HTTP client: {0}")]
    Client(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("could not read response body: {0}")]
    Body(String),
}

/// Something that can turn a URL into a page body.
///
/// The importer only talks to this trait so tests can feed it canned pages.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String, NetError>;
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(timeout: Duration) -> Result<Self, NetError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| NetError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<String, NetError> {
        logd!("GET {url}");
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| NetError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(NetError::Status(status.as_u16()));
        }
        let body = resp.text().map_err(|e| NetError::Body(e.to_string()))?;
        logd!("GET {url}: {} bytes", body.len());
        Ok(body)
    }
}

/// Serves one fixed body for every URL. Used by tests and the bench.
pub struct StaticSource(pub String);

impl PageSource for StaticSource {
    fn fetch(&self, _url: &str) -> Result<String, NetError> {
        Ok(self.0.clone())
    }
}
