// src/checker/transport.rs
// =============================================================================
// The network edge of the checker.
//
// The Prober never talks to reqwest directly. It goes through the Transport
// trait, which sends one request and returns either a status line (Reply) or
// a typed TransportError. This keeps the retry logic a plain `match` on
// values, and lets tests swap in a scripted transport.
//
// HttpTransport is the real implementation:
// - follows redirects
// - does not validate TLS certificates
// - applies one timeout to every request
// - sends the configured User-Agent
// =============================================================================

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header, Client};
use thiserror::Error;

use super::config::{CheckerConfig, MAX_REDIRECTS};

// Which kind of request to send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeMethod {
    /// Lightweight probe: headers only
    Head,
    /// Fallback probe: full request
    Get,
}

// The part of a response the checker cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    /// Reason phrase for the status, when one is known
    pub reason: Option<String>,
}

// Everything that can go wrong before a status code arrives.
// The Display text doubles as the reason shown in reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Timeout")]
    Timeout,
    #[error("Connection failed")]
    Connect,
    #[error("Client error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            TransportError::Timeout
        } else if error.is_connect() {
            TransportError::Connect
        } else {
            TransportError::Other(error.to_string())
        }
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, method: ProbeMethod, url: &str) -> Result<Reply, TransportError>;
}

// reqwest-backed transport, one shared Client (and connection pool) per run
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &CheckerConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)
                .with_context(|| format!("Invalid user agent: {:?}", config.user_agent))?,
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .danger_accept_invalid_certs(true)
            .pool_max_idle_per_host(config.per_host)
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, method: ProbeMethod, url: &str) -> Result<Reply, TransportError> {
        let request = match method {
            ProbeMethod::Head => self.client.head(url),
            ProbeMethod::Get => self.client.get(url),
        };

        // Only the status line matters; the response is dropped unread
        let response = request.send().await?;
        let status = response.status();

        Ok(Reply {
            status: status.as_u16(),
            reason: wire_reason(&response).or_else(|| status.canonical_reason().map(str::to_string)),
        })
    }
}

// The reason phrase as sent by the server. hyper only records it when it
// differs from the canonical phrase for the status code.
fn wire_reason(response: &reqwest::Response) -> Option<String> {
    let phrase = response.extensions().get::<hyper::ext::ReasonPhrase>()?;
    std::str::from_utf8(phrase.as_bytes()).ok().map(str::to_string)
}
