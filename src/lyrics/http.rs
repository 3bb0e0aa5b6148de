//! Outbound HTTP for the lyric sources
//!
//! Sources talk to the network only through [`HttpClient`], so tests can hand
//! them a fake and the chain can share one connection pool.

use crate::lyrics::error::SourceError;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;

/// Status and text body of a GET.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait HttpClient: Send + Sync {
    /// Blocking GET. Transport failures and timeouts are `SourceError::Network`;
    /// any HTTP status, including 4xx/5xx, is a successful response.
    fn get(&self, url: &str) -> Result<HttpResponse, SourceError>;
}

/// `reqwest` blocking client with a browser-like user agent and a per-request timeout.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    http: reqwest::blocking::Client,
}

impl ReqwestClient {
    pub const DEFAULT_USER_AGENT: &'static str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

    pub fn new(user_agent: &str, timeout: Duration) -> anyhow::Result<Self> {
        use anyhow::Context;

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).context("invalid user agent header")?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

        let http = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .context("build reqwest client")?;

        Ok(Self { http })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<HttpResponse, SourceError> {
        tracing::debug!(url, "GET");

        let response = self.http.get(url).send().map_err(from_reqwest)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(from_reqwest)?;

        Ok(HttpResponse { status, body })
    }
}

fn from_reqwest(e: reqwest::Error) -> SourceError {
    if e.is_timeout() {
        SourceError::timeout(e.to_string())
    } else if e.is_decode() {
        SourceError::parse(e.to_string())
    } else {
        SourceError::network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        let ok = HttpResponse {
            status: 204,
            body: String::new(),
        };
        let missing = HttpResponse {
            status: 404,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!missing.is_success());
    }

    #[test]
    fn test_client_builds_with_default_agent() {
        let client = ReqwestClient::new(ReqwestClient::DEFAULT_USER_AGENT, Duration::from_secs(10));
        assert!(client.is_ok());
    }

    #[test]
    fn test_rejects_unprintable_agent() {
        assert!(ReqwestClient::new("bad\nagent", Duration::from_secs(10)).is_err());
    }
}
