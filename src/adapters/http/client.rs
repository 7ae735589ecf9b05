//! Status HTTP Client - reqwest-backed `StatusSource`
//!
//! Wraps a single pooled reqwest client with the probe timeout. No retries:
//! the next scrape is the retry.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::ports::status_source::{StatusResponse, StatusSource, TransportError};

/// Production `StatusSource` over reqwest (rustls).
#[derive(Debug, Clone)]
pub struct ReqwestStatusSource {
  /// Underlying HTTP client.
  http: Client,
}

impl ReqwestStatusSource {
  /// Create a client whose requests (body included) are bounded by `timeout`.
  pub fn new(timeout: Duration) -> Result<Self> {
    let http = Client::builder()
      .timeout(timeout)
      .pool_max_idle_per_host(2)
      .user_agent(concat!("atlassian-status-exporter/", env!("CARGO_PKG_VERSION")))
      .build()
      .context("Failed to build HTTP client")?;

    Ok(Self { http })
  }
}

#[async_trait]
impl StatusSource for ReqwestStatusSource {
  async fn fetch_status(&self, url: &str) -> Result<StatusResponse, TransportError> {
    let mut response = self
      .http
      .get(url)
      .send()
      .await
      .map_err(|e| classify_error(url, &e))?;

    let http_code = response.status().as_u16();
    debug!(http_code, "status endpoint answered");

    // Chunked so a failed read still hands back the bytes received so far
    let mut body = Vec::new();
    loop {
      match response.chunk().await {
        Ok(Some(chunk)) => body.extend_from_slice(&chunk),
        Ok(None) => return Ok(StatusResponse::new(http_code, body)),
        Err(e) => {
          debug!(read = body.len(), "body read failed part way");
          return Ok(StatusResponse {
            http_code,
            body,
            read_error: Some(TransportError::Body {
              url: url.to_string(),
              reason: e.to_string(),
            }),
          });
        }
      }
    }
  }
}

/// Map a reqwest send error onto the port's error kinds.
fn classify_error(url: &str, e: &reqwest::Error) -> TransportError {
  let url = url.to_string();
  if e.is_timeout() {
    TransportError::Timeout { url }
  } else if e.is_connect() {
    TransportError::Connect {
      url,
      reason: e.to_string(),
    }
  } else {
    TransportError::Request {
      url,
      reason: e.to_string(),
    }
  }
}
