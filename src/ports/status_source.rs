//! Status Source Port - Outbound HTTP Probe Interface
//!
//! Defines the trait the translator uses to fetch the raw `/status`
//! response. Adapters own the transport (reqwest in production, mocks in
//! tests); the translator only sees status codes and bytes.

use async_trait::async_trait;
use thiserror::Error;

/// Raw response obtained from the status endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusResponse {
  /// HTTP status code.
  pub http_code: u16,
  /// Body bytes read before any failure (possibly empty).
  pub body: Vec<u8>,
  /// Set when reading the body failed after headers arrived.
  pub read_error: Option<TransportError>,
}

impl StatusResponse {
  /// Response whose body was read in full.
  pub fn new(http_code: u16, body: impl Into<Vec<u8>>) -> Self {
    Self {
      http_code,
      body: body.into(),
      read_error: None,
    }
  }
}

/// Failure to obtain an HTTP response (or its body).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
  /// No response within the probe timeout.
  #[error("request to {url} timed out")]
  Timeout { url: String },
  /// Connection refused, DNS failure or TLS handshake failure.
  #[error("could not connect to {url}: {reason}")]
  Connect { url: String, reason: String },
  /// Any other request-level failure.
  #[error("request to {url} failed: {reason}")]
  Request { url: String, reason: String },
  /// Headers arrived but the body could not be read.
  #[error("reading response body from {url} failed: {reason}")]
  Body { url: String, reason: String },
}

/// Trait for fetching the `/status` endpoint.
///
/// Implementations must be safe to call concurrently; every scrape issues
/// exactly one call and no retries.
#[async_trait]
pub trait StatusSource: Send + Sync + 'static {
  /// Issue one GET against `url`.
  ///
  /// Returns `Err` only when no HTTP response was obtained.
  async fn fetch_status(&self, url: &str) -> Result<StatusResponse, TransportError>;
}
