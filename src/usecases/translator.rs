//! Status Translator - One Scrape, Start to Finish
//!
//! Fetches the `/status` endpoint once and turns the outcome into a
//! `ProbeReport`:
//! - Transport failure: unreachable, nothing else reported
//! - Blank body: `Empty` state, no duration
//! - Otherwise: decoded (or `Empty` on decode failure) state plus duration
//!
//! Never fails; degraded input degrades the report instead.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, error, info, instrument, warn};

use crate::domain::{AppState, ProbeReport, ProbeTarget, Reachability, StateReading};
use crate::domain::{is_blank, parse_state};
use crate::ports::status_source::{StatusSource, TransportError};

/// Slack on top of the probe timeout so the client's own deadline fires
/// first and a response whose headers arrived is still reported as up.
const TIMEOUT_GRACE: Duration = Duration::from_millis(500);

/// Stateless translator from `/status` responses to probe reports.
///
/// Holds only immutable configuration and a shared client, so concurrent
/// `probe` calls are independent.
pub struct StatusTranslator<S: StatusSource + ?Sized = dyn StatusSource> {
  /// Outbound HTTP port.
  source: Arc<S>,
  /// Endpoint, label and timeout.
  target: ProbeTarget,
}

impl<S: StatusSource + ?Sized> StatusTranslator<S> {
  /// Create a translator for the given target.
  pub fn new(source: Arc<S>, target: ProbeTarget) -> Self {
    Self { source, target }
  }

  /// The configured probe target.
  pub fn target(&self) -> &ProbeTarget {
    &self.target
  }

  /// Run one scrape against the target.
  #[instrument(skip(self), fields(url = %self.target.label))]
  pub async fn probe(&self) -> ProbeReport {
    let started = Instant::now();
    let url = &self.target.status_url;

    debug!(status_url = %url, "get url");
    let fetched = tokio::time::timeout(
      self.target.timeout + TIMEOUT_GRACE,
      self.source.fetch_status(url),
    )
    .await
    .unwrap_or_else(|_| Err(TransportError::Timeout { url: url.clone() }));

    let response = match fetched {
      Ok(response) => response,
      Err(e) => {
        warn!(error = %e, "status endpoint unreachable");
        return ProbeReport::unreachable(self.target.label.clone());
      }
    };

    let http_code = response.http_code;
    debug!(http_code, "set scrape_url_up metric");
    let mut report = ProbeReport {
      url: self.target.label.clone(),
      reachability: Reachability::reached(http_code),
      state: None,
      duration: None,
    };

    if let Some(e) = &response.read_error {
      error!(error = %e, "failed to read response body");
    }

    if is_blank(&response.body) {
      debug!(http_code, "response entity empty");
      report.state = Some(StateReading {
        state: AppState::Empty,
        http_code,
      });
      return report;
    }

    let raw_state = parse_state(&response.body).unwrap_or_else(|e| {
      error!(error = %e, "failed to decode status body");
      info!(body = %String::from_utf8_lossy(&response.body), "undecodable status body");
      String::new()
    });
    let state = AppState::from_state(&raw_state);
    debug!(%state, code = state.code(), "set state metric");
    report.state = Some(StateReading { state, http_code });

    report.duration = Some(started.elapsed());
    debug!("collect finished");
    report
  }
}

#[cfg(test)]
mod tests {
  use async_trait::async_trait;

  use super::*;
  use crate::ports::status_source::StatusResponse;

  /// Source that always answers with a fixed result.
  struct FixedSource(Result<StatusResponse, TransportError>);

  #[async_trait]
  impl StatusSource for FixedSource {
    async fn fetch_status(&self, _url: &str) -> Result<StatusResponse, TransportError> {
      self.0.clone()
    }
  }

  /// Source that never answers within any reasonable timeout.
  struct StalledSource;

  #[async_trait]
  impl StatusSource for StalledSource {
    async fn fetch_status(&self, _url: &str) -> Result<StatusResponse, TransportError> {
      tokio::time::sleep(Duration::from_secs(30)).await;
      Ok(StatusResponse::new(200, r#"{"state":"RUNNING"}"#))
    }
  }

  /// Source whose answer lands just after the nominal timeout.
  struct SlowSource(Duration);

  #[async_trait]
  impl StatusSource for SlowSource {
    async fn fetch_status(&self, _url: &str) -> Result<StatusResponse, TransportError> {
      tokio::time::sleep(self.0).await;
      Ok(StatusResponse::new(200, r#"{"state":"RUNNING"}"#))
    }
  }

  fn target() -> ProbeTarget {
    ProbeTarget::new("https", "bitbucket.example.com", Duration::from_secs(5))
  }

  fn translator(result: Result<StatusResponse, TransportError>) -> StatusTranslator<FixedSource> {
    StatusTranslator::new(Arc::new(FixedSource(result)), target())
  }

  #[tokio::test]
  async fn test_running_reports_state_and_duration() {
    let t = translator(Ok(StatusResponse::new(200, r#"{"state":"RUNNING"}"#)));
    let report = t.probe().await;
    assert_eq!(report.reachability, Reachability::reached(200));
    let reading = report.state.expect("state reading");
    assert_eq!(reading.state, AppState::Running);
    assert_eq!(reading.http_code, 200);
    assert!(report.duration.is_some());
    assert_eq!(report.url, "bitbucket.example.com");
  }

  #[tokio::test]
  async fn test_transport_failure_reports_only_reachability() {
    let t = translator(Err(TransportError::Connect {
      url: "https://bitbucket.example.com/status".into(),
      reason: "connection refused".into(),
    }));
    let report = t.probe().await;
    assert_eq!(report, ProbeReport::unreachable("bitbucket.example.com"));
  }

  #[tokio::test]
  async fn test_blank_body_skips_duration() {
    let t = translator(Ok(StatusResponse::new(404, " \n")));
    let report = t.probe().await;
    let reading = report.state.expect("state reading");
    assert_eq!(reading.state, AppState::Empty);
    assert_eq!(reading.http_code, 404);
    assert!(report.duration.is_none());
  }

  #[tokio::test]
  async fn test_decode_failure_keeps_duration() {
    let t = translator(Ok(StatusResponse::new(200, "not json")));
    let report = t.probe().await;
    assert_eq!(report.state.expect("state reading").state, AppState::Empty);
    assert!(report.duration.is_some());
  }

  #[tokio::test]
  async fn test_body_read_error_continues_with_partial_body() {
    let mut response = StatusResponse::new(200, Vec::new());
    response.read_error = Some(TransportError::Body {
      url: "https://bitbucket.example.com/status".into(),
      reason: "connection reset".into(),
    });
    let report = translator(Ok(response)).probe().await;
    assert!(report.reachability.up);
    assert_eq!(report.state.expect("state reading").state, AppState::Empty);
  }

  #[tokio::test]
  async fn test_stalled_source_times_out() {
    let target = ProbeTarget::new("http", "stalled.local", Duration::from_millis(20));
    let t = StatusTranslator::new(Arc::new(StalledSource), target);
    let report = t.probe().await;
    assert!(!report.reachability.up);
    assert!(report.state.is_none());
  }

  #[tokio::test]
  async fn test_response_just_past_timeout_is_still_up() {
    let target = ProbeTarget::new("http", "slow.local", Duration::from_millis(50));
    let t = StatusTranslator::new(Arc::new(SlowSource(Duration::from_millis(80))), target);
    let report = t.probe().await;
    assert_eq!(report.reachability, Reachability::reached(200));
    assert_eq!(report.state.expect("state reading").state, AppState::Running);
  }

  #[tokio::test]
  async fn test_works_through_trait_object() {
    let source: Arc<dyn StatusSource> = Arc::new(FixedSource(Ok(StatusResponse::new(
      200,
      r#"{"state":"MAINTENANCE"}"#,
    ))));
    let t: StatusTranslator = StatusTranslator::new(source, target());
    let reading = t.probe().await.state.expect("state reading");
    assert_eq!(reading.state, AppState::Unknown("MAINTENANCE".into()));
  }
}
