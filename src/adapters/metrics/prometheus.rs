//! Prometheus Rendering - ProbeReport to Text Exposition
//!
//! Each scrape gets a fresh `Registry` holding three gauge vectors:
//! - `<ns>_scrape_url_up{httpcode,url}`
//! - `<ns>_state{state,httpcode,description,url}`
//! - `<ns>_collect_duration_seconds{url}`
//!
//! Gauges without a sample are pruned by `Registry::gather`, so absent
//! readings simply do not appear in the output.

use prometheus::{Encoder, GaugeVec, Opts, Registry, TextEncoder};

use crate::config::DEFAULT_NAMESPACE;
use crate::domain::ProbeReport;

/// Builds per-scrape registries for a fixed namespace.
#[derive(Debug, Clone)]
pub struct StatusMetrics {
  namespace: String,
}

/// The three gauge vectors for one scrape, registered on their own registry.
struct ScrapeGauges {
  registry: Registry,
  scrape_up: GaugeVec,
  state: GaugeVec,
  duration: GaugeVec,
}

impl StatusMetrics {
  pub fn new(namespace: impl Into<String>) -> Self {
    Self {
      namespace: namespace.into(),
    }
  }

  fn gauges(&self) -> prometheus::Result<ScrapeGauges> {
    let registry = Registry::new();

    let scrape_up = GaugeVec::new(
      Opts::new(
        "scrape_url_up",
        "metric shows the status of the connection to the atlassian application endpoint",
      )
      .namespace(self.namespace.as_str()),
      &["httpcode", "url"],
    )?;

    let state = GaugeVec::new(
      Opts::new(
        "state",
        "metric returns the state of the monitored atlassian application",
      )
      .namespace(self.namespace.as_str()),
      &["state", "httpcode", "description", "url"],
    )?;

    let duration = GaugeVec::new(
      Opts::new(
        "collect_duration_seconds",
        "metric keeps track of how long the exporter took to collect metrics",
      )
      .namespace(self.namespace.as_str()),
      &["url"],
    )?;

    registry.register(Box::new(scrape_up.clone()))?;
    registry.register(Box::new(state.clone()))?;
    registry.register(Box::new(duration.clone()))?;

    Ok(ScrapeGauges {
      registry,
      scrape_up,
      state,
      duration,
    })
  }

  /// Registry populated with the readings of one report.
  ///
  /// # Errors
  /// Fails only if the namespace produces an invalid metric name.
  pub fn registry_for(&self, report: &ProbeReport) -> prometheus::Result<Registry> {
    let gauges = self.gauges()?;
    let url = report.url.as_str();

    gauges
      .scrape_up
      .with_label_values(&[report.reachability.http_label().as_str(), url])
      .set(report.reachability.value());

    if let Some(reading) = &report.state {
      let http_code = reading.http_code.to_string();
      gauges
        .state
        .with_label_values(&[
          reading.state.label(),
          http_code.as_str(),
          reading.state.description(),
          url,
        ])
        .set(f64::from(reading.state.code()));
    }

    if let Some(elapsed) = report.duration {
      gauges
        .duration
        .with_label_values(&[url])
        .set(elapsed.as_secs_f64());
    }

    Ok(gauges.registry)
  }

  /// Render one report in the Prometheus text exposition format.
  ///
  /// # Errors
  /// Fails on an invalid namespace or an encoder error.
  pub fn render(&self, report: &ProbeReport) -> prometheus::Result<String> {
    let registry = self.registry_for(report)?;
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&registry.gather(), &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
  }
}

impl Default for StatusMetrics {
  fn default() -> Self {
    Self::new(DEFAULT_NAMESPACE)
  }
}
