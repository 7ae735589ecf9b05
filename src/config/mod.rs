//! Configuration Module - Exporter Settings
//!
//! Settings come from an optional TOML file and are overridden by command
//! line flags. The result is validated once at startup and then only read.

pub mod cli;
pub mod loader;

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::domain::ProbeTarget;

/// Default metric namespace.
pub const DEFAULT_NAMESPACE: &str = "atlassian_status";

/// Top-level exporter configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
  /// Listener and scrape settings.
  pub service: ServiceConfig,
  /// The monitored Atlassian application.
  pub app: TargetConfig,
  /// Log output settings.
  pub logging: LoggingConfig,
}

/// Listener and scrape settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
  /// IP address to listen on.
  pub address: String,
  /// Port to listen on.
  pub port: u16,
  /// Upper bound for one probe of the status endpoint (seconds).
  /// Prometheus scrapes time out after 10s by default.
  pub timeout_seconds: u64,
  /// Metric name prefix.
  pub namespace: String,
}

/// The monitored application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
  /// Application host, e.g. `jira.example.com`. Required.
  pub url: String,
  /// Scheme used to reach the application.
  pub protocol: Protocol,
}

/// Scheme used to reach the status endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
  Http,
  #[default]
  Https,
}

impl fmt::Display for Protocol {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Http => write!(f, "http"),
      Self::Https => write!(f, "https"),
    }
  }
}

/// Log output settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
  /// Emit debug-level logs.
  pub debug: bool,
  /// ANSI colors in text output.
  pub color: bool,
  /// JSON lines instead of text.
  pub json: bool,
}

impl Default for ServiceConfig {
  fn default() -> Self {
    Self {
      address: "0.0.0.0".to_string(),
      port: 9997,
      timeout_seconds: 10,
      namespace: DEFAULT_NAMESPACE.to_string(),
    }
  }
}

impl AppConfig {
  /// `address:port` for the listener.
  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.service.address, self.service.port)
  }

  /// Probe timeout as a duration.
  pub const fn timeout(&self) -> Duration {
    Duration::from_secs(self.service.timeout_seconds)
  }

  /// Immutable probe target for the translator.
  pub fn probe_target(&self) -> ProbeTarget {
    ProbeTarget::new(
      &self.app.protocol.to_string(),
      &self.app.url,
      self.timeout(),
    )
  }
}
