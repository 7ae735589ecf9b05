//! Command line flags.
//!
//! Flag names follow the exporter's historical `svc.*` / `app.*` spelling.
//! Every flag is optional here; a set flag wins over the config file.

use std::path::PathBuf;

use clap::Parser;

use super::{AppConfig, Protocol};

/// Reaches out to the /status page of an Atlassian application and turns
/// the reported state into collectable Prometheus metrics.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "atlassian_status_exporter", version, about)]
pub struct Cli {
  /// Optional TOML config file; flags override its values
  #[arg(long, value_name = "PATH")]
  pub config: Option<PathBuf>,

  /// IP address for this service to listen on [default: 0.0.0.0]
  #[arg(long = "svc.address", value_name = "ADDR")]
  pub address: Option<String>,

  /// Port this service listens on [default: 9997]
  #[arg(long = "svc.port", value_name = "PORT")]
  pub port: Option<u16>,

  /// Seconds allowed to check the url. Prometheus scrapes time out after
  /// 10 seconds by default; raise both if the application is slow [default: 10]
  #[arg(long = "svc.timeout", value_name = "SECONDS")]
  pub timeout: Option<u64>,

  /// Metric name prefix [default: atlassian_status]
  #[arg(long = "svc.namespace", value_name = "NAME")]
  pub namespace: Option<String>,

  /// REQUIRED: application host to monitor (ie. <bitbucket|confluence|jira>.domain.com)
  #[arg(long = "app.url", value_name = "HOST")]
  pub url: Option<String>,

  /// Protocol used to reach the application [default: https]
  #[arg(long = "app.protocol", alias = "app.protocal", value_enum)]
  pub protocol: Option<Protocol>,

  /// Enable debug output
  #[arg(long)]
  pub debug: bool,

  /// Colored log output, handy when developing in debug mode
  #[arg(long = "enable-color-logs")]
  pub color: bool,

  /// Structured JSON log lines
  #[arg(long = "log-json")]
  pub json: bool,
}

impl Cli {
  /// Overlay the flags that were given onto `config`.
  pub fn apply(&self, config: &mut AppConfig) {
    if let Some(address) = &self.address {
      config.service.address.clone_from(address);
    }
    if let Some(port) = self.port {
      config.service.port = port;
    }
    if let Some(timeout) = self.timeout {
      config.service.timeout_seconds = timeout;
    }
    if let Some(namespace) = &self.namespace {
      config.service.namespace.clone_from(namespace);
    }
    if let Some(url) = &self.url {
      config.app.url.clone_from(url);
    }
    if let Some(protocol) = self.protocol {
      config.app.protocol = protocol;
    }
    config.logging.debug |= self.debug;
    config.logging.color |= self.color;
    config.logging.json |= self.json;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parses_original_flag_names() {
    let cli = Cli::try_parse_from([
      "atlassian_status_exporter",
      "--app.url",
      "jira.example.com",
      "--app.protocal",
      "http",
      "--svc.port",
      "9100",
      "--svc.timeout",
      "5",
      "--debug",
    ])
    .unwrap();

    let mut config = AppConfig::default();
    cli.apply(&mut config);
    assert_eq!(config.app.url, "jira.example.com");
    assert_eq!(config.app.protocol, Protocol::Http);
    assert_eq!(config.service.port, 9100);
    assert_eq!(config.service.timeout_seconds, 5);
    assert!(config.logging.debug);
    assert!(!config.logging.color);
  }

  #[test]
  fn test_unset_flags_keep_file_values() {
    let cli = Cli::try_parse_from(["atlassian_status_exporter"]).unwrap();
    let mut config = AppConfig::default();
    config.service.port = 8080;
    config.logging.json = true;
    cli.apply(&mut config);
    assert_eq!(config.service.port, 8080);
    assert!(config.logging.json);
  }

  #[test]
  fn test_rejects_unknown_protocol() {
    let parsed = Cli::try_parse_from(["atlassian_status_exporter", "--app.protocol", "ftp"]);
    assert!(parsed.is_err());
  }
}
