//! Configuration Loader - File Loading and Validation
//!
//! Handles loading the optional TOML file, overlaying command line
//! flags, and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::AppConfig;
use super::cli::Cli;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if the file can't be read or TOML parsing fails.
pub fn load_config(path: &Path) -> Result<AppConfig> {
  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  toml::from_str(&content)
    .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve the effective configuration: file (if any), then flags.
///
/// # Errors
/// Returns an error if the file fails to load or validation fails.
pub fn resolve(cli: &Cli) -> Result<AppConfig> {
  let mut config = match &cli.config {
    Some(path) => load_config(path)?,
    None => AppConfig::default(),
  };
  cli.apply(&mut config);
  config.app.url = config.app.url.trim().to_string();
  validate_config(&config)?;

  debug!(
    url = %config.app.url,
    protocol = %config.app.protocol,
    timeout_seconds = config.service.timeout_seconds,
    "Configuration resolved"
  );

  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - A target host without scheme, path or whitespace
/// - A positive probe timeout
/// - A namespace usable as a metric name prefix
pub fn validate_config(config: &AppConfig) -> Result<()> {
  let url = config.app.url.as_str();
  anyhow::ensure!(!url.is_empty(), "app.url must be provided");
  anyhow::ensure!(
    !url.contains(char::is_whitespace),
    "app.url must not contain whitespace, got {url:?}"
  );
  anyhow::ensure!(
    !url.contains("://"),
    "app.url must be a host without scheme (set app.protocol instead), got {url}"
  );
  anyhow::ensure!(
    !url.contains('/'),
    "app.url must not contain a path, /status is appended automatically, got {url}"
  );

  anyhow::ensure!(
    config.service.timeout_seconds > 0,
    "svc.timeout must be positive"
  );
  anyhow::ensure!(
    !config.service.address.is_empty(),
    "svc.address must not be empty"
  );

  let ns = &config.service.namespace;
  anyhow::ensure!(
    !ns.is_empty()
      && !ns.starts_with(|c: char| c.is_ascii_digit())
      && ns.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
    "namespace must match [a-zA-Z_][a-zA-Z0-9_]*, got {ns}"
  );

  Ok(())
}
