//! Tracing subscriber setup.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Filter used when `RUST_LOG` is unset.
pub const fn default_directive(config: &LoggingConfig) -> &'static str {
  if config.debug { "debug" } else { "info" }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// debug toggle.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_ansi(config.color);

  if config.json {
    builder
      .json()
      .try_init()
      .map_err(|e| anyhow::anyhow!("Failed to install JSON subscriber: {e}"))?;
  } else {
    builder
      .try_init()
      .map_err(|e| anyhow::anyhow!("Failed to install subscriber: {e}"))?;
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_debug_toggle_selects_directive() {
    let mut config = LoggingConfig::default();
    assert_eq!(default_directive(&config), "info");
    config.debug = true;
    assert_eq!(default_directive(&config), "debug");
  }
}
