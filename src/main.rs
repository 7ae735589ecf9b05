//! Atlassian Status Exporter — Entry Point
//!
//! Wiring sequence:
//! 1. Parse flags, load optional config file, validate
//! 2. Init tracing (text with full timestamps, or JSON)
//! 3. Create the reqwest status client bounded by the scrape timeout
//! 4. Create the StatusTranslator for `<protocol>://<url>/status`
//! 5. Serve /metrics, /live, /ready on `<svc.address>:<svc.port>`
//! 6. Wait for SIGINT/SIGTERM → mark not-ready → graceful shutdown

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::broadcast;
use tracing::{error, info};

use atlassian_status_exporter::adapters::http::ReqwestStatusSource;
use atlassian_status_exporter::adapters::metrics::{ExporterServer, HealthState, StatusMetrics};
use atlassian_status_exporter::config::{cli::Cli, loader};
use atlassian_status_exporter::logging;
use atlassian_status_exporter::ports::StatusSource;
use atlassian_status_exporter::usecases::StatusTranslator;

#[tokio::main]
async fn main() -> Result<()> {
  // ── 1. Flags + optional config file ─────────────────────
  let cli = Cli::parse();
  let config = loader::resolve(&cli).context("Invalid configuration")?;

  // ── 2. Logging ──────────────────────────────────────────
  logging::init(&config.logging)?;

  info!(
    version = env!("CARGO_PKG_VERSION"),
    url = %config.app.url,
    protocol = %config.app.protocol,
    timeout_seconds = config.service.timeout_seconds,
    "Starting Atlassian status exporter"
  );

  // ── 3. Outbound client ──────────────────────────────────
  let source: Arc<dyn StatusSource> = Arc::new(
    ReqwestStatusSource::new(config.timeout()).context("Failed to create status client")?,
  );

  // ── 4. Translator + renderer ────────────────────────────
  let translator: StatusTranslator = StatusTranslator::new(source, config.probe_target());
  let metrics = StatusMetrics::new(config.service.namespace.clone());
  let health = Arc::new(HealthState::new());

  // ── 5. Exporter server ──────────────────────────────────
  let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
  let bind_address = config.bind_address();
  let server = ExporterServer::new(translator, metrics, Arc::clone(&health));
  let mut server_handle =
    tokio::spawn(async move { server.run(&bind_address, shutdown_rx).await });

  // ── 6. Wait for a signal, or for the server to die ─────
  tokio::select! {
    signal = shutdown_signal() => {
      info!(signal, "Got signal, initiating graceful shutdown");
    }
    result = &mut server_handle => {
      // The server only returns on its own when it failed (e.g. bind error)
      return match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => {
          error!(error = %e, "Exporter server failed");
          Err(e)
        }
        Err(e) => Err(e).context("Exporter server task panicked"),
      };
    }
  }

  health.mark_shutting_down();
  let _ = shutdown_tx.send(());
  info!("Shutting down http server");

  server_handle
    .await
    .context("Exporter server task panicked")?
    .context("Shutdown error")?;

  info!("Graceful shutdown complete");
  Ok(())
}

/// Resolve when SIGINT or SIGTERM arrives; yields the signal name.
async fn shutdown_signal() -> &'static str {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      error!(error = %e, "Failed to listen for SIGINT");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    use tokio::signal::unix::{SignalKind, signal};
    match signal(SignalKind::terminate()) {
      Ok(mut stream) => {
        stream.recv().await;
      }
      Err(e) => {
        error!(error = %e, "Failed to listen for SIGTERM");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = ctrl_c => "SIGINT",
    () = terminate => "SIGTERM",
  }
}
