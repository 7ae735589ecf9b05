//! Exporter HTTP Server - /metrics, /live, /ready
//!
//! Every `GET /metrics` runs exactly one probe on the request task and
//! renders its report. Nothing is cached between scrapes.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tracing::{error, info, instrument};

use super::health::{self, HealthState};
use super::prometheus::StatusMetrics;
use crate::usecases::StatusTranslator;

/// Everything a scrape request needs.
struct ScrapeContext {
  translator: StatusTranslator,
  metrics: StatusMetrics,
}

/// Axum server exposing the translated `/status` metrics.
pub struct ExporterServer {
  scrape: Arc<ScrapeContext>,
  health: Arc<HealthState>,
}

impl ExporterServer {
  /// Create a server around a translator and renderer.
  pub fn new(
    translator: StatusTranslator,
    metrics: StatusMetrics,
    health: Arc<HealthState>,
  ) -> Self {
    Self {
      scrape: Arc::new(ScrapeContext {
        translator,
        metrics,
      }),
      health,
    }
  }

  /// Build the router (exposed for in-process tests).
  pub fn router(&self) -> Router {
    let scrape = Router::new()
      .route("/metrics", get(scrape_metrics))
      .with_state(Arc::clone(&self.scrape));

    let probes = Router::new()
      .route("/live", get(health::liveness))
      .route("/ready", get(health::readiness))
      .with_state(Arc::clone(&self.health));

    scrape.merge(probes)
  }

  /// Bind `bind_address` and serve until a shutdown signal.
  ///
  /// # Errors
  /// Returns an error if the address cannot be bound or the server fails.
  pub async fn run(
    self,
    bind_address: &str,
    shutdown_rx: broadcast::Receiver<()>,
  ) -> Result<()> {
    let listener = TcpListener::bind(bind_address)
      .await
      .with_context(|| format!("Failed to bind {bind_address}"))?;
    self.serve(listener, shutdown_rx).await
  }

  /// Serve on an already bound listener until a shutdown signal.
  ///
  /// # Errors
  /// Returns an error if the server fails.
  #[instrument(skip_all)]
  pub async fn serve(
    self,
    listener: TcpListener,
    mut shutdown_rx: broadcast::Receiver<()>,
  ) -> Result<()> {
    let app = self.router();
    let address = listener.local_addr().context("Listener has no address")?;
    info!(
      %address,
      status_url = %self.scrape.translator.target().status_url,
      "Exporter server started"
    );

    axum::serve(listener, app)
      .with_graceful_shutdown(async move {
        let _ = shutdown_rx.recv().await;
      })
      .await
      .context("Exporter server failed")?;

    info!("Exporter server stopped");
    Ok(())
  }
}

async fn scrape_metrics(State(ctx): State<Arc<ScrapeContext>>) -> Response {
  let report = ctx.translator.probe().await;
  match ctx.metrics.render(&report) {
    Ok(body) => ([(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)], body).into_response(),
    Err(e) => {
      error!(error = %e, "failed to encode metrics");
      (StatusCode::INTERNAL_SERVER_ERROR, "failed to encode metrics").into_response()
    }
  }
}
