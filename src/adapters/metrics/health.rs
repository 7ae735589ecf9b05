//! Health State - Liveness and Readiness
//!
//! The exporter is live as long as the process runs and ready until a
//! shutdown signal arrives. Readiness flips once and never comes back.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Shared readiness flag polled by `/ready`.
#[derive(Debug)]
pub struct HealthState {
  ready: AtomicBool,
}

impl HealthState {
  /// Create a health state (ready by default).
  pub const fn new() -> Self {
    Self {
      ready: AtomicBool::new(true),
    }
  }

  pub fn is_ready(&self) -> bool {
    self.ready.load(Ordering::Relaxed)
  }

  /// Mark the exporter as draining.
  pub fn mark_shutting_down(&self) {
    self.ready.store(false, Ordering::Relaxed);
  }
}

impl Default for HealthState {
  fn default() -> Self {
    Self::new()
  }
}

/// Liveness probe: always returns 200 if the process is running.
pub async fn liveness() -> impl IntoResponse {
  (StatusCode::OK, "OK")
}

/// Readiness probe: 503 once shutdown has started.
pub async fn readiness(State(state): State<Arc<HealthState>>) -> impl IntoResponse {
  if state.is_ready() {
    (StatusCode::OK, "READY")
  } else {
    (StatusCode::SERVICE_UNAVAILABLE, "NOT READY")
  }
}
