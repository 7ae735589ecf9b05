//! Metrics and Monitoring Adapters
//!
//! Renders probe reports as Prometheus metrics and serves them on
//! `/metrics`, next to `/live` and `/ready` probes, via axum 0.7.

pub mod health;
pub mod prometheus;
pub mod server;

pub use health::HealthState;
pub use self::prometheus::StatusMetrics;
pub use server::ExporterServer;
