//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies and serves the exporter's HTTP surface.
//!
//! Adapter categories:
//! - `http`: reqwest client for the Atlassian `/status` endpoint
//! - `metrics`: Prometheus rendering, `/metrics` server, health probes

pub mod http;
pub mod metrics;
