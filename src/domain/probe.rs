//! Probe target and per-scrape report types.
//!
//! A `ProbeReport` is the complete outcome of one scrape. Adapters render
//! it into whatever metric format they serve; the report itself carries no
//! dependency on a metrics library.

use std::time::Duration;

use super::state::AppState;

/// Immutable description of the endpoint being probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    /// Full URL of the status endpoint (`<scheme>://<host>/status`).
    pub status_url: String,
    /// Value of the `url` label on every emitted metric.
    pub label: String,
    /// Upper bound for one GET, body included.
    pub timeout: Duration,
}

impl ProbeTarget {
    /// Build a target for `<scheme>://<host>/status`, labeled by host.
    pub fn new(scheme: &str, host: &str, timeout: Duration) -> Self {
        Self {
            status_url: format!("{scheme}://{host}/status"),
            label: host.to_string(),
            timeout,
        }
    }
}

/// Whether any HTTP response came back at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reachability {
    pub up: bool,
    /// Status code of the response; `None` on transport failure.
    pub http_code: Option<u16>,
}

impl Reachability {
    pub const fn unreachable() -> Self {
        Self {
            up: false,
            http_code: None,
        }
    }

    pub const fn reached(http_code: u16) -> Self {
        Self {
            up: true,
            http_code: Some(http_code),
        }
    }

    /// Gauge value: 1 when reached, 0 otherwise.
    pub const fn value(&self) -> f64 {
        if self.up { 1.0 } else { 0.0 }
    }

    /// Value of the `httpcode` label (empty on transport failure).
    pub fn http_label(&self) -> String {
        self.http_code.map(|c| c.to_string()).unwrap_or_default()
    }
}

/// Classified application state together with the HTTP code it came with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateReading {
    pub state: AppState,
    pub http_code: u16,
}

/// Outcome of a single scrape.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeReport {
    /// Label identifying the probed application.
    pub url: String,
    pub reachability: Reachability,
    /// Absent when the endpoint could not be reached.
    pub state: Option<StateReading>,
    /// Absent on transport failure and on the blank-body path.
    pub duration: Option<Duration>,
}

impl ProbeReport {
    /// Report for a scrape that got no HTTP response.
    pub fn unreachable(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reachability: Reachability::unreachable(),
            state: None,
            duration: None,
        }
    }
}
