//! Domain layer - Status classification and probe outcome models.
//!
//! Pure logic only: no I/O, no metrics library, no HTTP client.
//! Everything here is deterministic and testable in isolation.

pub mod probe;
pub mod state;
pub mod status;

// Re-export core types for convenience
pub use probe::{ProbeReport, ProbeTarget, Reachability, StateReading};
pub use state::{AppState, classify};
pub use status::{StatusBody, is_blank, parse_state};
