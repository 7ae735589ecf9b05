//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the usecases layer requires from
//! the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `StatusSource`: HTTP GET against the application's `/status` endpoint

pub mod status_source;

pub use status_source::{StatusResponse, StatusSource, TransportError};
