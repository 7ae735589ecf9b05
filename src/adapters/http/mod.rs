//! Outbound HTTP Adapters
//!
//! Implements the `StatusSource` port with reqwest.

pub mod client;

pub use client::ReqwestStatusSource;
