//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces.
//!
//! Use cases:
//! - `StatusTranslator`: one `/status` probe turned into a `ProbeReport`

pub mod translator;

pub use translator::StatusTranslator;
