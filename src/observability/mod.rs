//! Observability for the save-retry loop
//!
//! # Principles
//!
//! 1. Observability is read-only: no effect on retry decisions
//! 2. Structured logs, one line = one event
//! 3. Deterministic field ordering
//! 4. Synchronous, no buffering

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
