//! Save-retry protocol
//!
//! The orchestrator wraps the store call in a flat retry loop:
//! generate candidate → write → classify failure → retry, give up, or
//! propagate. The store's unique index is the only arbiter of slug
//! availability.
//!
//! # Invariants
//!
//! - Only generated slugs are retried; explicit values pass through
//! - Conflicts on foreign indexes propagate verbatim
//! - A candidate that keeps failing without progress ends the cycle
//! - The attempt tracker lives on the loop, never on the document

mod conflict;
mod errors;
mod hook;
mod orchestrator;
mod tracker;

pub use conflict::{classify, extract_index_name, Conflict};
pub use errors::{SaveError, SaveResult};
pub use orchestrator::save_with_retry;
pub use tracker::AttemptTracker;
