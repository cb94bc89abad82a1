//! Store boundary
//!
//! The slug engine never checks slug existence itself; the store's
//! unique indexes are the only arbiter. Anything implementing
//! `DocumentStore` can sit behind the retry loop as long as it honors
//! the duplicate-key reporting contract in `errors`.
//!
//! # Invariants
//!
//! - Duplicate-key failures carry numeric class 11000
//! - Their message embeds `index: <name> dup key:` with the violated
//!   index's name
//! - Save is atomic per document per collection

mod errors;
mod memory;

pub use errors::{StoreError, StoreErrorCode, StoreResult};
pub use memory::MemoryStore;

use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

/// Future type returned by store operations
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = StoreResult<T>> + Send + 'a>>;

/// Asynchronous document store with named unique indexes
pub trait DocumentStore: Send + Sync {
    /// Insert the document, or replace the stored one when `_id` matches.
    /// Returns the stored document with its assigned `_id`.
    fn save<'a>(&'a self, collection: &'a str, document: &'a Value) -> StoreFuture<'a, Value>;
}
