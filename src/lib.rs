//! slugsafe - retry-driven unique slugs for document stores
//!
//! Generates candidate slugs from document fields and retries writes that
//! collide on the configured unique index. The store's uniqueness
//! constraint is the only arbiter of "is this slug taken"; there is no
//! separate existence check.

pub mod config;
pub mod observability;
pub mod save;
pub mod schema;
pub mod slug;
pub mod store;
