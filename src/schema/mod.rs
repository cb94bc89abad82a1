//! Schema descriptors for slug-bearing collections
//!
//! A schema declares the fields a document may carry and the named
//! indexes the backing store enforces. The slug engine consults it only
//! at registration time.
//!
//! # Design Principles
//!
//! - Declarative: fields and indexes, no behavior
//! - Validated once: structural checks at model creation, never per-save
//! - Uniqueness lives here: an index is the only way to declare it

mod types;

pub use types::{FieldDef, FieldType, IndexDef, Schema};
