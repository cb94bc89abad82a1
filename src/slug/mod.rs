//! Slug text normalization and candidate generation
//!
//! # Design Principles
//!
//! - Pure functions: identical inputs always produce the identical slug
//! - Normalized output is ASCII `[a-z0-9-]`, never starts or ends with
//!   the separator
//! - Attempt N > 0 carries the numeric disambiguator N + 1

mod generator;
mod normalize;

pub use generator::{GeneratorFn, SlugGenerator};
pub use normalize::{normalize, SEPARATOR};
