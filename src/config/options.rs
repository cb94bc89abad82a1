//! Raw slug configuration surface
//!
//! Assembled by the caller through the builder methods, then handed to
//! `SlugModel::attach` for validation. Unset or out-of-range values are
//! reported there, not here.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::slug::GeneratorFn;

/// Give-up threshold when the generator keeps producing a candidate that
/// already failed in the same save cycle. Guards against generators whose
/// output collapses under truncation or normalization so that distinct
/// attempt indices map to the same string.
pub const DEFAULT_REPEAT_LIMIT: usize = 3;

/// Candidate source selection
#[derive(Clone)]
pub enum GenerateFrom {
    /// Join the named document fields with the separator
    Fields(Vec<String>),
    /// Caller-supplied deterministic function, output used as-is
    Custom(Arc<GeneratorFn>),
}

impl fmt::Debug for GenerateFrom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateFrom::Fields(fields) => f.debug_tuple("Fields").field(fields).finish(),
            GenerateFrom::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Raw slug configuration
#[derive(Debug, Clone)]
pub struct SlugOptions {
    pub(crate) slug_path: String,
    pub(crate) generate_from: Option<GenerateFrom>,
    pub(crate) index: Option<String>,
    pub(crate) max_attempts: Option<u32>,
    pub(crate) max_length: Option<usize>,
    pub(crate) repeat_limit: usize,
}

impl SlugOptions {
    /// Start from defaults: slug stored at `"slug"`, unbounded attempts,
    /// length derived from the schema field, repeat limit
    /// [`DEFAULT_REPEAT_LIMIT`].
    pub fn new() -> Self {
        Self {
            slug_path: "slug".to_string(),
            generate_from: None,
            index: None,
            max_attempts: None,
            max_length: None,
            repeat_limit: DEFAULT_REPEAT_LIMIT,
        }
    }

    /// Field where the slug is stored
    pub fn slug_path(mut self, path: impl Into<String>) -> Self {
        self.slug_path = path.into();
        self
    }

    /// Generate from the named document fields, joined in order
    pub fn generate_from<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.generate_from = Some(GenerateFrom::Fields(
            fields.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Generate from a single document field
    pub fn generate_from_field(self, field: impl Into<String>) -> Self {
        self.generate_from([field.into()])
    }

    /// Generate with a caller-supplied function
    pub fn generator<F>(mut self, generator: F) -> Self
    where
        F: Fn(&Value, usize, Option<usize>) -> String + Send + Sync + 'static,
    {
        self.generate_from = Some(GenerateFrom::Custom(Arc::new(generator)));
        self
    }

    /// Name of the uniqueness-enforcing index backing the slug
    pub fn index(mut self, name: impl Into<String>) -> Self {
        self.index = Some(name.into());
        self
    }

    /// Upper bound on retry attempts
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Upper bound on generated slug length
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Override the repeated-candidate give-up threshold
    pub fn repeat_limit(mut self, repeat_limit: usize) -> Self {
        self.repeat_limit = repeat_limit;
        self
    }
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SlugOptions::new();
        assert_eq!(options.slug_path, "slug");
        assert!(options.generate_from.is_none());
        assert!(options.index.is_none());
        assert!(options.max_attempts.is_none());
        assert!(options.max_length.is_none());
        assert_eq!(options.repeat_limit, DEFAULT_REPEAT_LIMIT);
    }

    #[test]
    fn test_builder_chain() {
        let options = SlugOptions::new()
            .slug_path("permalink")
            .generate_from(["firstname", "lastname"])
            .index("permalink_unique")
            .max_attempts(10)
            .max_length(25)
            .repeat_limit(5);
        assert_eq!(options.slug_path, "permalink");
        assert_eq!(options.index.as_deref(), Some("permalink_unique"));
        assert_eq!(options.max_attempts, Some(10));
        assert_eq!(options.max_length, Some(25));
        assert_eq!(options.repeat_limit, 5);
        match options.generate_from {
            Some(GenerateFrom::Fields(fields)) => {
                assert_eq!(fields, vec!["firstname", "lastname"])
            }
            other => panic!("unexpected generate_from: {:?}", other),
        }
    }

    #[test]
    fn test_single_field_form() {
        let options = SlugOptions::new().generate_from_field("title");
        match options.generate_from {
            Some(GenerateFrom::Fields(fields)) => assert_eq!(fields, vec!["title"]),
            other => panic!("unexpected generate_from: {:?}", other),
        }
    }
}
