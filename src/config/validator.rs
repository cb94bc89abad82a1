//! Registration-time configuration validation
//!
//! Validation runs once, when a slug configuration is attached to a
//! model. Checks (strict order):
//! 1. A generation source and an index name are configured
//! 2. Numeric bounds are at least 1
//! 3. The slug field is declared in the schema
//! 4. The named index exists, enforces uniqueness, and covers the slug
//!    field
//!
//! The surviving configuration is immutable; `max_length` is resolved
//! here against the slug field's own declared bound.

use serde_json::Value;

use crate::schema::Schema;
use crate::slug::SlugGenerator;

use super::errors::{ConfigError, ConfigResult};
use super::options::{GenerateFrom, SlugOptions};

/// Validated, immutable slug configuration
#[derive(Debug, Clone)]
pub struct SlugConfig {
    slug_path: String,
    generator: SlugGenerator,
    index_name: String,
    max_attempts: Option<u32>,
    max_length: Option<usize>,
    repeat_limit: usize,
}

impl SlugConfig {
    /// Validate raw options against the schema.
    pub fn validate(options: SlugOptions, schema: &Schema) -> ConfigResult<Self> {
        let SlugOptions {
            slug_path,
            generate_from,
            index,
            max_attempts,
            max_length,
            repeat_limit,
        } = options;

        let generate_from = generate_from.ok_or(ConfigError::MissingGenerateFrom)?;
        let index_name = index.ok_or(ConfigError::MissingIndex)?;

        let generator = match generate_from {
            GenerateFrom::Fields(fields) if fields.is_empty() => {
                return Err(ConfigError::EmptyGenerateFrom)
            }
            GenerateFrom::Fields(fields) => SlugGenerator::FieldList(fields),
            GenerateFrom::Custom(generator) => SlugGenerator::Custom(generator),
        };

        if max_attempts == Some(0) {
            return Err(ConfigError::InvalidMaxAttempts);
        }
        if max_length == Some(0) {
            return Err(ConfigError::InvalidMaxLength);
        }
        if repeat_limit == 0 {
            return Err(ConfigError::InvalidRepeatLimit);
        }

        let slug_field = schema
            .field(&slug_path)
            .ok_or_else(|| ConfigError::UnknownSlugField(slug_path.clone()))?;

        let index_def = schema
            .index(&index_name)
            .ok_or_else(|| ConfigError::UnknownIndex(index_name.clone()))?;
        if !index_def.unique {
            return Err(ConfigError::IndexNotUnique(index_name));
        }
        if !index_def.covers(&slug_path) {
            return Err(ConfigError::SlugFieldNotIndexed(index_name, slug_path));
        }

        // Fall back to the slug field's own declared bound
        let max_length = max_length.or(slug_field.max_length);

        Ok(Self {
            slug_path,
            generator,
            index_name,
            max_attempts,
            max_length,
            repeat_limit,
        })
    }

    /// Field where the slug is stored
    pub fn slug_path(&self) -> &str {
        &self.slug_path
    }

    /// Name of the backing unique index
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// Retry attempt bound, if any
    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }

    /// Resolved slug length bound, if any
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Repeated-candidate give-up threshold
    pub fn repeat_limit(&self) -> usize {
        self.repeat_limit
    }

    /// Generate the candidate for the given attempt index.
    pub fn generate(&self, document: &Value, attempt: usize) -> String {
        self.generator.generate(document, attempt, self.max_length)
    }
}
