//! Model registration
//!
//! A `SlugModel` binds a schema to at most one slug configuration. The
//! save path reads the validated configuration from here on every call;
//! a model without one degrades to a plain passthrough save.

use crate::schema::Schema;

use super::errors::{ConfigError, ConfigResult};
use super::options::SlugOptions;
use super::validator::SlugConfig;

/// A schema plus its (at most one) slug configuration
#[derive(Debug, Clone)]
pub struct SlugModel {
    schema: Schema,
    slug: Option<SlugConfig>,
}

impl SlugModel {
    /// Create a model over a structurally valid schema.
    pub fn new(schema: Schema) -> ConfigResult<Self> {
        schema
            .validate_structure()
            .map_err(ConfigError::InvalidSchema)?;
        Ok(Self { schema, slug: None })
    }

    /// Attach and validate a slug configuration. A second attach on the
    /// same model is an error.
    pub fn attach(&mut self, options: SlugOptions) -> ConfigResult<()> {
        if self.slug.is_some() {
            return Err(ConfigError::AlreadyAttached(self.schema.collection.clone()));
        }
        self.slug = Some(SlugConfig::validate(options, &self.schema)?);
        Ok(())
    }

    /// Collection this model persists into
    pub fn collection(&self) -> &str {
        &self.schema.collection
    }

    /// The underlying schema
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The attached slug configuration, if any
    pub fn slug_config(&self) -> Option<&SlugConfig> {
        self.slug.as_ref()
    }
}
