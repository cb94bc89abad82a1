//! Configuration error types
//!
//! Raised synchronously at registration time; never retried and never
//! surfaced through the save path.

use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Slug configuration and registration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No generation source configured
    #[error("Slug configuration requires generate_from")]
    MissingGenerateFrom,

    /// No index name configured
    #[error("Slug configuration requires an index name")]
    MissingIndex,

    /// Field-list form with no fields
    #[error("generate_from field list is empty")]
    EmptyGenerateFrom,

    /// max_attempts present but below 1
    #[error("max_attempts must be at least 1")]
    InvalidMaxAttempts,

    /// max_length present but below 1
    #[error("max_length must be at least 1")]
    InvalidMaxLength,

    /// repeat_limit below 1
    #[error("repeat_limit must be at least 1")]
    InvalidRepeatLimit,

    /// Slug field not declared in the schema
    #[error("Slug field '{0}' is not declared in the schema")]
    UnknownSlugField(String),

    /// Named index not declared in the schema
    #[error("Index '{0}' is not declared in the schema")]
    UnknownIndex(String),

    /// Named index exists but does not enforce uniqueness
    #[error("Index '{0}' does not enforce uniqueness")]
    IndexNotUnique(String),

    /// Named index does not constrain the slug field
    #[error("Index '{0}' does not cover slug field '{1}'")]
    SlugFieldNotIndexed(String, String),

    /// Slug configuration attached twice to the same model
    #[error("Slug configuration already attached to collection '{0}'")]
    AlreadyAttached(String),

    /// Schema failed its own structural validation
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),
}

impl ConfigError {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::MissingGenerateFrom => "SLUG_CONFIG_MISSING_GENERATE_FROM",
            ConfigError::MissingIndex => "SLUG_CONFIG_MISSING_INDEX",
            ConfigError::EmptyGenerateFrom => "SLUG_CONFIG_EMPTY_GENERATE_FROM",
            ConfigError::InvalidMaxAttempts => "SLUG_CONFIG_INVALID_MAX_ATTEMPTS",
            ConfigError::InvalidMaxLength => "SLUG_CONFIG_INVALID_MAX_LENGTH",
            ConfigError::InvalidRepeatLimit => "SLUG_CONFIG_INVALID_REPEAT_LIMIT",
            ConfigError::UnknownSlugField(_) => "SLUG_CONFIG_UNKNOWN_SLUG_FIELD",
            ConfigError::UnknownIndex(_) => "SLUG_CONFIG_UNKNOWN_INDEX",
            ConfigError::IndexNotUnique(_) => "SLUG_CONFIG_INDEX_NOT_UNIQUE",
            ConfigError::SlugFieldNotIndexed(_, _) => "SLUG_CONFIG_SLUG_FIELD_NOT_INDEXED",
            ConfigError::AlreadyAttached(_) => "SLUG_CONFIG_ALREADY_ATTACHED",
            ConfigError::InvalidSchema(_) => "SLUG_CONFIG_INVALID_SCHEMA",
        }
    }
}
