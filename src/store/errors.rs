//! Store error types
//!
//! Error classes:
//! - DUPLICATE_KEY (11000)
//! - UNKNOWN_COLLECTION (26)
//! - COLLECTION_EXISTS (48)
//! - INVALID_DOCUMENT (121)
//! - CANCELLED (50)
//! - IO (1)
//!
//! Duplicate-key messages embed the violated index name as
//! `index: <name> dup key:`; conflict classification keys on the
//! numeric class first and parses the name second.

use std::fmt;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store error classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorCode {
    /// Unique constraint violated
    DuplicateKey,
    /// Referenced collection does not exist
    UnknownCollection,
    /// Collection created twice
    CollectionExists,
    /// Malformed document (not an object, bad `_id`)
    InvalidDocument,
    /// Operation cancelled or timed out by the caller/environment
    Cancelled,
    /// Underlying I/O failure
    Io,
}

impl StoreErrorCode {
    /// Numeric class code reported alongside the message
    pub fn numeric(&self) -> u32 {
        match self {
            StoreErrorCode::DuplicateKey => 11000,
            StoreErrorCode::UnknownCollection => 26,
            StoreErrorCode::CollectionExists => 48,
            StoreErrorCode::InvalidDocument => 121,
            StoreErrorCode::Cancelled => 50,
            StoreErrorCode::Io => 1,
        }
    }

    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            StoreErrorCode::DuplicateKey => "DUPLICATE_KEY",
            StoreErrorCode::UnknownCollection => "UNKNOWN_COLLECTION",
            StoreErrorCode::CollectionExists => "COLLECTION_EXISTS",
            StoreErrorCode::InvalidDocument => "INVALID_DOCUMENT",
            StoreErrorCode::Cancelled => "CANCELLED",
            StoreErrorCode::Io => "IO",
        }
    }
}

impl fmt::Display for StoreErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Store error with class code and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    code: StoreErrorCode,
    message: String,
}

impl StoreError {
    /// Build an error with an explicit code and message
    pub fn new(code: StoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Duplicate-key violation on a named index
    pub fn duplicate_key(collection: &str, index: &str, key: &str) -> Self {
        Self {
            code: StoreErrorCode::DuplicateKey,
            message: format!(
                "E11000 duplicate key error collection: {} index: {} dup key: {}",
                collection, index, key
            ),
        }
    }

    /// Referenced collection does not exist
    pub fn unknown_collection(name: &str) -> Self {
        Self {
            code: StoreErrorCode::UnknownCollection,
            message: format!("Collection '{}' does not exist", name),
        }
    }

    /// Collection created twice
    pub fn collection_exists(name: &str) -> Self {
        Self {
            code: StoreErrorCode::CollectionExists,
            message: format!("Collection '{}' already exists", name),
        }
    }

    /// Malformed document
    pub fn invalid_document(reason: impl Into<String>) -> Self {
        Self {
            code: StoreErrorCode::InvalidDocument,
            message: reason.into(),
        }
    }

    /// Operation cancelled or timed out
    pub fn cancelled(reason: impl Into<String>) -> Self {
        Self {
            code: StoreErrorCode::Cancelled,
            message: reason.into(),
        }
    }

    /// Underlying I/O failure
    pub fn io(reason: impl Into<String>) -> Self {
        Self {
            code: StoreErrorCode::Io,
            message: reason.into(),
        }
    }

    /// Returns the error class
    pub fn code(&self) -> StoreErrorCode {
        self.code
    }

    /// Returns the numeric class code
    pub fn numeric_code(&self) -> u32 {
        self.code.numeric()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.numeric(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for StoreError {}
