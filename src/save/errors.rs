//! Save-time error taxonomy
//!
//! Two domain errors end a retry cycle early; everything else is a
//! store failure propagated verbatim inside `Store`.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for save operations
pub type SaveResult<T> = Result<T, SaveError>;

/// Errors surfaced by the save-retry loop
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    /// Store failure propagated verbatim: unrelated errors, conflicts on
    /// foreign indexes, conflicts on explicit slugs, and unclassifiable
    /// conflict messages all land here
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Retry budget exhausted without a successful write
    #[error("max attempts ({attempts}) exceeded while searching for a unique slug")]
    MaxAttemptsExceeded {
        /// Configured attempt bound that was hit
        attempts: u32,
    },

    /// The generator repeated a failed candidate without progress
    #[error("candidate slug '{slug}' already failed {repeats} times; generator is not making progress")]
    DuplicateGeneration {
        /// The candidate that keeps being produced
        slug: String,
        /// Times it had already failed in this cycle
        repeats: usize,
    },
}

impl SaveError {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            SaveError::Store(error) => error.code().code(),
            SaveError::MaxAttemptsExceeded { .. } => "SLUG_MAX_ATTEMPTS_EXCEEDED",
            SaveError::DuplicateGeneration { .. } => "SLUG_DUPLICATE_GENERATION",
        }
    }

    /// The underlying store error, when this is a passthrough
    pub fn as_store(&self) -> Option<&StoreError> {
        match self {
            SaveError::Store(error) => Some(error),
            _ => None,
        }
    }
}
