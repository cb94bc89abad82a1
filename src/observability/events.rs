//! Save lifecycle events
//!
//! Typed events emitted by the retry loop, one per observable
//! transition. Names are stable for log consumers.

use std::fmt;

/// Observable events in the save-retry loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A candidate slug was generated and written to the document
    CandidateGenerated,
    /// The store reported a duplicate on the configured index
    SlugConflict,
    /// The loop is regenerating and retrying
    SaveRetry,
    /// The write succeeded
    SaveSucceeded,
    /// Retry budget exhausted
    MaxAttemptsExceeded,
    /// The generator repeated a candidate that already failed
    DuplicateGeneration,
    /// A failure propagated without retry
    SaveFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::CandidateGenerated => "SLUG_CANDIDATE_GENERATED",
            Event::SlugConflict => "SLUG_CONFLICT",
            Event::SaveRetry => "SLUG_SAVE_RETRY",
            Event::SaveSucceeded => "SLUG_SAVE_SUCCEEDED",
            Event::MaxAttemptsExceeded => "SLUG_MAX_ATTEMPTS_EXCEEDED",
            Event::DuplicateGeneration => "SLUG_DUPLICATE_GENERATION",
            Event::SaveFailed => "SLUG_SAVE_FAILED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_distinct() {
        let events = [
            Event::CandidateGenerated,
            Event::SlugConflict,
            Event::SaveRetry,
            Event::SaveSucceeded,
            Event::MaxAttemptsExceeded,
            Event::DuplicateGeneration,
            Event::SaveFailed,
        ];
        let mut names: Vec<&str> = events.iter().map(|e| e.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), events.len());
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(format!("{}", Event::SlugConflict), "SLUG_CONFLICT");
    }
}
