//! Save-retry orchestrator
//!
//! The state machine wrapping the store call: `Attempting`,
//! `Succeeded`, `GivingUp`, `Failed`.
//!
//! Flow per attempt (strict order):
//! 1. Pre-persist hook writes the candidate for the current attempt
//! 2. Submit the write; success returns the saved document
//! 3. Classify the failure; anything but a duplicate on the configured
//!    index propagates verbatim
//! 4. A candidate that already failed `repeat_limit` times gives up
//! 5. Record the candidate; reaching `max_attempts` gives up
//! 6. Loop back with the incremented attempt index
//!
//! There is no backoff between attempts and no existence pre-check; the
//! store's unique index arbitrates every candidate.

use serde_json::Value;

use crate::config::{SlugConfig, SlugModel};
use crate::observability::{Event, Logger};
use crate::store::{DocumentStore, StoreError};

use super::conflict::{classify, Conflict};
use super::errors::{SaveError, SaveResult};
use super::hook;
use super::tracker::AttemptTracker;

/// What to do after a failed write
#[derive(Debug)]
enum RetryDecision {
    /// Regenerate and try again
    Retry,
    /// Domain give-up: exhausted attempts or degenerate generator
    GiveUp(SaveError),
    /// Not ours: propagate the store error verbatim
    Fail(StoreError),
}

/// Save a document through the model's slug configuration, retrying
/// duplicate-key conflicts on the configured index with regenerated
/// candidates. Documents arriving with an explicit slug value, and
/// models with no slug configuration, pass straight through to the
/// store.
pub async fn save_with_retry(
    store: &dyn DocumentStore,
    model: &SlugModel,
    mut document: Value,
) -> SaveResult<Value> {
    let config = model.slug_config();
    let collection = model.collection();

    // A tracker exists only for generated slugs; an explicit value keeps
    // the document on the passthrough path for its whole cycle.
    let mut tracker = match config {
        Some(config)
            if document.is_object() && hook::needs_generation(&document, config.slug_path()) =>
        {
            Some(AttemptTracker::new())
        }
        _ => None,
    };

    loop {
        let candidate = match (config, tracker.as_ref()) {
            (Some(config), Some(tracker)) => {
                let candidate = hook::apply_candidate(&mut document, config, tracker);
                if let Some(candidate) = candidate.as_deref() {
                    let attempt = tracker.attempts().to_string();
                    Logger::trace(
                        Event::CandidateGenerated,
                        &[
                            ("attempt", attempt.as_str()),
                            ("collection", collection),
                            ("slug", candidate),
                        ],
                    );
                }
                candidate
            }
            _ => None,
        };

        let error = match store.save(collection, &document).await {
            Ok(saved) => {
                Logger::trace(Event::SaveSucceeded, &[("collection", collection)]);
                return Ok(saved);
            }
            Err(error) => error,
        };

        // Only a generated slug is ever retried
        let (config, tracker, attempted) = match (config, tracker.as_mut(), candidate) {
            (Some(config), Some(tracker), Some(attempted)) => (config, tracker, attempted),
            _ => {
                Logger::trace(
                    Event::SaveFailed,
                    &[("code", error.code().code()), ("collection", collection)],
                );
                return Err(SaveError::Store(error));
            }
        };

        match after_failure(config, tracker, attempted, error) {
            RetryDecision::Retry => {
                let attempt = tracker.attempts().to_string();
                let slug = tracker
                    .attempted()
                    .last()
                    .map(String::as_str)
                    .unwrap_or_default();
                Logger::trace(
                    Event::SlugConflict,
                    &[("collection", collection), ("slug", slug)],
                );
                Logger::trace(
                    Event::SaveRetry,
                    &[("attempt", attempt.as_str()), ("collection", collection)],
                );
            }
            RetryDecision::GiveUp(error) => {
                let event = match &error {
                    SaveError::MaxAttemptsExceeded { .. } => Event::MaxAttemptsExceeded,
                    _ => Event::DuplicateGeneration,
                };
                let message = error.to_string();
                Logger::warn(
                    event,
                    &[("collection", collection), ("error", message.as_str())],
                );
                return Err(error);
            }
            RetryDecision::Fail(error) => {
                Logger::trace(
                    Event::SaveFailed,
                    &[("code", error.code().code()), ("collection", collection)],
                );
                return Err(SaveError::Store(error));
            }
        }
    }
}

/// Decide what a failed write means for the cycle. Mutates the tracker
/// only when the decision is to keep going or to give up on attempts.
fn after_failure(
    config: &SlugConfig,
    tracker: &mut AttemptTracker,
    attempted: String,
    error: StoreError,
) -> RetryDecision {
    match classify(&error) {
        Conflict::Duplicate { index } if index == config.index_name() => {}
        _ => return RetryDecision::Fail(error),
    }

    let repeats = tracker.repeats_of(&attempted);
    if repeats >= config.repeat_limit() {
        return RetryDecision::GiveUp(SaveError::DuplicateGeneration {
            slug: attempted,
            repeats,
        });
    }
    tracker.record(attempted);

    if let Some(max_attempts) = config.max_attempts() {
        if tracker.attempts() >= max_attempts as usize {
            return RetryDecision::GiveUp(SaveError::MaxAttemptsExceeded {
                attempts: max_attempts,
            });
        }
    }

    RetryDecision::Retry
}
