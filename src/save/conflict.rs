//! Conflict classification
//!
//! The single place that interprets store failures. A failure is a
//! retryable conflict only when its numeric class is duplicate-key AND
//! the violated index name can be extracted from the message. Message
//! formats drift across store versions, so "cannot parse" is an
//! explicit unclassifiable state that is never retried.

use std::sync::OnceLock;

use regex::Regex;

use crate::store::{StoreError, StoreErrorCode};

/// Outcome of classifying a store failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conflict {
    /// Duplicate-key violation on the named index
    Duplicate {
        /// Name of the violated index
        index: String,
    },
    /// Duplicate-key class, but the index name could not be extracted
    Unclassifiable,
    /// Not a uniqueness violation at all
    Unrelated,
}

/// Matches `index: <name> dup key`, tolerating the qualified
/// `<collection>.$<name>` form some backends emit.
fn index_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"index:\s*(?:\S+\$)?(\S+)\s*dup key").expect("index pattern is valid")
    })
}

/// Extract the violated index name from a duplicate-key message.
pub fn extract_index_name(message: &str) -> Option<String> {
    index_pattern()
        .captures(message)
        .map(|captures| captures[1].to_string())
}

/// Classify a store failure.
pub fn classify(error: &StoreError) -> Conflict {
    if error.code() != StoreErrorCode::DuplicateKey {
        return Conflict::Unrelated;
    }
    match extract_index_name(error.message()) {
        Some(index) => Conflict::Duplicate { index },
        None => Conflict::Unclassifiable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_index_name() {
        let message =
            "E11000 duplicate key error collection: users index: slug_unique dup key: { slug: \"john-doe\" }";
        assert_eq!(extract_index_name(message).as_deref(), Some("slug_unique"));
    }

    #[test]
    fn test_extracts_qualified_index_name() {
        let message = "E11000 duplicate key error index: app.users.$slug_unique dup key: { : \"x\" }";
        assert_eq!(extract_index_name(message).as_deref(), Some("slug_unique"));
    }

    #[test]
    fn test_malformed_message_yields_no_match() {
        assert_eq!(extract_index_name("duplicate key error, no details"), None);
        assert_eq!(extract_index_name(""), None);
    }

    #[test]
    fn test_classify_duplicate_on_named_index() {
        let error = StoreError::duplicate_key("users", "slug_unique", "{ slug: \"x\" }");
        assert_eq!(
            classify(&error),
            Conflict::Duplicate {
                index: "slug_unique".into()
            }
        );
    }

    #[test]
    fn test_classify_unparseable_duplicate() {
        let error = StoreError::new(StoreErrorCode::DuplicateKey, "duplicate key (format v2)");
        assert_eq!(classify(&error), Conflict::Unclassifiable);
    }

    #[test]
    fn test_classify_unrelated_failure() {
        assert_eq!(classify(&StoreError::io("disk full")), Conflict::Unrelated);
        assert_eq!(
            classify(&StoreError::cancelled("operation timed out")),
            Conflict::Unrelated
        );
        // A non-duplicate error mentioning an index is still unrelated
        let error = StoreError::io("while rebuilding index: slug_unique dup key: cache");
        assert_eq!(classify(&error), Conflict::Unrelated);
    }
}
