//! Pre-persist hook
//!
//! Runs at the top of every retry iteration, before the store call.
//! With a tracker present the candidate for the current attempt index
//! is written to the slug field; without one the document passes to the
//! store untouched.

use serde_json::Value;

use crate::config::SlugConfig;

use super::tracker::AttemptTracker;

/// True when the document carries no usable value at the slug path
pub fn needs_generation(document: &Value, slug_path: &str) -> bool {
    matches!(document.get(slug_path), None | Some(Value::Null))
}

/// Write the candidate for the tracker's current attempt index into the
/// document. Returns the candidate, or None for non-object documents
/// (the store rejects those on its own).
pub fn apply_candidate(
    document: &mut Value,
    config: &SlugConfig,
    tracker: &AttemptTracker,
) -> Option<String> {
    let candidate = config.generate(document, tracker.attempts());
    let fields = document.as_object_mut()?;
    fields.insert(
        config.slug_path().to_string(),
        Value::String(candidate.clone()),
    );
    Some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SlugConfig, SlugOptions};
    use crate::schema::{FieldDef, IndexDef, Schema};
    use serde_json::json;
    use std::collections::HashMap;

    fn sample_config() -> SlugConfig {
        let mut fields = HashMap::new();
        fields.insert("title".into(), FieldDef::required_string());
        fields.insert("slug".into(), FieldDef::optional_string());
        let schema =
            Schema::new("posts", fields).with_index(IndexDef::unique("slug_unique", ["slug"]));

        SlugConfig::validate(
            SlugOptions::new()
                .generate_from_field("title")
                .index("slug_unique"),
            &schema,
        )
        .unwrap()
    }

    #[test]
    fn test_needs_generation_on_absent_or_null() {
        assert!(needs_generation(&json!({"title": "Hi"}), "slug"));
        assert!(needs_generation(&json!({"title": "Hi", "slug": null}), "slug"));
        assert!(!needs_generation(
            &json!({"title": "Hi", "slug": "explicit"}),
            "slug"
        ));
    }

    #[test]
    fn test_candidate_written_to_slug_path() {
        let config = sample_config();
        let mut doc = json!({"title": "Hello World"});
        let candidate = apply_candidate(&mut doc, &config, &AttemptTracker::new()).unwrap();
        assert_eq!(candidate, "hello-world");
        assert_eq!(doc["slug"], "hello-world");
    }

    #[test]
    fn test_candidate_follows_attempt_index() {
        let config = sample_config();
        let mut tracker = AttemptTracker::new();
        tracker.record("hello-world");

        let mut doc = json!({"title": "Hello World"});
        let candidate = apply_candidate(&mut doc, &config, &tracker).unwrap();
        assert_eq!(candidate, "hello-world-2");
        assert_eq!(doc["slug"], "hello-world-2");
    }

    #[test]
    fn test_non_object_document_skipped() {
        let config = sample_config();
        let mut doc = json!("scalar");
        assert!(apply_candidate(&mut doc, &config, &AttemptTracker::new()).is_none());
        assert_eq!(doc, json!("scalar"));
    }
}
