//! Slug Generation Tests
//!
//! Properties of the default generator:
//! - Deterministic: same values + attempt index = same slug
//! - Progress: attempt indices produce pairwise distinct slugs while the
//!   bound leaves room for the disambiguator
//! - Truncation respects the bound and never leaves a dangling separator

use serde_json::json;
use slugsafe::slug::{normalize, SlugGenerator};

// =============================================================================
// Helper Functions
// =============================================================================

fn name_generator() -> SlugGenerator {
    SlugGenerator::FieldList(vec!["firstname".into(), "lastname".into()])
}

// =============================================================================
// Determinism
// =============================================================================

/// Same inputs and attempt index always produce the same string.
#[test]
fn test_generation_is_deterministic() {
    let generator = name_generator();
    let doc = json!({"firstname": "Ada", "lastname": "Lovelace"});

    for attempt in 0..20 {
        let first = generator.generate(&doc, attempt, Some(30));
        for _ in 0..10 {
            assert_eq!(generator.generate(&doc, attempt, Some(30)), first);
        }
    }
}

/// Normalization is deterministic too.
#[test]
fn test_normalization_is_deterministic() {
    let input = "Crème Brûlée & Friends";
    assert_eq!(normalize(input), normalize(input));
    assert_eq!(normalize(input), "creme-brulee-friends");
}

// =============================================================================
// Uniqueness Progress
// =============================================================================

/// Attempt indices 0..N yield pairwise distinct slugs with room to spare.
#[test]
fn test_attempts_are_pairwise_distinct() {
    let generator = name_generator();
    let doc = json!({"firstname": "John", "lastname": "Doe"});

    let slugs: Vec<String> = (0..50)
        .map(|attempt| generator.generate(&doc, attempt, None))
        .collect();
    for (i, a) in slugs.iter().enumerate() {
        for b in slugs.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

/// A bound tight enough to swallow the disambiguator collapses attempts.
#[test]
fn test_tight_bound_collapses_attempts() {
    let generator = name_generator();
    let doc = json!({"firstname": "John", "lastname": "Doe"});

    // Two characters cannot hold distinct three-digit disambiguators
    let a = generator.generate(&doc, 9, Some(2));
    let b = generator.generate(&doc, 99, Some(2));
    assert_eq!(a, "10");
    assert_eq!(a, b);
}

// =============================================================================
// Truncation Correctness
// =============================================================================

/// A 40-character body truncates to the bound with no trailing separator.
#[test]
fn test_truncation_respects_bound_without_dangling_separator() {
    let generator = SlugGenerator::FieldList(vec!["title".into()]);
    let doc = json!({"title": "a very long headline that keeps going on"});
    let body = generator.generate(&doc, 0, None);
    assert_eq!(body.len(), 40);

    let truncated = generator.generate(&doc, 0, Some(25));
    assert!(truncated.len() <= 25);
    assert!(!truncated.ends_with('-'));
}

/// Attempt 1 appends "-2" and still respects the bound.
#[test]
fn test_truncation_reserves_room_for_suffix() {
    let generator = SlugGenerator::FieldList(vec!["title".into()]);
    let doc = json!({"title": "a very long headline that keeps going on"});

    let slug = generator.generate(&doc, 1, Some(25));
    assert!(slug.len() <= 25);
    assert!(slug.ends_with("-2"));
    assert!(!slug.trim_end_matches("-2").ends_with('-'));
}

// =============================================================================
// Normalization
// =============================================================================

/// Accented characters transliterate to their base-latin form.
#[test]
fn test_transliteration() {
    assert_eq!(normalize("Škoda Øresund"), "skoda-oresund");
    assert_eq!(normalize("François"), "francois");
}

/// Disallowed characters collapse into single separators.
#[test]
fn test_disallowed_characters_collapse() {
    assert_eq!(normalize("Rock & Roll!!!  (Live)"), "rock-roll-live");
}

/// Missing and null source fields are skipped, not rendered.
#[test]
fn test_missing_fields_are_skipped() {
    let generator = name_generator();
    assert_eq!(
        generator.generate(&json!({"firstname": null, "lastname": "Doe"}), 0, None),
        "doe"
    );
}
