//! Candidate slug generation
//!
//! `generate` is pure: the same document values and attempt index always
//! produce the same candidate. Attempt 0 is the plain normalized body;
//! attempt N > 0 carries the numeric disambiguator N + 1. With a length
//! bound, the body is truncated so body + suffix fits, and a dangling
//! separator left by truncation is stripped before the suffix goes on.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::normalize::{normalize, SEPARATOR};

/// Custom generator signature: (document, attempt, max_length) -> slug.
/// Output is used as-is; the caller owns determinism.
pub type GeneratorFn = dyn Fn(&Value, usize, Option<usize>) -> String + Send + Sync;

/// Candidate slug source
#[derive(Clone)]
pub enum SlugGenerator {
    /// Join the named document fields in order, normalized
    FieldList(Vec<String>),
    /// Caller-supplied deterministic function
    Custom(Arc<GeneratorFn>),
}

impl fmt::Debug for SlugGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlugGenerator::FieldList(fields) => f.debug_tuple("FieldList").field(fields).finish(),
            SlugGenerator::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl SlugGenerator {
    /// Generate the candidate for the given attempt index.
    pub fn generate(&self, document: &Value, attempt: usize, max_length: Option<usize>) -> String {
        match self {
            SlugGenerator::Custom(generator) => generator(document, attempt, max_length),
            SlugGenerator::FieldList(fields) => {
                generate_from_fields(fields, document, attempt, max_length)
            }
        }
    }
}

/// Default generator: join present scalar field values, normalize, apply
/// the disambiguator and the length bound. Missing, null, and non-scalar
/// values are skipped.
fn generate_from_fields(
    fields: &[String],
    document: &Value,
    attempt: usize,
    max_length: Option<usize>,
) -> String {
    let mut joined = String::new();
    for field in fields {
        let part = match document.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => continue,
        };
        if !joined.is_empty() {
            joined.push(SEPARATOR);
        }
        joined.push_str(&part);
    }

    compose(&normalize(&joined), attempt, max_length)
}

/// Apply the attempt disambiguator and the length bound to a normalized
/// body. The body is ASCII (normalize guarantees it), so byte slicing is
/// character-safe.
fn compose(body: &str, attempt: usize, max_length: Option<usize>) -> String {
    debug_assert!(body.is_ascii());

    if attempt == 0 {
        return match max_length {
            Some(max) => trim_separators(&body[..body.len().min(max)]).to_string(),
            None => body.to_string(),
        };
    }

    let digits = (attempt + 1).to_string();
    match max_length {
        None => {
            if body.is_empty() {
                digits
            } else {
                format!("{}{}{}", body, SEPARATOR, digits)
            }
        }
        Some(max) => {
            // Room needed for the separator plus the digits
            let reserve = digits.len() + 1;
            if reserve > max {
                return digits[..digits.len().min(max)].to_string();
            }
            let kept = trim_separators(&body[..body.len().min(max - reserve)]);
            if kept.is_empty() {
                digits[..digits.len().min(max)].to_string()
            } else {
                format!("{}{}{}", kept, SEPARATOR, digits)
            }
        }
    }
}

fn trim_separators(s: &str) -> &str {
    s.trim_matches(SEPARATOR)
}
