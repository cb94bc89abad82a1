//! Deterministic slug text normalization
//!
//! Lower-cases, transliterates accented latin characters to their base
//! form, and collapses every run of disallowed characters into a single
//! separator. Output is ASCII `[a-z0-9-]` with no leading or trailing
//! separator.

/// Separator joining slug segments and the attempt disambiguator
pub const SEPARATOR: char = '-';

/// Normalize arbitrary text into slug form.
pub fn normalize(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut pending_separator = false;

    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            slug.push(ch.to_ascii_lowercase());
            pending_separator = false;
        } else if let Some(mapped) = transliterate(ch) {
            if pending_separator && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            slug.push_str(mapped);
            pending_separator = false;
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Base-latin transliterations for accented characters. Anything not
/// listed here and not ASCII alphanumeric collapses into the separator.
fn transliterate(ch: char) -> Option<&'static str> {
    let mapped = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "a",
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => "i",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => "o",
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => "u",
        'ý' | 'ÿ' | 'Ý' => "y",
        'ñ' | 'Ñ' => "n",
        'ç' | 'Ç' => "c",
        'ß' => "ss",
        'æ' | 'Æ' => "ae",
        'œ' | 'Œ' => "oe",
        'đ' | 'Đ' => "d",
        'ł' | 'Ł' => "l",
        'š' | 'Š' => "s",
        'ž' | 'Ž' => "z",
        _ => return None,
    };
    Some(mapped)
}
