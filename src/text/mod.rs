use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lazy-initialized regex patterns for text normalization
static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();
static TRAILING_TAG_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_whitespace_regex() -> &'static Regex {
    WHITESPACE_REGEX.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Trailing annotation tags stripped from titles, bracketed or bare.
/// Closed set: anything else ("Remix", "Club Mix", ...) is kept.
fn get_trailing_tag_regex() -> &'static Regex {
    TRAILING_TAG_REGEX.get_or_init(|| {
        Regex::new(
            r"(?i)[\s\-]*[(\[]?\s*\b(?:official|video|audio|remaster(?:ed)?|deluxe|edition|version|live|acoustic|instrumental)(?:\s+(?:official|video|audio|remaster(?:ed)?|deluxe|edition|version|live|acoustic|instrumental))*\s*[)\]]?\s*$",
        )
        .unwrap()
    })
}

/// Dash-like code points collapsed to a plain ASCII hyphen
const DASH_LIKE: &[char] = &[
    '\u{2010}', // hyphen
    '\u{2011}', // non-breaking hyphen
    '\u{2012}', // figure dash
    '\u{2013}', // en dash
    '\u{2014}', // em dash
    '\u{2015}', // horizontal bar
    '\u{2212}', // minus sign
];

/// Normalize for display: keeps accented characters.
///
/// Transformation order is load-bearing (colon, dashes, whitespace,
/// trailing tag) — reordering changes output on mixed inputs.
pub fn normalize_display(input: &str) -> String {
    normalize_inner(input, false)
}

/// Normalize for matching: folds diacritics and lowercases, so that
/// "Mylène" and "mylene" compare equal downstream.
pub fn normalize_matching(input: &str) -> String {
    normalize_inner(input, true).to_lowercase()
}

fn normalize_inner(input: &str, fold_diacritics: bool) -> String {
    let mut result = if fold_diacritics {
        input.nfd().filter(|c| !is_combining_mark(*c)).collect()
    } else {
        input.to_string()
    };

    // "Artist: Title" and the full-width variant behave like "Artist - Title"
    result = result.replace([':', '\u{FF1A}'], " - ");

    result = result
        .chars()
        .map(|c| if DASH_LIKE.contains(&c) { '-' } else { c })
        .collect();

    result = get_whitespace_regex()
        .replace_all(&result, " ")
        .trim()
        .to_string();

    strip_trailing_tag(&result)
}

/// Strip a trailing closed-set annotation ("(Remastered)", "Official Video", ...).
/// Never empties a non-empty string: a title that IS one of the tag words
/// ("Live", "Deluxe") survives untouched.
fn strip_trailing_tag(input: &str) -> String {
    let stripped = get_trailing_tag_regex().replace(input, "");
    let stripped = stripped.trim();
    if stripped.is_empty() && !input.is_empty() {
        input.to_string()
    } else {
        stripped.to_string()
    }
}

/// Replace ASCII and full-width colons with the canonical " - " separator
/// without running the rest of the normalization pipeline. Used by the
/// extractor before separator splitting.
pub fn colons_to_separator(input: &str) -> String {
    input.replace([':', '\u{FF1A}'], " - ")
}
