use crate::extract::{parse_from_id3_title, strip_featuring};
use regex::Regex;
use std::sync::OnceLock;

static BRACKET_YEAR_REGEX: OnceLock<Regex> = OnceLock::new();
static BARE_YEAR_REGEX: OnceLock<Regex> = OnceLock::new();
static TRAILING_YEAR_REGEX: OnceLock<Regex> = OnceLock::new();
static BRACKET_CONTENT_REGEX: OnceLock<Regex> = OnceLock::new();
static QUALITY_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
static PART_REGEX: OnceLock<Regex> = OnceLock::new();
static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
static SPACE_RUN_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_bracket_year_regex() -> &'static Regex {
    BRACKET_YEAR_REGEX.get_or_init(|| Regex::new(r"\s*[(\[](?:19|20)\d{2}[)\]]").unwrap())
}

fn get_bare_year_regex() -> &'static Regex {
    BARE_YEAR_REGEX.get_or_init(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap())
}

fn get_trailing_year_regex() -> &'static Regex {
    TRAILING_YEAR_REGEX.get_or_init(|| Regex::new(r"\s*\b(?:19|20)\d{2}\s*$").unwrap())
}

fn get_bracket_content_regex() -> &'static Regex {
    BRACKET_CONTENT_REGEX.get_or_init(|| Regex::new(r"\s*(?:\([^)]*\)|\[[^\]]*\])").unwrap())
}

fn get_quality_tag_regex() -> &'static Regex {
    QUALITY_TAG_REGEX.get_or_init(|| {
        Regex::new(
            r"(?i)\b(?:remaster(?:ed)?|live|remix|deluxe|edition|version|acoustic|instrumental|mono|stereo|extended|radio\s+edit)\b",
        )
        .unwrap()
    })
}

fn get_part_regex() -> &'static Regex {
    PART_REGEX.get_or_init(|| Regex::new(r"(?i)\s*[,:\-]?\s*\bpart\s+\d+\b").unwrap())
}

fn get_number_regex() -> &'static Regex {
    NUMBER_REGEX.get_or_init(|| Regex::new(r"\b\d+\b").unwrap())
}

fn get_space_run_regex() -> &'static Regex {
    SPACE_RUN_REGEX.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Quote characters removed by the no-quotes variant
const QUOTE_CHARS: &[char] = &[
    '"', '\'', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{201E}', '\u{00AB}',
    '\u{00BB}', '\u{2039}', '\u{203A}', '`',
];

const MIN_VARIANT_LEN: usize = 2;

fn tidy(value: &str) -> String {
    get_space_run_regex().replace_all(value, " ").trim().to_string()
}

/// Generate alternate search strings for a cleaned title, in decreasing
/// fidelity order. Pure expansion: no lookups, no network.
///
/// Every returned member has at least two characters, the list is
/// deduplicated (exact, case-preserving) and the original string, when
/// long enough, is always first.
pub fn generate_variants(title: &str) -> Vec<String> {
    let base = tidy(title);
    let mut variants: Vec<String> = Vec::new();

    let mut push = |candidate: String, variants: &mut Vec<String>| {
        if candidate.chars().count() >= MIN_VARIANT_LEN && !variants.contains(&candidate) {
            variants.push(candidate);
        }
    };

    push(base.clone(), &mut variants);

    push(tidy(&strip_featuring(&base)), &mut variants);

    let pair = parse_from_id3_title(&base);
    if pair.artist.is_some() {
        push(tidy(&pair.title), &mut variants);
    }

    let no_bracket_year = get_bracket_year_regex().replace_all(&base, " ");
    push(tidy(&get_bare_year_regex().replace_all(&no_bracket_year, " ")), &mut variants);

    push(tidy(&get_bracket_content_regex().replace_all(&base, " ")), &mut variants);

    push(tidy(&get_quality_tag_regex().replace_all(&base, " ")), &mut variants);

    let words: Vec<&str> = base.split_whitespace().collect();
    if words.len() > 4 {
        push(words[..5].join(" "), &mut variants);
    }
    if words.len() > 6 {
        push(words[..3].join(" "), &mut variants);
    }

    push(tidy(&base.replace(QUOTE_CHARS, "")), &mut variants);

    push(tidy(&get_number_regex().replace_all(&base, " ")), &mut variants);

    push(tidy(&get_trailing_year_regex().replace_all(&base, "")), &mut variants);

    push(tidy(&get_part_regex().replace_all(&base, " ")), &mut variants);

    variants
}
