pub mod patterns;

use crate::classify::split_known_extension;
use regex::Regex;
use std::sync::OnceLock;

static DOT_RUN_REGEX: OnceLock<Regex> = OnceLock::new();
static DASH_RUN_REGEX: OnceLock<Regex> = OnceLock::new();
static SPACE_RUN_REGEX: OnceLock<Regex> = OnceLock::new();
static EDGE_SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_dot_run_regex() -> &'static Regex {
    // any run of dots and interleaved whitespace collapses to one dot
    DOT_RUN_REGEX.get_or_init(|| Regex::new(r"\s*\.[.\s]*").unwrap())
}

fn get_dash_run_regex() -> &'static Regex {
    DASH_RUN_REGEX.get_or_init(|| Regex::new(r"[-_]{2,}").unwrap())
}

fn get_space_run_regex() -> &'static Regex {
    SPACE_RUN_REGEX.get_or_init(|| Regex::new(r"\s{2,}").unwrap())
}

fn get_edge_separator_regex() -> &'static Regex {
    EDGE_SEPARATOR_REGEX.get_or_init(|| Regex::new(r"^[\s._\-]+|[\s._\-]+$").unwrap())
}

/// Remove release-style technical tokens (quality, codecs, languages,
/// release groups, resolutions) from a filename.
///
/// The extension, when the last `.`-segment is a known one, is detached
/// before stripping and reattached verbatim. Idempotent: applying this to
/// its own output is a no-op.
pub fn strip_technical_terms(filename: &str) -> String {
    let (stem, ext) = split_known_extension(filename);

    let mut name = stem.to_string();
    for group in patterns::pattern_groups() {
        for pattern in &group.patterns {
            name = pattern.replace_all(&name, " ").into_owned();
        }
    }

    name = get_dot_run_regex().replace_all(&name, ".").into_owned();
    name = get_dash_run_regex().replace_all(&name, " ").into_owned();
    name = get_space_run_regex().replace_all(&name, " ").into_owned();
    name = get_edge_separator_regex().replace_all(&name, "").into_owned();

    match ext {
        Some(ext) if !name.is_empty() => format!("{name}.{ext}"),
        // nothing but technical tokens left: keep at least the extension
        Some(ext) => format!(".{ext}"),
        None => name,
    }
}
