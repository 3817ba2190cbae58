use crate::classify::split_known_extension;
use crate::text::{colons_to_separator, normalize_display};
use regex::Regex;
use std::sync::OnceLock;

/// Lazy-initialized regex patterns for artist/title extraction
static TRACK_NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
static SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();
static FEAT_REGEX: OnceLock<Regex> = OnceLock::new();
static YEAR_SUFFIX_REGEX: OnceLock<Regex> = OnceLock::new();
static SPACED_DASH_REGEX: OnceLock<Regex> = OnceLock::new();

/// Leading "001 - " / "01. " / "07 " track numbers (2-3 digits)
fn get_track_number_regex() -> &'static Regex {
    TRACK_NUMBER_REGEX.get_or_init(|| Regex::new(r"^\d{2,3}[\s.\-]+").unwrap())
}

fn get_separator_regex() -> &'static Regex {
    SEPARATOR_REGEX.get_or_init(|| Regex::new(r"\s*[-\u{2013}\u{2014}]\s*").unwrap())
}

fn get_feat_regex() -> &'static Regex {
    FEAT_REGEX.get_or_init(|| {
        Regex::new(r"(?i)\s*[(\[]?\s*(?:feat\.?|ft\.?|featuring)\s+[^)\]]*[)\]]?").unwrap()
    })
}

/// Trailing "(2020)" / "[1999]" year annotations
fn get_year_suffix_regex() -> &'static Regex {
    YEAR_SUFFIX_REGEX.get_or_init(|| Regex::new(r"\s*[(\[](?:19|20)\d{2}[)\]]\s*$").unwrap())
}

fn get_spaced_dash_regex() -> &'static Regex {
    SPACED_DASH_REGEX.get_or_init(|| Regex::new(r"\s[-\u{2013}\u{2014}]\s").unwrap())
}

/// Substrings that mark an ID3 title as a dirty upload tag, not a real title
const DIRTY_TITLE_MARKERS: &[&str] = &["(live", "(official", "[hd]", "official video", "official music"];

/// Result of splitting a filename or tag value into artist and title.
/// `title` is always populated; `artist` only when a plausible split was
/// found (left segment >= 1 char, right segment >= 2 chars).
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistTitlePair {
    pub artist: Option<String>,
    pub title: String,
}

/// Remove featuring credits from a title. The featured artist is dropped,
/// not kept: providers index tracks under the main artist.
pub fn strip_featuring(title: &str) -> String {
    get_feat_regex().replace_all(title, " ").trim().to_string()
}

fn split_on_separator(input: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = get_separator_regex().split(input).collect();
    if parts.len() < 2 {
        return None;
    }
    let artist = parts[0].trim().to_string();
    let title = parts[1..].join(" - ").trim().to_string();
    if artist.chars().count() >= 1 && title.chars().count() >= 2 {
        Some((artist, title))
    } else {
        None
    }
}

fn clean_title_segment(segment: &str) -> String {
    let no_year = get_year_suffix_regex().replace(segment, "");
    let no_feat = strip_featuring(&no_year);
    normalize_display(&no_feat)
}

/// Extract (artist, title) from a music filename.
///
/// Strips the extension and any leading track number, then splits on the
/// first dash separator: "AC/DC - Highway to Hell.mp3" gives artist
/// "AC/DC" and title "Highway to Hell". Without a separator, the whole
/// cleaned name becomes the title.
pub fn extract_from_filename(filename: &str) -> ArtistTitlePair {
    let (stem, _ext) = split_known_extension(filename);
    let base = get_track_number_regex().replace(stem, "").to_string();
    let canonical = colons_to_separator(&base);

    if let Some((artist, title)) = split_on_separator(&canonical) {
        let title = clean_title_segment(&title);
        if !title.is_empty() {
            return ArtistTitlePair {
                artist: Some(normalize_display(&artist)),
                title,
            };
        }
    }

    let title = clean_title_segment(&canonical);
    ArtistTitlePair {
        artist: None,
        title: if title.is_empty() {
            normalize_display(&base)
        } else {
            title
        },
    }
}

/// Parse an ID3 "title" tag value that may actually hold "Artist - Title"
/// or "Artist: Title" (a very common upload mis-tagging).
pub fn parse_from_id3_title(title: &str) -> ArtistTitlePair {
    let canonical = colons_to_separator(title);

    if let Some((artist, split_title)) = split_on_separator(&canonical) {
        let cleaned = clean_title_segment(&split_title);
        if !cleaned.is_empty() {
            return ArtistTitlePair {
                artist: Some(normalize_display(&artist)),
                title: cleaned,
            };
        }
    }

    let cleaned = clean_title_segment(&canonical);
    ArtistTitlePair {
        artist: None,
        title: if cleaned.is_empty() {
            title.trim().to_string()
        } else {
            cleaned
        },
    }
}

/// Heuristic gate: does this ID3 title look like a real track title, or
/// like a filename / upload tag that should be re-derived?
pub fn is_clean_title(title: &str) -> bool {
    let trimmed = title.trim();
    let len = trimmed.chars().count();
    if !(2..=80).contains(&len) {
        return false;
    }
    if get_spaced_dash_regex().is_match(trimmed) {
        return false;
    }
    if trimmed.contains(':') || trimmed.contains('\u{FF1A}') {
        return false;
    }
    let lower = trimmed.to_lowercase();
    if DIRTY_TITLE_MARKERS.iter().any(|m| lower.contains(m)) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_basic_split() {
        let pair = extract_from_filename("AC/DC - Highway to Hell.mp3");
        assert_eq!(pair.artist.as_deref(), Some("AC/DC"));
        assert!(pair.title.contains("Highway"));
    }

    #[test]
    fn test_extract_strips_year() {
        let pair = extract_from_filename("Artist - Title (2020).mp3");
        assert!(!pair.title.contains("2020"), "got: {}", pair.title);
        assert_eq!(pair.title, "Title");
    }

    #[test]
    fn test_extract_track_number() {
        let pair = extract_from_filename("01 - Queen - Bohemian Rhapsody.flac");
        assert_eq!(pair.artist.as_deref(), Some("Queen"));
        assert_eq!(pair.title, "Bohemian Rhapsody");

        let pair = extract_from_filename("07 Another One Bites the Dust.mp3");
        assert_eq!(pair.artist, None);
        assert_eq!(pair.title, "Another One Bites the Dust");
    }

    #[test]
    fn test_extract_no_separator() {
        let pair = extract_from_filename("Bohemian Rhapsody.mp3");
        assert_eq!(pair.artist, None);
        assert_eq!(pair.title, "Bohemian Rhapsody");
    }

    #[test]
    fn test_extract_featuring_removed() {
        let pair = extract_from_filename("50 Cent - P.I.M.P. (feat. Snoop Dogg).mp3");
        assert!(!pair.title.to_lowercase().contains("snoop"), "got: {}", pair.title);
        assert!(!pair.title.to_lowercase().contains("feat"));
    }

    #[test]
    fn test_extract_multi_dash_title() {
        let pair = extract_from_filename("Artist - Part One - Part Two.mp3");
        assert_eq!(pair.artist.as_deref(), Some("Artist"));
        assert_eq!(pair.title, "Part One - Part Two");
    }

    #[test]
    fn test_extract_never_empty_title() {
        for input in ["x.mp3", "a - .mp3", "- b.mp3", "song"] {
            let pair = extract_from_filename(input);
            assert!(!pair.title.is_empty(), "empty title for {input:?}");
        }
    }

    #[test]
    fn test_parse_id3_colon() {
        let pair = parse_from_id3_title("Metallica: Enter Sandman");
        assert_eq!(pair.artist.as_deref(), Some("Metallica"));
        assert_eq!(pair.title, "Enter Sandman");
    }

    #[test]
    fn test_parse_id3_fullwidth_colon() {
        let pair = parse_from_id3_title("Metallica\u{FF1A}Enter Sandman");
        assert_eq!(pair.artist.as_deref(), Some("Metallica"));
        assert_eq!(pair.title, "Enter Sandman");
    }

    #[test]
    fn test_parse_id3_plain_title() {
        let pair = parse_from_id3_title("Enter Sandman");
        assert_eq!(pair.artist, None);
        assert_eq!(pair.title, "Enter Sandman");
    }

    #[test]
    fn test_is_clean_title() {
        assert!(is_clean_title("Hotel California"));
        assert!(!is_clean_title("Song (Live 1977)"));
        assert!(!is_clean_title("Artist - Song"));
        assert!(!is_clean_title("Artist: Song"));
        assert!(!is_clean_title("Track [HD]"));
        assert!(!is_clean_title("Song Official Video"));
        assert!(!is_clean_title("x"));
        assert!(!is_clean_title(""));
        let too_long = "a".repeat(81);
        assert!(!is_clean_title(&too_long));
    }

    #[test]
    fn test_hyphenated_word_is_clean() {
        // dash without surrounding spaces is part of the word, not a separator
        assert!(is_clean_title("Spider-Man Theme"));
    }
}
