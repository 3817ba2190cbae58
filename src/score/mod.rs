pub mod dictionary;

use crate::classify::split_known_extension;
use crate::strip::strip_technical_terms;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, OnceLock};

static TOKEN_SPLIT_REGEX: OnceLock<Regex> = OnceLock::new();
static WORD_LIKE_REGEX: OnceLock<Regex> = OnceLock::new();
static YEAR_TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_token_split_regex() -> &'static Regex {
    TOKEN_SPLIT_REGEX.get_or_init(|| Regex::new(r"[\s._\-]+").unwrap())
}

fn get_word_like_regex() -> &'static Regex {
    WORD_LIKE_REGEX.get_or_init(|| Regex::new(r"^[A-Za-zÀ-ÿ]{2,}$").unwrap())
}

fn get_year_token_regex() -> &'static Regex {
    YEAR_TOKEN_REGEX.get_or_init(|| Regex::new(r"^(?:19|20)\d{2}$").unwrap())
}

/// Acronyms that survive the stripper (or appear in isolation) but mark a
/// token as technical for window trimming.
const TECHNICAL_ACRONYMS: &[&str] = &[
    "x264", "x265", "h264", "h265", "hevc", "avc", "xvid", "divx", "aac", "ac3", "dts", "hdr",
    "webrip", "webdl", "bluray", "hdtv", "remux", "vostfr", "multi", "proper", "repack", "rarbg",
    "yify", "yts", "amzn", "nf",
];

const ENGLISH_ARTICLES: &[&str] = &["the", "a", "an"];

const VOWELS: &str = "aeiouyàâäéèêëîïôöùûüœ";

const MAX_WINDOW: usize = 8;
const MAX_TITLE_CHARS: usize = 100;
const FALLBACK_TOKEN_LIMIT: usize = 6;
const SINGLE_TOKEN_MIN_SCORE: f64 = 5.0;
const MULTI_TOKEN_BONUS: f64 = 1.2;
const SINGLE_DICT_BONUS: f64 = 1.5;
const SCORE_EPSILON: f64 = 1e-9;

/// Derives a plausible human title from a release-style filename by
/// scoring token windows anchored at the start of the name.
///
/// Owns the word dictionary and an append-only memo cache for lookups,
/// so tests can inject a fresh or pre-seeded dictionary.
pub struct Scorer {
    dictionary: HashSet<String>,
    cache: Mutex<HashMap<String, bool>>,
}

impl Scorer {
    pub fn new(dictionary: HashSet<String>) -> Self {
        Self {
            dictionary,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_default_dictionary() -> Self {
        Self::new(dictionary::default_words())
    }

    /// Memoized dictionary lookup, case-insensitive.
    pub fn is_dictionary_word(&self, token: &str) -> bool {
        let key = token.to_lowercase();
        let mut cache = match self.cache.lock() {
            Ok(guard) => guard,
            // a poisoned cache only costs the memoization
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(&hit) = cache.get(&key) {
            return hit;
        }
        let found = self.dictionary.contains(&key);
        cache.insert(key, found);
        found
    }

    /// Derive the most plausible display title from a filename.
    ///
    /// Real-world release names put the true title first and technical
    /// metadata last, so candidate windows are anchored at position 0 and
    /// trailing technical tokens are trimmed before scoring.
    pub fn derive_title(&self, filename: &str) -> String {
        let stripped = strip_technical_terms(filename);
        let (stem, _ext) = split_known_extension(&stripped);

        let tokens: Vec<&str> = get_token_split_regex()
            .split(stem)
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.is_empty() {
            return first_segments_fallback(filename);
        }

        let total = tokens.len();
        let mut best: Option<(f64, usize)> = None;

        for window_len in 1..=total.min(MAX_WINDOW) {
            let mut end = window_len;
            // trim trailing technical/year tokens, repeatedly
            while end > 0 && is_trimmable(tokens[end - 1], end - 1, total) {
                end -= 1;
            }
            if end == 0 {
                continue;
            }

            let Some(score) = self.score_window(&tokens[..end], total) else {
                continue;
            };

            match best {
                Some((best_score, best_end)) => {
                    if score > best_score + SCORE_EPSILON
                        || ((score - best_score).abs() <= SCORE_EPSILON && end > best_end)
                    {
                        best = Some((score, end));
                    }
                }
                None => best = Some((score, end)),
            }
        }

        let chosen: Vec<&str> = match best {
            Some((score, end)) if score > 0.0 => tokens[..end].to_vec(),
            _ => fallback_tokens(&tokens, total),
        };

        let joined = chosen.join(" ");
        let truncated: String = joined.chars().take(MAX_TITLE_CHARS).collect();
        let truncated = truncated.trim().to_string();

        if truncated.is_empty() {
            first_segments_fallback(filename)
        } else {
            truncated
        }
    }

    /// Score one window. Returns None when the window cannot be scored
    /// (no scoreable tokens, or a single token below the raw-score gate).
    ///
    /// Single-token windows only compete when the filename has a single
    /// usable token or nothing longer scored: with average scoring a lone
    /// dictionary word would otherwise always beat "Word Two Three".
    fn score_window(&self, window: &[&str], total_tokens: usize) -> Option<f64> {
        let mut points = 0.0;
        let mut counted = 0u32;
        let mut first_is_dict_word = false;

        for (index, token) in window.iter().enumerate() {
            if get_word_like_regex().is_match(token) {
                let lower = token.to_lowercase();
                let len = token.chars().count();
                let mut token_points = 0.0;
                if vowel_ratio(&lower) >= 0.3 {
                    token_points += 2.0;
                }
                if (3..=15).contains(&len) {
                    token_points += 1.0;
                }
                if !(is_all_caps(token) && len > 3) {
                    token_points += 1.0;
                }
                if self.is_dictionary_word(&lower) {
                    token_points += 2.0;
                    if index == 0 {
                        first_is_dict_word = true;
                    }
                }
                if index == 0 && ENGLISH_ARTICLES.contains(&lower.as_str()) {
                    token_points += 1.0;
                }
                points += token_points;
                counted += 1;
            } else if let Ok(value) = token.parse::<u64>() {
                if value < 100 {
                    points += 1.0;
                }
                // large numbers (years, episode codes) dilute the average
                counted += 1;
            } else {
                counted += 1;
            }
        }

        if counted == 0 {
            return None;
        }

        let mut average = points / f64::from(counted);
        if window.len() >= 2 {
            average *= MULTI_TOKEN_BONUS;
        } else {
            if total_tokens > 1 {
                return None;
            }
            if points < SINGLE_TOKEN_MIN_SCORE {
                return None;
            }
            if first_is_dict_word {
                average *= SINGLE_DICT_BONUS;
            }
        }
        Some(average)
    }
}

fn is_all_caps(token: &str) -> bool {
    let mut has_alpha = false;
    for c in token.chars() {
        if c.is_alphabetic() {
            has_alpha = true;
            if !c.is_uppercase() {
                return false;
            }
        }
    }
    has_alpha
}

fn is_technical(token: &str, index: usize, total: usize) -> bool {
    let len = token.chars().count();
    if is_all_caps(token) && (2..=3).contains(&len) {
        return true;
    }
    if TECHNICAL_ACRONYMS.contains(&token.to_lowercase().as_str()) {
        return true;
    }
    // short ALL-CAPS at the tail of the name is almost always a group tag
    is_all_caps(token) && len <= 5 && index + 3 >= total
}

fn is_trimmable(token: &str, index: usize, total: usize) -> bool {
    is_technical(token, index, total) || get_year_token_regex().is_match(token)
}

/// Fallback when no window scored: first tokens up to the first technical
/// one, keeping word-like and short numeric tokens.
fn fallback_tokens<'a>(tokens: &[&'a str], total: usize) -> Vec<&'a str> {
    let mut kept = Vec::new();
    for (index, token) in tokens.iter().enumerate().take(FALLBACK_TOKEN_LIMIT) {
        if is_trimmable(token, index, total) {
            break;
        }
        let word_like = get_word_like_regex().is_match(token);
        let short_numeric = token.parse::<u64>().map(|v| v < 100).unwrap_or(false);
        if word_like || short_numeric {
            kept.push(*token);
        }
    }
    kept
}

/// Last-resort fallback: first two dot/dash/underscore segments of the
/// original name.
fn first_segments_fallback(filename: &str) -> String {
    get_token_split_regex()
        .split(filename)
        .filter(|s| !s.is_empty())
        .take(2)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

fn vowel_ratio(lower_token: &str) -> f64 {
    let len = lower_token.chars().count();
    if len == 0 {
        return 0.0;
    }
    let vowels = lower_token.chars().filter(|c| VOWELS.contains(*c)).count();
    vowels as f64 / len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> Scorer {
        Scorer::with_default_dictionary()
    }

    #[test]
    fn test_release_filename() {
        let title = scorer().derive_title("The.Matrix.1999.1080p.BluRay.x264-RARBG.mkv");
        assert_eq!(title, "The Matrix");
    }

    #[test]
    fn test_single_word_title_drops_year() {
        let title = scorer().derive_title("Inception.2010.720p.WEB-DL.mkv");
        assert_eq!(title, "Inception");
    }

    #[test]
    fn test_plain_phrase_kept_whole() {
        let title = scorer().derive_title("House.of.the.Dragon.mkv");
        assert_eq!(title, "House of the Dragon");
    }

    #[test]
    fn test_numeric_tokens_kept() {
        let title = scorer().derive_title("2 Fast 2 Furious.mp4");
        assert_eq!(title, "2 Fast 2 Furious");
    }

    #[test]
    fn test_trailing_group_trimmed() {
        let title = scorer().derive_title("Cool.Movie.FRENCH.1080p.WEBRip.x264-GROUP.mp4");
        assert_eq!(title, "Cool Movie");
    }

    #[test]
    fn test_fallback_for_unscorable_names() {
        let title = scorer().derive_title("XJZQ.KKWW.mkv");
        assert!(!title.is_empty());
        assert!(title.contains("XJZQ"));
    }

    #[test]
    fn test_non_empty_for_any_alphanumeric_input() {
        for input in ["a.mkv", "Z", "7.mp4", "weird---name.avi"] {
            assert!(
                !scorer().derive_title(input).is_empty(),
                "empty title for {input:?}"
            );
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(scorer().derive_title(""), "");
    }

    #[test]
    fn test_truncated_to_100_chars() {
        let long = "word ".repeat(60);
        let title = scorer().derive_title(&long);
        assert!(title.chars().count() <= 100);
    }

    #[test]
    fn test_injected_dictionary() {
        let mut words = HashSet::new();
        words.insert("zorglub".to_string());
        let scorer = Scorer::new(words);
        assert!(scorer.is_dictionary_word("Zorglub"));
        assert!(!scorer.is_dictionary_word("the"));
        // memoized second lookup agrees
        assert!(scorer.is_dictionary_word("zorglub"));
    }

    #[test]
    fn test_missing_dictionary_degrades() {
        // an empty dictionary lowers confidence but still yields a title
        let scorer = Scorer::new(HashSet::new());
        let title = scorer.derive_title("Some.Movie.2020.1080p.mkv");
        assert!(!title.is_empty());
        assert!(title.contains("Some"));
    }
}
