use crate::config::Thresholds;
use crate::text::normalize_matching;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static LIVE_WORD_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_live_word_regex() -> &'static Regex {
    LIVE_WORD_REGEX.get_or_init(|| Regex::new(r"\blive\b").unwrap())
}

/// A candidate record returned by an external metadata provider.
/// Provider-specific fields are ignored by the matching core.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchCandidate {
    pub title: String,
    #[serde(default)]
    pub artists: Vec<String>,
}

/// Outcome of gating one candidate against our local metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchDecision {
    pub accept: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl MatchDecision {
    fn accepted() -> Self {
        Self {
            accept: true,
            reason: None,
        }
    }

    fn rejected(reason: String) -> Self {
        Self {
            accept: false,
            reason: Some(reason),
        }
    }
}

/// Inputs for one match decision.
pub struct MatchOptions<'a> {
    pub our_artist: Option<&'a str>,
    pub our_title: &'a str,
    pub track_title: &'a str,
    pub track_artists: &'a [String],
    pub thresholds: Thresholds,
    pub reject_live_mismatch: bool,
}

/// Cheap order-sensitive similarity in [0, 1], used for artist names.
///
/// Deliberately NOT an edit distance: containment short-circuits (so
/// "AC/DC" vs "AC/DC (Australia)" scores well on alias variants) and the
/// fallback counts positional character matches only. Replacing this with
/// Levenshtein changes long-standing acceptance behavior.
pub fn string_similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let (shorter, longer, shorter_len, longer_len) = if a_len <= b_len {
        (&a, &b, a_len, b_len)
    } else {
        (&b, &a, b_len, a_len)
    };

    if longer.contains(shorter.as_str()) {
        return shorter_len as f64 / longer_len as f64;
    }

    let matches = a
        .chars()
        .zip(b.chars())
        .filter(|(ca, cb)| ca == cb)
        .count();
    2.0 * matches as f64 / (a_len + b_len) as f64
}

/// Levenshtein-based title similarity in [0, 1] over match-normalized
/// strings (diacritics folded, case-insensitive).
pub fn title_similarity(a: &str, b: &str) -> f64 {
    let a = normalize_matching(a);
    let b = normalize_matching(b);

    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let distance = strsim::levenshtein(&a, &b) as f64;
    let longest = a.chars().count().max(b.chars().count()) as f64;
    1.0 - distance / longest
}

/// Best similarity of `ours` against any candidate value.
///
/// Absence of data is never a penalty: an empty `ours` or an empty
/// candidate list yields 1.0 so the check passes vacuously.
pub fn best_similarity<F>(ours: &str, candidates: &[String], similarity: F) -> f64
where
    F: Fn(&str, &str) -> f64,
{
    if ours.trim().is_empty() || candidates.is_empty() {
        return 1.0;
    }
    candidates
        .iter()
        .map(|candidate| similarity(ours, candidate))
        .fold(0.0, f64::max)
}

// Checked on the raw lowercased string: match normalization strips a
// trailing "(Live)" tag, which is exactly the marker this gate needs.
fn mentions_live(value: &str) -> bool {
    get_live_word_regex().is_match(&value.to_lowercase())
}

/// Decide whether a provider candidate should be accepted for our track.
///
/// Title gate first, then the artist gate (only when both sides carry
/// artist data), then the optional live/studio mismatch gate.
pub fn accept_match(options: &MatchOptions) -> MatchDecision {
    let title_score = title_similarity(options.our_title, options.track_title);
    if title_score < options.thresholds.title {
        tracing::debug!(
            our = options.our_title,
            candidate = options.track_title,
            score = title_score,
            "match rejected on title"
        );
        return MatchDecision::rejected(format!(
            "titre trop différent (similarité {:.2}, seuil {:.2})",
            title_score, options.thresholds.title
        ));
    }

    if let Some(our_artist) = options.our_artist {
        if !our_artist.trim().is_empty() && !options.track_artists.is_empty() {
            let artist_score =
                best_similarity(our_artist, options.track_artists, string_similarity);
            if artist_score < options.thresholds.artist {
                tracing::debug!(
                    our = our_artist,
                    score = artist_score,
                    "match rejected on artist"
                );
                return MatchDecision::rejected(format!(
                    "artiste sans correspondance (similarité {:.2}, seuil {:.2})",
                    artist_score, options.thresholds.artist
                ));
            }
        }
    }

    if options.reject_live_mismatch
        && mentions_live(options.our_title) != mentions_live(options.track_title)
    {
        return MatchDecision::rejected(
            "désaccord studio/live entre les titres".to_string(),
        );
    }

    MatchDecision::accepted()
}
