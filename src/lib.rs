//! Filename normalization and media classification core.
//!
//! Turns messy real-world file names (release-style video names,
//! ID3-polluted music filenames) into clean display titles, classifies
//! files into storage categories, and gates external metadata candidates
//! with fuzzy-similarity acceptance rules.
//!
//! Everything here is synchronous, deterministic and total: no input
//! panics, failure modes are degraded-but-valid outputs.

pub mod classify;
pub mod config;
pub mod extract;
pub mod matching;
pub mod score;
pub mod strip;
pub mod text;
pub mod variants;

pub use classify::{classify, FileCategory};
pub use config::Thresholds;
pub use extract::{extract_from_filename, is_clean_title, parse_from_id3_title, ArtistTitlePair};
pub use matching::{accept_match, MatchCandidate, MatchDecision, MatchOptions};
pub use score::Scorer;
pub use strip::strip_technical_terms;
pub use variants::generate_variants;
