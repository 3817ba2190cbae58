use std::env;
use thiserror::Error;

/// Environment variables overriding the similarity thresholds
pub const ARTIST_THRESHOLD_ENV: &str = "MEDIANAME_ARTIST_THRESHOLD";
pub const TITLE_THRESHOLD_ENV: &str = "MEDIANAME_TITLE_THRESHOLD";

/// Canonical defaults used by the enrichment pipeline
pub const DEFAULT_ARTIST_THRESHOLD: f64 = 0.5;
pub const DEFAULT_TITLE_THRESHOLD: f64 = 0.5;

#[derive(Debug, Error, PartialEq)]
pub enum ThresholdError {
    #[error("threshold is not a number: {0:?}")]
    Unparseable(String),
    #[error("threshold {0} outside [0.0, 1.0]")]
    OutOfRange(f64),
}

/// Similarity thresholds gating match acceptance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub artist: f64,
    pub title: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            artist: DEFAULT_ARTIST_THRESHOLD,
            title: DEFAULT_TITLE_THRESHOLD,
        }
    }
}

/// Parse one threshold value from its string form.
pub fn parse_threshold(raw: &str) -> Result<f64, ThresholdError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ThresholdError::Unparseable(raw.to_string()))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ThresholdError::OutOfRange(value));
    }
    Ok(value)
}

fn threshold_from_env(var: &str, default: f64) -> f64 {
    match env::var(var) {
        Ok(raw) => match parse_threshold(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("{var}={raw:?} ignored ({e}), using default {default}");
                default
            }
        },
        Err(_) => default,
    }
}

impl Thresholds {
    /// Read thresholds from the environment, falling back to the defaults
    /// for missing, unparseable or out-of-range values.
    pub fn from_env() -> Self {
        Self {
            artist: threshold_from_env(ARTIST_THRESHOLD_ENV, DEFAULT_ARTIST_THRESHOLD),
            title: threshold_from_env(TITLE_THRESHOLD_ENV, DEFAULT_TITLE_THRESHOLD),
        }
    }
}
