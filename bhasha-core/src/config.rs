use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analyzers::{DEFAULT_MIXED_MIN_CHARS, DEFAULT_SCRIPT_RATIO_FLOOR};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid detector config: {0}")]
    Invalid(String),
}

/// Tuning knobs of the detection rules.
///
/// `DetectorConfig::default()` reproduces the stock classifier; every field
/// may be omitted from a config file and falls back to its default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Characters of each script required before a snippet is labelled mixed.
    pub mixed_min_chars: usize,
    /// Share a dominant script must exceed.
    pub script_ratio_floor: f64,
    /// Devanagari snippets with more characters than this get the strong confidence.
    pub devanagari_strong_min_chars: usize,
    pub devanagari_strong_confidence: f64,
    pub devanagari_weak_confidence: f64,
    pub mixed_script_confidence: f64,
    /// Tokens shorter than this skip fuzzy matching.
    pub fuzzy_min_token_len: usize,
    /// Largest length gap between token and lexicon word worth comparing.
    pub fuzzy_max_len_delta: usize,
    /// Lexicon words up to this length use `fuzzy_short_threshold`.
    pub fuzzy_short_word_len: usize,
    pub fuzzy_short_threshold: usize,
    pub fuzzy_long_threshold: usize,
    /// Hits of each language needed for a Latin snippet to count as mixed.
    pub mixed_language_min_hits: usize,
    pub mixed_language_confidence: f64,
    pub ngram_confidence: f64,
    /// Try the phrase patterns before giving up on a snippet with no lexicon hits.
    pub ngram_on_zero_hits: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            mixed_min_chars: DEFAULT_MIXED_MIN_CHARS,
            script_ratio_floor: DEFAULT_SCRIPT_RATIO_FLOOR,
            devanagari_strong_min_chars: 3,
            devanagari_strong_confidence: 0.9,
            devanagari_weak_confidence: 0.5,
            mixed_script_confidence: 0.95,
            fuzzy_min_token_len: 3,
            fuzzy_max_len_delta: 2,
            fuzzy_short_word_len: 5,
            fuzzy_short_threshold: 1,
            fuzzy_long_threshold: 2,
            mixed_language_min_hits: 2,
            mixed_language_confidence: 0.8,
            ngram_confidence: 0.85,
            ngram_on_zero_hits: false,
        }
    }
}

impl DetectorConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject knobs that would push a confidence out of `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let confidences = [
            ("devanagari_strong_confidence", self.devanagari_strong_confidence),
            ("devanagari_weak_confidence", self.devanagari_weak_confidence),
            ("mixed_script_confidence", self.mixed_script_confidence),
            ("mixed_language_confidence", self.mixed_language_confidence),
            ("ngram_confidence", self.ngram_confidence),
        ];
        for (name, value) in confidences {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        if !(0.0..1.0).contains(&self.script_ratio_floor) {
            return Err(ConfigError::Invalid(format!(
                "script_ratio_floor must be within [0, 1), got {}",
                self.script_ratio_floor
            )));
        }

        if self.mixed_min_chars == 0 {
            return Err(ConfigError::Invalid(
                "mixed_min_chars must be at least 1".into(),
            ));
        }

        Ok(())
    }
}
