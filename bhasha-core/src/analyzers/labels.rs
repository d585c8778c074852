//! Classification Labels
//!
//! Closed label sets shared by every analyzer.

use serde::{Deserialize, Serialize};

/// Primary language assigned to a snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    En,
    /// Hindi (Devanagari script)
    Hi,
    /// Hindi written in Latin script, often code-mixed with English
    Hinglish,
    /// Substantial presence of both English and Hindi
    Mixed,
    /// Not enough signal to decide
    Unknown,
}

impl Default for Language {
    fn default() -> Self {
        Language::Unknown
    }
}

impl Language {
    /// Get language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Hinglish => "hinglish",
            Language::Mixed => "mixed",
            Language::Unknown => "unknown",
        }
    }
}

/// Writing system detected from code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Latin,
    Devanagari,
    Mixed,
    Other,
}

impl Default for Script {
    fn default() -> Self {
        Script::Other
    }
}

impl Script {
    /// Get script code.
    pub fn code(&self) -> &'static str {
        match self {
            Script::Latin => "latin",
            Script::Devanagari => "devanagari",
            Script::Mixed => "mixed",
            Script::Other => "other",
        }
    }
}

/// Outcome of running one token through the match pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Exact English lexicon hit
    English,
    /// Exact Hindi-Latin lexicon hit
    Hinglish,
    /// Hindi-Latin hit within edit-distance threshold
    FuzzyHinglish,
    /// No lexicon evidence either way
    Neutral,
}

impl TokenClass {
    /// Whether this class counts towards the Hindi tally.
    pub fn is_hindi(&self) -> bool {
        matches!(self, TokenClass::Hinglish | TokenClass::FuzzyHinglish)
    }
}
