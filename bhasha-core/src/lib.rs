//! Script and language detection for short, code-switched journaling text.
//!
//! Snippets are labelled with a script (Latin, Devanagari, mixed, other) and
//! a primary language (English, Hindi, Hinglish, mixed, unknown) together
//! with a confidence and the evidence behind it.
//!
//! ```
//! use bhasha_core::{detect, Language, Script};
//!
//! let result = detect("Aaj mausam bahut accha hai.");
//! assert_eq!(result.primary_language, Language::Hinglish);
//! assert_eq!(result.script, Script::Latin);
//! ```

pub mod analyzers;
mod config;
mod detector;
mod types;

pub use analyzers::{
    classify_script, levenshtein, tokenize, Language, Lexicon, Script, ScriptCounts, TokenClass,
};
pub use config::{ConfigError, DetectorConfig};
pub use detector::{detect, LanguageDetector};
pub use types::{DetectionResult, Evidence};
