//! Text Analyzers Module
//!
//! Script counting, tokenization, lexicons and the Latin-script language
//! analyzer that the detector is assembled from.

mod distance;
mod labels;
mod latin;
mod lexicon;
mod script;
mod tokenizer;

pub use distance::levenshtein;
pub use labels::{Language, Script, TokenClass};
pub use latin::{HitCounts, LatinAnalyzer};
pub use lexicon::{
    Lexicon, StopWords, DEFAULT_ENGLISH_STOP_WORDS, DEFAULT_HINGLISH_BIGRAMS,
    DEFAULT_HINGLISH_STOP_WORDS,
};
pub use script::{
    classify_script, ScriptCounts, DEFAULT_MIXED_MIN_CHARS, DEFAULT_SCRIPT_RATIO_FLOOR,
};
pub use tokenizer::tokenize;
