//! Marker Word Lexicons
//!
//! Built-in English and Hindi-Latin stop word lists plus the two-token
//! Hinglish phrase patterns used by the Latin analyzer.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Default English stop words, tuned for journaling text.
pub static DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    // Function words
    "the", "is", "at", "which", "on", "and", "a", "an", "in", "to", "of", "for", "it", "this",
    "that", "with", "as", "was", "were", "be", "are", "but", "or", "so", "if", "then", "than",
    "just", "very", "really", "now", "not", "no", "yes", "can", "will", "do", "did", "done",
    "has", "have", "had", "am",
    // Pronouns
    "i", "you", "he", "she", "we", "they", "my", "your", "his", "her", "our", "their", "me",
    "him", "us", "them",
    // Common verbs
    "go", "going", "went", "get", "got", "feeling", "feel", "felt", "work", "slept", "sleep",
    // Time of day
    "today", "tomorrow", "yesterday", "morning", "evening", "night", "after", "before", "early",
    "late",
    // Journaling vocabulary
    "stress", "tired", "pain", "energy", "meeting", "meetings", "mood", "cramps", "low", "okay",
    "better", "good", "bad", "lunch", "dinner", "breakfast", "bed", "gym", "body", "heavy",
];

/// Default Hindi stop words in Latin script.
pub static DEFAULT_HINGLISH_STOP_WORDS: &[&str] = &[
    // Copulas and auxiliaries
    "hai", "hain", "ho", "hun", "hu", "tha", "thi", "ga", "gi", "ge", "raha", "rahi", "rahe",
    // Postpositions and conjunctions
    "ki", "ka", "ke", "ko", "mein", "aur", "tatha", "evam", "se", "ne", "par", "liye",
    // Question words
    "kya", "kyun", "kyu", "kab", "kahan", "kaise", "kaisa",
    // Pronouns and possessives
    "main", "hum", "tum", "aap", "ye", "woh", "yeh", "wo", "mujhe", "mera", "meri", "mere",
    "uska", "unki", "unka", "unhe", "use", "isso", "iske", "unke",
    // Particles
    "bhi", "hi", "mat", "nahi", "nahin", "na", "h", "n", "jaisa", "waisa",
    // Verbs
    "wala", "wale", "wali", "karna", "kar", "kiya", "gaya", "gayi", "gaye", "aa", "lag",
    // Time
    "aaj", "kal", "ab", "jab", "tab", "kabhi", "abhi", "subah",
    // Quantity
    "bohot", "bahut", "thoda", "zyada", "kam",
    // Journaling vocabulary
    "yaar", "bhai", "dost", "dimag", "garam", "khana", "peena", "sone", "uthna", "dard",
    "thakan", "bukhar", "sardard",
];

/// Default two-token Hinglish phrase patterns.
pub static DEFAULT_HINGLISH_BIGRAMS: &[(&str, &str)] = &[
    ("ki", "wajah"),
    ("wajah", "se"),
    ("ka", "matlab"),
    ("ho", "gaya"),
];

/// Case-normalized stop word set.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Create from a slice of words, lowercasing each entry.
    pub fn from_slice(words: &[&str]) -> Self {
        let words = words.iter().map(|s| s.to_lowercase()).collect();
        Self { words }
    }

    /// Check if a lowercase token is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get an iterator over the stop words.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.words.iter()
    }
}

/// The complete marker vocabulary consulted by the detector.
///
/// A lexicon is built once and only read afterwards. [`Lexicon::builtin`]
/// hands out the process-wide default; tests and embedders can construct
/// their own with [`Lexicon::new`] and pass it to
/// [`LanguageDetector::with_lexicon`](crate::LanguageDetector::with_lexicon).
#[derive(Debug, Clone)]
pub struct Lexicon {
    english: StopWords,
    hinglish: StopWords,
    bigrams: Vec<(String, String)>,
}

impl Lexicon {
    pub fn new(english: &[&str], hinglish: &[&str], bigrams: &[(&str, &str)]) -> Self {
        Self {
            english: StopWords::from_slice(english),
            hinglish: StopWords::from_slice(hinglish),
            bigrams: bigrams
                .iter()
                .map(|(first, second)| (first.to_lowercase(), second.to_lowercase()))
                .collect(),
        }
    }

    /// The built-in lexicon, constructed on first use.
    pub fn builtin() -> &'static Lexicon {
        static BUILTIN: OnceLock<Lexicon> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Lexicon::new(
                DEFAULT_ENGLISH_STOP_WORDS,
                DEFAULT_HINGLISH_STOP_WORDS,
                DEFAULT_HINGLISH_BIGRAMS,
            )
        })
    }

    pub fn english(&self) -> &StopWords {
        &self.english
    }

    pub fn hinglish(&self) -> &StopWords {
        &self.hinglish
    }

    /// Ordered phrase patterns.
    pub fn bigrams(&self) -> &[(String, String)] {
        &self.bigrams
    }

    /// Check whether an adjacent token pair is a known phrase pattern.
    pub fn is_bigram(&self, first: &str, second: &str) -> bool {
        self.bigrams
            .iter()
            .any(|(a, b)| a == first && b == second)
    }
}
