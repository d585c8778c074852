//! Latin Script Language Analyzer
//!
//! Separates English from Hinglish (Hindi written in Latin script) using
//! marker lexicons, fuzzy matching against the Hindi-Latin lexicon, and a
//! small set of phrase patterns.

use tracing::trace;

use super::distance::levenshtein;
use super::labels::{Language, Script, TokenClass};
use super::lexicon::Lexicon;
use super::tokenizer::tokenize;
use crate::config::DetectorConfig;
use crate::types::{round2, DetectionResult, Evidence};

const NGRAM_MATCH_MSG: &str = "ngram pattern match";

/// Confidence when no lexicon evidence was found in a short snippet.
const NO_HITS_SHORT_CONFIDENCE: f64 = 0.1;
/// Confidence when no lexicon evidence was found in a longer snippet.
const NO_HITS_CONFIDENCE: f64 = 0.2;
/// Confidence when hits exist but no rule claimed them.
const UNDECIDED_CONFIDENCE: f64 = 0.3;
/// Snippets with at most this many tokens count as short.
const SHORT_SNIPPET_TOKENS: usize = 2;

/// Hit tallies over a token sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitCounts {
    pub english: usize,
    /// Exact and fuzzy Hindi-Latin hits together.
    pub hindi: usize,
    /// The fuzzy share of `hindi`.
    pub fuzzy: usize,
}

impl HitCounts {
    pub fn total(&self) -> usize {
        self.english + self.hindi
    }

    fn record(&mut self, class: TokenClass) {
        match class {
            TokenClass::English => self.english += 1,
            TokenClass::Hinglish => self.hindi += 1,
            TokenClass::FuzzyHinglish => {
                self.hindi += 1;
                self.fuzzy += 1;
            }
            TokenClass::Neutral => {}
        }
    }
}

/// Scores Latin-script text against the English and Hindi-Latin lexicons.
pub struct LatinAnalyzer<'a> {
    lexicon: &'a Lexicon,
    config: &'a DetectorConfig,
}

impl<'a> LatinAnalyzer<'a> {
    pub fn new(lexicon: &'a Lexicon, config: &'a DetectorConfig) -> Self {
        Self { lexicon, config }
    }

    /// Classify one lowercase token.
    ///
    /// Stages run in order and the first that claims the token wins:
    /// exact English, exact Hindi-Latin, fuzzy Hindi-Latin.
    pub fn classify_token(&self, token: &str) -> TokenClass {
        self.exact_english(token)
            .or_else(|| self.exact_hinglish(token))
            .or_else(|| self.fuzzy_hinglish(token))
            .unwrap_or(TokenClass::Neutral)
    }

    fn exact_english(&self, token: &str) -> Option<TokenClass> {
        self.lexicon
            .english()
            .contains(token)
            .then_some(TokenClass::English)
    }

    fn exact_hinglish(&self, token: &str) -> Option<TokenClass> {
        self.lexicon
            .hinglish()
            .contains(token)
            .then_some(TokenClass::Hinglish)
    }

    fn fuzzy_hinglish(&self, token: &str) -> Option<TokenClass> {
        let token_len = token.chars().count();
        if token_len < self.config.fuzzy_min_token_len {
            return None;
        }

        self.lexicon
            .hinglish()
            .iter()
            .any(|word| {
                let word_len = word.chars().count();
                if word_len.abs_diff(token_len) > self.config.fuzzy_max_len_delta {
                    return false;
                }
                let threshold = if word_len <= self.config.fuzzy_short_word_len {
                    self.config.fuzzy_short_threshold
                } else {
                    self.config.fuzzy_long_threshold
                };
                levenshtein(token, word) <= threshold
            })
            .then_some(TokenClass::FuzzyHinglish)
    }

    /// Tally lexicon hits over a token sequence.
    pub fn count_hits(&self, tokens: &[String]) -> HitCounts {
        let mut hits = HitCounts::default();
        for token in tokens {
            let class = self.classify_token(token);
            trace!(token = %token, ?class, "classified token");
            hits.record(class);
        }
        hits
    }

    /// First adjacent token pair matching a phrase pattern.
    pub fn match_bigram<'t>(&self, tokens: &'t [String]) -> Option<(&'t str, &'t str)> {
        tokens
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
            .find(|(first, second)| self.lexicon.is_bigram(first, second))
    }

    /// Classify Latin-script `text`, extending the script-level `evidence`.
    pub fn analyze(&self, text: &str, mut evidence: Evidence) -> DetectionResult {
        let tokens = tokenize(text);
        evidence.n_tokens = Some(tokens.len());

        if tokens.is_empty() {
            return DetectionResult::new(Language::Unknown, Script::Latin, 0.0, evidence);
        }

        let hits = self.count_hits(&tokens);
        evidence.en_hits = Some(hits.english);
        evidence.hi_hits = Some(hits.hindi);
        trace!(
            english = hits.english,
            hindi = hits.hindi,
            fuzzy = hits.fuzzy,
            "latin hit counts"
        );

        let n = tokens.len();

        if hits.total() == 0 {
            if self.config.ngram_on_zero_hits {
                if let Some(result) = self.ngram_result(&tokens, &evidence) {
                    return result;
                }
            }
            let confidence = if n <= SHORT_SNIPPET_TOKENS {
                NO_HITS_SHORT_CONFIDENCE
            } else {
                NO_HITS_CONFIDENCE
            };
            return DetectionResult::new(Language::Unknown, Script::Latin, confidence, evidence);
        }

        let en_ratio = hits.english as f64 / n as f64;
        let hi_ratio = hits.hindi as f64 / n as f64;
        evidence.en_ratio = Some(round2(en_ratio));
        evidence.hi_ratio = Some(round2(hi_ratio));

        if hits.hindi >= hits.english && hits.hindi > 0 {
            let confidence = round2(0.5 + hi_ratio.min(0.5));
            return DetectionResult::new(Language::Hinglish, Script::Latin, confidence, evidence);
        }

        if hits.english > hits.hindi {
            let min_hits = self.config.mixed_language_min_hits;
            if hits.english >= min_hits && hits.hindi >= min_hits {
                return DetectionResult::new(
                    Language::Mixed,
                    Script::Latin,
                    self.config.mixed_language_confidence,
                    evidence,
                );
            }
            let confidence = round2(0.5 + en_ratio.min(0.5));
            return DetectionResult::new(Language::En, Script::Latin, confidence, evidence);
        }

        // Only reached when neither rule above claimed a non-zero tally.
        if let Some(result) = self.ngram_result(&tokens, &evidence) {
            return result;
        }

        DetectionResult::new(Language::Unknown, Script::Latin, UNDECIDED_CONFIDENCE, evidence)
    }

    fn ngram_result(&self, tokens: &[String], evidence: &Evidence) -> Option<DetectionResult> {
        let (first, second) = self.match_bigram(tokens)?;
        trace!(first, second, "phrase pattern matched");
        let evidence = Evidence {
            msg: Some(NGRAM_MATCH_MSG.to_string()),
            ..evidence.clone()
        };
        Some(DetectionResult::new(
            Language::Hinglish,
            Script::Latin,
            self.config.ngram_confidence,
            evidence,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::ScriptCounts;

    fn analyze(text: &str) -> DetectionResult {
        let config = DetectorConfig::default();
        let analyzer = LatinAnalyzer::new(Lexicon::builtin(), &config);
        analyzer.analyze(text, Evidence::from_counts(ScriptCounts::from_text(text)))
    }

    #[test]
    fn test_pipeline_order() {
        let config = DetectorConfig::default();
        let analyzer = LatinAnalyzer::new(Lexicon::builtin(), &config);

        assert_eq!(analyzer.classify_token("the"), TokenClass::English);
        assert_eq!(analyzer.classify_token("hai"), TokenClass::Hinglish);
        assert_eq!(analyzer.classify_token("muje"), TokenClass::FuzzyHinglish);
        assert_eq!(analyzer.classify_token("nhi"), TokenClass::FuzzyHinglish);
        assert_eq!(analyzer.classify_token("zebra"), TokenClass::Neutral);
    }

    #[test]
    fn test_english_wins_over_hindi_for_shared_word() {
        let lexicon = Lexicon::new(&["to"], &["to"], &[]);
        let config = DetectorConfig::default();
        let analyzer = LatinAnalyzer::new(&lexicon, &config);
        assert_eq!(analyzer.classify_token("to"), TokenClass::English);
    }

    #[test]
    fn test_short_tokens_skip_fuzzy() {
        let config = DetectorConfig::default();
        let analyzer = LatinAnalyzer::new(Lexicon::builtin(), &config);
        // "xo" is one edit from "ho" but too short to try
        assert_eq!(analyzer.classify_token("xo"), TokenClass::Neutral);
    }

    #[test]
    fn test_long_words_allow_two_edits() {
        let lexicon = Lexicon::new(&[], &["sardard"], &[]);
        let config = DetectorConfig::default();
        let analyzer = LatinAnalyzer::new(&lexicon, &config);
        assert_eq!(analyzer.classify_token("srdrd"), TokenClass::FuzzyHinglish);
        assert_eq!(analyzer.classify_token("sirdurd"), TokenClass::FuzzyHinglish);
        assert_eq!(analyzer.classify_token("xirdurd"), TokenClass::Neutral);
    }

    #[test]
    fn test_short_words_allow_one_edit() {
        let lexicon = Lexicon::new(&[], &["bahut"], &[]);
        let config = DetectorConfig::default();
        let analyzer = LatinAnalyzer::new(&lexicon, &config);
        assert_eq!(analyzer.classify_token("bahot"), TokenClass::FuzzyHinglish);
        assert_eq!(analyzer.classify_token("bohot"), TokenClass::Neutral);
    }

    #[test]
    fn test_english_snippet() {
        let result = analyze("No cramps today");
        assert_eq!(result.primary_language, Language::En);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.evidence.en_hits, Some(3));
        assert_eq!(result.evidence.hi_hits, Some(0));
        assert_eq!(result.evidence.en_ratio, Some(1.0));
    }

    #[test]
    fn test_hinglish_snippet() {
        let result = analyze("haan yaar");
        assert_eq!(result.primary_language, Language::Hinglish);
        assert_eq!(result.script, Script::Latin);
        // "yaar" is exact, "haan" only matches "hain" fuzzily
        assert_eq!(result.evidence.hi_hits, Some(2));
        assert_eq!(result.evidence.en_hits, Some(0));
        assert_eq!(
            LatinAnalyzer::new(Lexicon::builtin(), &DetectorConfig::default()).classify_token("haan"),
            TokenClass::FuzzyHinglish
        );
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_tie_goes_to_hinglish() {
        let result = analyze("good dost");
        assert_eq!(result.evidence.en_hits, Some(1));
        assert_eq!(result.evidence.hi_hits, Some(1));
        assert_eq!(result.primary_language, Language::Hinglish);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_mixed_language_needs_two_of_each() {
        let result = analyze("the meeting was good but dost aur bhai");
        assert_eq!(result.evidence.en_hits, Some(5));
        assert_eq!(result.evidence.hi_hits, Some(3));
        assert_eq!(result.primary_language, Language::Mixed);
        assert_eq!(result.confidence, 0.8);
    }

    #[test]
    fn test_confidence_rounding() {
        // 3 English hits out of 8 tokens: 0.5 + 0.375
        let result = analyze("the good mood zebra qwxz plmk vbnc jjjj");
        assert_eq!(result.evidence.en_hits, Some(3));
        assert_eq!(result.evidence.hi_hits, Some(0));
        assert_eq!(result.evidence.en_ratio, Some(0.38));
        assert_eq!(result.confidence, 0.88);
    }

    #[test]
    fn test_no_hits() {
        let result = analyze("zebra qwxz");
        assert_eq!(result.primary_language, Language::Unknown);
        assert_eq!(result.confidence, 0.1);
        assert_eq!(result.evidence.en_ratio, None);

        let result = analyze("zebra qwxz plmk");
        assert_eq!(result.confidence, 0.2);
        assert_eq!(result.evidence.n_tokens, Some(3));
    }

    #[test]
    fn test_ngram_only_on_zero_hits_when_enabled() {
        let lexicon = Lexicon::new(&[], &[], &[("ki", "wajah")]);
        let config = DetectorConfig::default();
        let analyzer = LatinAnalyzer::new(&lexicon, &config);
        let result = analyzer.analyze("dard ki wajah", Evidence::default());
        assert_eq!(result.primary_language, Language::Unknown);
        assert_eq!(result.confidence, 0.2);

        let config = DetectorConfig {
            ngram_on_zero_hits: true,
            ..Default::default()
        };
        let analyzer = LatinAnalyzer::new(&lexicon, &config);
        let result = analyzer.analyze("dard ki wajah", Evidence::default());
        assert_eq!(result.primary_language, Language::Hinglish);
        assert_eq!(result.confidence, 0.85);
        assert_eq!(result.evidence.msg.as_deref(), Some(NGRAM_MATCH_MSG));
        assert_eq!(result.evidence.n_tokens, Some(3));
    }

    #[test]
    fn test_match_bigram() {
        let config = DetectorConfig::default();
        let analyzer = LatinAnalyzer::new(Lexicon::builtin(), &config);
        let tokens = tokenize("pata nahi kya ho gaya");
        assert_eq!(analyzer.match_bigram(&tokens), Some(("ho", "gaya")));
        assert_eq!(analyzer.match_bigram(&tokenize("gaya ho")), None);
    }
}
