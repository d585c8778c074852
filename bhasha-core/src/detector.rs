use rayon::prelude::*;
use tracing::debug;

use crate::analyzers::{LatinAnalyzer, Language, Lexicon, Script, ScriptCounts};
use crate::config::{ConfigError, DetectorConfig};
use crate::types::{DetectionResult, Evidence};

const EMPTY_INPUT_MSG: &str = "empty input";

/// Script and language detector for short snippets.
///
/// Holds a borrowed lexicon and its tuning config; detection never mutates
/// either, so one detector can serve any number of threads.
#[derive(Debug, Clone)]
pub struct LanguageDetector<'a> {
    lexicon: &'a Lexicon,
    config: DetectorConfig,
}

impl Default for LanguageDetector<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector<'static> {
    /// Detector over the built-in lexicon with default tuning.
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::builtin(),
            config: DetectorConfig::default(),
        }
    }

    /// Detector over the built-in lexicon with custom tuning.
    ///
    /// The config is validated first, so every confidence a detector can
    /// report stays within `[0, 1]`.
    pub fn with_config(config: DetectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            lexicon: Lexicon::builtin(),
            config,
        })
    }
}

impl<'a> LanguageDetector<'a> {
    /// Swap in an alternate lexicon.
    pub fn with_lexicon<'b>(self, lexicon: &'b Lexicon) -> LanguageDetector<'b> {
        LanguageDetector {
            lexicon,
            config: self.config,
        }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.lexicon
    }

    /// Classify one snippet.
    pub fn detect(&self, text: &str) -> DetectionResult {
        if text.is_empty() {
            return DetectionResult::new(
                Language::Unknown,
                Script::Other,
                0.0,
                Evidence::message(EMPTY_INPUT_MSG),
            );
        }

        let counts = ScriptCounts::from_text(text);
        let script = counts.label(self.config.mixed_min_chars, self.config.script_ratio_floor);
        let evidence = Evidence::from_counts(counts);

        let result = match script {
            Script::Devanagari => {
                let confidence = if counts.devanagari > self.config.devanagari_strong_min_chars {
                    self.config.devanagari_strong_confidence
                } else {
                    self.config.devanagari_weak_confidence
                };
                DetectionResult::new(Language::Hi, Script::Devanagari, confidence, evidence)
            }
            Script::Mixed => DetectionResult::new(
                Language::Mixed,
                Script::Mixed,
                self.config.mixed_script_confidence,
                evidence,
            ),
            Script::Latin => LatinAnalyzer::new(self.lexicon, &self.config).analyze(text, evidence),
            Script::Other => DetectionResult::new(Language::Unknown, Script::Other, 0.0, evidence),
        };

        debug!(
            script = result.script.code(),
            language = result.primary_language.code(),
            confidence = result.confidence,
            "detected snippet"
        );
        result
    }

    /// Classify a possibly absent snippet; `None` takes the empty-input path.
    pub fn detect_optional(&self, text: Option<&str>) -> DetectionResult {
        self.detect(text.unwrap_or_default())
    }

    /// Classify many snippets in parallel, preserving input order.
    pub fn detect_batch<S>(&self, texts: &[S]) -> Vec<DetectionResult>
    where
        S: AsRef<str> + Sync,
    {
        texts.par_iter().map(|text| self.detect(text.as_ref())).collect()
    }
}

/// Classify one snippet with the built-in lexicon and default tuning.
pub fn detect(text: &str) -> DetectionResult {
    LanguageDetector::new().detect(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let result = detect("");
        assert_eq!(result.primary_language, Language::Unknown);
        assert_eq!(result.script, Script::Other);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.evidence, Evidence::message("empty input"));
        assert_eq!(result.id, None);
    }

    #[test]
    fn test_absent_input() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect_optional(None), detector.detect(""));
    }

    #[test]
    fn test_whitespace_only_counts_nothing() {
        let result = detect("   ");
        assert_eq!(result.primary_language, Language::Unknown);
        assert_eq!(result.script, Script::Other);
        assert_eq!(result.evidence.n_tokens, Some(0));
        assert_eq!(result.evidence.script_counts.map(|c| c.total), Some(0));
        assert_eq!(result.evidence.msg, None);
    }

    #[test]
    fn test_devanagari_confidence() {
        let result = detect("नमस्ते");
        assert_eq!(result.primary_language, Language::Hi);
        assert_eq!(result.confidence, 0.9);

        let result = detect("क");
        assert_eq!(result.primary_language, Language::Hi);
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn test_mixed_script() {
        let result = detect("Hello duniya नमस्ते");
        assert_eq!(result.script, Script::Mixed);
        assert_eq!(result.primary_language, Language::Mixed);
        assert_eq!(result.confidence, 0.95);
        assert_eq!(result.evidence.n_tokens, Some(0));
    }

    #[test]
    fn test_custom_config_applies() {
        let config = DetectorConfig {
            mixed_script_confidence: 0.7,
            ..Default::default()
        };
        let detector = LanguageDetector::with_config(config).unwrap();
        assert_eq!(detector.detect("Hello नमस्ते").confidence, 0.7);
    }

    #[test]
    fn test_with_config_rejects_out_of_range_confidence() {
        let config = DetectorConfig {
            mixed_script_confidence: 1.5,
            ..Default::default()
        };
        match LanguageDetector::with_config(config) {
            Err(ConfigError::Invalid(msg)) => assert!(msg.contains("mixed_script_confidence")),
            other => panic!("expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn test_batch_preserves_order() {
        let detector = LanguageDetector::new();
        let texts = ["No cramps today", "नमस्ते दुनिया", "", "haan yaar"];
        let results = detector.detect_batch(&texts[..]);
        let languages: Vec<Language> = results.iter().map(|r| r.primary_language).collect();
        assert_eq!(
            languages,
            vec![Language::En, Language::Hi, Language::Unknown, Language::Hinglish]
        );
    }
}
