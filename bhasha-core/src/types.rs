use serde::{Deserialize, Serialize};

use crate::analyzers::{Language, Script, ScriptCounts};

/// Diagnostic detail explaining a classification.
///
/// Fields that a given branch does not compute stay `None` and are left out
/// of the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_tokens: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_counts: Option<ScriptCounts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en_hits: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hi_hits: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hi_ratio: Option<f64>,
}

impl Evidence {
    /// Evidence carrying only a message.
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            msg: Some(msg.into()),
            ..Default::default()
        }
    }

    /// Evidence seeded with script counts and no tokens yet.
    pub fn from_counts(counts: ScriptCounts) -> Self {
        Self {
            n_tokens: Some(0),
            script_counts: Some(counts),
            ..Default::default()
        }
    }
}

/// Classification of one snippet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Caller-supplied identifier, passed through untouched.
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub primary_language: Language,
    pub script: Script,
    pub confidence: f64,
    pub evidence: Evidence,
}

impl DetectionResult {
    pub fn new(language: Language, script: Script, confidence: f64, evidence: Evidence) -> Self {
        Self {
            id: None,
            primary_language: language,
            script,
            confidence,
            evidence,
        }
    }

    /// Attach a caller identifier.
    pub fn with_id(mut self, id: serde_json::Value) -> Self {
        self.id = Some(id);
        self
    }
}

/// Round to two decimals from the exact stored value, ties to even.
///
/// Scaling by 100 first would round the product instead, which turns a
/// stored 0.025000000000000001 into the tie 2.5.
pub(crate) fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
