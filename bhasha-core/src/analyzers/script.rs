//! Script Classification
//!
//! Counts Latin and Devanagari characters by code point range and derives
//! a single script label for the snippet.

use serde::{Deserialize, Serialize};

use super::labels::Script;

/// Minimum characters of each script before a snippet counts as mixed.
pub const DEFAULT_MIXED_MIN_CHARS: usize = 2;

/// Minimum share of non-space characters a dominant script must reach.
pub const DEFAULT_SCRIPT_RATIO_FLOOR: f64 = 0.1;

/// Per-script character counters over the non-whitespace characters of a
/// snippet. `total` is always the sum of the other three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptCounts {
    pub latin: usize,
    pub devanagari: usize,
    pub other: usize,
    pub total: usize,
}

impl ScriptCounts {
    /// Count characters in `text`, skipping whitespace.
    pub fn from_text(text: &str) -> Self {
        let mut counts = Self::default();
        for ch in text.chars().filter(|ch| !ch.is_whitespace()) {
            counts.total += 1;
            if is_basic_latin_letter(ch) {
                counts.latin += 1;
            } else if is_devanagari_char(ch) {
                counts.devanagari += 1;
            } else {
                counts.other += 1;
            }
        }
        counts
    }

    /// Share of Latin letters among counted characters.
    pub fn latin_ratio(&self) -> f64 {
        ratio(self.latin, self.total)
    }

    /// Share of Devanagari characters among counted characters.
    pub fn devanagari_ratio(&self) -> f64 {
        ratio(self.devanagari, self.total)
    }

    /// Derive the script label.
    ///
    /// Both scripts need at least `mixed_min_chars` characters before the
    /// snippet is labelled mixed, and a dominant script must exceed
    /// `ratio_floor`, so a single stray character never flips the label.
    pub fn label(&self, mixed_min_chars: usize, ratio_floor: f64) -> Script {
        if self.total == 0 {
            return Script::Other;
        }

        if self.latin >= mixed_min_chars && self.devanagari >= mixed_min_chars {
            return Script::Mixed;
        }

        let lat_ratio = self.latin_ratio();
        let dev_ratio = self.devanagari_ratio();

        if dev_ratio > lat_ratio && dev_ratio > ratio_floor {
            Script::Devanagari
        } else if lat_ratio > dev_ratio && lat_ratio > ratio_floor {
            Script::Latin
        } else {
            Script::Other
        }
    }
}

fn ratio(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

/// Check if a character is an unaccented ASCII letter.
fn is_basic_latin_letter(ch: char) -> bool {
    matches!(ch as u32,
        0x0041..=0x005A |  // A-Z
        0x0061..=0x007A    // a-z
    )
}

/// Check if a character is in the Devanagari block.
fn is_devanagari_char(ch: char) -> bool {
    matches!(ch as u32, 0x0900..=0x097F)
}

/// Count scripts in `text` and label it with the default floors.
pub fn classify_script(text: &str) -> (ScriptCounts, Script) {
    let counts = ScriptCounts::from_text(text);
    let label = counts.label(DEFAULT_MIXED_MIN_CHARS, DEFAULT_SCRIPT_RATIO_FLOOR);
    (counts, label)
}
