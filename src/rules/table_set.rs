//! Validated, immutable rule tables.
//!
//! A `TableSet` bundles everything one language needs: the grapheme pattern
//! table, phoneme → viseme mapping, the single-letter fallback, durations, and
//! the vocabulary used by the text normalizer. Construct it from a
//! [`TableConfig`](super::config::TableConfig) (or use [`TableSet::german`]);
//! there is no mutation API afterwards, so a set can be shared across threads.
//!
//! ## Invariants
//!
//! - `patterns` is sorted by descending character length. The sort is stable,
//!   so patterns of equal length keep their table order.
//! - No pattern is empty.
//! - Every phoneme maps to at least one `Viseme`.
//! - Viseme durations are finite and positive; pauses are finite and >= 0.

use crate::Viseme;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Relative duration used for visemes missing from the duration table.
pub const DEFAULT_VISEME_DURATION: f64 = 1.0;

/// Vocabulary for spelling out integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumeralWords {
    /// Words for 0..=9.
    pub ones: Vec<String>,
    /// Words for 10..=19.
    pub teens: Vec<String>,
    /// Words for the tens, indexed by tens digit (indices 0 and 1 unused).
    pub tens: Vec<String>,
    pub hundred: String,
    pub thousand: String,
    /// Glue between unit and tens, e.g. "und" in "einundzwanzig".
    #[serde(default)]
    pub joiner: String,
    /// Say the unit before the tens (German) instead of after (English).
    #[serde(default)]
    pub unit_before_tens: bool,
    /// Form of "one" used inside compounds ("ein" in "einhundert").
    #[serde(default)]
    pub one_combining: Option<String>,
    #[serde(default)]
    pub minus: String,
    /// Word inserted for a decimal comma.
    #[serde(default)]
    pub decimal: String,
    /// Values at or above this are spelled digit by digit.
    #[serde(default = "default_digit_spelling_threshold")]
    pub digit_spelling_threshold: u64,
}

pub(crate) fn default_digit_spelling_threshold() -> u64 {
    1_000_000
}

impl NumeralWords {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.ones.len() != 10 {
            return Err(format!("expected 10 words for ones, got {}", self.ones.len()));
        }
        if self.teens.len() != 10 {
            return Err(format!("expected 10 words for teens, got {}", self.teens.len()));
        }
        if self.tens.len() != 10 {
            return Err(format!("expected 10 words for tens, got {}", self.tens.len()));
        }
        if let Some(idx) = (2..10).find(|&i| self.tens[i].is_empty()) {
            return Err(format!("tens word for {}0 is empty", idx));
        }
        // No scale words above "thousand".
        if self.digit_spelling_threshold > 1_000_000 {
            return Err(format!("digit_spelling_threshold {} exceeds 1000000", self.digit_spelling_threshold));
        }
        Ok(())
    }
}

/// An immutable, validated set of rule tables for one language.
#[derive(Debug, Clone)]
pub struct TableSet {
    pub(crate) name: String,
    pub(crate) patterns: Vec<(String, String)>,
    pub(crate) phonemes: HashMap<String, Vec<Viseme>>,
    pub(crate) letters: HashMap<char, String>,
    pub(crate) viseme_durations: HashMap<Viseme, f64>,
    pub(crate) pauses: HashMap<char, f64>,
    pub(crate) numerals: Option<NumeralWords>,
    pub(crate) symbols: HashMap<char, String>,
    pub(crate) strip: HashSet<char>,
    pub(crate) preserve: HashSet<char>,
}

impl TableSet {
    /// Name of the table set (e.g. `"de"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grapheme patterns with their phoneme ids, longest pattern first.
    pub fn patterns(&self) -> &[(String, String)] {
        &self.patterns
    }

    /// Visemes for a phoneme id, if mapped.
    pub fn phoneme(&self, id: &str) -> Option<&[Viseme]> {
        self.phonemes.get(id).map(Vec::as_slice)
    }

    /// Fallback phoneme id for a single letter.
    pub fn letter(&self, c: char) -> Option<&str> {
        self.letters.get(&c).map(String::as_str)
    }

    /// Relative duration of `viseme` (1.0 when not listed).
    pub fn viseme_duration(&self, viseme: Viseme) -> f64 {
        self.viseme_durations.get(&viseme).copied().unwrap_or(DEFAULT_VISEME_DURATION)
    }

    /// Relative pause for a whitespace/punctuation character.
    pub fn pause(&self, c: char) -> Option<f64> {
        self.pauses.get(&c).copied()
    }

    pub fn numerals(&self) -> Option<&NumeralWords> {
        self.numerals.as_ref()
    }

    /// Spelled word for a symbol character.
    pub fn symbol(&self, c: char) -> Option<&str> {
        self.symbols.get(&c).map(String::as_str)
    }

    pub fn is_symbol(&self, c: char) -> bool {
        self.symbols.contains_key(&c)
    }

    /// Filler characters the normalizer removes.
    pub fn is_strippable(&self, c: char) -> bool {
        self.strip.contains(&c)
    }

    /// Letters whose diacritics are part of the alphabet and must survive.
    pub fn is_preserved(&self, c: char) -> bool {
        self.preserve.contains(&c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TableSet>();
    }

    #[test]
    fn missing_viseme_duration_defaults_to_one() {
        let tables = TableSet::german();
        assert_eq!(tables.viseme_duration(Viseme::TH), DEFAULT_VISEME_DURATION);
        assert!((tables.viseme_duration(Viseme::SS) - 1.23).abs() < 1e-12);
    }

    #[test]
    fn numeral_words_require_full_rows() {
        let mut words = TableSet::german().numerals().unwrap().clone();
        assert!(words.validate().is_ok());
        words.teens.pop();
        assert!(words.validate().unwrap_err().contains("teens"));
    }
}
