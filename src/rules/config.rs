//! Loading table sets from configuration.
//!
//! A table set is described by a `TableConfig`, which deserializes from TOML:
//!
//! ```toml
//! name = "demo"
//! strip = "_:;"
//! preserve = "äöü"
//!
//! [[patterns]]
//! grapheme = "sch"
//! phoneme = "ʃ"
//!
//! [phonemes]
//! "ʃ" = "SS"
//! "aɪ" = "aa I"
//!
//! [letters]
//! s = "s"
//!
//! [viseme_durations]
//! SS = 1.23
//!
//! [pauses]
//! " " = 1.0
//! "," = 3.0
//!
//! [symbols]
//! "%" = "Prozent"
//! ```
//!
//! Keys of `letters`, `pauses` and `symbols` must be single characters.
//! Everything is checked in `TryFrom<TableConfig> for TableSet`.

use super::table_set::{NumeralWords, TableSet};
use crate::Viseme;
use crate::error::{Result, TableError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// One grapheme rewrite rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternEntry {
    pub grapheme: String,
    pub phoneme: String,
}

/// Unvalidated, serializable description of a [`TableSet`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub patterns: Vec<PatternEntry>,
    /// Phoneme id → space-separated viseme tokens.
    #[serde(default)]
    pub phonemes: BTreeMap<String, String>,
    #[serde(default)]
    pub letters: BTreeMap<String, String>,
    #[serde(default)]
    pub viseme_durations: BTreeMap<String, f64>,
    #[serde(default)]
    pub pauses: BTreeMap<String, f64>,
    #[serde(default)]
    pub numerals: Option<NumeralWords>,
    #[serde(default)]
    pub symbols: BTreeMap<String, String>,
    #[serde(default)]
    pub strip: String,
    #[serde(default)]
    pub preserve: String,
}

impl TableSet {
    /// Parse and validate a TOML table description.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: TableConfig = toml::from_str(s)?;
        TableSet::try_from(config)
    }

    /// Read, parse and validate a TOML table file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

impl TryFrom<TableConfig> for TableSet {
    type Error = TableError;

    fn try_from(config: TableConfig) -> Result<Self> {
        let mut patterns = Vec::with_capacity(config.patterns.len());
        for entry in config.patterns {
            if entry.grapheme.is_empty() {
                return Err(TableError::EmptyPattern { phoneme: entry.phoneme });
            }
            patterns.push((entry.grapheme, entry.phoneme));
        }
        // Stable: equal lengths keep table order.
        patterns.sort_by_key(|(grapheme, _)| std::cmp::Reverse(grapheme.chars().count()));

        let mut phonemes = HashMap::with_capacity(config.phonemes.len());
        for (phoneme, tokens) in config.phonemes {
            let visemes = Viseme::parse_sequence(&tokens)
                .map_err(|token| TableError::UnknownViseme { phoneme: phoneme.clone(), token })?;
            if visemes.is_empty() {
                return Err(TableError::EmptyVisemeList { phoneme });
            }
            phonemes.insert(phoneme, visemes);
        }

        let mut letters = HashMap::with_capacity(config.letters.len());
        for (key, phoneme) in config.letters {
            letters.insert(single_char(&key)?, phoneme);
        }

        let mut viseme_durations = HashMap::with_capacity(config.viseme_durations.len());
        for (token, value) in config.viseme_durations {
            let viseme = token
                .parse::<Viseme>()
                .map_err(|_| TableError::UnknownDurationViseme { token: token.clone() })?;
            if !value.is_finite() || value <= 0.0 {
                return Err(TableError::InvalidDuration { key: token, value });
            }
            viseme_durations.insert(viseme, value);
        }

        let mut pauses = HashMap::with_capacity(config.pauses.len());
        for (key, value) in config.pauses {
            if !value.is_finite() || value < 0.0 {
                return Err(TableError::InvalidDuration { key, value });
            }
            pauses.insert(single_char(&key)?, value);
        }

        if let Some(words) = &config.numerals {
            words.validate().map_err(TableError::InvalidNumeralWords)?;
        }

        let mut symbols = HashMap::with_capacity(config.symbols.len());
        for (key, word) in config.symbols {
            symbols.insert(single_char(&key)?, word);
        }

        Ok(TableSet {
            name: config.name,
            patterns,
            phonemes,
            letters,
            viseme_durations,
            pauses,
            numerals: config.numerals,
            symbols,
            strip: config.strip.chars().collect(),
            preserve: config.preserve.chars().collect(),
        })
    }
}

fn single_char(key: &str) -> Result<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(TableError::NotACharacter(key.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DEMO: &str = r#"
name = "demo"
strip = "_"

[[patterns]]
grapheme = "sh"
phoneme = "ʃ"

[[patterns]]
grapheme = "tsch"
phoneme = "tʃ"

[[patterns]]
grapheme = "ch"
phoneme = "x"

[phonemes]
"ʃ" = "SS"
"tʃ" = "CH"
"x" = "kk"
"a" = "aa"
"aɪ" = "aa I"

[letters]
a = "a"

[viseme_durations]
SS = 1.5

[pauses]
" " = 1.0
"#;

    #[test]
    fn loads_and_orders_patterns_by_length() {
        let tables = TableSet::from_toml_str(DEMO).unwrap();
        assert_eq!(tables.name(), "demo");
        let order: Vec<&str> = tables.patterns().iter().map(|(g, _)| g.as_str()).collect();
        assert_eq!(order, vec!["tsch", "sh", "ch"]);
        assert_eq!(tables.phoneme("aɪ"), Some(&[Viseme::AA, Viseme::I][..]));
        assert_eq!(tables.letter('a'), Some("a"));
        assert_eq!(tables.pause(' '), Some(1.0));
        assert!(tables.is_strippable('_'));
        assert!(tables.numerals().is_none());
    }

    #[test]
    fn rejects_empty_pattern() {
        let err = TableSet::from_toml_str("[[patterns]]\ngrapheme = \"\"\nphoneme = \"a\"\n").unwrap_err();
        assert!(matches!(err, TableError::EmptyPattern { .. }));
    }

    #[test]
    fn rejects_unknown_viseme_token() {
        let err = TableSet::from_toml_str("[phonemes]\na = \"AA\"\n").unwrap_err();
        match err {
            TableError::UnknownViseme { phoneme, token } => {
                assert_eq!(phoneme, "a");
                assert_eq!(token, "AA");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_viseme_list() {
        let err = TableSet::from_toml_str("[phonemes]\na = \" \"\n").unwrap_err();
        assert!(matches!(err, TableError::EmptyVisemeList { .. }));
    }

    #[test]
    fn rejects_non_positive_duration() {
        let err = TableSet::from_toml_str("[viseme_durations]\naa = 0.0\n").unwrap_err();
        assert!(matches!(err, TableError::InvalidDuration { .. }));
        let err = TableSet::from_toml_str("[pauses]\n\",\" = -1.0\n").unwrap_err();
        assert!(matches!(err, TableError::InvalidDuration { .. }));
    }

    #[test]
    fn rejects_unknown_duration_key() {
        let err = TableSet::from_toml_str("[viseme_durations]\nXX = 1.0\n").unwrap_err();
        assert!(matches!(&err, TableError::UnknownDurationViseme { token } if token == "XX"));
        assert_eq!(err.to_string(), "viseme_durations has unknown viseme 'XX'");
    }

    #[test]
    fn rejects_multi_char_keys() {
        let err = TableSet::from_toml_str("[letters]\nab = \"a\"\n").unwrap_err();
        assert!(matches!(err, TableError::NotACharacter(k) if k == "ab"));
    }

    #[test]
    fn rejects_incomplete_numerals() {
        let toml = r#"
[numerals]
ones = ["zero"]
teens = []
tens = []
hundred = "hundred"
thousand = "thousand"
"#;
        let err = TableSet::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, TableError::InvalidNumeralWords(_)));
    }

    #[test]
    fn reports_toml_syntax_errors() {
        let err = TableSet::from_toml_str("[phonemes\n").unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
    }

    #[test]
    fn loads_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DEMO.as_bytes()).unwrap();
        let tables = TableSet::from_path(file.path()).unwrap();
        assert_eq!(tables.patterns().len(), 3);

        let missing = TableSet::from_path(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(TableError::Io(_))));
    }
}
