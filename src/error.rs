//! Errors raised while building or loading rule tables.
//!
//! Conversion itself never fails; only table construction does.

/// Error type for table construction and loading.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A grapheme pattern was the empty string.
    #[error("grapheme pattern for phoneme '{phoneme}' is empty")]
    EmptyPattern { phoneme: String },

    /// A phoneme maps to a token outside the viseme vocabulary.
    #[error("phoneme '{phoneme}' maps to unknown viseme '{token}'")]
    UnknownViseme { phoneme: String, token: String },

    /// A `viseme_durations` key is outside the viseme vocabulary.
    #[error("viseme_durations has unknown viseme '{token}'")]
    UnknownDurationViseme { token: String },

    /// A phoneme maps to no viseme at all.
    #[error("phoneme '{phoneme}' maps to an empty viseme list")]
    EmptyVisemeList { phoneme: String },

    /// A duration was negative, zero (for visemes) or not finite.
    #[error("invalid duration {value} for '{key}'")]
    InvalidDuration { key: String, value: f64 },

    /// Numeral vocabulary is incomplete.
    #[error("numeral words: {0}")]
    InvalidNumeralWords(String),

    /// A table key that must be a single character was not.
    #[error("'{0}' is not a single character")]
    NotACharacter(String),

    /// TOML parse error.
    #[error("table parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, TableError>;
