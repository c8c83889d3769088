//! Rule-based text → viseme conversion for lip-sync animation.
//!
//! Text is normalized (numbers, symbols, diacritics), rewritten into phoneme
//! segments with an ordered grapheme table, resolved to visemes, and laid out
//! on a relative time axis where repeated mouth shapes are merged.
//!
//! ```
//! use lipsync::{Viseme, convert};
//!
//! let seq = convert("Mama");
//! assert_eq!(seq.visemes, vec![Viseme::PP, Viseme::AA, Viseme::PP, Viseme::AA]);
//! assert_eq!(seq.visemes.len(), seq.times.len());
//! ```

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod normalize;
mod rules;
mod viseme;

pub use api::{
    ConversionDetails, ConversionVerbose, Options, SegmentSummary, VisemeSequence, convert, convert_verbose_with,
    convert_with,
};
pub use engine::COALESCE_FACTOR;
pub use error::{Result, TableError};
pub use normalize::{TextTraits, normalize, spell_number};
pub use rules::config::{PatternEntry, TableConfig};
pub use rules::table_set::{DEFAULT_VISEME_DURATION, NumeralWords, TableSet};
pub use viseme::Viseme;

// --- Internal types ---------------------------------------------------------

/// A piece of rewritten text: either a phoneme id claimed by a grapheme
/// pattern (borrowed from the tables) or a run of characters no pattern
/// matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment<'t> {
    Phoneme(&'t str),
    Raw(String),
}

impl Segment<'_> {
    pub fn text(&self) -> &str {
        match self {
            Segment::Phoneme(p) => p,
            Segment::Raw(r) => r,
        }
    }
}

/// One resolver output: a viseme to append or a pause to wait out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Step {
    Viseme(Viseme),
    Pause(f64),
}
