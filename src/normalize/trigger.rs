//! Trait scanning (input pre-classification).
//!
//! Before normalizing, the input is scanned once for coarse traits so that
//! passes with nothing to do can be skipped entirely:
//!
//! - digits → numeral spelling
//! - `digit,digit` → decimal-comma expansion
//! - table symbols → symbol spelling
//! - filler characters → stripping
//!
//! ## Design notes
//!
//! - This is a *heuristic* scan. A false positive only costs one pass that
//!   changes nothing; a false negative would skip work, so every check is a
//!   superset of what its pass rewrites in the raw input.
//! - Symbol and numeral words are spelled before stripping, so the
//!   normalizer re-checks `HAS_STRIPPABLE` on the spelled text.

use crate::TableSet;

bitflags::bitflags! {
    /// Coarse traits of an input text.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TextTraits: u8 {
        const HAS_DIGITS        = 1 << 0;
        const HAS_DECIMAL_COMMA = 1 << 1;
        const HAS_SYMBOLS       = 1 << 2;
        const HAS_STRIPPABLE    = 1 << 3;
    }
}

impl TextTraits {
    /// Scan `input` against the symbol and strip sets of `tables`.
    pub fn scan(input: &str, tables: &TableSet) -> Self {
        let mut traits = TextTraits::empty();
        let mut prev_digit = false;
        let mut comma_after_digit = false;

        for c in input.chars() {
            if c.is_ascii_digit() {
                traits |= TextTraits::HAS_DIGITS;
                if comma_after_digit {
                    traits |= TextTraits::HAS_DECIMAL_COMMA;
                }
            }
            comma_after_digit = prev_digit && c == ',';
            prev_digit = c.is_ascii_digit();

            if tables.is_symbol(c) {
                traits |= TextTraits::HAS_SYMBOLS;
            }
            if tables.is_strippable(c) {
                traits |= TextTraits::HAS_STRIPPABLE;
            }
        }

        traits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ascii_text_has_no_traits() {
        assert!(TextTraits::scan("hallo welt", TableSet::german()).is_empty());
    }

    #[test]
    fn detects_each_trait() {
        let tables = TableSet::german();
        assert_eq!(TextTraits::scan("42", tables), TextTraits::HAS_DIGITS);
        assert_eq!(TextTraits::scan("3,5", tables), TextTraits::HAS_DIGITS | TextTraits::HAS_DECIMAL_COMMA);
        assert!(TextTraits::scan("50%", tables).contains(TextTraits::HAS_SYMBOLS));
        assert!(TextTraits::scan("a_b", tables).contains(TextTraits::HAS_STRIPPABLE));
        assert!(TextTraits::scan("café", tables).is_empty());
    }

    #[test]
    fn comma_without_following_digit_is_not_decimal() {
        let traits = TextTraits::scan("3, 5", TableSet::german());
        assert!(!traits.contains(TextTraits::HAS_DECIMAL_COMMA));
    }
}
