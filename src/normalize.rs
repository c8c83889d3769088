//! Text normalization ahead of grapheme rewriting.
//!
//! Everything the rule tables cannot classify (digits, symbols, decorative
//! punctuation, foreign diacritics) is turned into plain words or removed
//! here. The passes run in a fixed order:
//!
//! ```text
//! symbols → decimal comma → numbers → strip fillers
//!         → limit repeats → collapse whitespace → fold diacritics → trim
//! ```
//!
//! Passes that depend on the table vocabulary are gated by a single
//! [`TextTraits`] scan of the input (see `normalize/trigger.rs`). Nothing in
//! here can fail: unknown characters are simply left for the resolver to skip.

#[path = "normalize/numeral.rs"]
mod numeral;
#[path = "normalize/trigger.rs"]
mod trigger;

pub use numeral::spell_number;
pub use trigger::TextTraits;

use crate::TableSet;
use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;

/// Normalize `text` with the vocabulary of `tables`.
///
/// ```
/// use lipsync::{TableSet, normalize};
///
/// assert_eq!(normalize("21 %", TableSet::german()), "einundzwanzig Prozent");
/// ```
pub fn normalize(text: &str, tables: &TableSet) -> String {
    normalize_with_traits(text, tables).0
}

pub(crate) fn normalize_with_traits(text: &str, tables: &TableSet) -> (String, TextTraits) {
    let mut traits = TextTraits::scan(text, tables);
    let mut s: Cow<'_, str> = Cow::Borrowed(text);

    if traits.contains(TextTraits::HAS_SYMBOLS) {
        s = Cow::Owned(spell_symbols(&s, tables));
    }

    if let Some(words) = tables.numerals() {
        if traits.contains(TextTraits::HAS_DECIMAL_COMMA) {
            let replaced = regex!(r"([0-9]+),([0-9]+)")
                .replace_all(&s, |caps: &regex::Captures<'_>| format!("{} {} {}", &caps[1], words.decimal, &caps[2]))
                .into_owned();
            s = Cow::Owned(replaced);
        }
        if traits.contains(TextTraits::HAS_DIGITS) {
            let replaced = regex!(r"[0-9]+")
                .replace_all(&s, |caps: &regex::Captures<'_>| spell_number(&caps[0], words))
                .into_owned();
            s = Cow::Owned(replaced);
        }
    }

    // Spelled words may carry filler characters of their own.
    if matches!(s, Cow::Owned(_)) && s.chars().any(|c| tables.is_strippable(c)) {
        traits |= TextTraits::HAS_STRIPPABLE;
    }

    if traits.contains(TextTraits::HAS_STRIPPABLE) {
        s = Cow::Owned(s.chars().filter(|&c| !tables.is_strippable(c)).collect());
    }

    let limited = limit_repeats(&s);
    let mut out = regex!(r"\s+").replace_all(&limited, " ").into_owned();

    if !out.is_ascii() {
        out = fold_diacritics(&out, tables);
    }

    let out = out.trim().to_string();
    tracing::trace!(?traits, input = text, output = %out, "normalized");
    (out, traits)
}

fn spell_symbols(text: &str, tables: &TableSet) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match tables.symbol(c) {
            Some(word) => {
                out.push(' ');
                out.push_str(word);
                out.push(' ');
            }
            None => out.push(c),
        }
    }
    out
}

/// Collapse runs of three or more identical non-digit characters to two.
fn limit_repeats(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last: Option<char> = None;
    let mut run = 0usize;

    for c in text.chars() {
        if Some(c) == last {
            run += 1;
        } else {
            last = Some(c);
            run = 1;
        }
        if run <= 2 || c.is_ascii_digit() {
            out.push(c);
        }
    }
    out
}

/// Strip combining diacritics (U+0300..=U+036F) except on preserved letters.
fn fold_diacritics(text: &str, tables: &TableSet) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.nfc() {
        if tables.is_preserved(c) {
            out.push(c);
        } else {
            out.extend(std::iter::once(c).nfd().filter(|m| !('\u{0300}'..='\u{036f}').contains(m)));
        }
    }
    out.nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn de(text: &str) -> String {
        normalize(text, TableSet::german())
    }

    #[test]
    fn symbols_become_padded_words() {
        let out = de("50% mehr");
        assert_eq!(out, "fünfzig Prozent mehr");
        assert!(!out.contains('%'));
        assert!(de("a%b").contains(" Prozent "));
    }

    #[test]
    fn decimal_comma_is_spoken() {
        assert_eq!(de("3,5"), "drei Komma fünf");
        assert_eq!(de("3, 5"), "drei, fünf");
    }

    #[test]
    fn digit_runs_are_spelled() {
        assert_eq!(de("Seite 21 von 100"), "Seite einundzwanzig von einhundert");
    }

    #[test]
    fn strips_filler_characters() {
        assert_eq!(de("„Hallo“: _Welt_;"), "Hallo Welt");
    }

    #[test]
    fn strips_filler_characters_introduced_by_spelled_words() {
        let tables = TableSet::from_toml_str("strip = \"_\"\n\n[symbols]\n\"%\" = \"pro_zent\"\n").unwrap();
        assert_eq!(normalize("a_b", &tables), "ab");
        let (out, traits) = normalize_with_traits("a%b", &tables);
        assert_eq!(out, "a prozent b");
        assert!(traits.contains(TextTraits::HAS_SYMBOLS | TextTraits::HAS_STRIPPABLE));
    }

    #[test]
    fn limits_character_repetition() {
        assert_eq!(de("jaaaaa!!!!"), "jaa!!");
        assert_eq!(limit_repeats("1111"), "1111");
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(de("  viel \t\n  platz  "), "viel platz");
    }

    #[test]
    fn folds_foreign_diacritics_but_keeps_umlauts() {
        assert_eq!(de("Café Müller Straße"), "Cafe Müller Straße");
        assert_eq!(de("Ärger über Öl"), "Ärger über Öl");
        // Decomposed umlaut input is recomposed, not stripped.
        assert_eq!(de("a\u{0308}"), "ä");
    }

    #[test]
    fn blank_and_symbol_only_input() {
        assert_eq!(de(""), "");
        assert_eq!(de("   "), "");
        assert_eq!(de("___"), "");
        assert_eq!(de("&"), "und");
    }

    #[test]
    fn tables_without_numerals_keep_digits() {
        let tables = TableSet::from_toml_str("").unwrap();
        assert_eq!(normalize("21", &tables), "21");
    }

    #[test]
    fn reports_traits() {
        let (_, traits) = normalize_with_traits("3,5 %", TableSet::german());
        assert!(traits.contains(TextTraits::HAS_DECIMAL_COMMA | TextTraits::HAS_SYMBOLS));
    }
}
