//! Grapheme rewriting.
//!
//! Turns lowercased text into an ordered list of [`Segment`]s by applying the
//! pattern table longest-pattern-first:
//!
//! ```text
//! "tschüss"
//!   tsch  -> [P(tʃ), R("üss")]
//!   sch   -> (no raw match)
//!   ü     -> [P(tʃ), P(y), R("ss")]
//! ```
//!
//! Each pass only splits `Raw` segments. Once a span has become a `Phoneme` it
//! is never looked at again, so a shorter pattern cannot match inside a span
//! that a longer one already claimed, and no character of the input needs to
//! be reserved as a boundary marker.

use crate::{Segment, TableSet};

/// Rewrite `text` into phoneme and raw segments using `tables`.
pub(crate) fn rewrite<'t>(text: &str, tables: &'t TableSet) -> Vec<Segment<'t>> {
    let lowered = text.to_lowercase();
    if lowered.is_empty() {
        return Vec::new();
    }

    let mut segments = vec![Segment::Raw(lowered)];

    for (grapheme, phoneme) in tables.patterns() {
        let grapheme = grapheme.as_str();
        if !segments.iter().any(|s| matches!(s, Segment::Raw(raw) if raw.contains(grapheme))) {
            continue;
        }

        let mut next = Vec::with_capacity(segments.len() + 2);
        for segment in segments {
            match segment {
                Segment::Raw(raw) if raw.contains(grapheme) => split_raw(&raw, grapheme, phoneme, &mut next),
                other => next.push(other),
            }
        }
        tracing::trace!(grapheme, phoneme = phoneme.as_str(), segments = next.len(), "pattern applied");
        segments = next;
    }

    segments
}

/// Split `raw` at every non-overlapping, left-to-right occurrence of `grapheme`.
fn split_raw<'t>(raw: &str, grapheme: &str, phoneme: &'t str, out: &mut Vec<Segment<'t>>) {
    let mut last = 0;
    for (start, matched) in raw.match_indices(grapheme) {
        if start > last {
            out.push(Segment::Raw(raw[last..start].to_string()));
        }
        out.push(Segment::Phoneme(phoneme));
        last = start + matched.len();
    }
    if last < raw.len() {
        out.push(Segment::Raw(raw[last..].to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(s: &str) -> Segment<'static> {
        Segment::Raw(s.to_string())
    }

    #[test]
    fn empty_input_has_no_segments() {
        assert!(rewrite("", TableSet::german()).is_empty());
    }

    #[test]
    fn longest_pattern_wins_over_contained_shorter_ones() {
        // "tsch" contains "sch" and "ch"; only the 4-char rule may fire.
        assert_eq!(rewrite("tsch", TableSet::german()), vec![Segment::Phoneme("tʃ")]);
        assert_eq!(rewrite("sch", TableSet::german()), vec![Segment::Phoneme("ʃ")]);
    }

    #[test]
    fn lowercases_and_keeps_leftovers_as_raw_runs() {
        let segments = rewrite("Tisch!", TableSet::german());
        assert_eq!(segments, vec![raw("ti"), Segment::Phoneme("ʃ"), raw("!")]);
    }

    #[test]
    fn replaces_every_non_overlapping_occurrence() {
        let segments = rewrite("aaa", TableSet::german());
        assert_eq!(segments, vec![Segment::Phoneme("aː"), raw("a")]);

        let segments = rewrite("ei ei", TableSet::german());
        assert_eq!(segments, vec![Segment::Phoneme("aɪ"), raw(" "), Segment::Phoneme("aɪ")]);
    }

    #[test]
    fn resolved_spans_are_not_rematched() {
        // "st" is claimed first (equal length, earlier in table than "th"),
        // so the "h" is left raw.
        let segments = rewrite("sth", TableSet::german());
        assert_eq!(segments, vec![Segment::Phoneme("ʃt"), raw("h")]);
    }

    #[test]
    fn delimiter_like_characters_are_ordinary_input() {
        let segments = rewrite("a|b", TableSet::german());
        assert_eq!(segments, vec![raw("a|b")]);
    }
}
