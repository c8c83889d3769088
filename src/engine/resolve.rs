//! Phoneme → viseme resolution.
//!
//! Every segment is resolved with the same two-tier lookup:
//!
//! ```text
//! segment text ──▶ phoneme table ──▶ visemes            (direct)
//!        │
//!        └─ per char ──▶ letter table ──▶ phoneme table ──▶ visemes
//!                   │                              └─▶ (unmapped: dropped)
//!                   └─▶ pause table ──▶ Pause(amount)
//!                   └─▶ (none: skipped)
//! ```
//!
//! Dropping and skipping are the normal policy for anything the tables do not
//! cover; they are counted for diagnostics but never reported as errors.

use crate::{Segment, Step, TableSet};

/// Steps produced from a segment list, plus counts of what was ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Resolution {
    pub steps: Vec<Step>,
    /// Characters whose fallback phoneme has no viseme mapping.
    pub dropped: usize,
    /// Characters found in no table at all.
    pub skipped: usize,
}

pub(crate) fn resolve(segments: &[Segment<'_>], tables: &TableSet) -> Resolution {
    let mut out = Resolution::default();

    for segment in segments {
        let text = segment.text();

        if let Some(visemes) = tables.phoneme(text) {
            out.steps.extend(visemes.iter().copied().map(Step::Viseme));
            continue;
        }

        for c in text.chars() {
            if let Some(phoneme) = tables.letter(c) {
                match tables.phoneme(phoneme) {
                    Some(visemes) => out.steps.extend(visemes.iter().copied().map(Step::Viseme)),
                    None => {
                        tracing::trace!(char = %c, phoneme, "no viseme for fallback phoneme");
                        out.dropped += 1;
                    }
                }
            } else if let Some(amount) = tables.pause(c) {
                out.steps.push(Step::Pause(amount));
            } else {
                tracing::trace!(char = %c, "character not in any table");
                out.skipped += 1;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Viseme;

    #[test]
    fn direct_phoneme_match_expands_diphthongs() {
        let res = resolve(&[Segment::Phoneme("aɪ")], TableSet::german());
        assert_eq!(res.steps, vec![Step::Viseme(Viseme::AA), Step::Viseme(Viseme::I)]);
    }

    #[test]
    fn raw_runs_fall_back_per_character() {
        let res = resolve(&[Segment::Raw("mal".to_string())], TableSet::german());
        assert_eq!(res.steps, vec![Step::Viseme(Viseme::PP), Step::Viseme(Viseme::AA), Step::Viseme(Viseme::NN)]);
    }

    #[test]
    fn raw_run_equal_to_a_phoneme_is_matched_directly() {
        // "ts" as a whole run is the affricate, not t + s.
        let res = resolve(&[Segment::Raw("ts".to_string())], TableSet::german());
        assert_eq!(res.steps, vec![Step::Viseme(Viseme::SS)]);
    }

    #[test]
    fn ks_run_matches_its_per_character_reading() {
        let tables = TableSet::german();
        let whole = resolve(&[Segment::Raw("ks".to_string())], tables);
        let split = resolve(&[Segment::Raw("k".to_string()), Segment::Raw("s".to_string())], tables);
        assert_eq!(whole.steps, split.steps);
        assert_eq!(whole.steps, vec![Step::Viseme(Viseme::KK), Step::Viseme(Viseme::SS)]);
    }

    #[test]
    fn doubled_letter_phoneme_resolves_per_character() {
        let res = resolve(&[Segment::Phoneme("ss")], TableSet::german());
        assert_eq!(res.steps, vec![Step::Viseme(Viseme::SS), Step::Viseme(Viseme::SS)]);
        assert_eq!(res.dropped + res.skipped, 0);
    }

    #[test]
    fn pauses_and_unknown_characters() {
        let res = resolve(&[Segment::Raw("a, b~".to_string())], TableSet::german());
        assert_eq!(
            res.steps,
            vec![
                Step::Viseme(Viseme::AA),
                Step::Pause(3.0),
                Step::Pause(1.0),
                Step::Viseme(Viseme::PP),
            ]
        );
        assert_eq!(res.skipped, 1);
        assert_eq!(res.dropped, 0);
    }

    #[test]
    fn unmapped_fallback_phonemes_are_dropped_without_pause() {
        let tables = TableSet::from_toml_str("[letters]\nq = \"kw\"\n\n[pauses]\nq = 9.0\n").unwrap();
        let res = resolve(&[Segment::Raw("q".to_string())], &tables);
        assert!(res.steps.is_empty());
        assert_eq!(res.dropped, 1);
    }

    #[test]
    fn unmapped_pattern_phoneme_falls_back_over_its_characters() {
        let tables = TableSet::from_toml_str("[letters]\nk = \"k\"\n\n[phonemes]\nk = \"kk\"\n").unwrap();
        let res = resolve(&[Segment::Phoneme("kx")], &tables);
        assert_eq!(res.steps, vec![Step::Viseme(Viseme::KK)]);
        assert_eq!(res.skipped, 1);
    }
}
