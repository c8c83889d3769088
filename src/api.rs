use crate::engine::{Converter, RunResult};
use crate::normalize::TextTraits;
use crate::{TableSet, Viseme};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Options that affect conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Run the text normalizer (numbers, symbols, diacritics) before
    /// rewriting. When disabled, digits and symbols are simply skipped.
    pub normalize: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options { normalize: true }
    }
}

/// A timed viseme sequence.
///
/// `visemes`, `times` and `durations` are parallel and always the same
/// length. Times are relative units (1.0 ≈ one average phoneme) and never
/// decrease. Coalescing extends a duration in place, so `times[i] +
/// durations[i]` need not equal `times[i + 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisemeSequence {
    /// The original, unnormalized input.
    pub words: String,
    pub visemes: Vec<Viseme>,
    pub times: Vec<f64>,
    pub durations: Vec<f64>,
}

impl VisemeSequence {
    pub(crate) fn empty(words: &str) -> Self {
        VisemeSequence { words: words.to_string(), visemes: Vec::new(), times: Vec::new(), durations: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.visemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visemes.is_empty()
    }

    /// Iterate `(viseme, start, duration)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (Viseme, f64, f64)> + '_ {
        self.visemes.iter().zip(&self.times).zip(&self.durations).map(|((&v, &t), &d)| (v, t, d))
    }
}

/// A rewritten segment as shown in verbose output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentSummary {
    /// `"phoneme"` or `"raw"`.
    pub kind: String,
    pub text: String,
}

/// Additional details returned by [`convert_verbose_with`].
///
/// This is intentionally compact: it's meant for debugging tables and
/// inspecting timings without dumping the entire internal state.
#[derive(Debug, Clone)]
pub struct ConversionDetails {
    /// Text after normalization (what the rewriter saw).
    pub normalized: String,
    /// Traits found by the normalizer's input scan.
    pub traits: TextTraits,
    pub segments: Vec<SegmentSummary>,
    /// Characters whose fallback phoneme had no viseme.
    pub dropped: usize,
    /// Characters matched by no table.
    pub skipped: usize,
    pub total: Duration,
    pub normalize: Duration,
    pub rewrite: Duration,
    pub resolve: Duration,
}

/// Result from [`convert_verbose_with`].
#[derive(Debug, Clone)]
pub struct ConversionVerbose {
    pub sequence: VisemeSequence,
    pub details: ConversionDetails,
}

/// Convert `text` using the built-in German tables and default [`Options`].
///
/// # Example
/// ```
/// use lipsync::convert;
///
/// let out = convert("Hallo");
/// assert!(!out.visemes.is_empty());
/// assert_eq!(out.words, "Hallo");
/// ```
pub fn convert(text: &str) -> VisemeSequence {
    convert_with(text, TableSet::german(), &Options::default())
}

/// Convert `text` with the provided `tables`/`options`.
pub fn convert_with(text: &str, tables: &TableSet, options: &Options) -> VisemeSequence {
    Converter::new(text, tables).run(options)
}

/// Convert `text` with `tables`/`options` and return extra (compact) debug details.
///
/// This is useful for profiling and table debugging. The default
/// [`convert_with`] path does not surface these.
pub fn convert_verbose_with(text: &str, tables: &TableSet, options: &Options) -> ConversionVerbose {
    let run = Converter::new(text, tables).run_with_metrics(options);
    run_to_verbose(run)
}

fn run_to_verbose(run: RunResult) -> ConversionVerbose {
    let segments = run
        .segments
        .into_iter()
        .map(|s| SegmentSummary { kind: if s.phoneme { "phoneme" } else { "raw" }.to_string(), text: s.text })
        .collect();

    let details = ConversionDetails {
        normalized: run.normalized,
        traits: run.traits,
        segments,
        dropped: run.metrics.dropped,
        skipped: run.metrics.skipped,
        total: run.metrics.total,
        normalize: run.metrics.normalize,
        rewrite: run.metrics.rewrite,
        resolve: run.metrics.resolve,
    };

    ConversionVerbose { sequence: run.sequence, details }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_keeps_original_words() {
        let res = convert("Grüß Gott, 3 Leute!");
        assert_eq!(res.words, "Grüß Gott, 3 Leute!");
        assert_eq!(res.visemes.len(), res.times.len());
        assert_eq!(res.visemes.len(), res.durations.len());
        assert!(res.durations.iter().all(|&d| d > 0.0));
    }

    #[test]
    fn empty_and_blank_inputs_are_empty_sequences() {
        for input in ["", "   ", "\n\t"] {
            let res = convert(input);
            assert!(res.is_empty());
            assert!(res.times.is_empty());
            assert!(res.durations.is_empty());
            assert_eq!(res.words, input);
        }
    }

    #[test]
    fn verbose_includes_segments_and_timings() {
        let res = convert_verbose_with("Schule", TableSet::german(), &Options::default());
        assert_eq!(res.details.normalized, "Schule");
        assert_eq!(res.details.segments[0], SegmentSummary { kind: "phoneme".to_string(), text: "ʃ".to_string() });
        assert!(res.details.total >= res.details.resolve);
        assert_eq!(res.sequence, convert("Schule"));
    }

    #[test]
    fn iter_yields_parallel_triples() {
        let seq = convert("Ja");
        let triples: Vec<_> = seq.iter().collect();
        assert_eq!(triples.len(), seq.len());
        assert_eq!(triples[0].0, seq.visemes[0]);
        assert_eq!(triples[0].1, seq.times[0]);
    }

    #[test]
    fn sequence_serializes_to_json() {
        let seq = convert("Ja");
        let json = serde_json::to_value(&seq).unwrap();
        assert_eq!(json["words"], "Ja");
        assert_eq!(json["visemes"][0], "I");
        let back: VisemeSequence = serde_json::from_value(json).unwrap();
        assert_eq!(back.visemes, seq.visemes);
    }
}
