//! Conversion driver.
//!
//! A `Converter` runs the full pipeline for one input against one table set:
//!
//! ```text
//! (0) blank check          -> empty sequence, nothing else runs
//! (1) normalize            -> spelled numbers/symbols, folded text
//! (2) rewrite              -> Vec<Segment>
//! (3) resolve + assemble   -> VisemeSequence
//! ```
//!
//! All working state (segments, steps, cursor) lives on the stack of a single
//! call; the tables are only read. Output is deterministic given the same
//! input, tables and options.

use super::assemble::SequenceAssembler;
use super::metrics::{RunMetrics, RunResult, SegmentTrace};
use super::resolve::resolve;
use super::rewrite::rewrite;
use crate::normalize::{TextTraits, normalize_with_traits};
use crate::{Options, Segment, TableSet, VisemeSequence};
use std::time::Instant;

/// Converter orchestrates the pipeline stages for a single input.
///
/// Usage: create with `Converter::new(input, &tables)` then call `run(options)`.
#[derive(Debug)]
pub struct Converter<'a> {
    input: &'a str,
    tables: &'a TableSet,
}

impl<'a> Converter<'a> {
    pub fn new(input: &'a str, tables: &'a TableSet) -> Self {
        Converter { input, tables }
    }

    /// Run the pipeline and return the sequence with stage details.
    pub fn run_with_metrics(self, options: &Options) -> RunResult {
        let total_start = Instant::now();
        let mut metrics = RunMetrics::default();

        if self.input.trim().is_empty() {
            metrics.total = total_start.elapsed();
            return RunResult {
                sequence: VisemeSequence::empty(self.input),
                normalized: String::new(),
                traits: TextTraits::empty(),
                segments: Vec::new(),
                metrics,
            };
        }

        let normalize_start = Instant::now();
        let (normalized, traits) = if options.normalize {
            normalize_with_traits(self.input, self.tables)
        } else {
            (self.input.to_string(), TextTraits::empty())
        };
        metrics.normalize = normalize_start.elapsed();

        let rewrite_start = Instant::now();
        let segments = rewrite(&normalized, self.tables);
        metrics.rewrite = rewrite_start.elapsed();
        metrics.segments = segments.len();

        let resolve_start = Instant::now();
        let resolution = resolve(&segments, self.tables);
        let mut assembler = SequenceAssembler::new(self.tables);
        for step in resolution.steps {
            assembler.apply(step);
        }
        let end = assembler.cursor();
        let sequence = assembler.finish(self.input);
        metrics.resolve = resolve_start.elapsed();
        metrics.dropped = resolution.dropped;
        metrics.skipped = resolution.skipped;
        metrics.total = total_start.elapsed();

        tracing::debug!(
            tables = self.tables.name(),
            segments = metrics.segments,
            visemes = sequence.visemes.len(),
            dropped = metrics.dropped,
            skipped = metrics.skipped,
            end,
            "converted"
        );

        let segments = segments
            .iter()
            .map(|s| SegmentTrace { phoneme: matches!(s, Segment::Phoneme(_)), text: s.text().to_string() })
            .collect();

        RunResult { sequence, normalized, traits, segments, metrics }
    }

    /// Run the pipeline and return only the sequence.
    ///
    /// Convenience wrapper that discards stage details. Use
    /// [`run_with_metrics`](Self::run_with_metrics) to inspect them.
    pub fn run(self, options: &Options) -> VisemeSequence {
        self.run_with_metrics(options).sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Viseme;

    #[test]
    fn blank_input_short_circuits() {
        let run = Converter::new(" \t ", TableSet::german()).run_with_metrics(&Options::default());
        assert!(run.sequence.is_empty());
        assert_eq!(run.sequence.words, " \t ");
        assert!(run.segments.is_empty());
    }

    #[test]
    fn reports_stage_details() {
        let run = Converter::new("Tisch 2", TableSet::german()).run_with_metrics(&Options::default());
        assert_eq!(run.normalized, "Tisch zwei");
        assert!(run.traits.contains(TextTraits::HAS_DIGITS));
        assert_eq!(run.metrics.segments, run.segments.len());
        assert!(run.segments.iter().any(|s| s.phoneme && s.text == "ʃ"));
        assert!(run.metrics.total >= run.metrics.rewrite);
    }

    #[test]
    fn normalization_can_be_disabled() {
        let options = Options { normalize: false };
        let run = Converter::new("2", TableSet::german()).run_with_metrics(&options);
        assert_eq!(run.normalized, "2");
        assert!(run.sequence.is_empty());
        assert_eq!(run.metrics.skipped, 1);

        let seq = Converter::new("2", TableSet::german()).run(&Options::default());
        assert_eq!(seq.visemes.first(), Some(&Viseme::SS));
    }
}
