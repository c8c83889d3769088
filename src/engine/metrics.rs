//! Conversion run metrics.
//!
//! This module defines a small set of structs used to observe and debug a
//! conversion run.
//!
//! The intended usage is:
//!
//! - `Converter::run` for normal operation.
//! - `Converter::run_with_metrics` for profiling, debugging table changes, and
//!   inspecting what each stage produced.
//!
//! ## Design notes
//!
//! - `RunResult::segments` is primarily for debugging and allocates one
//!   string per segment.

use crate::VisemeSequence;
use crate::normalize::TextTraits;
use std::time::Duration;

/// Per-stage timings and counters.
#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for [`Converter::run_with_metrics`](super::Converter::run_with_metrics).
    pub total: Duration,
    pub normalize: Duration,
    pub rewrite: Duration,
    /// Resolution plus assembly.
    pub resolve: Duration,
    /// Number of segments the rewriter produced.
    pub segments: usize,
    /// Characters whose fallback phoneme had no viseme.
    pub dropped: usize,
    /// Characters matched by no table.
    pub skipped: usize,
}

/// A rewritten segment, flattened for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentTrace {
    /// `true` for a resolved phoneme, `false` for a raw character run.
    pub phoneme: bool,
    pub text: String,
}

/// Converter output bundled with stage details.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub sequence: VisemeSequence,
    /// Text as handed to the rewriter (after normalization, if enabled).
    pub normalized: String,
    pub traits: TextTraits,
    pub segments: Vec<SegmentTrace>,
    pub metrics: RunMetrics,
}
