//! Conversion engine.
//!
//! This module is the entry point for the text → viseme pipeline. The stages
//! live in focused submodules under `src/engine/`:
//!
//! ## How the parts work together
//!
//! ```text
//! input ── normalize (crate::normalize) ──┐
//!                                         v
//!                           rewrite (rewrite.rs)
//!                             - lowercase
//!                             - patterns longest-first
//!                             - Vec<Segment>
//!                                         │
//!                                         v
//!                           resolve (resolve.rs)
//!                             - direct phoneme match
//!                             - per-char fallback / pauses
//!                             - Vec<Step>
//!                                         │
//!                                         v
//!                      SequenceAssembler (assemble.rs)
//!                             - coalesce repeats
//!                             - advance cursor
//!                                         │
//!                                         v
//!                                  VisemeSequence
//! ```
//!
//! `Converter` (converter.rs) drives one run and records per-stage timings
//! (metrics.rs).
//!
//! ## Responsibilities by module
//!
//! - `rewrite.rs`: grapheme pattern application over typed segments.
//! - `resolve.rs`: two-tier phoneme/character resolution into steps.
//! - `assemble.rs`: the timing state machine and coalescing.
//! - `converter.rs`: orchestration, blank-input short circuit, tracing.
//! - `metrics.rs`: timing/debug data for a run.
//!
//! ## Debugging
//!
//! Run with `RUST_LOG=lipsync=trace` (CLI) or install any `tracing`
//! subscriber to see pattern applications and ignored characters.

#[path = "engine/assemble.rs"]
mod assemble;
#[path = "engine/converter.rs"]
mod converter;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/rewrite.rs"]
mod rewrite;

pub use assemble::COALESCE_FACTOR;
pub use converter::Converter;
pub use metrics::RunResult;
