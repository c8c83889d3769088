//! Timed sequence assembly.
//!
//! The assembler is a small accumulation state machine over the output
//! sequence and a time cursor:
//!
//! ```text
//! append(v), last == v  ─▶ durations[last] += 0.7·d(v); cursor += 0.7·d(v)
//! append(v), otherwise  ─▶ push (v, cursor, d(v));       cursor += d(v)
//! pause(p)              ─▶ cursor += p
//! ```
//!
//! Only the last slot is ever extended, and only before anything else is
//! appended, so every start time equals the cursor at the moment its entry
//! was pushed and `times` is non-decreasing.

use crate::{Step, TableSet, Viseme, VisemeSequence};

/// Share of a viseme's base duration added when it repeats back to back.
pub const COALESCE_FACTOR: f64 = 0.7;

#[derive(Debug)]
pub(crate) struct SequenceAssembler<'t> {
    tables: &'t TableSet,
    visemes: Vec<Viseme>,
    times: Vec<f64>,
    durations: Vec<f64>,
    cursor: f64,
}

impl<'t> SequenceAssembler<'t> {
    pub fn new(tables: &'t TableSet) -> Self {
        SequenceAssembler { tables, visemes: Vec::new(), times: Vec::new(), durations: Vec::new(), cursor: 0.0 }
    }

    /// Current position of the time cursor.
    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    /// Append `viseme`, merging it into the previous entry when identical.
    pub fn append(&mut self, viseme: Viseme) {
        let base = self.tables.viseme_duration(viseme);

        if self.visemes.last() == Some(&viseme) {
            let extension = COALESCE_FACTOR * base;
            if let Some(duration) = self.durations.last_mut() {
                *duration += extension;
            }
            self.cursor += extension;
            return;
        }

        self.visemes.push(viseme);
        self.times.push(self.cursor);
        self.durations.push(base);
        self.cursor += base;
    }

    /// Advance the cursor without touching the sequence.
    pub fn advance_pause(&mut self, amount: f64) {
        self.cursor += amount;
    }

    pub fn apply(&mut self, step: Step) {
        match step {
            Step::Viseme(v) => self.append(v),
            Step::Pause(amount) => self.advance_pause(amount),
        }
    }

    pub fn finish(self, words: &str) -> VisemeSequence {
        VisemeSequence {
            words: words.to_string(),
            visemes: self.visemes,
            times: self.times,
            durations: self.durations,
        }
    }
}
