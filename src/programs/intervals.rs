//! Merging overlapping intervals.
//!
//! The input segment holds `open close` pairs sorted by `open`. The machine
//! moves them one field at a time into the output segment, merging each pair
//! into the previous output pair when the two overlap (the previous close is
//! not smaller than the new open). A single table serves every input length:
//! the loop below reuses the same states for every pair.
//!
//! ```text
//! INITIAL -> copy first pair -> probe --exhausted--> ACCEPT
//!                                 |
//!                               input
//!                                 |
//!                          copy new open
//!                                 |
//!                 compare previous close with new open
//!                    |                           |
//!                disjoint                     overlap
//!                    |                           |
//!       copy new close unchanged     erase new open, copy new close,
//!                    |               keep the larger close
//!                    +-------> probe <-----------+
//! ```

use crate::codec::{self, Interval, MAX_FIELD_BITS};
use crate::core::{ConfigError, Direction, MachineConfig, Scope, StateId, StateTransition};
use crate::engine::{self, RunOutcome, Tape};
use crate::generators::{
    compare_fields, copy_field, erase_field, probe_input, replace_field, scan_to_blanks,
    FieldWidth,
};
use crate::table::{TableBuilder, TransitionTable};
use crate::Result;
use tracing::debug;

/// Field width of the business-hours preset.
pub const BUSINESS_HOURS_WIDTH: usize = 5;

/// The complete merge program for `width`-bit fields.
pub fn merge_intervals(scope: &mut Scope<'_>, width: FieldWidth) -> Vec<StateTransition> {
    let blank = scope.alphabet().blank();
    let (initial, accept) = (scope.initial(), scope.accept());
    let mut scope = scope.child("merge");

    let probe = scope.state("probe");
    let copy_open = scope.state("copy_open");
    let compare_open = scope.state("compare_open");
    let overlap = scope.state("overlap");
    let disjoint = scope.state("disjoint");

    let mut transitions = vec![StateTransition::pass(
        initial,
        blank,
        accept,
        Direction::Stay,
    )];
    transitions.extend(copy_field(&mut scope, initial, width.doubled(), probe));
    transitions.extend(probe_input(&mut scope, probe, copy_open, accept));
    transitions.extend(copy_field(&mut scope, copy_open, width, compare_open));
    transitions.extend(compare_fields(
        &mut scope,
        compare_open,
        overlap,
        disjoint,
        width,
    ));
    transitions.extend(copy_close_without_merge(&mut scope, disjoint, probe, width));
    transitions.extend(copy_close_and_merge(&mut scope, overlap, probe, width));
    transitions
}

/// The new open has been copied and starts a new interval: append the new
/// close too.
///
/// Starts and ends on the output tail.
pub fn copy_close_without_merge(
    scope: &mut Scope<'_>,
    start: StateId,
    end: StateId,
    width: FieldWidth,
) -> Vec<StateTransition> {
    let blank = scope.alphabet().blank();
    let mut scope = scope.child("keep_close");
    let seek_close = scope.state("seek_close");

    let mut transitions = scan_to_blanks(
        &mut scope,
        start,
        seek_close,
        blank,
        Direction::Forward,
        Direction::Backward,
        2,
    );
    transitions.extend(copy_field(&mut scope, seek_close, width, end));
    transitions
}

/// The new open has been copied but overlaps the previous interval: drop it
/// and extend the previous close if the new close is larger.
///
/// Starts and ends on the output tail.
pub fn copy_close_and_merge(
    scope: &mut Scope<'_>,
    start: StateId,
    end: StateId,
    width: FieldWidth,
) -> Vec<StateTransition> {
    let blank = scope.alphabet().blank();
    let mut scope = scope.child("merge_close");
    let seek_close = scope.state("seek_close");
    let copy_close = scope.state("copy_close");
    let compare_close = scope.state("compare_close");
    let drop_close = scope.state("drop_close");
    let extend_close = scope.state("extend_close");

    let mut transitions = erase_field(&mut scope, start, seek_close, width);
    transitions.extend(scan_to_blanks(
        &mut scope,
        seek_close,
        copy_close,
        blank,
        Direction::Forward,
        Direction::Backward,
        2,
    ));
    transitions.extend(copy_field(&mut scope, copy_close, width, compare_close));
    transitions.extend(compare_fields(
        &mut scope,
        compare_close,
        drop_close,
        extend_close,
        width,
    ));
    transitions.extend(erase_field(&mut scope, drop_close, end, width));
    transitions.extend(replace_field(&mut scope, extend_close, end, width));
    transitions
}

/// A built merge program for one field width.
#[derive(Clone, Debug)]
pub struct IntervalMerge {
    width: FieldWidth,
    table: TransitionTable,
}

impl IntervalMerge {
    pub fn new(config: MachineConfig, width: FieldWidth) -> Result<Self> {
        if width.get() > MAX_FIELD_BITS {
            return Err(ConfigError::FieldTooWide {
                bits: width.get(),
                max: MAX_FIELD_BITS,
            }
            .into());
        }

        let mut builder = TableBuilder::new(config)?;
        let transitions = merge_intervals(&mut builder.scope(), width);
        builder.extend(transitions);
        let table = builder.build()?;
        debug!(%width, transitions = table.len(), "built interval merge");

        Ok(Self { width, table })
    }

    /// Five-bit fields, enough for the hours of a day.
    pub fn business_hours(config: MachineConfig) -> Result<Self> {
        Self::new(config, FieldWidth::new(BUSINESS_HOURS_WIDTH)?)
    }

    pub fn width(&self) -> FieldWidth {
        self.width
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Encode `intervals` as the input segment of a fresh tape.
    pub fn initial_tape(&self, intervals: &[Interval]) -> Result<Tape> {
        let binary = codec::encode_intervals(intervals, self.width)?;
        let symbols = codec::to_symbols(&binary, self.table.alphabet());
        Ok(Tape::parse(&symbols, self.table.alphabet())?)
    }

    /// Run the machine on `intervals` without decoding the result.
    pub fn run(&self, intervals: &[Interval], max_steps: u64) -> Result<RunOutcome> {
        let tape = self.initial_tape(intervals)?;
        Ok(engine::run(&self.table, tape, 0, max_steps)?)
    }

    /// Intervals left on a finished tape.
    pub fn decode(&self, tape: &Tape) -> Result<Vec<Interval>> {
        Ok(codec::decode_tape(
            &tape.render(),
            self.table.alphabet(),
            self.width,
        )?)
    }

    pub fn merge(&self, intervals: &[Interval], max_steps: u64) -> Result<Vec<Interval>> {
        let outcome = self.run(intervals, max_steps)?;
        debug!(
            intervals = intervals.len(),
            steps = outcome.steps,
            "merged intervals"
        );
        self.decode(&outcome.tape)
    }
}
