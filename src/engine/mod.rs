//! Execution engine.
//!
//! A [`Machine`] borrows an immutable [`TransitionTable`](crate::table::TransitionTable)
//! and owns the mutable part of a run: tape, cursor, current state and step
//! count. Runs are bounded by a step budget; a run that exhausts its budget
//! can be resumed or checkpointed.

mod error;
mod machine;
mod tape;

pub use error::RunError;
pub use machine::{run, Machine, MachineState, RunOutcome, DEFAULT_STEP_BUDGET};
pub use tape::{Tape, MAX_TAPE_GROWTH};
