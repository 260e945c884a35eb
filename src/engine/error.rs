//! Runtime errors raised while executing a table.

use thiserror::Error;

/// Errors that stop a run.
///
/// A run that fails keeps its machine state, so the caller can inspect the
/// tape, take a checkpoint or resume with a larger budget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    #[error("no transition from state '{state}' on symbol {symbol:?} after {steps} steps")]
    MissingTransition {
        state: String,
        symbol: char,
        steps: u64,
    },

    #[error("cursor moved below the start of the tape in state '{state}' after {steps} steps")]
    NegativeCursor { state: String, steps: u64 },

    #[error("step budget of {budget} exhausted in state '{state}' after {steps} steps")]
    StepBudgetExceeded {
        budget: u64,
        state: String,
        steps: u64,
    },

    #[error("cursor {cursor} is too far past the end of a {len}-cell tape")]
    CursorOutOfRange { cursor: usize, len: usize },

    #[error("symbol {symbol:?} at position {position} is not in the alphabet")]
    InvalidTapeSymbol { position: usize, symbol: char },

    #[error("machine already halted in state '{state}'")]
    Halted { state: String },
}
