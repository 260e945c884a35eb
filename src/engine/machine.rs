//! Step-by-step execution of a transition table.

use crate::core::{Direction, StateId, StateNames, StateTransition};
use crate::engine::error::RunError;
use crate::engine::tape::Tape;
use crate::table::{TransitionTable, Verdict};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Step budget used when the caller has no better estimate.
pub const DEFAULT_STEP_BUDGET: u64 = 1_000_000;

/// Everything that changes while a machine runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineState {
    pub tape: Tape,
    pub cursor: usize,
    pub current: StateId,
    pub steps: u64,
}

/// Final state of a run that reached ACCEPT or REJECT.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    pub state: String,
    pub verdict: Verdict,
    pub tape: Tape,
    pub cursor: usize,
    pub steps: u64,
}

impl RunOutcome {
    pub fn accepted(&self) -> bool {
        self.verdict == Verdict::Accept
    }
}

/// A table together with the state of one run over it.
///
/// The table is borrowed, so any number of machines can execute the same
/// program at once.
#[derive(Clone, Debug)]
pub struct Machine<'t> {
    table: &'t TransitionTable,
    state: MachineState,
}

impl<'t> Machine<'t> {
    /// A machine in the initial state over an empty tape.
    pub fn new(table: &'t TransitionTable) -> Self {
        Self {
            table,
            state: MachineState {
                tape: Tape::blank(table.alphabet()),
                cursor: 0,
                current: StateNames::INITIAL,
                steps: 0,
            },
        }
    }

    /// Start over on `tape` with the head at `cursor`.
    ///
    /// A cursor too far past the end of the tape is rejected and leaves the
    /// machine unchanged.
    pub fn initialize(&mut self, mut tape: Tape, cursor: usize) -> Result<(), RunError> {
        tape.reach(cursor)?;
        self.state = MachineState {
            tape,
            cursor,
            current: StateNames::INITIAL,
            steps: 0,
        };
        Ok(())
    }

    pub fn table(&self) -> &'t TransitionTable {
        self.table
    }

    pub fn state(&self) -> &MachineState {
        &self.state
    }

    pub fn tape(&self) -> &Tape {
        &self.state.tape
    }

    pub fn cursor(&self) -> usize {
        self.state.cursor
    }

    pub fn current(&self) -> StateId {
        self.state.current
    }

    pub fn steps(&self) -> u64 {
        self.state.steps
    }

    pub fn is_halted(&self) -> bool {
        self.table.is_terminal(self.state.current)
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.table.verdict(self.state.current)
    }

    /// Execute a single transition and return it.
    ///
    /// A failed step leaves the machine untouched.
    pub fn step(&mut self) -> Result<StateTransition, RunError> {
        if self.is_halted() {
            return Err(RunError::Halted {
                state: self.current_name(),
            });
        }

        let symbol = self.state.tape.read(self.state.cursor);
        let transition = *self
            .table
            .get(self.state.current, symbol)
            .ok_or_else(|| RunError::MissingTransition {
                state: self.current_name(),
                symbol: symbol.as_char(),
                steps: self.state.steps,
            })?;

        let cursor = match transition.direction {
            Direction::Forward => self.state.cursor + 1,
            Direction::Backward => {
                self.state
                    .cursor
                    .checked_sub(1)
                    .ok_or_else(|| RunError::NegativeCursor {
                        state: self.current_name(),
                        steps: self.state.steps,
                    })?
            }
            Direction::Stay => self.state.cursor,
        };

        trace!(
            step = self.state.steps,
            cursor = self.state.cursor,
            transition = %transition.describe(self.table.names()),
            "step"
        );

        // The head is always on a cell and moves by at most one, so neither
        // call grows the tape by more than a cell.
        self.state.tape.write(self.state.cursor, transition.to_symbol)?;
        self.state.tape.reach(cursor)?;
        self.state.cursor = cursor;
        self.state.current = transition.to_state;
        self.state.steps += 1;
        Ok(transition)
    }

    /// Initialize and run until the machine halts or `max_steps` transitions
    /// have executed.
    pub fn run(&mut self, tape: Tape, cursor: usize, max_steps: u64) -> Result<RunOutcome, RunError> {
        self.initialize(tape, cursor)?;
        self.resume(max_steps)
    }

    /// Continue the current run for at most `budget` more transitions.
    pub fn resume(&mut self, budget: u64) -> Result<RunOutcome, RunError> {
        let limit = self.state.steps.saturating_add(budget);
        loop {
            if let Some(verdict) = self.verdict() {
                debug!(
                    state = self.table.state_name(self.state.current),
                    steps = self.state.steps,
                    cursor = self.state.cursor,
                    "machine halted"
                );
                return Ok(self.outcome(verdict));
            }
            if self.state.steps >= limit {
                debug!(budget, steps = self.state.steps, "step budget exhausted");
                return Err(RunError::StepBudgetExceeded {
                    budget,
                    state: self.current_name(),
                    steps: self.state.steps,
                });
            }
            self.step()?;
        }
    }

    pub(crate) fn restore_state(&mut self, state: MachineState) {
        self.state = state;
    }

    fn outcome(&self, verdict: Verdict) -> RunOutcome {
        RunOutcome {
            state: self.current_name(),
            verdict,
            tape: self.state.tape.clone(),
            cursor: self.state.cursor,
            steps: self.state.steps,
        }
    }

    fn current_name(&self) -> String {
        self.table.state_name(self.state.current).to_string()
    }
}

/// Run `table` on `tape` from `cursor` in a fresh machine.
pub fn run(
    table: &TransitionTable,
    tape: Tape,
    cursor: usize,
    max_steps: u64,
) -> Result<RunOutcome, RunError> {
    Machine::new(table).run(tape, cursor, max_steps)
}
