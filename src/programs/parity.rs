//! Is a binary number even?

use crate::codec;
use crate::core::{Direction, MachineConfig, Scope, StateTransition};
use crate::engine::{self, RunOutcome, Tape};
use crate::generators::FieldWidth;
use crate::table::{TableBuilder, TransitionTable};
use crate::Result;

/// Transitions deciding whether the number on the tape is even.
///
/// Blank input is rejected. Otherwise the head runs to the end of the number
/// and accepts if the last bit is zero.
pub fn parity_transitions(scope: &mut Scope<'_>) -> Vec<StateTransition> {
    let alphabet = scope.alphabet();
    let (blank, any) = (alphabet.blank(), alphabet.wildcard());
    let (initial, accept, reject) = (scope.initial(), scope.accept(), scope.reject());
    let advance = scope.state("advance");
    let last_bit = scope.state("last_bit");

    vec![
        StateTransition::pass(initial, blank, reject, Direction::Forward),
        StateTransition::pass(initial, any, advance, Direction::Forward),
        StateTransition::pass(advance, any, advance, Direction::Forward),
        StateTransition::pass(advance, blank, last_bit, Direction::Backward),
        StateTransition::pass(last_bit, alphabet.zero(), accept, Direction::Forward),
        StateTransition::pass(last_bit, alphabet.one(), reject, Direction::Forward),
    ]
}

/// A built parity program.
#[derive(Clone, Debug)]
pub struct ParityCheck {
    table: TransitionTable,
}

impl ParityCheck {
    pub fn new(config: MachineConfig) -> Result<Self> {
        let mut builder = TableBuilder::new(config)?;
        let transitions = parity_transitions(&mut builder.scope());
        builder.extend(transitions);
        Ok(Self {
            table: builder.build()?,
        })
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Run on a tape written in the table's alphabet.
    pub fn run(&self, tape: &str, max_steps: u64) -> Result<RunOutcome> {
        let tape = Tape::parse(tape, self.table.alphabet())?;
        Ok(engine::run(&self.table, tape, 0, max_steps)?)
    }

    pub fn is_even(&self, number: u64, max_steps: u64) -> Result<bool> {
        let bits = (u64::BITS - number.leading_zeros()).max(1) as usize;
        let binary = codec::encode_field(number, FieldWidth::new(bits)?)?;
        let tape = codec::to_symbols(&binary, self.table.alphabet());
        Ok(self.run(&tape, max_steps)?.accepted())
    }
}
