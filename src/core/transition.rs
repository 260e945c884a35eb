//! The single rewrite rule a machine is built from.

use super::state::{StateId, StateNames};
use super::symbol::{Alphabet, Direction, Symbol};
use serde::{Deserialize, Serialize};

/// `(from_state, from_symbol) -> (to_state, to_symbol, direction)`.
///
/// Transitions are immutable values; a program is nothing more than a set of
/// them with unique keys.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct StateTransition {
    pub from_state: StateId,
    pub from_symbol: Symbol,
    pub to_state: StateId,
    pub to_symbol: Symbol,
    pub direction: Direction,
}

impl StateTransition {
    pub fn new(
        from_state: StateId,
        from_symbol: Symbol,
        to_state: StateId,
        to_symbol: Symbol,
        direction: Direction,
    ) -> Self {
        Self {
            from_state,
            from_symbol,
            to_state,
            to_symbol,
            direction,
        }
    }

    /// Leave `symbol` untouched and move on.
    pub fn pass(from_state: StateId, symbol: Symbol, to_state: StateId, direction: Direction) -> Self {
        Self::new(from_state, symbol, to_state, symbol, direction)
    }

    /// Lookup key of this transition.
    pub fn key(&self) -> (StateId, Symbol) {
        (self.from_state, self.from_symbol)
    }

    /// Human readable form using the names from `names`.
    pub fn describe(&self, names: &StateNames) -> String {
        format!(
            "({}, {:?}) -> ({}, {:?}, {:?})",
            names.name(self.from_state),
            self.from_symbol.as_char(),
            names.name(self.to_state),
            self.to_symbol.as_char(),
            self.direction,
        )
    }
}

/// Transitions that walk over both data symbols without changing them.
pub fn pass_over_data(
    alphabet: &Alphabet,
    from_state: StateId,
    to_state: StateId,
    direction: Direction,
) -> [StateTransition; 2] {
    alphabet
        .data()
        .map(|symbol| StateTransition::pass(from_state, symbol, to_state, direction))
}
