//! Transition tables: assembly, validation and lookup.
//!
//! A table is assembled with a [`TableBuilder`], validated exactly once when
//! it is built, and immutable afterwards. Holding a [`TransitionTable`] is
//! proof that its keys are unique, its symbols concrete and its state names
//! free of reserved characters.

mod builder;
mod error;
mod validate;
mod wildcard;

pub use builder::TableBuilder;
pub use error::{BuildError, TableError};

use crate::core::{Alphabet, MachineConfig, StateId, StateNames, StateTransition, Symbol};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// How a halted run ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Verdict {
    Accept,
    Reject,
}

/// A validated, deterministic program.
#[derive(Clone, Debug)]
pub struct TransitionTable {
    pub(crate) config: Arc<MachineConfig>,
    pub(crate) names: StateNames,
    pub(crate) transitions: Vec<StateTransition>,
    pub(crate) lookup: HashMap<(StateId, Symbol), StateTransition>,
}

impl TransitionTable {
    /// The transition for `(state, symbol)`, if the program defines one.
    pub fn get(&self, state: StateId, symbol: Symbol) -> Option<&StateTransition> {
        self.lookup.get(&(state, symbol))
    }

    /// Transitions in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &StateTransition> + '_ {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.config.alphabet
    }

    pub fn names(&self) -> &StateNames {
        &self.names
    }

    pub fn state_name(&self, id: StateId) -> &str {
        self.names.name(id)
    }

    pub fn initial(&self) -> StateId {
        StateNames::INITIAL
    }

    pub fn is_terminal(&self, state: StateId) -> bool {
        self.names.is_terminal(state)
    }

    /// Verdict of a terminal state, `None` for every other state.
    pub fn verdict(&self, state: StateId) -> Option<Verdict> {
        match state {
            s if s == StateNames::ACCEPT => Some(Verdict::Accept),
            s if s == StateNames::REJECT => Some(Verdict::Reject),
            _ => None,
        }
    }

    /// Number of distinct states referenced by the program.
    pub fn state_count(&self) -> usize {
        let mut seen: Vec<StateId> = self
            .transitions
            .iter()
            .flat_map(|t| [t.from_state, t.to_state])
            .collect();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }
}
