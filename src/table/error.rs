//! Construction errors for transition tables.

use thiserror::Error;

/// A structural defect found while validating a table.
///
/// These always point at a bug in a generator or composer, never at input
/// data, and are never recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("symbol {symbol:?} in a transition of '{state}' is not in the alphabet")]
    InvalidSymbol { state: String, symbol: char },

    #[error("state '{state}' contains reserved character {character:?}")]
    ReservedCharacterInState { state: String, character: char },

    #[error("{} transitions share the key ('{state}', {symbol:?}): {}", .entries.len(), .entries.join("; "))]
    DuplicateTransition {
        state: String,
        symbol: char,
        entries: Vec<String>,
    },
}

/// Every problem found in one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transition table rejected: {}", render(.problems))]
pub struct TableError {
    problems: Vec<BuildError>,
}

impl TableError {
    pub(crate) fn new(problems: Vec<BuildError>) -> Self {
        Self { problems }
    }

    pub fn problems(&self) -> &[BuildError] {
        &self.problems
    }
}

fn render(problems: &[BuildError]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
