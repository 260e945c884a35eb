//! Build-time expansion of the wildcard meta-symbol.

use crate::core::{Alphabet, StateTransition};
use std::collections::HashSet;

/// Replace every wildcard with concrete transitions.
///
/// A wildcard read matches each concrete symbol its state does not already
/// handle explicitly. A wildcard write puts back whatever was read. Two
/// wildcard reads in one state both expand over the same keys and are left
/// for the validator to report as duplicates.
pub(crate) fn expand(transitions: Vec<StateTransition>, alphabet: &Alphabet) -> Vec<StateTransition> {
    let wildcard = alphabet.wildcard();
    let explicit: HashSet<_> = transitions
        .iter()
        .filter(|t| t.from_symbol != wildcard)
        .map(StateTransition::key)
        .collect();

    let mut expanded = Vec::with_capacity(transitions.len());
    for transition in transitions {
        if transition.from_symbol == wildcard {
            for symbol in alphabet.symbols() {
                if explicit.contains(&(transition.from_state, symbol)) {
                    continue;
                }
                let to_symbol = if transition.to_symbol == wildcard {
                    symbol
                } else {
                    transition.to_symbol
                };
                expanded.push(StateTransition {
                    from_symbol: symbol,
                    to_symbol,
                    ..transition
                });
            }
        } else if transition.to_symbol == wildcard {
            expanded.push(StateTransition {
                to_symbol: transition.from_symbol,
                ..transition
            });
        } else {
            expanded.push(transition);
        }
    }
    expanded
}
