//! Structural validation of transition tables.
//!
//! Validation accumulates every problem instead of stopping at the first one,
//! so a broken generator is diagnosed in a single build.

use crate::core::{MachineConfig, StateId, StateNames, StateTransition, Symbol};
use crate::table::error::BuildError;
use std::collections::{BTreeMap, BTreeSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<BuildError>>;

/// Check symbols, state names and key uniqueness of `transitions`.
///
/// Returns `Validation::Success(())` if the table is well formed, or a
/// failure carrying every problem found.
pub(crate) fn validate(
    transitions: &[StateTransition],
    names: &StateNames,
    config: &MachineConfig,
) -> Check {
    let mut checks: Vec<Check> = Vec::new();

    for transition in transitions {
        checks.push(check_symbol(transition.from_state, transition.from_symbol, names, config));
        checks.push(check_symbol(transition.from_state, transition.to_symbol, names, config));
    }

    let states: BTreeSet<StateId> = transitions
        .iter()
        .flat_map(|t| [t.from_state, t.to_state])
        .collect();
    for state in states {
        checks.push(check_state_name(names.name(state), &config.reserved));
    }

    let mut by_key: BTreeMap<(StateId, Symbol), Vec<&StateTransition>> = BTreeMap::new();
    for transition in transitions {
        by_key.entry(transition.key()).or_default().push(transition);
    }
    for ((state, symbol), entries) in by_key {
        if entries.len() > 1 {
            checks.push(Validation::fail(BuildError::DuplicateTransition {
                state: names.name(state).to_string(),
                symbol: symbol.as_char(),
                entries: entries.iter().map(|t| t.describe(names)).collect(),
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

fn check_symbol(state: StateId, symbol: Symbol, names: &StateNames, config: &MachineConfig) -> Check {
    if config.alphabet.contains(symbol) {
        Validation::success(())
    } else {
        Validation::fail(BuildError::InvalidSymbol {
            state: names.name(state).to_string(),
            symbol: symbol.as_char(),
        })
    }
}

fn check_state_name(name: &str, reserved: &[char]) -> Check {
    match name.chars().find(|c| reserved.contains(c)) {
        Some(character) => Validation::fail(BuildError::ReservedCharacterInState {
            state: name.to_string(),
            character,
        }),
        None => Validation::success(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    fn setup() -> (StateNames, MachineConfig) {
        let config = MachineConfig::default();
        (StateNames::new(&config), config)
    }

    fn failures(check: Check) -> Vec<BuildError> {
        match check {
            Validation::Failure(errors) => errors.iter().cloned().collect(),
            Validation::Success(_) => Vec::new(),
        }
    }

    #[test]
    fn valid_transitions_pass() {
        let (mut names, config) = setup();
        let foo = names.intern("foo");
        let bar = names.intern("bar");
        let transitions = [
            StateTransition::pass(foo, Symbol::new('0'), bar, Direction::Forward),
            StateTransition::pass(foo, Symbol::new('1'), bar, Direction::Forward),
        ];

        assert!(validate(&transitions, &names, &config).is_success());
    }

    #[test]
    fn foreign_symbol_is_rejected() {
        let (mut names, config) = setup();
        let foo = names.intern("foo");
        let bar = names.intern("bar");
        let transitions = [StateTransition::new(
            foo,
            Symbol::new('x'),
            bar,
            Symbol::new('0'),
            Direction::Forward,
        )];

        let problems = failures(validate(&transitions, &names, &config));

        assert_eq!(
            problems,
            vec![BuildError::InvalidSymbol {
                state: "foo".to_string(),
                symbol: 'x',
            }]
        );
    }

    #[test]
    fn reserved_character_in_target_state_is_rejected() {
        let (mut names, config) = setup();
        let foo = names.intern("foo");
        let bad = names.intern("next:state");
        let transitions = [StateTransition::pass(foo, Symbol::new('0'), bad, Direction::Stay)];

        let problems = failures(validate(&transitions, &names, &config));

        assert!(problems.contains(&BuildError::ReservedCharacterInState {
            state: "next:state".to_string(),
            character: ':',
        }));
    }

    #[test]
    fn duplicate_keys_list_every_entry() {
        let (mut names, config) = setup();
        let foo = names.intern("foo");
        let bar = names.intern("bar");
        let transition = StateTransition::pass(foo, Symbol::new('0'), bar, Direction::Forward);
        let other = StateTransition::pass(foo, Symbol::new('0'), foo, Direction::Backward);

        let problems = failures(validate(&[transition, other], &names, &config));

        match problems.as_slice() {
            [BuildError::DuplicateTransition { state, symbol, entries }] => {
                assert_eq!(state, "foo");
                assert_eq!(*symbol, '0');
                assert_eq!(entries.len(), 2);
            }
            other => panic!("expected one duplicate, got {other:?}"),
        }
    }

    #[test]
    fn all_problems_are_accumulated() {
        let (mut names, config) = setup();
        let foo = names.intern("foo-1");
        let transition = StateTransition::new(
            foo,
            Symbol::new('0'),
            foo,
            Symbol::new('?'),
            Direction::Forward,
        );

        let problems = failures(validate(&[transition, transition], &names, &config));

        assert_eq!(problems.len(), 4);
        assert!(problems
            .iter()
            .any(|e| matches!(e, BuildError::ReservedCharacterInState { .. })));
        assert!(problems
            .iter()
            .any(|e| matches!(e, BuildError::DuplicateTransition { .. })));
        assert_eq!(
            problems
                .iter()
                .filter(|e| matches!(e, BuildError::InvalidSymbol { .. }))
                .count(),
            2
        );
    }
}
