//! Head movement over data cells.

use crate::core::{pass_over_data, Direction, Scope, StateId, StateTransition, Symbol};

/// Move the head `n` cells in `direction`, leaving data untouched.
///
/// Every cell walked over must hold a data symbol. `n = 0` produces no
/// transitions; the caller should treat `start` as `end` in that case.
pub fn move_bits(
    scope: &mut Scope<'_>,
    start: StateId,
    direction: Direction,
    end: StateId,
    n: usize,
) -> Vec<StateTransition> {
    let alphabet = scope.alphabet();
    let mut scope = scope.child("move");
    let mut transitions = Vec::with_capacity(n * 2);

    let mut from = start;
    for i in 0..n {
        let to = if i + 1 == n {
            end
        } else {
            scope.indexed("cell", i + 1)
        };
        transitions.extend(pass_over_data(&alphabet, from, to, direction));
        from = to;
    }
    transitions
}

/// Move over data in `direction` until `k` blanks have been passed.
///
/// Blanks are counted wherever they appear, so `k = 2` crosses one segment
/// boundary and stops on the next. On the `k`-th blank the machine writes
/// `final_symbol`, moves `final_direction` and enters `end`.
pub fn scan_to_blanks(
    scope: &mut Scope<'_>,
    start: StateId,
    end: StateId,
    final_symbol: Symbol,
    final_direction: Direction,
    direction: Direction,
    k: usize,
) -> Vec<StateTransition> {
    let alphabet = scope.alphabet();
    let blank = alphabet.blank();
    let mut scope = scope.child("scan");
    let mut transitions = Vec::with_capacity(k * 3);

    let mut current = start;
    for seen in 0..k {
        transitions.extend(pass_over_data(&alphabet, current, current, direction));
        if seen + 1 == k {
            transitions.push(StateTransition::new(
                current,
                blank,
                end,
                final_symbol,
                final_direction,
            ));
        } else {
            let next = scope.indexed("blank", seen + 1);
            transitions.push(StateTransition::pass(current, blank, next, direction));
            current = next;
        }
    }
    transitions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateNames;
    use crate::generators::testing::run_fragment;

    #[test]
    fn move_bits_leaves_tape_unchanged() {
        let outcome = run_fragment(
            |scope| {
                move_bits(
                    scope,
                    StateNames::INITIAL,
                    Direction::Forward,
                    StateNames::ACCEPT,
                    4,
                )
            },
            "01010111",
            0,
        );

        assert_eq!(outcome.tape.trimmed(), "01010111");
        assert_eq!(outcome.cursor, 4);
    }

    #[test]
    fn move_bits_backward() {
        let outcome = run_fragment(
            |scope| {
                move_bits(
                    scope,
                    StateNames::INITIAL,
                    Direction::Backward,
                    StateNames::ACCEPT,
                    3,
                )
            },
            "0101",
            3,
        );

        assert_eq!(outcome.cursor, 0);
    }

    #[test]
    fn zero_moves_generate_nothing() {
        let mut names = StateNames::new(&crate::core::MachineConfig::default());
        let alphabet = crate::core::Alphabet::default();
        let mut scope = names.root(&alphabet);

        let transitions = move_bits(
            &mut scope,
            StateNames::INITIAL,
            Direction::Forward,
            StateNames::ACCEPT,
            0,
        );

        assert!(transitions.is_empty());
    }

    #[test]
    fn scan_stops_after_second_blank() {
        let outcome = run_fragment(
            |scope| {
                let blank = scope.alphabet().blank();
                scan_to_blanks(
                    scope,
                    StateNames::INITIAL,
                    StateNames::ACCEPT,
                    blank,
                    Direction::Backward,
                    Direction::Forward,
                    2,
                )
            },
            "01 1111 10",
            0,
        );

        assert_eq!(outcome.tape.trimmed(), "01 1111 10");
        assert_eq!(outcome.cursor, 6);
    }

    #[test]
    fn scan_writes_final_symbol() {
        let outcome = run_fragment(
            |scope| {
                let one = scope.alphabet().one();
                scan_to_blanks(
                    scope,
                    StateNames::INITIAL,
                    StateNames::ACCEPT,
                    one,
                    Direction::Stay,
                    Direction::Forward,
                    1,
                )
            },
            "00",
            0,
        );

        assert_eq!(outcome.tape.trimmed(), "001");
        assert_eq!(outcome.cursor, 2);
    }

    #[test]
    fn repeated_invocations_do_not_collide() {
        let outcome = run_fragment(
            |scope| {
                let middle = scope.state("middle");
                let mut transitions =
                    move_bits(scope, StateNames::INITIAL, Direction::Forward, middle, 2);
                transitions.extend(move_bits(
                    scope,
                    middle,
                    Direction::Forward,
                    StateNames::ACCEPT,
                    2,
                ));
                transitions
            },
            "10101",
            0,
        );

        assert_eq!(outcome.cursor, 4);
    }
}
