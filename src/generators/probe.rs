//! Checking whether any input remains.

use super::movement::scan_to_blanks;
use crate::core::{Direction, Scope, StateId, StateTransition};

/// From the output tail, branch on whether the input segment still holds
/// bits.
///
/// Copied input bits are blanked from the front, so whatever input remains
/// sits immediately before the blank that opens the output segment. On
/// `has_input` the head rests on the first remaining input bit; on
/// `exhausted` it rests on the first output bit.
pub fn probe_input(
    scope: &mut Scope<'_>,
    start: StateId,
    has_input: StateId,
    exhausted: StateId,
) -> Vec<StateTransition> {
    let alphabet = scope.alphabet();
    let blank = alphabet.blank();
    let mut scope = scope.child("probe");
    let mut transitions = Vec::new();

    let peek = scope.state("peek");
    let back_to_output = scope.state("back_to_output");
    let rewind_input = scope.state("rewind_input");

    transitions.extend(scan_to_blanks(
        &mut scope,
        start,
        peek,
        blank,
        Direction::Backward,
        Direction::Backward,
        1,
    ));

    transitions.push(StateTransition::pass(
        peek,
        blank,
        back_to_output,
        Direction::Forward,
    ));
    transitions.push(StateTransition::pass(
        back_to_output,
        blank,
        exhausted,
        Direction::Forward,
    ));

    for bit in alphabet.data() {
        transitions.push(StateTransition::pass(
            peek,
            bit,
            rewind_input,
            Direction::Backward,
        ));
    }
    transitions.extend(scan_to_blanks(
        &mut scope,
        rewind_input,
        has_input,
        blank,
        Direction::Forward,
        Direction::Backward,
        1,
    ));
    transitions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateNames;
    use crate::generators::testing::run_fragment;
    use crate::table::Verdict;

    fn probe(tape: &str) -> crate::engine::RunOutcome {
        run_fragment(
            |scope| {
                probe_input(
                    scope,
                    StateNames::INITIAL,
                    StateNames::REJECT,
                    StateNames::ACCEPT,
                )
            },
            tape,
            tape.len() - 1,
        )
    }

    #[test]
    fn remaining_input_is_found() {
        let outcome = probe(" 100 101101");

        assert_eq!(outcome.verdict, Verdict::Reject);
        assert_eq!(outcome.cursor, 1);
        assert_eq!(outcome.tape.trimmed(), " 100 101101");
    }

    #[test]
    fn exhausted_input_lands_on_output() {
        let outcome = probe("  100101101");

        assert_eq!(outcome.verdict, Verdict::Accept);
        assert_eq!(outcome.cursor, 2);
        assert_eq!(outcome.tape.trimmed(), "  100101101");
    }

    #[test]
    fn single_remaining_bit() {
        let outcome = probe("   1 101101");

        assert_eq!(outcome.verdict, Verdict::Reject);
        assert_eq!(outcome.cursor, 3);
    }
}
