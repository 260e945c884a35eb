//! Removing fields from the end of the output.

use super::movement::move_bits;
use super::{lead_in, FieldWidth};
use crate::core::{Direction, Scope, StateId, StateTransition};

/// Blank the `width` bits ending under the head, moving backward.
///
/// The head ends on the cell before the erased field, which is the new
/// output tail when the field was the last one.
pub fn erase_field(
    scope: &mut Scope<'_>,
    start: StateId,
    end: StateId,
    width: FieldWidth,
) -> Vec<StateTransition> {
    let alphabet = scope.alphabet();
    let blank = alphabet.blank();
    let mut scope = scope.child("erase");
    let mut transitions = Vec::new();

    let mut from = start;
    for i in 0..width.get() {
        let to = if i + 1 == width.get() {
            end
        } else {
            scope.indexed("bit", i + 1)
        };
        for bit in alphabet.data() {
            transitions.push(StateTransition::new(from, bit, to, blank, Direction::Backward));
        }
        from = to;
    }
    transitions
}

/// Overwrite the second-to-last field with the last one, then erase the last.
///
/// Starts on the output tail and ends on the new output tail.
pub fn replace_field(
    scope: &mut Scope<'_>,
    start: StateId,
    end: StateId,
    width: FieldWidth,
) -> Vec<StateTransition> {
    let alphabet = scope.alphabet();
    let bits = width.get();
    let mut scope = scope.child("replace");
    let mut transitions = Vec::new();

    let erase = scope.state("erase");
    let mut read = if bits > 1 {
        let first = scope.indexed("read", 0);
        transitions.extend(move_bits(&mut scope, start, Direction::Backward, first, bits - 1));
        first
    } else {
        start
    };

    for i in 0..bits {
        let last = i + 1 == bits;
        let (next, walk_back) = if last {
            (erase, bits - 1)
        } else {
            (scope.indexed("read", i + 1), bits)
        };
        let (after_write, walk) = lead_in(&mut scope, Direction::Forward, walk_back, next);
        transitions.extend(walk);

        for bit in alphabet.data() {
            let write = scope.state(&format!("write{i}_{bit}"));
            let (entry, walk) = lead_in(&mut scope, Direction::Backward, bits - 1, write);
            transitions.push(StateTransition::pass(read, bit, entry, Direction::Backward));
            transitions.extend(walk);

            for old in alphabet.data() {
                transitions.push(StateTransition::new(
                    write,
                    old,
                    after_write,
                    bit,
                    Direction::Forward,
                ));
            }
        }
        read = next;
    }

    transitions.extend(erase_field(&mut scope, erase, end, width));
    transitions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateNames;
    use crate::generators::testing::{output_tail, run_fragment};

    fn width(bits: usize) -> FieldWidth {
        FieldWidth::new(bits).unwrap()
    }

    #[test]
    fn erase_blanks_field_and_steps_before_it() {
        let outcome = run_fragment(
            |scope| erase_field(scope, StateNames::INITIAL, StateNames::ACCEPT, width(3)),
            "100101110",
            5,
        );

        assert_eq!(outcome.cursor, 2);
        assert_eq!(outcome.tape.trimmed(), "100   110");
    }

    #[test]
    fn replace_moves_last_field_over_previous() {
        let tape = "100101110";
        let outcome = run_fragment(
            |scope| replace_field(scope, StateNames::INITIAL, StateNames::ACCEPT, width(3)),
            tape,
            tape.len() - 1,
        );

        assert_eq!(outcome.tape.trimmed(), "100110");
        assert_eq!(outcome.cursor, output_tail(&outcome));
    }

    #[test]
    fn replace_single_bit_field() {
        let outcome = run_fragment(
            |scope| replace_field(scope, StateNames::INITIAL, StateNames::ACCEPT, width(1)),
            " 01",
            2,
        );

        assert_eq!(outcome.tape.trimmed(), " 1");
        assert_eq!(outcome.cursor, 1);
    }

    #[test]
    fn replace_with_even_width() {
        let tape = " 00011011";
        let outcome = run_fragment(
            |scope| replace_field(scope, StateNames::INITIAL, StateNames::ACCEPT, width(4)),
            tape,
            tape.len() - 1,
        );

        assert_eq!(outcome.tape.trimmed(), " 1011");
        assert_eq!(outcome.cursor, 4);
    }
}
