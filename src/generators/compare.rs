//! Comparison of the last two fields of the output.
//!
//! The two operands are adjacent: the *earlier* field occupies the `W` cells
//! before the *later* one, whose last bit is the output tail. Bit `i` of the
//! earlier field and bit `i` of the later field are therefore always exactly
//! `W` cells apart.
//!
//! Bits are compared most significant first. Instead of returning to a fixed
//! operand for every bit, the walk alternates: for even bits the later field
//! is read first and the head seeks backward to its peer, for odd bits the
//! earlier field is read first and the head seeks forward. Either way the
//! next bit is one cell to the right of where the previous comparison ended.

use super::movement::{move_bits, scan_to_blanks};
use super::{lead_in, FieldWidth};
use crate::core::{Alphabet, Direction, Scope, StateId, StateTransition, Symbol};
use std::cmp::Ordering;

/// Where a state sits in the comparison of one bit pair.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Phase {
    ReadingFirstOperand,
    SeekingPeerBit,
    Comparing,
}

impl Phase {
    fn label(self, bit: usize) -> String {
        let phase = match self {
            Phase::ReadingFirstOperand => "read",
            Phase::SeekingPeerBit => "seek",
            Phase::Comparing => "cmp",
        };
        format!("{phase}{bit}")
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Operand {
    Earlier,
    Later,
}

/// Which operand is read first for `bit`, and which way its peer lies.
fn plan(bit: usize) -> (Operand, Direction) {
    if bit % 2 == 0 {
        (Operand::Later, Direction::Backward)
    } else {
        (Operand::Earlier, Direction::Forward)
    }
}

/// Branch to `ge` if the earlier field is greater than or equal to the later
/// one, otherwise to `lt`.
///
/// Starts and ends on the output tail; the tape is left unchanged.
pub fn compare_fields(
    scope: &mut Scope<'_>,
    start: StateId,
    ge: StateId,
    lt: StateId,
    width: FieldWidth,
) -> Vec<StateTransition> {
    let alphabet = scope.alphabet();
    let bits = width.get();
    let mut scope = scope.child("compare");
    let mut transitions = Vec::new();

    // Every exit first returns to the tail, then branches.
    let (to_ge, fragment) = rewind(&mut scope, "rewind_ge", ge);
    transitions.extend(fragment);
    let (to_lt, fragment) = rewind(&mut scope, "rewind_lt", lt);
    transitions.extend(fragment);

    let first_read = if bits > 1 {
        let read = scope.state(&Phase::ReadingFirstOperand.label(0));
        transitions.extend(move_bits(
            &mut scope,
            start,
            Direction::Backward,
            read,
            bits - 1,
        ));
        read
    } else {
        start
    };

    let mut read = first_read;
    for i in 0..bits {
        let last = i + 1 == bits;
        let (first, seek) = plan(i);
        let next_read = if last {
            None
        } else {
            Some(scope.state(&Phase::ReadingFirstOperand.label(i + 1)))
        };

        for first_bit in alphabet.data() {
            let compare = scope.state(&format!("{}_{first_bit}", Phase::Comparing.label(i)));
            let (entry, walk) = {
                let mut seeking = scope.child(&Phase::SeekingPeerBit.label(i));
                lead_in(&mut seeking, seek, bits - 1, compare)
            };
            transitions.push(StateTransition::pass(read, first_bit, entry, seek));
            transitions.extend(walk);

            for second_bit in alphabet.data() {
                let (earlier, later) = match first {
                    Operand::Earlier => (first_bit, second_bit),
                    Operand::Later => (second_bit, first_bit),
                };
                let target = match (order(&alphabet, earlier, later), next_read) {
                    (Ordering::Greater, _) | (Ordering::Equal, None) => to_ge,
                    (Ordering::Less, _) => to_lt,
                    (Ordering::Equal, Some(next)) => next,
                };
                transitions.push(StateTransition::pass(
                    compare,
                    second_bit,
                    target,
                    Direction::Forward,
                ));
            }
        }

        if let Some(next) = next_read {
            read = next;
        }
    }

    transitions
}

fn order(alphabet: &Alphabet, earlier: Symbol, later: Symbol) -> Ordering {
    alphabet.bit_value(earlier).cmp(&alphabet.bit_value(later))
}

/// Scan forward to the blank past the tail, step back onto it and enter
/// `target`.
fn rewind(scope: &mut Scope<'_>, label: &str, target: StateId) -> (StateId, Vec<StateTransition>) {
    let blank = scope.alphabet().blank();
    let state = scope.state(label);
    let fragment = scan_to_blanks(
        scope,
        state,
        target,
        blank,
        Direction::Backward,
        Direction::Forward,
        1,
    );
    (state, fragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateNames;
    use crate::generators::testing::{output_tail, run_fragment};
    use crate::table::Verdict;

    fn compare(width: usize, tape: &str) -> crate::engine::RunOutcome {
        let width = FieldWidth::new(width).unwrap();
        run_fragment(
            |scope| {
                compare_fields(
                    scope,
                    StateNames::INITIAL,
                    StateNames::ACCEPT,
                    StateNames::REJECT,
                    width,
                )
            },
            tape,
            tape.len() - 1,
        )
    }

    #[test]
    fn earlier_less_than_later() {
        let outcome = compare(3, "101 100110");

        assert_eq!(outcome.verdict, Verdict::Reject);
        assert_eq!(outcome.tape.trimmed(), "101 100110");
        assert_eq!(outcome.cursor, output_tail(&outcome));
    }

    #[test]
    fn equal_fields_compare_greater_or_equal() {
        let outcome = compare(3, "101 100100");

        assert_eq!(outcome.verdict, Verdict::Accept);
        assert_eq!(outcome.tape.trimmed(), "101 100100");
        assert_eq!(outcome.cursor, output_tail(&outcome));
    }

    #[test]
    fn earlier_greater_than_later() {
        let outcome = compare(3, "101 111100");

        assert_eq!(outcome.verdict, Verdict::Accept);
        assert_eq!(outcome.tape.trimmed(), "101 111100");
        assert_eq!(outcome.cursor, output_tail(&outcome));
    }

    #[test]
    fn difference_in_last_bit_is_found() {
        assert_eq!(compare(3, " 100101").verdict, Verdict::Reject);
        assert_eq!(compare(3, " 101100").verdict, Verdict::Accept);
    }

    #[test]
    fn even_width_ends_on_later_field() {
        assert_eq!(compare(4, " 01100110").verdict, Verdict::Accept);
        assert_eq!(compare(4, " 01100111").verdict, Verdict::Reject);
        assert_eq!(compare(4, " 10000111").verdict, Verdict::Accept);
    }

    #[test]
    fn single_bit_fields() {
        assert_eq!(compare(1, " 01").verdict, Verdict::Reject);
        assert_eq!(compare(1, " 10").verdict, Verdict::Accept);
        assert_eq!(compare(1, " 11").verdict, Verdict::Accept);
    }

    #[test]
    fn exhaustive_three_bit_comparison() {
        for earlier in 0..8u32 {
            for later in 0..8u32 {
                let tape = format!(" {earlier:03b}{later:03b}");
                let expected = if earlier >= later {
                    Verdict::Accept
                } else {
                    Verdict::Reject
                };

                let outcome = compare(3, &tape);

                assert_eq!(outcome.verdict, expected, "{earlier} vs {later}");
                assert_eq!(outcome.cursor, 6);
            }
        }
    }
}
