//! Moving a field from the input segment to the end of the output.

use super::movement::scan_to_blanks;
use super::FieldWidth;
use crate::core::{Direction, Scope, StateId, StateTransition};

/// Append the `width`-bit field under the head to the output segment.
///
/// Starts on the most significant bit of a field in the input segment. Each
/// bit is lifted (its cell blanked), carried forward across two blanks and
/// written just past the output tail; then the head scans back across two
/// blanks to the next source bit. After the last bit the head rests on the
/// new output tail.
pub fn copy_field(
    scope: &mut Scope<'_>,
    start: StateId,
    width: FieldWidth,
    end: StateId,
) -> Vec<StateTransition> {
    let alphabet = scope.alphabet();
    let blank = alphabet.blank();
    let mut scope = scope.child("copy");
    let mut transitions = Vec::new();

    let mut lift = start;
    for i in 0..width.get() {
        let last = i + 1 == width.get();
        let (deliver, deliver_direction) = if last {
            (end, Direction::Stay)
        } else {
            (scope.indexed("return", i), Direction::Backward)
        };

        for bit in alphabet.data() {
            let carry = scope.state(&format!("carry{i}_{bit}"));
            transitions.push(StateTransition::new(lift, bit, carry, blank, Direction::Forward));
            transitions.extend(scan_to_blanks(
                &mut scope,
                carry,
                deliver,
                bit,
                deliver_direction,
                Direction::Forward,
                2,
            ));
        }

        if !last {
            let next = scope.indexed("lift", i + 1);
            transitions.extend(scan_to_blanks(
                &mut scope,
                deliver,
                next,
                blank,
                Direction::Forward,
                Direction::Backward,
                2,
            ));
            lift = next;
        }
    }
    transitions
}
