//! Transition generators for bit-level primitives.
//!
//! Every generator is a pure function from a naming [`Scope`] and a few
//! structural parameters to a fragment of transitions. Generators open their
//! own child scope, so they can be invoked any number of times in one table
//! without their states colliding. The entry and exit states are chosen by
//! the caller, which is how fragments are chained.
//!
//! Tapes are laid out as `INPUT OUTPUT`: bits of the input segment, a blank,
//! then the output segment. Numbers are fixed-width fields, most significant
//! bit first, and neighbouring fields in the output are not separated.
//!
//! Generators never fail. A tape that does not match a fragment's
//! expectations shows up at runtime as a missing transition.

mod compare;
mod copy;
mod erase;
mod movement;
mod probe;

pub use compare::compare_fields;
pub use copy::copy_field;
pub use erase::{erase_field, replace_field};
pub use movement::{move_bits, scan_to_blanks};
pub use probe::probe_input;

use crate::core::{ConfigError, Direction, Scope, StateId, StateTransition};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of bits in one field. Always at least one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct FieldWidth(usize);

impl FieldWidth {
    pub fn new(bits: usize) -> Result<Self, ConfigError> {
        if bits == 0 {
            Err(ConfigError::ZeroFieldWidth)
        } else {
            Ok(Self(bits))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Width of an open/close pair.
    pub fn doubled(self) -> Self {
        Self(self.0 * 2)
    }
}

impl TryFrom<usize> for FieldWidth {
    type Error = ConfigError;

    fn try_from(bits: usize) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl From<FieldWidth> for usize {
    fn from(width: FieldWidth) -> Self {
        width.0
    }
}

impl fmt::Display for FieldWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits", self.0)
    }
}

/// Entry state of a walk of `cells` cells ending in `target`.
///
/// With zero cells there is nothing to walk and the target is its own entry.
pub(crate) fn lead_in(
    scope: &mut Scope<'_>,
    direction: Direction,
    cells: usize,
    target: StateId,
) -> (StateId, Vec<StateTransition>) {
    if cells == 0 {
        return (target, Vec::new());
    }
    let entry = scope.state("walk");
    (entry, move_bits(scope, entry, direction, target, cells))
}
