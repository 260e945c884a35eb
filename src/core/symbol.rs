//! Tape symbols, the alphabet that gives them meaning, and head directions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single tape cell value.
///
/// Symbols are plain characters; which characters are legal is decided by the
/// [`Alphabet`] of the machine that owns the tape, so machines with different
/// alphabets can coexist in one process.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(char);

impl Symbol {
    pub const fn new(character: char) -> Self {
        Self(character)
    }

    pub const fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for Symbol {
    fn from(character: char) -> Self {
        Self(character)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Movement of the tape head after a transition writes its symbol.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
    Stay,
}

impl Direction {
    /// The opposite direction. `Stay` is its own reverse.
    pub fn reverse(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
            Self::Stay => Self::Stay,
        }
    }
}

/// The closed set of symbols a machine reads and writes.
///
/// Two data symbols encode bits, `blank` marks empty cells and doubles as the
/// separator between tape segments. `wildcard` is a meta-symbol that only
/// table builders understand; it never reaches an executable table.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Alphabet {
    pub zero: char,
    pub one: char,
    pub blank: char,
    pub wildcard: char,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            zero: '0',
            one: '1',
            blank: ' ',
            wildcard: '*',
        }
    }
}

impl Alphabet {
    pub fn zero(&self) -> Symbol {
        Symbol(self.zero)
    }

    pub fn one(&self) -> Symbol {
        Symbol(self.one)
    }

    pub fn blank(&self) -> Symbol {
        Symbol(self.blank)
    }

    pub fn wildcard(&self) -> Symbol {
        Symbol(self.wildcard)
    }

    /// Symbol encoding a single bit.
    pub fn bit(&self, value: bool) -> Symbol {
        if value {
            self.one()
        } else {
            self.zero()
        }
    }

    /// The two data symbols, zero first.
    pub fn data(&self) -> [Symbol; 2] {
        [self.zero(), self.one()]
    }

    /// Every concrete symbol a tape may hold.
    pub fn symbols(&self) -> [Symbol; 3] {
        [self.zero(), self.one(), self.blank()]
    }

    /// Whether `symbol` may appear on a tape or in an executable table.
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.symbols().contains(&symbol)
    }

    /// Bit value of a data symbol; `None` for blank and foreign symbols.
    pub fn bit_value(&self, symbol: Symbol) -> Option<bool> {
        match symbol.as_char() {
            c if c == self.zero => Some(false),
            c if c == self.one => Some(true),
            _ => None,
        }
    }

    /// True when all four characters are distinct.
    pub fn is_unambiguous(&self) -> bool {
        let chars = [self.zero, self.one, self.blank, self.wildcard];
        chars
            .iter()
            .enumerate()
            .all(|(i, c)| !chars[i + 1..].contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_alphabet_has_three_concrete_symbols() {
        let alphabet = Alphabet::default();

        assert!(alphabet.contains(Symbol::new('0')));
        assert!(alphabet.contains(Symbol::new('1')));
        assert!(alphabet.contains(Symbol::new(' ')));
        assert!(!alphabet.contains(Symbol::new('*')));
        assert!(!alphabet.contains(Symbol::new('2')));
    }

    #[test]
    fn bit_value_maps_data_symbols_only() {
        let alphabet = Alphabet::default();

        assert_eq!(alphabet.bit_value(alphabet.zero()), Some(false));
        assert_eq!(alphabet.bit_value(alphabet.one()), Some(true));
        assert_eq!(alphabet.bit_value(alphabet.blank()), None);
        assert_eq!(alphabet.bit(true), alphabet.one());
    }

    #[test]
    fn reverse_swaps_forward_and_backward() {
        assert_eq!(Direction::Forward.reverse(), Direction::Backward);
        assert_eq!(Direction::Backward.reverse(), Direction::Forward);
        assert_eq!(Direction::Stay.reverse(), Direction::Stay);
    }

    #[test]
    fn ambiguous_alphabet_is_detected() {
        let alphabet = Alphabet {
            blank: '0',
            ..Alphabet::default()
        };

        assert!(!alphabet.is_unambiguous());
        assert!(Alphabet::default().is_unambiguous());
    }

    #[test]
    fn alphabet_deserializes_with_defaults() {
        let alphabet: Alphabet = serde_json::from_str(r#"{"blank":"X"}"#).unwrap();

        assert_eq!(alphabet.blank, 'X');
        assert_eq!(alphabet.zero, '0');
    }
}
