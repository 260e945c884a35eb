//! The machine's memory: a row of cells bounded on the left.

use crate::core::{Alphabet, Symbol};
use crate::engine::error::RunError;
use serde::{Deserialize, Serialize};

/// Most blank cells a single `reach` may append.
pub const MAX_TAPE_GROWTH: usize = 1 << 16;

/// Cells from position 0 onwards.
///
/// Reading past the end yields blank and writing past the end extends the
/// tape with blanks, so the tape behaves as if it were unbounded on the right.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tape {
    cells: Vec<Symbol>,
    blank: Symbol,
}

impl Tape {
    /// An empty tape.
    pub fn blank(alphabet: &Alphabet) -> Self {
        Self {
            cells: Vec::new(),
            blank: alphabet.blank(),
        }
    }

    /// Parse one character per cell, rejecting anything outside `alphabet`.
    pub fn parse(text: &str, alphabet: &Alphabet) -> Result<Self, RunError> {
        let cells = text
            .chars()
            .enumerate()
            .map(|(position, c)| {
                let symbol = Symbol::new(c);
                if alphabet.contains(symbol) {
                    Ok(symbol)
                } else {
                    Err(RunError::InvalidTapeSymbol {
                        position,
                        symbol: c,
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            cells,
            blank: alphabet.blank(),
        })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn read(&self, position: usize) -> Symbol {
        self.cells.get(position).copied().unwrap_or(self.blank)
    }

    pub fn write(&mut self, position: usize, symbol: Symbol) -> Result<(), RunError> {
        self.reach(position)?;
        self.cells[position] = symbol;
        Ok(())
    }

    /// Extend with blanks until `position` is a cell.
    ///
    /// Growing by more than [`MAX_TAPE_GROWTH`] cells at once is refused.
    pub fn reach(&mut self, position: usize) -> Result<(), RunError> {
        let len = self.cells.len();
        if position < len {
            return Ok(());
        }
        let out_of_range = RunError::CursorOutOfRange {
            cursor: position,
            len,
        };
        if position - len >= MAX_TAPE_GROWTH {
            return Err(out_of_range);
        }
        let new_len = position.checked_add(1).ok_or(out_of_range)?;
        self.cells.resize(new_len, self.blank);
        Ok(())
    }

    pub fn cells(&self) -> &[Symbol] {
        &self.cells
    }

    /// Every cell, trailing blanks included.
    pub fn render(&self) -> String {
        self.cells.iter().map(|s| s.as_char()).collect()
    }

    /// Cells without trailing blanks.
    pub fn trimmed(&self) -> String {
        let end = self
            .cells
            .iter()
            .rposition(|&s| s != self.blank)
            .map_or(0, |i| i + 1);
        self.cells[..end].iter().map(|s| s.as_char()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_foreign_symbols() {
        let alphabet = Alphabet::default();

        assert_eq!(
            Tape::parse("01x", &alphabet),
            Err(RunError::InvalidTapeSymbol {
                position: 2,
                symbol: 'x',
            })
        );
    }

    #[test]
    fn reading_past_the_end_yields_blank() {
        let alphabet = Alphabet::default();
        let tape = Tape::parse("01", &alphabet).unwrap();

        assert_eq!(tape.read(5), alphabet.blank());
        assert_eq!(tape.len(), 2);
    }

    #[test]
    fn writing_past_the_end_pads_with_blanks() {
        let alphabet = Alphabet::default();
        let mut tape = Tape::parse("1", &alphabet).unwrap();

        tape.write(3, alphabet.zero()).unwrap();

        assert_eq!(tape.render(), "1  0");
    }

    #[test]
    fn reaching_far_past_the_end_is_refused() {
        let alphabet = Alphabet::default();
        let mut tape = Tape::parse("01", &alphabet).unwrap();

        assert_eq!(
            tape.reach(usize::MAX),
            Err(RunError::CursorOutOfRange {
                cursor: usize::MAX,
                len: 2,
            })
        );
        assert!(tape.reach(2 + MAX_TAPE_GROWTH).is_err());
        assert_eq!(tape.len(), 2);

        tape.reach(1 + MAX_TAPE_GROWTH).unwrap();
        assert_eq!(tape.len(), 2 + MAX_TAPE_GROWTH);
    }

    #[test]
    fn trimmed_drops_trailing_blanks_only() {
        let alphabet = Alphabet::default();
        let tape = Tape::parse("  10 1  ", &alphabet).unwrap();

        assert_eq!(tape.trimmed(), "  10 1");
        assert_eq!(Tape::parse("   ", &alphabet).unwrap().trimmed(), "");
    }
}
