//! Fixed-width binary encoding of numbers and interval lists.
//!
//! Intervals travel as JSON (`[[open, close], ...]`) outside the machine and
//! as concatenated `open close` fields on the tape, each field `W` bits wide
//! and most significant bit first.

use crate::core::Alphabet;
use crate::generators::FieldWidth;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Widest field that fits the codec's integer type.
pub const MAX_FIELD_BITS: usize = u64::BITS as usize;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("{value} does not fit in {width} bits")]
    ValueTooWide { value: u64, width: usize },

    #[error("field width {bits} exceeds the 64-bit limit")]
    FieldTooWide { bits: usize },

    #[error("{len} bits cannot be split into {pair}-bit interval pairs")]
    RaggedInput { len: usize, pair: usize },

    #[error("unexpected character {character:?} at position {position}")]
    InvalidDigit { position: usize, character: char },

    #[error("invalid interval JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A closed range `[open, close]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(from = "[u64; 2]", into = "[u64; 2]")]
pub struct Interval {
    pub open: u64,
    pub close: u64,
}

impl Interval {
    pub fn new(open: u64, close: u64) -> Self {
        Self { open, close }
    }
}

impl From<[u64; 2]> for Interval {
    fn from([open, close]: [u64; 2]) -> Self {
        Self { open, close }
    }
}

impl From<Interval> for [u64; 2] {
    fn from(interval: Interval) -> Self {
        [interval.open, interval.close]
    }
}

impl From<(u64, u64)> for Interval {
    fn from((open, close): (u64, u64)) -> Self {
        Self { open, close }
    }
}

fn check_width(width: FieldWidth) -> Result<(), CodecError> {
    if width.get() > MAX_FIELD_BITS {
        return Err(CodecError::FieldTooWide { bits: width.get() });
    }
    Ok(())
}

/// `value` in binary, zero-padded to `width` digits.
pub fn encode_field(value: u64, width: FieldWidth) -> Result<String, CodecError> {
    check_width(width)?;
    let bits = width.get();
    if bits < MAX_FIELD_BITS && value >> bits != 0 {
        return Err(CodecError::ValueTooWide { value, width: bits });
    }
    Ok(format!("{value:0bits$b}"))
}

/// Concatenated `open close` fields of every interval.
pub fn encode_intervals(intervals: &[Interval], width: FieldWidth) -> Result<String, CodecError> {
    let mut encoded = String::with_capacity(intervals.len() * width.doubled().get());
    for interval in intervals {
        encoded.push_str(&encode_field(interval.open, width)?);
        encoded.push_str(&encode_field(interval.close, width)?);
    }
    Ok(encoded)
}

/// Split a binary string into `open close` pairs of `width`-bit fields.
pub fn decode_fields(binary: &str, width: FieldWidth) -> Result<Vec<Interval>, CodecError> {
    check_width(width)?;
    let digits: Vec<bool> = binary
        .chars()
        .enumerate()
        .map(|(position, character)| match character {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(CodecError::InvalidDigit {
                position,
                character,
            }),
        })
        .collect::<Result<_, _>>()?;

    let pair = width.doubled().get();
    if digits.len() % pair != 0 {
        return Err(CodecError::RaggedInput {
            len: digits.len(),
            pair,
        });
    }

    let field = |bits: &[bool]| bits.iter().fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit));
    Ok(digits
        .chunks(pair)
        .map(|chunk| {
            let (open, close) = chunk.split_at(width.get());
            Interval::new(field(open), field(close))
        })
        .collect())
}

/// Decode the fields left on a tape, ignoring blanks.
pub fn decode_tape(
    tape: &str,
    alphabet: &Alphabet,
    width: FieldWidth,
) -> Result<Vec<Interval>, CodecError> {
    let mut binary = String::with_capacity(tape.len());
    for (position, character) in tape.chars().enumerate() {
        if character == alphabet.blank {
            continue;
        }
        match alphabet.bit_value(character.into()) {
            Some(bit) => binary.push(if bit { '1' } else { '0' }),
            None => {
                return Err(CodecError::InvalidDigit {
                    position,
                    character,
                })
            }
        }
    }
    decode_fields(&binary, width)
}

/// Rewrite a binary string in the data symbols of `alphabet`.
pub fn to_symbols(binary: &str, alphabet: &Alphabet) -> String {
    binary
        .chars()
        .map(|c| alphabet.bit(c == '1').as_char())
        .collect()
}

pub fn parse_intervals(json: &str) -> Result<Vec<Interval>, CodecError> {
    Ok(serde_json::from_str(json)?)
}

pub fn intervals_to_json(intervals: &[Interval]) -> Result<String, CodecError> {
    Ok(serde_json::to_string(intervals)?)
}
