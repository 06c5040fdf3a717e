//! Error types for program text decoding.

use crate::program::PROGRAM_LEN;
use std::fmt;

/// Errors produced when decoding a program from its 28-symbol text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The text did not contain exactly one symbol per program slot.
    BadLength(usize),
    /// A character outside the `R L 1 2 * F ^ _` alphabet.
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// The slot it was meant to fill.
        index: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BadLength(length) => {
                write!(f, "expected {PROGRAM_LEN} symbols, got {length}")
            }
            ParseError::UnknownSymbol { symbol, index } => {
                write!(f, "unknown symbol {symbol:?} at slot {index}")
            }
        }
    }
}

impl std::error::Error for ParseError {}
