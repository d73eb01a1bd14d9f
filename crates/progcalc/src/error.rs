//! Error types for register operations and text parsing.

use thiserror::Error;

/// Failure of a register operation.
///
/// A failed operation never touches the register: raw pattern, word size
/// and base are exactly what they were before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CalcError {
    /// Divisor (or reciprocal operand) is zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Operand is outside the operation's domain (negative square root).
    #[error("invalid operand")]
    InvalidOperand,
    /// The exact integer result does not exist (e.g. `1/2`).
    #[error("result is not representable as an integer")]
    NotRepresentable,
}

/// Failure to read an operand written in a given radix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No digits were supplied.
    #[error("empty input")]
    Empty,
    /// A character is not a digit of the active radix.
    #[error("invalid digit '{digit}' at position {position}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Character offset in the input.
        position: usize,
    },
    /// The value does not fit in the active word size.
    #[error("value does not fit in the active word size")]
    Overflow,
}

/// Unrecognised word size name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown word size '{0}' (expected byte, word, dword or qword)")]
pub struct WordSizeParseError(pub String);

/// Unrecognised radix name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown base '{0}' (expected dec, bin, oct or hex)")]
pub struct RadixParseError(pub String);

/// Unrecognised operator label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operator '{0}'")]
pub struct OpParseError(pub String);
