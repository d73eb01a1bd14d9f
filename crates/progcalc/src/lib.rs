//! progcalc - programmer's calculator register
//!
//! A fixed-width integer engine with two's-complement wraparound, modelled on
//! the register of a programmer's calculator. One 64-bit pattern is stored;
//! a selectable word size decides how many of its bits are live and where the
//! sign bit sits, and a selectable radix decides how it is rendered.
//!
//! # Word Sizes
//!
//! | Size | Bits | Mask | Signed range |
//! |------|------|------|--------------|
//! | BYTE | 8 | `0xFF` | -128 ..= 127 |
//! | WORD | 16 | `0xFFFF` | -32768 ..= 32767 |
//! | DWORD | 32 | `0xFFFF_FFFF` | -2^31 ..= 2^31 - 1 |
//! | QWORD | 64 | all ones | -2^63 ..= 2^63 - 1 |
//!
//! # Rendering
//!
//! Decimal renders the signed interpretation. Binary, octal and hexadecimal
//! render the masked pattern without a sign, so negative values show their
//! two's-complement bits:
//!
//! | Value (BYTE) | DEC | HEX | OCT | BIN |
//! |--------------|-----|-----|-----|-----|
//! | 26 | `26` | `1A` | `32` | `11010` |
//! | -1 | `-1` | `FF` | `377` | `11111111` |
//! | -128 | `-128` | `80` | `200` | `10000000` |
//!
//! # Example
//!
//! ```
//! use progcalc::{Radix, Register, WordSize};
//!
//! let mut reg = Register::new();
//! reg.add(0, 26);
//! assert_eq!(reg.display(), "26");
//!
//! reg.set_base(Radix::Hex);
//! assert_eq!(reg.display(), "1A");
//!
//! // Narrowing re-masks the stored pattern.
//! reg.set_value(0x1FF);
//! reg.set_word_size(WordSize::Byte);
//! assert_eq!(reg.value(), -1);
//! assert_eq!(reg.display(), "FF");
//! ```
//!
//! # Errors
//!
//! Division, remainder, square root and reciprocal are fallible and return
//! [`CalcError`]. A failed call leaves the register exactly as it was.
//!
//! # Logging
//!
//! Committed mutations emit `tracing` events at `TRACE`; rejected operations
//! and mode changes at `DEBUG`. Install a subscriber to see them.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

extern crate alloc;

// Core value types (word size, radix, ring kernels)
mod core;

// Error types
pub mod error;

// Operator selections
pub mod ops;

// The register engine
mod register;

// Bit-view rendering
pub mod bits;

// Re-export submodules for external access
pub use crate::core::radix;
pub use crate::core::ring;
pub use crate::core::word_size;

// Re-export core types at crate root
pub use crate::core::radix::Radix;
pub use crate::core::word_size::WordSize;
pub use error::{CalcError, OpParseError, ParseError, RadixParseError, WordSizeParseError};
pub use ops::{BinaryOp, UnaryOp};
pub use register::{Register, RegisterSnapshot};

/// Prelude module for convenient imports.
///
/// ```
/// use progcalc::prelude::*;
///
/// let mut reg = Register::new();
/// assert_eq!(reg.apply(BinaryOp::Add, 2, 3), Ok(5));
/// ```
pub mod prelude {
    pub use crate::core::radix::Radix;
    pub use crate::core::word_size::WordSize;
    pub use crate::error::{CalcError, ParseError};
    pub use crate::ops::{BinaryOp, UnaryOp};
    pub use crate::register::{Register, RegisterSnapshot};
}
