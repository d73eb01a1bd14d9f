//! The calculator register.
//!
//! A [`Register`] owns one raw 64-bit pattern plus two pieces of
//! interpretation state: the [`WordSize`] and the display [`Radix`]. Every
//! operation takes explicit operands, stores its masked result and returns
//! the signed interpretation of the new contents.
//!
//! # Invariants
//!
//! - `raw & !word_size.mask() == 0` after every public call.
//! - A failing call leaves `raw`, `word_size` and `base` untouched.
//! - Changing the base never changes `raw`.
//!
//! # Example
//!
//! ```
//! use progcalc::{Radix, Register, WordSize};
//!
//! let mut reg = Register::new();
//! reg.set_word_size(WordSize::Byte);
//! assert_eq!(reg.add(127, 1), -128);
//!
//! reg.set_base(Radix::Hex);
//! assert_eq!(reg.display(), "80");
//! ```

use alloc::string::String;
use core::fmt;

use tracing::{debug, trace};

use crate::bits;
use crate::core::radix::Radix;
use crate::core::ring;
use crate::core::word_size::WordSize;
use crate::error::CalcError;
use crate::ops::{BinaryOp, UnaryOp};

/// Fixed-width two's-complement register.
///
/// Created as zero, decimal, 64-bit. Not internally synchronized; wrap it in
/// a lock if several threads share one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Register {
    raw: u64,
    word_size: WordSize,
    base: Radix,
}

impl Register {
    /// A zeroed register in decimal, 64-bit mode.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            raw: 0,
            word_size: WordSize::Qword,
            base: Radix::Dec,
        }
    }

    /// Stores an already-computed pattern and returns the signed value.
    fn commit(&mut self, op: &'static str, raw: u64) -> i64 {
        self.raw = self.word_size.truncate(raw);
        trace!(op, raw = self.raw, bits = self.word_size.bits(), "register updated");
        self.value()
    }

    fn reject(&self, op: &'static str, err: CalcError) -> CalcError {
        debug!(op, raw = self.raw, %err, "operation rejected");
        err
    }

    // ------------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------------

    /// `a + b` modulo `2^bits`.
    pub fn add(&mut self, a: i64, b: i64) -> i64 {
        self.commit("add", ring::add(a as u64, b as u64, self.word_size))
    }

    /// `a - b` modulo `2^bits`.
    pub fn subtract(&mut self, a: i64, b: i64) -> i64 {
        self.commit("subtract", ring::sub(a as u64, b as u64, self.word_size))
    }

    /// `a * b` modulo `2^bits`.
    pub fn multiply(&mut self, a: i64, b: i64) -> i64 {
        self.commit("multiply", ring::mul(a as u64, b as u64, self.word_size))
    }

    /// Truncating division, rounded toward zero.
    ///
    /// ```
    /// use progcalc::{CalcError, Register};
    ///
    /// let mut reg = Register::new();
    /// assert_eq!(reg.divide(10, -2), Ok(-5));
    /// assert_eq!(reg.divide(0, 0), Err(CalcError::DivisionByZero));
    /// assert_eq!(reg.value(), -5);
    /// ```
    ///
    /// # Errors
    ///
    /// [`CalcError::DivisionByZero`] when `b == 0`.
    pub fn divide(&mut self, a: i64, b: i64) -> Result<i64, CalcError> {
        match ring::div(a, b, self.word_size) {
            Some(raw) => Ok(self.commit("divide", raw)),
            None => Err(self.reject("divide", CalcError::DivisionByZero)),
        }
    }

    /// Truncating remainder; the sign follows the dividend.
    ///
    /// # Errors
    ///
    /// [`CalcError::DivisionByZero`] when `b == 0`.
    pub fn modulo(&mut self, a: i64, b: i64) -> Result<i64, CalcError> {
        match ring::rem(a, b, self.word_size) {
            Some(raw) => Ok(self.commit("modulo", raw)),
            None => Err(self.reject("modulo", CalcError::DivisionByZero)),
        }
    }

    /// Two's-complement negation; `-MIN` wraps back to `MIN`.
    pub fn negate(&mut self, a: i64) -> i64 {
        self.commit("negate", ring::neg(a as u64, self.word_size))
    }

    // ------------------------------------------------------------------------
    // Bitwise
    // ------------------------------------------------------------------------

    /// Bitwise AND.
    pub fn bit_and(&mut self, a: i64, b: i64) -> i64 {
        self.commit("and", ring::and(a as u64, b as u64, self.word_size))
    }

    /// Bitwise OR.
    pub fn bit_or(&mut self, a: i64, b: i64) -> i64 {
        self.commit("or", ring::or(a as u64, b as u64, self.word_size))
    }

    /// Bitwise XOR.
    pub fn bit_xor(&mut self, a: i64, b: i64) -> i64 {
        self.commit("xor", ring::xor(a as u64, b as u64, self.word_size))
    }

    /// Bitwise NOT within the active width.
    pub fn bit_not(&mut self, a: i64) -> i64 {
        self.commit("not", ring::not(a as u64, self.word_size))
    }

    // ------------------------------------------------------------------------
    // Shift and rotate
    //
    // The amount is reduced modulo the word size, so shifting a byte by 8
    // leaves it unchanged.
    // ------------------------------------------------------------------------

    /// Logical shift left.
    pub fn shl(&mut self, a: i64, n: i64) -> i64 {
        self.commit("shl", ring::shl(a as u64, n, self.word_size))
    }

    /// Logical shift right.
    pub fn shr(&mut self, a: i64, n: i64) -> i64 {
        self.commit("shr", ring::shr(a as u64, n, self.word_size))
    }

    /// Rotate left within the active width.
    pub fn rol(&mut self, a: i64, n: i64) -> i64 {
        self.commit("rol", ring::rotate_left(a as u64, n, self.word_size))
    }

    /// Rotate right within the active width.
    pub fn ror(&mut self, a: i64, n: i64) -> i64 {
        self.commit("ror", ring::rotate_right(a as u64, n, self.word_size))
    }

    // ------------------------------------------------------------------------
    // Elementary math
    // ------------------------------------------------------------------------

    /// Floor of the square root.
    ///
    /// # Errors
    ///
    /// [`CalcError::InvalidOperand`] when `a < 0`.
    pub fn isqrt(&mut self, a: i64) -> Result<i64, CalcError> {
        if a < 0 {
            return Err(self.reject("isqrt", CalcError::InvalidOperand));
        }
        Ok(self.commit("isqrt", ring::isqrt(a as u64)))
    }

    /// Integer reciprocal `1 / a`, defined only when it is exact.
    ///
    /// ```
    /// use progcalc::{CalcError, Register};
    ///
    /// let mut reg = Register::new();
    /// assert_eq!(reg.reciprocal(-1), Ok(-1));
    /// assert_eq!(reg.reciprocal(2), Err(CalcError::NotRepresentable));
    /// ```
    ///
    /// # Errors
    ///
    /// [`CalcError::DivisionByZero`] when `a == 0`,
    /// [`CalcError::NotRepresentable`] when `1 % a != 0`.
    pub fn reciprocal(&mut self, a: i64) -> Result<i64, CalcError> {
        if a == 0 {
            return Err(self.reject("reciprocal", CalcError::DivisionByZero));
        }
        if 1 % a != 0 {
            return Err(self.reject("reciprocal", CalcError::NotRepresentable));
        }
        Ok(self.commit("reciprocal", (1 / a) as u64))
    }

    // ------------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------------

    /// Runs a binary operator selection.
    ///
    /// ```
    /// use progcalc::{BinaryOp, Register, WordSize};
    ///
    /// let mut reg = Register::new();
    /// reg.set_word_size(WordSize::Byte);
    /// assert_eq!(reg.apply(BinaryOp::RoR, 0x01, 1), Ok(-128));
    /// ```
    ///
    /// # Errors
    ///
    /// Whatever the selected operation returns; only [`BinaryOp::Divide`]
    /// and [`BinaryOp::Mod`] can fail.
    pub fn apply(&mut self, op: BinaryOp, a: i64, b: i64) -> Result<i64, CalcError> {
        Ok(match op {
            BinaryOp::Add => self.add(a, b),
            BinaryOp::Subtract => self.subtract(a, b),
            BinaryOp::Multiply => self.multiply(a, b),
            BinaryOp::Divide => return self.divide(a, b),
            BinaryOp::Mod => return self.modulo(a, b),
            BinaryOp::And => self.bit_and(a, b),
            BinaryOp::Or => self.bit_or(a, b),
            BinaryOp::Xor => self.bit_xor(a, b),
            BinaryOp::Lsh => self.shl(a, b),
            BinaryOp::Rsh => self.shr(a, b),
            BinaryOp::RoL => self.rol(a, b),
            BinaryOp::RoR => self.ror(a, b),
        })
    }

    /// Runs a unary operator selection.
    ///
    /// # Errors
    ///
    /// Whatever the selected operation returns; see [`Register::isqrt`] and
    /// [`Register::reciprocal`].
    pub fn apply_unary(&mut self, op: UnaryOp, a: i64) -> Result<i64, CalcError> {
        match op {
            UnaryOp::Not => Ok(self.bit_not(a)),
            UnaryOp::Negate => Ok(self.negate(a)),
            UnaryOp::Sqrt => self.isqrt(a),
            UnaryOp::Reciprocal => self.reciprocal(a),
        }
    }

    // ------------------------------------------------------------------------
    // Configuration and access
    // ------------------------------------------------------------------------

    /// Switches the display radix. The stored pattern is not touched.
    pub fn set_base(&mut self, base: Radix) {
        debug!(from = %self.base, to = %base, "base changed");
        self.base = base;
    }

    /// Switches the word size and re-masks the stored pattern.
    ///
    /// Narrowing drops high bits and can flip the sign; widening
    /// zero-extends the stored pattern.
    ///
    /// ```
    /// use progcalc::{Register, WordSize};
    ///
    /// let mut reg = Register::new();
    /// reg.set_value(0x1FF);
    /// reg.set_word_size(WordSize::Byte);
    /// assert_eq!(reg.value(), -1);
    /// reg.set_word_size(WordSize::Qword);
    /// assert_eq!(reg.value(), 0xFF);
    /// ```
    pub fn set_word_size(&mut self, word_size: WordSize) {
        debug!(from = %self.word_size, to = %word_size, "word size changed");
        self.word_size = word_size;
        self.raw = word_size.truncate(self.raw);
    }

    /// Loads a signed value, truncated to the word size.
    pub fn set_value(&mut self, value: i64) {
        self.commit("set_value", value as u64);
    }

    /// Loads a raw pattern, truncated to the word size.
    pub fn set_raw(&mut self, raw: u64) {
        self.commit("set_raw", raw);
    }

    /// Signed two's-complement interpretation of the stored pattern.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.word_size.sign_extend(self.raw)
    }

    /// The stored pattern; never has bits above the word size.
    #[inline]
    #[must_use]
    pub const fn raw(&self) -> u64 {
        self.word_size.truncate(self.raw)
    }

    /// Active word size.
    #[inline]
    #[must_use]
    pub const fn word_size(&self) -> WordSize {
        self.word_size
    }

    /// Active display radix.
    #[inline]
    #[must_use]
    pub const fn base(&self) -> Radix {
        self.base
    }

    /// Text for the display in the active radix.
    #[must_use]
    pub fn display(&self) -> String {
        self.base.render(self.raw, self.word_size)
    }

    /// Two-row bit view of the stored pattern; see [`bits::bit_view`].
    #[must_use]
    pub fn bits(&self) -> String {
        bits::bit_view(self.raw, self.word_size)
    }

    /// Point-in-time copy of the register for reporting.
    #[must_use]
    pub fn snapshot(&self) -> RegisterSnapshot {
        RegisterSnapshot {
            raw: self.raw(),
            value: self.value(),
            word_size: self.word_size,
            base: self.base,
            text: self.display(),
        }
    }
}

impl fmt::Debug for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Register")
            .field("raw", &format_args!("{:#x}", self.raw))
            .field("word_size", &self.word_size)
            .field("base", &self.base)
            .finish()
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Register state as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegisterSnapshot {
    /// Stored pattern.
    pub raw: u64,
    /// Signed interpretation.
    pub value: i64,
    /// Active word size.
    pub word_size: WordSize,
    /// Active display radix.
    pub base: Radix,
    /// Rendered display text.
    pub text: String,
}
