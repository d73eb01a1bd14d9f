//! Ring operations modulo `2^bits`.
//!
//! Every function takes operand patterns as `u64` and returns the result
//! already truncated to the word size. Operands may carry bits above the
//! window; they are either discarded by the final truncation or, for the
//! shift and rotate family, stripped before the operation so they cannot
//! shift into the window.
//!
//! Wraparound is explicit: nothing here depends on native overflow
//! behavior.

use super::word_size::WordSize;

/// Addition modulo `2^bits`.
///
/// # Example
///
/// ```
/// use progcalc::{ring, WordSize};
///
/// assert_eq!(ring::add(0x7F, 1, WordSize::Byte), 0x80);
/// assert_eq!(ring::add(0xFF, 1, WordSize::Byte), 0);
/// ```
#[inline]
#[must_use]
pub const fn add(a: u64, b: u64, w: WordSize) -> u64 {
    w.truncate(a.wrapping_add(b))
}

/// Subtraction modulo `2^bits`.
#[inline]
#[must_use]
pub const fn sub(a: u64, b: u64, w: WordSize) -> u64 {
    w.truncate(a.wrapping_sub(b))
}

/// Multiplication modulo `2^bits`.
///
/// The low `bits` bits of a product only depend on the low `bits` bits of
/// its factors, so the 64-bit wrapping product truncates correctly.
#[inline]
#[must_use]
pub const fn mul(a: u64, b: u64, w: WordSize) -> u64 {
    w.truncate(a.wrapping_mul(b))
}

/// Two's-complement negation modulo `2^bits`.
#[inline]
#[must_use]
pub const fn neg(a: u64, w: WordSize) -> u64 {
    w.truncate(a.wrapping_neg())
}

/// Truncating signed division.
///
/// Operates on the full 64-bit signed operands and truncates the quotient.
/// Returns `None` for a zero divisor. `i64::MIN / -1` wraps to `i64::MIN`.
///
/// ```
/// use progcalc::{ring, WordSize};
///
/// assert_eq!(ring::div(10, -2, WordSize::Qword), Some(-5i64 as u64));
/// assert_eq!(ring::div(1, 0, WordSize::Qword), None);
/// ```
#[inline]
#[must_use]
pub const fn div(a: i64, b: i64, w: WordSize) -> Option<u64> {
    if b == 0 {
        return None;
    }
    Some(w.truncate(a.wrapping_div(b) as u64))
}

/// Truncating signed remainder; the sign follows the dividend.
///
/// ```
/// use progcalc::{ring, WordSize};
///
/// assert_eq!(ring::rem(-10, 3, WordSize::Qword), Some(-1i64 as u64));
/// assert_eq!(ring::rem(10, -3, WordSize::Qword), Some(1));
/// ```
#[inline]
#[must_use]
pub const fn rem(a: i64, b: i64, w: WordSize) -> Option<u64> {
    if b == 0 {
        return None;
    }
    Some(w.truncate(a.wrapping_rem(b) as u64))
}

/// Bitwise NOT within the window.
#[inline]
#[must_use]
pub const fn not(a: u64, w: WordSize) -> u64 {
    w.truncate(!a)
}

/// Bitwise AND within the window.
#[inline]
#[must_use]
pub const fn and(a: u64, b: u64, w: WordSize) -> u64 {
    w.truncate(a & b)
}

/// Bitwise OR within the window.
#[inline]
#[must_use]
pub const fn or(a: u64, b: u64, w: WordSize) -> u64 {
    w.truncate(a | b)
}

/// Bitwise XOR within the window.
#[inline]
#[must_use]
pub const fn xor(a: u64, b: u64, w: WordSize) -> u64 {
    w.truncate(a ^ b)
}

/// Shift or rotate amount reduced modulo the word size.
///
/// Negative amounts reduce to their non-negative residue, so `-1` is
/// `bits - 1`.
///
/// ```
/// use progcalc::{ring, WordSize};
///
/// assert_eq!(ring::effective_amount(9, WordSize::Byte), 1);
/// assert_eq!(ring::effective_amount(8, WordSize::Byte), 0);
/// assert_eq!(ring::effective_amount(-1, WordSize::Byte), 7);
/// ```
#[inline]
#[must_use]
pub const fn effective_amount(n: i64, w: WordSize) -> u32 {
    n.rem_euclid(w.bits() as i64) as u32
}

/// Logical shift left by `n mod bits`; vacated bits are zero.
///
/// ```
/// use progcalc::{ring, WordSize};
///
/// assert_eq!(ring::shl(0x01, 1, WordSize::Byte), 0x02);
/// assert_eq!(ring::shl(0x80, 1, WordSize::Byte), 0);
/// assert_eq!(ring::shl(0x01, 9, WordSize::Byte), 0x02);
/// ```
#[inline]
#[must_use]
pub const fn shl(a: u64, n: i64, w: WordSize) -> u64 {
    w.truncate(w.truncate(a) << effective_amount(n, w))
}

/// Logical shift right by `n mod bits`; vacated bits are zero.
///
/// The operand is truncated first, so a negative value shifts in zeros at
/// the word's own top bit rather than at bit 63.
///
/// ```
/// use progcalc::{ring, WordSize};
///
/// assert_eq!(ring::shr(0x80, 1, WordSize::Byte), 0x40);
/// assert_eq!(ring::shr(u64::MAX, 4, WordSize::Byte), 0x0F);
/// ```
#[inline]
#[must_use]
pub const fn shr(a: u64, n: i64, w: WordSize) -> u64 {
    w.truncate(a) >> effective_amount(n, w)
}

/// Circular left rotation within the window by `n mod bits`.
///
/// ```
/// use progcalc::{ring, WordSize};
///
/// assert_eq!(ring::rotate_left(0x80, 1, WordSize::Byte), 0x01);
/// assert_eq!(ring::rotate_left(0x8000_0000_0000_0000, 1, WordSize::Qword), 1);
/// ```
#[inline]
#[must_use]
pub const fn rotate_left(a: u64, n: i64, w: WordSize) -> u64 {
    let v = w.truncate(a);
    let r = effective_amount(n, w);
    if r == 0 {
        // `v >> bits` would be a shift by 64 for a qword.
        return v;
    }
    w.truncate((v << r) | (v >> (w.bits() - r)))
}

/// Circular right rotation within the window by `n mod bits`.
///
/// ```
/// use progcalc::{ring, WordSize};
///
/// assert_eq!(ring::rotate_right(0x01, 1, WordSize::Byte), 0x80);
/// assert_eq!(ring::rotate_right(0x02, 1, WordSize::Byte), 0x01);
/// ```
#[inline]
#[must_use]
pub const fn rotate_right(a: u64, n: i64, w: WordSize) -> u64 {
    let v = w.truncate(a);
    let r = effective_amount(n, w);
    if r == 0 {
        return v;
    }
    w.truncate((v >> r) | (v << (w.bits() - r)))
}

/// Floor of the square root of an unsigned value.
///
/// Newton's iteration from an upper bound; monotonically decreasing until
/// it settles on `floor(sqrt(n))`.
///
/// ```
/// use progcalc::ring::isqrt;
///
/// assert_eq!(isqrt(15), 3);
/// assert_eq!(isqrt(16), 4);
/// assert_eq!(isqrt(u64::MAX), u32::MAX as u64);
/// ```
#[must_use]
pub const fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    // 2^ceil(bits/2) >= sqrt(n)
    let shift = (64 - n.leading_zeros()).div_ceil(2);
    let mut x = 1u64 << shift;
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const B: WordSize = WordSize::Byte;
    const Q: WordSize = WordSize::Qword;

    #[test]
    fn test_add_sub_wrap() {
        assert_eq!(add(0x7F, 1, B), 0x80);
        assert_eq!(sub(0x80, 1, B), 0x7F);
        assert_eq!(add(i64::MAX as u64, 1, Q), i64::MIN as u64);
        assert_eq!(sub(i64::MIN as u64, 1, Q), i64::MAX as u64);
        // Sign-extended operands truncate cleanly.
        assert_eq!(add(-1i64 as u64, -1i64 as u64, B), 0xFE);
    }

    #[test]
    fn test_mul() {
        assert_eq!(mul(16, 16, B), 0);
        assert_eq!(mul(3, 5, B), 15);
        assert_eq!(mul(-1i64 as u64, 5, B), 0xFB);
    }

    #[test]
    fn test_neg() {
        assert_eq!(neg(1, B), 0xFF);
        assert_eq!(neg(0x80, B), 0x80);
        assert_eq!(neg(0, Q), 0);
    }

    #[test]
    fn test_div_rem() {
        assert_eq!(div(10, 2, Q), Some(5));
        assert_eq!(div(-10, 2, Q), Some(-5i64 as u64));
        assert_eq!(div(0, 0, Q), None);
        assert_eq!(div(i64::MIN, -1, Q), Some(i64::MIN as u64));
        assert_eq!(rem(10, 3, Q), Some(1));
        assert_eq!(rem(-10, 3, Q), Some(-1i64 as u64));
        assert_eq!(rem(10, -3, Q), Some(1));
        assert_eq!(rem(i64::MIN, -1, Q), Some(0));
        assert_eq!(rem(5, 0, B), None);
        assert_eq!(div(-10, 3, B), Some(0xFD));
    }

    #[test]
    fn test_bitwise() {
        assert_eq!(and(0b1100, 0b1010, B), 0b1000);
        assert_eq!(or(0b1100, 0b1010, B), 0b1110);
        assert_eq!(xor(0b1100, 0b1010, B), 0b0110);
        assert_eq!(not(0b1111_0000, B), 0b0000_1111);
        assert_eq!(not(0, Q), u64::MAX);
    }

    #[test]
    fn test_shift() {
        assert_eq!(shl(1, 4, B), 16);
        assert_eq!(shr(16, 4, B), 1);
        assert_eq!(shl(0x80, 1, B), 0);
        assert_eq!(shr(0x01, 1, B), 0);
        // Amount equal to the word size reduces to zero.
        assert_eq!(shl(0x5A, 8, B), 0x5A);
        assert_eq!(shr(0x5A, 8, B), 0x5A);
        assert_eq!(shl(1, 64, Q), 1);
        assert_eq!(shl(1, 63, Q), 1 << 63);
    }

    #[test]
    fn test_rotate() {
        assert_eq!(rotate_left(1, 4, B), 16);
        assert_eq!(rotate_right(16, 4, B), 1);
        assert_eq!(rotate_left(128, 1, B), 1);
        assert_eq!(rotate_right(1, 1, B), 128);
        assert_eq!(rotate_left(0x1234, 4, WordSize::Word), 0x2341);
        assert_eq!(rotate_right(1, 1, Q), 1 << 63);
        assert_eq!(rotate_left(0xDEAD, 0, Q), 0xDEAD);
        assert_eq!(rotate_right(0xDEAD, 64, Q), 0xDEAD);
        // Bits above the window are dropped before rotating.
        assert_eq!(rotate_left(0x180, 1, B), 0x01);
    }

    #[test]
    fn test_rotate_matches_native() {
        for v in [0u64, 1, 0x80, 0xA5, 0xFF] {
            for n in 0..16 {
                assert_eq!(
                    rotate_left(v, n, B),
                    u64::from((v as u8).rotate_left(n as u32))
                );
                assert_eq!(
                    rotate_right(v, n, B),
                    u64::from((v as u8).rotate_right(n as u32))
                );
            }
        }
    }

    #[test]
    fn test_isqrt() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(2), 1);
        assert_eq!(isqrt(3), 1);
        assert_eq!(isqrt(4), 2);
        assert_eq!(isqrt(15), 3);
        assert_eq!(isqrt(16), 4);
        assert_eq!(isqrt(i64::MAX as u64), 3_037_000_499);
        assert_eq!(isqrt(u64::MAX), 4_294_967_295);
        for n in 0..10_000u64 {
            let r = isqrt(n);
            assert!(r * r <= n && n < (r + 1) * (r + 1), "isqrt({n}) = {r}");
        }
    }
}
