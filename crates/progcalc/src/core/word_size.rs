//! Active bit width of the register.
//!
//! The word size fixes the wraparound modulus (`2^bits`) and the position of
//! the sign bit. Storage is always a `u64`; the word size decides how much of
//! it is live.

use core::fmt;
use core::str::FromStr;

use crate::error::WordSizeParseError;

/// One of the four selectable register widths.
///
/// # Example
///
/// ```
/// use progcalc::WordSize;
///
/// assert_eq!(WordSize::Byte.bits(), 8);
/// assert_eq!(WordSize::Byte.mask(), 0xFF);
/// assert_eq!(WordSize::Byte.sign_extend(0xFF), -1);
/// assert_eq!(WordSize::Qword.mask(), u64::MAX);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum WordSize {
    /// 8 bits.
    Byte = 8,
    /// 16 bits.
    Word = 16,
    /// 32 bits.
    Dword = 32,
    /// 64 bits.
    #[default]
    Qword = 64,
}

impl WordSize {
    /// All word sizes in ascending order.
    pub const ALL: [Self; 4] = [Self::Byte, Self::Word, Self::Dword, Self::Qword];

    /// Number of live bits.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Pattern with exactly [`bits`](Self::bits) low bits set.
    #[inline]
    #[must_use]
    pub const fn mask(self) -> u64 {
        match self {
            Self::Qword => u64::MAX,
            _ => (1u64 << self.bits()) - 1,
        }
    }

    /// The sign bit, `1 << (bits - 1)`.
    #[inline]
    #[must_use]
    pub const fn sign_bit(self) -> u64 {
        1u64 << (self.bits() - 1)
    }

    /// Drops every bit above the word size.
    #[inline]
    #[must_use]
    pub const fn truncate(self, raw: u64) -> u64 {
        raw & self.mask()
    }

    /// Two's-complement interpretation of the low `bits` bits of `raw`.
    ///
    /// Bits above the word size are ignored; a set sign bit extends with
    /// ones through bit 63.
    ///
    /// ```
    /// use progcalc::WordSize;
    ///
    /// assert_eq!(WordSize::Byte.sign_extend(0x80), -128);
    /// assert_eq!(WordSize::Byte.sign_extend(0x17F), 127);
    /// assert_eq!(WordSize::Word.sign_extend(0xFFFF), -1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn sign_extend(self, raw: u64) -> i64 {
        let mask = self.mask();
        let v = raw & mask;
        if v & self.sign_bit() != 0 {
            (v | !mask) as i64
        } else {
            v as i64
        }
    }

    /// Smallest signed value representable at this width.
    #[inline]
    #[must_use]
    pub const fn min_signed(self) -> i64 {
        self.sign_extend(self.sign_bit())
    }

    /// Largest signed value representable at this width.
    #[inline]
    #[must_use]
    pub const fn max_signed(self) -> i64 {
        (self.sign_bit() - 1) as i64
    }

    /// Looks up a word size by bit count.
    ///
    /// ```
    /// use progcalc::WordSize;
    ///
    /// assert_eq!(WordSize::from_bits(32), Some(WordSize::Dword));
    /// assert_eq!(WordSize::from_bits(12), None);
    /// ```
    #[must_use]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(Self::Byte),
            16 => Some(Self::Word),
            32 => Some(Self::Dword),
            64 => Some(Self::Qword),
            _ => None,
        }
    }

    /// Upper-case mnemonic, as printed on the width selector.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Byte => "BYTE",
            Self::Word => "WORD",
            Self::Dword => "DWORD",
            Self::Qword => "QWORD",
        }
    }
}

impl fmt::Display for WordSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WordSize {
    type Err = WordSizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(bits) = s.parse::<u32>() {
            return Self::from_bits(bits).ok_or_else(|| WordSizeParseError(s.to_owned()));
        }
        Self::ALL
            .into_iter()
            .find(|w| w.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| WordSizeParseError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks() {
        assert_eq!(WordSize::Byte.mask(), 0xFF);
        assert_eq!(WordSize::Word.mask(), 0xFFFF);
        assert_eq!(WordSize::Dword.mask(), 0xFFFF_FFFF);
        assert_eq!(WordSize::Qword.mask(), u64::MAX);
        for w in WordSize::ALL {
            assert_eq!(w.mask().count_ones(), w.bits());
        }
    }

    #[test]
    fn test_sign_extend() {
        assert_eq!(WordSize::Byte.sign_extend(0x7F), 127);
        assert_eq!(WordSize::Byte.sign_extend(0x80), -128);
        assert_eq!(WordSize::Dword.sign_extend(0x8000_0000), i32::MIN as i64);
        assert_eq!(WordSize::Qword.sign_extend(u64::MAX), -1);
        // Bits above the window never leak into the interpretation.
        assert_eq!(WordSize::Byte.sign_extend(0x1FF), -1);
        assert_eq!(WordSize::Byte.sign_extend(0x100), 0);
    }

    #[test]
    fn test_signed_range() {
        assert_eq!(WordSize::Byte.min_signed(), -128);
        assert_eq!(WordSize::Byte.max_signed(), 127);
        assert_eq!(WordSize::Word.min_signed(), i16::MIN as i64);
        assert_eq!(WordSize::Qword.min_signed(), i64::MIN);
        assert_eq!(WordSize::Qword.max_signed(), i64::MAX);
    }

    #[test]
    fn test_parse() {
        assert_eq!("byte".parse(), Ok(WordSize::Byte));
        assert_eq!("QWORD".parse(), Ok(WordSize::Qword));
        assert_eq!("DWord".parse(), Ok(WordSize::Dword));
        assert_eq!("16".parse(), Ok(WordSize::Word));
        assert!("12".parse::<WordSize>().is_err());
        assert!("nibble".parse::<WordSize>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(WordSize::Qword.to_string(), "QWORD");
        assert_eq!(WordSize::default(), WordSize::Qword);
    }
}
