//! Display radix and radix-aware text conversion.
//!
//! Decimal is the only signed rendering. Binary, octal and hexadecimal show
//! the masked two's-complement pattern, so `-1` in a byte reads `FF`.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use super::word_size::WordSize;
use crate::error::{ParseError, RadixParseError};

/// Rendering radix of the register.
///
/// # Example
///
/// ```
/// use progcalc::{Radix, WordSize};
///
/// assert_eq!(Radix::Hex.render(26, WordSize::Qword), "1A");
/// assert_eq!(Radix::Oct.render(26, WordSize::Qword), "32");
/// assert_eq!(Radix::Bin.render(26, WordSize::Qword), "11010");
/// assert_eq!(Radix::Dec.render(0xFF, WordSize::Byte), "-1");
/// assert_eq!(Radix::Hex.render(0xFF, WordSize::Byte), "FF");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Radix {
    /// Signed decimal.
    #[default]
    Dec,
    /// Unsigned binary pattern.
    Bin,
    /// Unsigned octal pattern.
    Oct,
    /// Unsigned upper-case hexadecimal pattern.
    Hex,
}

impl Radix {
    /// All radices in selector order.
    pub const ALL: [Self; 4] = [Self::Hex, Self::Dec, Self::Oct, Self::Bin];

    /// Numeric base.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::Dec => 10,
            Self::Bin => 2,
            Self::Oct => 8,
            Self::Hex => 16,
        }
    }

    /// Upper-case mnemonic.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dec => "DEC",
            Self::Bin => "BIN",
            Self::Oct => "OCT",
            Self::Hex => "HEX",
        }
    }

    /// Renders the low `width` bits of `raw`.
    ///
    /// No sign, prefix or leading zeros outside decimal; zero is `"0"` in
    /// every radix.
    #[must_use]
    pub fn render(self, raw: u64, width: WordSize) -> String {
        let v = width.truncate(raw);
        match self {
            Self::Dec => format!("{}", width.sign_extend(v)),
            Self::Bin => format!("{v:b}"),
            Self::Oct => format!("{v:o}"),
            Self::Hex => format!("{v:X}"),
        }
    }

    /// Reads an operand typed in this radix and returns its signed value at
    /// `width`.
    ///
    /// Decimal takes an optional `+`/`-` and any value in
    /// `min_signed..=mask` (so `255` in a byte reads back as `-1`). The other
    /// radices take an unsigned pattern of at most `width` bits, with
    /// case-insensitive digits and `_` separators, and sign-extend it.
    ///
    /// ```
    /// use progcalc::{Radix, WordSize};
    ///
    /// assert_eq!(Radix::Hex.parse("FF", WordSize::Byte), Ok(-1));
    /// assert_eq!(Radix::Dec.parse("-128", WordSize::Byte), Ok(-128));
    /// assert!(Radix::Hex.parse("1FF", WordSize::Byte).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// [`ParseError::Empty`] when there are no digits,
    /// [`ParseError::InvalidDigit`] for a character outside the radix and
    /// [`ParseError::Overflow`] when the value needs more than `width` bits.
    pub fn parse(self, text: &str, width: WordSize) -> Result<i64, ParseError> {
        let text = text.trim();
        let (negative, digits, offset) = match (self, text.chars().next()) {
            (Self::Dec, Some('-')) => (true, &text[1..], 1),
            (Self::Dec, Some('+')) => (false, &text[1..], 1),
            _ => (false, text, 0),
        };

        let base = u128::from(self.value());
        let mut magnitude: u128 = 0;
        let mut seen = false;
        for (i, c) in digits.chars().enumerate() {
            if c == '_' && self != Self::Dec {
                continue;
            }
            let d = c.to_digit(self.value()).ok_or(ParseError::InvalidDigit {
                digit: c,
                position: i + offset,
            })?;
            magnitude = magnitude * base + u128::from(d);
            if magnitude > u128::from(u64::MAX) {
                return Err(ParseError::Overflow);
            }
            seen = true;
        }
        if !seen {
            return Err(ParseError::Empty);
        }

        let magnitude = magnitude as u64;
        let pattern = if negative {
            if magnitude > width.sign_bit() {
                return Err(ParseError::Overflow);
            }
            magnitude.wrapping_neg()
        } else {
            if magnitude > width.mask() {
                return Err(ParseError::Overflow);
            }
            magnitude
        };
        Ok(width.sign_extend(pattern))
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Radix {
    type Err = RadixParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(base) = s.parse::<u32>() {
            return Self::ALL
                .into_iter()
                .find(|r| r.value() == base)
                .ok_or_else(|| RadixParseError(s.to_owned()));
        }
        Self::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RadixParseError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_zero() {
        for r in Radix::ALL {
            for w in WordSize::ALL {
                assert_eq!(r.render(0, w), "0");
            }
        }
    }

    #[test]
    fn test_render_negative_patterns() {
        assert_eq!(Radix::Hex.render(u64::MAX, WordSize::Qword), "FFFFFFFFFFFFFFFF");
        assert_eq!(Radix::Bin.render(u64::MAX, WordSize::Byte), "11111111");
        assert_eq!(Radix::Oct.render(u64::MAX, WordSize::Word), "177777");
        assert_eq!(Radix::Dec.render(u64::MAX, WordSize::Dword), "-1");
        assert_eq!(
            Radix::Dec.render(i64::MIN as u64, WordSize::Qword),
            "-9223372036854775808"
        );
    }

    #[test]
    fn test_render_ignores_bits_above_width() {
        assert_eq!(Radix::Hex.render(0x1FF, WordSize::Byte), "FF");
        assert_eq!(Radix::Hex.render(0x100, WordSize::Byte), "0");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(Radix::Dec.parse("26", WordSize::Qword), Ok(26));
        assert_eq!(Radix::Dec.parse("+7", WordSize::Byte), Ok(7));
        assert_eq!(Radix::Dec.parse("-128", WordSize::Byte), Ok(-128));
        assert_eq!(Radix::Dec.parse("255", WordSize::Byte), Ok(-1));
        assert_eq!(Radix::Dec.parse("-129", WordSize::Byte), Err(ParseError::Overflow));
        assert_eq!(Radix::Dec.parse("256", WordSize::Byte), Err(ParseError::Overflow));
        assert_eq!(
            Radix::Dec.parse("-9223372036854775808", WordSize::Qword),
            Ok(i64::MIN)
        );
        assert_eq!(
            Radix::Dec.parse("18446744073709551616", WordSize::Qword),
            Err(ParseError::Overflow)
        );
    }

    #[test]
    fn test_parse_patterns() {
        assert_eq!(Radix::Hex.parse("1a", WordSize::Qword), Ok(26));
        assert_eq!(Radix::Oct.parse("32", WordSize::Qword), Ok(26));
        assert_eq!(Radix::Bin.parse("1101_0", WordSize::Qword), Ok(26));
        assert_eq!(Radix::Hex.parse("80", WordSize::Byte), Ok(-128));
        assert_eq!(Radix::Hex.parse("FFFFFFFFFFFFFFFF", WordSize::Qword), Ok(-1));
        assert_eq!(Radix::Bin.parse("100000000", WordSize::Byte), Err(ParseError::Overflow));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Radix::Hex.parse("", WordSize::Byte), Err(ParseError::Empty));
        assert_eq!(Radix::Dec.parse("-", WordSize::Byte), Err(ParseError::Empty));
        assert_eq!(Radix::Hex.parse("__", WordSize::Byte), Err(ParseError::Empty));
        assert_eq!(
            Radix::Bin.parse("102", WordSize::Byte),
            Err(ParseError::InvalidDigit {
                digit: '2',
                position: 2
            })
        );
        assert_eq!(
            Radix::Dec.parse("-1A", WordSize::Qword),
            Err(ParseError::InvalidDigit {
                digit: 'A',
                position: 2
            })
        );
        // Sign is decimal-only.
        assert!(matches!(
            Radix::Hex.parse("-1", WordSize::Byte),
            Err(ParseError::InvalidDigit { digit: '-', .. })
        ));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("hex".parse(), Ok(Radix::Hex));
        assert_eq!("BIN".parse(), Ok(Radix::Bin));
        assert_eq!("8".parse(), Ok(Radix::Oct));
        assert_eq!("10".parse(), Ok(Radix::Dec));
        assert!("3".parse::<Radix>().is_err());
        assert!("roman".parse::<Radix>().is_err());
    }
}
