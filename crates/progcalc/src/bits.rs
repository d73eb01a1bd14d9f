//! Bit-view rendering.
//!
//! Shows all 64 bit positions as two rows of eight nibbles, high row first,
//! each followed by a line labelling its end positions:
//!
//! ```text
//! ···· ···· ···· ···· ···· ···· ···· ····
//! 63                                   32
//! ···· ···· ···· ···· ···· ···· 0001 1010
//! 31                                    0
//! ```
//!
//! Positions at or above the word size show [`PLACEHOLDER`].

use alloc::string::String;

use crate::core::word_size::WordSize;

/// Glyph for bit positions outside the active word size.
pub const PLACEHOLDER: char = '·';

/// Characters in one row of nibbles: 32 digits and 7 separators.
pub const ROW_WIDTH: usize = 39;

const ROWS: [(u32, u32); 2] = [(63, 32), (31, 0)];

/// Renders the low `width` bits of `raw` as a bit view.
///
/// ```
/// use progcalc::{bits::bit_view, WordSize};
///
/// let view = bit_view(0xFF, WordSize::Byte);
/// let rows: Vec<&str> = view.lines().collect();
/// assert_eq!(rows[2], "···· ···· ···· ···· ···· ···· 1111 1111");
/// assert_eq!(rows[3], "31                                    0");
/// ```
#[must_use]
pub fn bit_view(raw: u64, width: WordSize) -> String {
    let raw = width.truncate(raw);
    let mut out = String::with_capacity(4 * (ROW_WIDTH + 1) * 2);
    for (row, &(hi, lo)) in ROWS.iter().enumerate() {
        if row > 0 {
            out.push('\n');
        }
        for bit in (lo..=hi).rev() {
            out.push(if bit >= width.bits() {
                PLACEHOLDER
            } else if (raw >> bit) & 1 == 1 {
                '1'
            } else {
                '0'
            });
            if bit != lo && bit % 4 == 0 {
                out.push(' ');
            }
        }
        out.push('\n');
        out.push_str(&format!("{hi}{lo:>pad$}", pad = ROW_WIDTH - 2));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qword_zero() {
        let view = bit_view(0, WordSize::Qword);
        let rows: Vec<&str> = view.lines().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], "0000 0000 0000 0000 0000 0000 0000 0000");
        assert_eq!(rows[1], "63                                   32");
        assert_eq!(rows[2], "0000 0000 0000 0000 0000 0000 0000 0000");
        assert_eq!(rows[3], "31                                    0");
        for row in rows {
            assert_eq!(row.chars().count(), ROW_WIDTH);
        }
    }

    #[test]
    fn test_placeholder_above_width() {
        let view = bit_view(u64::MAX, WordSize::Word);
        let rows: Vec<&str> = view.lines().collect();
        assert_eq!(rows[0], "···· ···· ···· ···· ···· ···· ···· ····");
        assert_eq!(rows[2], "···· ···· ···· ···· 1111 1111 1111 1111");
    }

    #[test]
    fn test_pattern_bits() {
        let view = bit_view(0x8000_0000_0000_0001, WordSize::Qword);
        let rows: Vec<&str> = view.lines().collect();
        assert_eq!(rows[0], "1000 0000 0000 0000 0000 0000 0000 0000");
        assert_eq!(rows[2], "0000 0000 0000 0000 0000 0000 0000 0001");
    }

    #[test]
    fn test_dword_top_row_is_placeholder() {
        let view = bit_view(0x1_0000_0001, WordSize::Dword);
        let rows: Vec<&str> = view.lines().collect();
        assert!(rows[0].chars().all(|c| c == PLACEHOLDER || c == ' '));
        assert!(rows[2].ends_with("0001"));
    }
}
