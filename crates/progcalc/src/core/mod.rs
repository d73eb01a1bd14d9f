//! Core value types and arithmetic kernels.
//!
//! - [`word_size::WordSize`]: active width, mask and sign interpretation
//! - [`radix::Radix`]: display radix, rendering and operand parsing
//! - [`ring`]: wrapping arithmetic, bitwise, shift and rotate kernels

pub mod radix;
pub mod ring;
pub mod word_size;
