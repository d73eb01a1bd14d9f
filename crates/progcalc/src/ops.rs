//! Operator selections.
//!
//! A front end holds a pending operator as one of these values and hands it
//! to [`Register::apply`](crate::Register::apply) or
//! [`Register::apply_unary`](crate::Register::apply_unary) once the operands
//! are known. Parsing accepts the keypad labels and plain word aliases.

use core::fmt;
use core::str::FromStr;

use crate::error::OpParseError;

/// Two-operand operator.
///
/// ```
/// use progcalc::BinaryOp;
///
/// assert_eq!("RoL".parse(), Ok(BinaryOp::RoL));
/// assert_eq!("shl".parse(), Ok(BinaryOp::Lsh));
/// assert_eq!(BinaryOp::Mod.to_string(), "Mod");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// Truncating `a / b`.
    Divide,
    /// Truncating remainder.
    Mod,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Logical shift left.
    Lsh,
    /// Logical shift right.
    Rsh,
    /// Rotate left.
    RoL,
    /// Rotate right.
    RoR,
}

impl BinaryOp {
    /// Every binary operator.
    pub const ALL: [Self; 12] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Mod,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Lsh,
        Self::Rsh,
        Self::RoL,
        Self::RoR,
    ];

    /// Keypad label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Mod => "Mod",
            Self::And => "And",
            Self::Or => "Or",
            Self::Xor => "Xor",
            Self::Lsh => "Lsh",
            Self::Rsh => "Rsh",
            Self::RoL => "RoL",
            Self::RoR => "RoR",
        }
    }

    const fn alias(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "sub",
            Self::Multiply => "mul",
            Self::Divide => "div",
            Self::Mod => "mod",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Lsh => "shl",
            Self::Rsh => "shr",
            Self::RoL => "rol",
            Self::RoR => "ror",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BinaryOp {
    type Err = OpParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|op| op.label().eq_ignore_ascii_case(s) || op.alias().eq_ignore_ascii_case(s))
            .ok_or_else(|| OpParseError(s.to_owned()))
    }
}

/// Single-operand operator.
///
/// ```
/// use progcalc::UnaryOp;
///
/// assert_eq!("√".parse(), Ok(UnaryOp::Sqrt));
/// assert_eq!("1/x".parse(), Ok(UnaryOp::Reciprocal));
/// assert_eq!("neg".parse(), Ok(UnaryOp::Negate));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    /// Bitwise NOT.
    Not,
    /// Two's-complement negation.
    Negate,
    /// Integer square root.
    Sqrt,
    /// Integer reciprocal.
    Reciprocal,
}

impl UnaryOp {
    /// Every unary operator.
    pub const ALL: [Self; 4] = [Self::Not, Self::Negate, Self::Sqrt, Self::Reciprocal];

    /// Keypad label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Not => "Not",
            Self::Negate => "±",
            Self::Sqrt => "√",
            Self::Reciprocal => "1/x",
        }
    }

    const fn alias(self) -> &'static str {
        match self {
            Self::Not => "not",
            Self::Negate => "neg",
            Self::Sqrt => "sqrt",
            Self::Reciprocal => "recip",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UnaryOp {
    type Err = OpParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|op| op.label().eq_ignore_ascii_case(s) || op.alias().eq_ignore_ascii_case(s))
            .ok_or_else(|| OpParseError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_roundtrip() {
        for op in BinaryOp::ALL {
            assert_eq!(op.label().parse(), Ok(op));
            assert_eq!(op.alias().parse(), Ok(op));
        }
        for op in UnaryOp::ALL {
            assert_eq!(op.label().parse(), Ok(op));
            assert_eq!(op.alias().parse(), Ok(op));
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!("XOR".parse(), Ok(BinaryOp::Xor));
        assert_eq!("ror".parse(), Ok(BinaryOp::RoR));
        assert_eq!("NOT".parse(), Ok(UnaryOp::Not));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(
            "pow".parse::<BinaryOp>(),
            Err(OpParseError("pow".to_owned()))
        );
        assert!("+".parse::<UnaryOp>().is_err());
        assert!("Not".parse::<BinaryOp>().is_err());
    }
}
