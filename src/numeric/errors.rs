// ============================================================================
// Numeric Errors
// Error kinds surfaced by parsing and decimal arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing or operating on decimals.
///
/// Every kind is deterministic: retrying the same call yields the same error.
/// Hosts are expected to map kinds onto their own diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Operand text does not match the decimal literal grammar
    MalformedOperand,
    /// Divisor or modulus compares equal to zero
    DivisionByZero,
    /// Exponent is negative
    NegativeExponent,
    /// Exponent carries a fractional part (non-zero scale)
    NonIntegerExponent,
    /// Square root of a negative operand
    NegativeRadicand,
    /// Integer-only operand (powmod base or modulus) carries a fractional part
    NonIntegerOperand,
    /// Value does not fit the target representation
    Overflow,
    /// Conversion would lose fractional digits
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::MalformedOperand => {
                write!(f, "malformed operand: not a well-formed decimal number")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::NegativeExponent => write!(f, "negative exponent"),
            NumericError::NonIntegerExponent => {
                write!(f, "exponent cannot have a fractional part")
            },
            NumericError::NegativeRadicand => {
                write!(f, "square root of a negative number")
            },
            NumericError::NonIntegerOperand => {
                write!(f, "operand cannot have a fractional part")
            },
            NumericError::Overflow => {
                write!(f, "overflow: value exceeds the target representation")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
