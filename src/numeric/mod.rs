// ============================================================================
// Numeric Module
// Arbitrary-precision decimal values and the integer kernel beneath them
// ============================================================================
//
// This module provides:
// - BigUint: unsigned arbitrary-precision integer (base 10^9 limbs)
// - Decimal: signed fixed-point value with a per-value scale
// - NumericError: Error kinds for parsing and arithmetic
//
// Design principles:
// - No floating-point operations
// - All fallible arithmetic returns Result (no panics)
// - Truncation, never rounding: Decimal::rescale is the only lossy step

mod big_uint;
mod decimal;
mod errors;

pub use big_uint::BigUint;
pub use decimal::Decimal;
pub use errors::{NumericError, NumericResult};
