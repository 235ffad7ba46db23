// ============================================================================
// Arbitrary-Precision Decimal
// Signed fixed-point value with an explicit, per-value scale
// ============================================================================

use super::big_uint::BigUint;
use super::errors::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

/// Largest scale representable by `rust_decimal::Decimal`
const RUST_DECIMAL_MAX_SCALE: u32 = 28;

/// Arbitrary-precision decimal number.
///
/// Stores `coefficient × 10^-scale` with a separate sign. The scale is the
/// number of fraction digits the value carries; it is part of the value's
/// identity for formatting but not for comparison (`1.50 == 1.5`).
///
/// Invariants:
/// - zero is never negative
/// - digits beyond `scale` do not exist: every constructor and every
///   arithmetic result truncates, it never rounds
///
/// # Example
/// ```
/// use decimal_engine::numeric::Decimal;
///
/// let price: Decimal = "-12.340".parse().unwrap();
/// assert_eq!(price.scale(), 3);
/// assert_eq!(price.rescale(1).to_string(), "-12.3");
/// ```
#[derive(Clone)]
pub struct Decimal {
    negative: bool,
    coefficient: BigUint,
    scale: usize,
}

impl Decimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from an unscaled coefficient, a scale and a sign.
    ///
    /// A zero coefficient always yields a non-negative value.
    #[inline]
    pub fn from_parts(coefficient: BigUint, scale: usize, negative: bool) -> Self {
        let negative = negative && !coefficient.is_zero();
        Self {
            negative,
            coefficient,
            scale,
        }
    }

    /// Create `value × 10^-scale`.
    ///
    /// # Example
    /// ```
    /// use decimal_engine::numeric::Decimal;
    ///
    /// assert_eq!(Decimal::new(-12345, 2).to_string(), "-123.45");
    /// ```
    pub fn new(value: i64, scale: u32) -> Self {
        Self::from_parts(
            BigUint::from_u64(value.unsigned_abs()),
            scale as usize,
            value < 0,
        )
    }

    /// Zero with scale 0
    #[inline]
    pub fn zero() -> Self {
        Self::from_parts(BigUint::zero(), 0, false)
    }

    /// One with scale 0
    #[inline]
    pub fn one() -> Self {
        Self::from_parts(BigUint::one(), 0, false)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of fraction digits.
    #[inline]
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Unscaled magnitude (`|self| × 10^scale`).
    #[inline]
    pub fn coefficient(&self) -> &BigUint {
        &self.coefficient
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    /// -1, 0 or 1 according to the sign.
    #[inline]
    pub fn signum(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Digits left of the decimal point, without leading zeros (`"0"` when
    /// the magnitude is below one).
    pub fn integer_digits(&self) -> String {
        let digits = self.coefficient.to_string();
        if digits.len() > self.scale {
            digits[..digits.len() - self.scale].to_string()
        } else {
            "0".to_string()
        }
    }

    /// Exactly `scale` digits right of the decimal point.
    pub fn fraction_digits(&self) -> String {
        let digits = self.coefficient.to_string();
        if digits.len() > self.scale {
            digits[digits.len() - self.scale..].to_string()
        } else {
            format!("{:0>width$}", digits, width = self.scale)
        }
    }

    /// Get absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Self::from_parts(self.coefficient.clone(), self.scale, false)
    }

    // ========================================================================
    // Truncation
    // ========================================================================

    /// Re-express with exactly `scale` fraction digits.
    ///
    /// Extra digits are dropped (truncation toward zero) and missing digits
    /// are zero-filled. This is the single place where precision is lost.
    pub fn rescale(&self, scale: usize) -> Self {
        let coefficient = match scale.cmp(&self.scale) {
            Ordering::Equal => return self.clone(),
            Ordering::Less => self.coefficient.div_pow10(self.scale - scale),
            Ordering::Greater => self.coefficient.mul_pow10(scale - self.scale),
        };
        Self::from_parts(coefficient, scale, self.negative)
    }

    /// Coefficient re-expressed at a larger or equal scale.
    #[inline]
    pub(crate) fn coefficient_at(&self, scale: usize) -> BigUint {
        debug_assert!(scale >= self.scale);
        self.coefficient.mul_pow10(scale - self.scale)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl Neg for Decimal {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        let negative = !self.negative;
        Self::from_parts(self.coefficient, self.scale, negative)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Self::Output {
        Decimal::from_parts(self.coefficient.clone(), self.scale, !self.negative)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::new(value, 0)
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Self::from_parts(BigUint::from_u64(value), 0, false)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({}, scale={})", self, self.scale)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }

        let digits = self.coefficient.to_string();
        if self.scale == 0 {
            f.write_str(&digits)
        } else if digits.len() > self.scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - self.scale);
            write!(f, "{}.{}", int_part, frac_part)
        } else {
            write!(f, "0.{:0>width$}", digits, width = self.scale)
        }
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl From<rust_decimal::Decimal> for Decimal {
    fn from(d: rust_decimal::Decimal) -> Self {
        let mantissa = d.mantissa();
        Self::from_parts(
            BigUint::from_u128(mantissa.unsigned_abs()),
            d.scale() as usize,
            mantissa < 0,
        )
    }
}

impl Decimal {
    /// Convert to `rust_decimal::Decimal`, keeping the scale.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the scale exceeds 28
    /// - `Overflow` if the coefficient exceeds 96 bits
    pub fn to_rust_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        let scale = u32::try_from(self.scale)
            .ok()
            .filter(|&s| s <= RUST_DECIMAL_MAX_SCALE)
            .ok_or(NumericError::PrecisionLoss)?;

        let magnitude = self
            .coefficient
            .to_u128()
            .and_then(|m| i128::try_from(m).ok())
            .ok_or(NumericError::Overflow)?;
        let mantissa = if self.negative { -magnitude } else { magnitude };

        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, scale)
            .map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Decimal {
    type Err = NumericError;

    /// Parse a decimal literal: `[+-]digits[.digits]`.
    ///
    /// The fraction length becomes the scale, so trailing zeros are kept.
    ///
    /// # Examples
    /// - "007" -> 7 (scale 0)
    /// - "-1.250" -> -1.250 (scale 3)
    /// - ".5" -> 0.5 (scale 1)
    /// - "5." -> 5 (scale 0)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let (negative, body) = match bytes.first() {
            Some(b'-') => (true, &bytes[1..]),
            Some(b'+') => (false, &bytes[1..]),
            _ => (false, bytes),
        };

        let (int_part, frac_part) = match body.iter().position(|&b| b == b'.') {
            Some(pos) => (&body[..pos], &body[pos + 1..]),
            None => (body, &body[body.len()..]),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(NumericError::MalformedOperand);
        }
        // A second '.' lands in frac_part and fails here
        if !int_part.iter().chain(frac_part).all(u8::is_ascii_digit) {
            return Err(NumericError::MalformedOperand);
        }

        let mut digits = Vec::with_capacity(int_part.len() + frac_part.len());
        digits.extend_from_slice(int_part);
        digits.extend_from_slice(frac_part);

        Ok(Self::from_parts(
            BigUint::from_ascii_digits(&digits),
            frac_part.len(),
            negative,
        ))
    }
}

// ============================================================================
// Serde (canonical text form)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Decimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Decimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
