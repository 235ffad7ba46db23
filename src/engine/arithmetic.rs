// ============================================================================
// Arithmetic Operations
// Scale-aware add/sub/mul/div/rem/pow/sqrt over arbitrary-precision decimals
// ============================================================================
//
// Scale rules:
// - add/sub:  exact, result scale = max(scaleA, scaleB)
// - mul:      exact product has scaleA + scaleB, truncated to the target
//             when the target is smaller
// - div:      quotient truncated to the target scale
// - rem:      exact remainder of the truncated quotient, at
//             max(scaleA, scaleB)
// - pow:      exact power has scaleA * exponent, truncated to the target
//             when the target is smaller
// - sqrt:     root truncated to the target scale
//
// Every lossy step goes through Decimal::rescale.

use crate::numeric::{BigUint, Decimal, NumericError, NumericResult};
use std::cmp::Ordering;
use std::ops::{Add, Mul, Sub};

/// Signed addition of `a` and `b` where `b` is taken with sign `b_negative`.
fn add_signed(a: &Decimal, b: &Decimal, b_negative: bool) -> Decimal {
    let scale = a.scale().max(b.scale());
    let x = a.coefficient_at(scale);
    let y = b.coefficient_at(scale);

    if a.is_negative() == b_negative {
        return Decimal::from_parts(&x + &y, scale, b_negative);
    }

    match x.cmp(&y) {
        Ordering::Greater | Ordering::Equal => Decimal::from_parts(&x - &y, scale, a.is_negative()),
        Ordering::Less => Decimal::from_parts(&y - &x, scale, b_negative),
    }
}

/// `base^exponent` by binary exponentiation over an unbounded exponent.
pub(crate) fn pow_magnitude(base: &BigUint, exponent: &BigUint) -> BigUint {
    let mut result = BigUint::one();
    let mut square = base.clone();
    let mut remaining = exponent.clone();

    while !remaining.is_zero() {
        if remaining.is_odd() {
            result = &result * &square;
        }
        remaining = remaining.div_rem_small(2).0;
        if !remaining.is_zero() {
            square = &square * &square;
        }
    }
    result
}

/// Validate an exponent operand: integral (scale 0) and non-negative.
pub(crate) fn check_exponent(exponent: &Decimal) -> NumericResult<()> {
    if exponent.scale() != 0 {
        return Err(NumericError::NonIntegerExponent);
    }
    if exponent.is_negative() {
        return Err(NumericError::NegativeExponent);
    }
    Ok(())
}

// ============================================================================
// Exact Operators
// ============================================================================

/// Exact sum at `max(scaleA, scaleB)`.
impl Add for &Decimal {
    type Output = Decimal;

    #[inline]
    fn add(self, rhs: Self) -> Decimal {
        add_signed(self, rhs, rhs.is_negative())
    }
}

/// Exact difference at `max(scaleA, scaleB)`.
impl Sub for &Decimal {
    type Output = Decimal;

    #[inline]
    fn sub(self, rhs: Self) -> Decimal {
        add_signed(self, rhs, !rhs.is_negative())
    }
}

/// Exact product at `scaleA + scaleB`.
impl Mul for &Decimal {
    type Output = Decimal;

    #[inline]
    fn mul(self, rhs: Self) -> Decimal {
        Decimal::from_parts(
            self.coefficient() * rhs.coefficient(),
            self.scale() + rhs.scale(),
            self.is_negative() != rhs.is_negative(),
        )
    }
}

// ============================================================================
// Scale-bounded Operations
// ============================================================================

impl Decimal {
    /// Product truncated to `min(scaleA + scaleB, scale)` fraction digits.
    ///
    /// # Example
    /// ```
    /// use decimal_engine::numeric::Decimal;
    ///
    /// let x: Decimal = "1.99".parse().unwrap();
    /// assert_eq!(x.mul_truncated(&x, 1).to_string(), "3.9");
    /// ```
    pub fn mul_truncated(&self, rhs: &Self, scale: usize) -> Self {
        let product = self * rhs;
        let target = product.scale().min(scale);
        product.rescale(target)
    }

    /// Quotient truncated toward zero at `scale` fraction digits.
    ///
    /// One guard digit beyond `scale` is produced by the long division and
    /// then dropped by the truncation step.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero at any scale.
    pub fn checked_div(&self, rhs: &Self, scale: usize) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        // |a| / |b| * 10^guard = A * 10^(sb + guard) / (B * 10^sa)
        let guard = scale + 1;
        let numerator = self.coefficient().mul_pow10(rhs.scale() + guard);
        let denominator = rhs.coefficient().mul_pow10(self.scale());
        let (quotient, _) = numerator.div_rem(&denominator)?;

        let negative = self.is_negative() != rhs.is_negative();
        Ok(Decimal::from_parts(quotient, guard, negative).rescale(scale))
    }

    /// Integer-truncated quotient (scale 0) and the matching remainder.
    ///
    /// The remainder is `self - rhs * quotient`, computed exactly at
    /// `max(scaleA, scaleB)`, and carries the sign of `self`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero at any scale.
    pub fn checked_div_rem(&self, rhs: &Self) -> NumericResult<(Self, Self)> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        let scale = self.scale().max(rhs.scale());
        let (quotient, remainder) = self
            .coefficient_at(scale)
            .div_rem(&rhs.coefficient_at(scale))?;

        Ok((
            Decimal::from_parts(quotient, 0, self.is_negative() != rhs.is_negative()),
            Decimal::from_parts(remainder, scale, self.is_negative()),
        ))
    }

    /// Remainder of truncated division, at `max(scaleA, scaleB)`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero at any scale.
    pub fn checked_rem(&self, rhs: &Self) -> NumericResult<Self> {
        self.checked_div_rem(rhs).map(|(_, remainder)| remainder)
    }

    /// Integer power truncated to `min(scaleA * exponent, scale)` digits.
    ///
    /// # Errors
    /// - `NonIntegerExponent` if the exponent has a non-zero scale
    /// - `NegativeExponent` if the exponent is negative
    pub fn checked_pow(&self, exponent: &Self, scale: usize) -> NumericResult<Self> {
        check_exponent(exponent)?;

        let exponent = exponent.coefficient();
        let exact_scale = match exponent.to_u64().map(usize::try_from) {
            Some(Ok(e)) => self.scale().saturating_mul(e),
            _ if self.scale() == 0 => 0,
            _ => usize::MAX,
        };

        let magnitude = pow_magnitude(self.coefficient(), exponent);
        let negative = self.is_negative() && exponent.is_odd();
        let exact = Decimal::from_parts(magnitude, exact_scale, negative);
        Ok(exact.rescale(exact_scale.min(scale)))
    }

    /// Square root truncated at `scale` fraction digits.
    ///
    /// Computed as `isqrt(floor(|self| * 10^(2 * scale)))`, which is exactly
    /// the truncated root.
    ///
    /// # Errors
    /// Returns `NegativeRadicand` for negative operands.
    pub fn checked_sqrt(&self, scale: usize) -> NumericResult<Self> {
        if self.is_negative() {
            return Err(NumericError::NegativeRadicand);
        }

        let doubled = scale.saturating_mul(2);
        let radicand = if doubled >= self.scale() {
            self.coefficient().mul_pow10(doubled - self.scale())
        } else {
            self.coefficient().div_pow10(self.scale() - doubled)
        };

        Ok(Decimal::from_parts(radicand.isqrt(), scale, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_keeps_max_scale() {
        assert_eq!((&dec("1.5") + &dec("2.25")).to_string(), "3.75");
        assert_eq!((&dec("1.50") + &dec("2")).to_string(), "3.50");
        assert_eq!((&dec("999.999") + &dec("0.001")).to_string(), "1000.000");
    }

    #[test]
    fn test_add_mixed_signs() {
        assert_eq!((&dec("-1") + &dec("2")).to_string(), "1");
        assert_eq!((&dec("1") + &dec("-2")).to_string(), "-1");
        assert_eq!((&dec("-1.5") + &dec("-2.5")).to_string(), "-4.0");
        assert_eq!((&dec("-2.50") + &dec("2.5")).to_string(), "0.00");
    }

    #[test]
    fn test_sub() {
        assert_eq!((&dec("5") - &dec("3")).to_string(), "2");
        assert_eq!((&dec("3") - &dec("5")).to_string(), "-2");
        assert_eq!((&dec("-5") - &dec("-3")).to_string(), "-2");
        assert_eq!((&dec("1.0") - &dec("0.25")).to_string(), "0.75");
        assert_eq!((&dec("0") - &dec("0.0")).to_string(), "0.0");
    }

    #[test]
    fn test_mul_truncates() {
        assert_eq!(dec("1.99").mul_truncated(&dec("1.99"), 1).to_string(), "3.9");
        assert_eq!(dec("-1.99").mul_truncated(&dec("1.99"), 2).to_string(), "-3.96");
        assert_eq!(dec("2").mul_truncated(&dec("3"), 5).to_string(), "6");
        assert_eq!(dec("1.5").mul_truncated(&dec("2.0"), 5).to_string(), "3.00");
        assert_eq!(dec("-0.01").mul_truncated(&dec("0.1"), 2).to_string(), "0.00");
    }

    #[test]
    fn test_div() {
        assert_eq!(dec("1").checked_div(&dec("3"), 5).unwrap().to_string(), "0.33333");
        assert_eq!(dec("2").checked_div(&dec("3"), 3).unwrap().to_string(), "0.666");
        assert_eq!(dec("10").checked_div(&dec("4"), 0).unwrap().to_string(), "2");
        assert_eq!(dec("10").checked_div(&dec("4"), 3).unwrap().to_string(), "2.500");
        assert_eq!(dec("1.5").checked_div(&dec("0.05"), 0).unwrap().to_string(), "30");
    }

    #[test]
    fn test_div_signs_truncate_toward_zero() {
        assert_eq!(dec("-1").checked_div(&dec("3"), 2).unwrap().to_string(), "-0.33");
        assert_eq!(dec("1").checked_div(&dec("-3"), 2).unwrap().to_string(), "-0.33");
        assert_eq!(dec("-7").checked_div(&dec("-2"), 0).unwrap().to_string(), "3");
        assert_eq!(dec("-0.001").checked_div(&dec("1"), 2).unwrap().to_string(), "0.00");
    }

    #[test]
    fn test_div_by_zero() {
        assert_eq!(
            dec("10").checked_div(&dec("0"), 0),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(
            dec("10").checked_div(&dec("-0.000"), 4),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_rem() {
        assert_eq!(dec("10").checked_rem(&dec("3")).unwrap().to_string(), "1");
        assert_eq!(dec("-10").checked_rem(&dec("3")).unwrap().to_string(), "-1");
        assert_eq!(dec("10").checked_rem(&dec("-3")).unwrap().to_string(), "1");
        assert_eq!(dec("5.5").checked_rem(&dec("2")).unwrap().to_string(), "1.5");
        assert_eq!(dec("7").checked_rem(&dec("0.3")).unwrap().to_string(), "0.1");
        assert_eq!(dec("6").checked_rem(&dec("3")).unwrap().to_string(), "0");
        assert_eq!(
            dec("1").checked_rem(&dec("0.0")),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_div_rem() {
        let (q, r) = dec("-17.5").checked_div_rem(&dec("4")).unwrap();
        assert_eq!(q.to_string(), "-4");
        assert_eq!(r.to_string(), "-1.5");
    }

    #[test]
    fn test_pow() {
        assert_eq!(dec("2").checked_pow(&dec("10"), 0).unwrap().to_string(), "1024");
        assert_eq!(dec("-2").checked_pow(&dec("3"), 0).unwrap().to_string(), "-8");
        assert_eq!(dec("-2").checked_pow(&dec("4"), 0).unwrap().to_string(), "16");
        assert_eq!(dec("1.5").checked_pow(&dec("3"), 10).unwrap().to_string(), "3.375");
        assert_eq!(dec("1.5").checked_pow(&dec("3"), 2).unwrap().to_string(), "3.37");
        assert_eq!(dec("7").checked_pow(&dec("0"), 4).unwrap().to_string(), "1");
        assert_eq!(dec("0").checked_pow(&dec("0"), 0).unwrap().to_string(), "1");
    }

    #[test]
    fn test_pow_large() {
        let x = dec("2").checked_pow(&dec("128"), 0).unwrap();
        assert_eq!(x.to_string(), "340282366920938463463374607431768211456");
    }

    #[test]
    fn test_pow_invalid_exponent() {
        assert_eq!(
            dec("2").checked_pow(&dec("-1"), 0),
            Err(NumericError::NegativeExponent)
        );
        assert_eq!(
            dec("2").checked_pow(&dec("1.5"), 0),
            Err(NumericError::NonIntegerExponent)
        );
        assert_eq!(
            dec("2").checked_pow(&dec("2.0"), 0),
            Err(NumericError::NonIntegerExponent)
        );
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(dec("2").checked_sqrt(5).unwrap().to_string(), "1.41421");
        assert_eq!(dec("16").checked_sqrt(0).unwrap().to_string(), "4");
        assert_eq!(dec("0.25").checked_sqrt(1).unwrap().to_string(), "0.5");
        assert_eq!(dec("15.9999").checked_sqrt(0).unwrap().to_string(), "3");
        assert_eq!(dec("0").checked_sqrt(3).unwrap().to_string(), "0.000");
        assert_eq!(dec("-0.0").checked_sqrt(1).unwrap().to_string(), "0.0");
    }

    #[test]
    fn test_sqrt_negative() {
        assert_eq!(
            dec("-4").checked_sqrt(2),
            Err(NumericError::NegativeRadicand)
        );
    }
}
