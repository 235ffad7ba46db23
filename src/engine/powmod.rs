// ============================================================================
// Modular Exponentiation
// Binary square-and-multiply with reduction after every product
// ============================================================================

use super::arithmetic::check_exponent;
use crate::numeric::{BigUint, Decimal, NumericError, NumericResult};

impl Decimal {
    /// `self^exponent mod modulus` over integers, returned at scale 0.
    ///
    /// Intermediate products are reduced after each step, so the working
    /// size stays bounded by the modulus no matter how large the exponent
    /// is. The remainder follows truncated division: it is negative only
    /// when the base is negative and the exponent odd. The modulus sign is
    /// irrelevant.
    ///
    /// # Errors
    /// - `NonIntegerOperand` if the base or modulus has a non-zero scale
    /// - `NonIntegerExponent` / `NegativeExponent` for a bad exponent
    /// - `DivisionByZero` if the modulus is zero
    pub fn checked_powmod(&self, exponent: &Self, modulus: &Self) -> NumericResult<Self> {
        if self.scale() != 0 {
            return Err(NumericError::NonIntegerOperand);
        }
        check_exponent(exponent)?;
        if modulus.scale() != 0 {
            return Err(NumericError::NonIntegerOperand);
        }
        if modulus.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        let m = modulus.coefficient();
        let reduce = |value: &BigUint| value.div_rem(m).map(|(_, r)| r);

        let mut result = reduce(&BigUint::one())?;
        let mut square = reduce(self.coefficient())?;
        let mut remaining = exponent.coefficient().clone();

        while !remaining.is_zero() {
            if remaining.is_odd() {
                result = reduce(&(&result * &square))?;
            }
            remaining = remaining.div_rem_small(2).0;
            if !remaining.is_zero() {
                square = reduce(&(&square * &square))?;
            }
        }

        let negative = self.is_negative() && exponent.coefficient().is_odd();
        Ok(Decimal::from_parts(result, 0, negative))
    }
}
