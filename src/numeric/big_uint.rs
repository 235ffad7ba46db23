// ============================================================================
// Big-Integer Kernel
// Unsigned arbitrary-precision integers over base 10^9 limbs
// ============================================================================

use super::errors::{NumericError, NumericResult};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Write as _;
use std::ops::{Add, Mul, Sub};

/// Limb radix. A power of ten keeps decimal shifts and formatting cheap.
pub(crate) const BASE: u32 = 1_000_000_000;

/// Decimal digits held by one limb
pub(crate) const BASE_DIGITS: usize = 9;

const BASE64: u64 = BASE as u64;

/// Powers of ten below and including the radix
const POW10: [u32; BASE_DIGITS + 1] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

/// Two inline limbs cover every value below 10^36 without allocating.
type Limbs = SmallVec<[u32; 4]>;

/// Unsigned arbitrary-precision integer.
///
/// Limbs are stored little-endian in base 10^9. Every value is kept
/// normalized: the most significant limb is never zero and zero itself has
/// no limbs, so structural equality is numeric equality.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BigUint {
    limbs: Limbs,
}

impl BigUint {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Zero
    #[inline]
    pub fn zero() -> Self {
        Self {
            limbs: Limbs::new(),
        }
    }

    /// One
    #[inline]
    pub fn one() -> Self {
        Self::from_u64(1)
    }

    /// Create from a native unsigned integer.
    pub fn from_u64(mut value: u64) -> Self {
        let mut limbs = Limbs::new();
        while value > 0 {
            limbs.push((value % BASE64) as u32);
            value /= BASE64;
        }
        Self { limbs }
    }

    /// Create from a 128-bit unsigned integer.
    pub fn from_u128(mut value: u128) -> Self {
        let mut limbs = Limbs::new();
        while value > 0 {
            limbs.push((value % u128::from(BASE)) as u32);
            value /= u128::from(BASE);
        }
        Self { limbs }
    }

    /// Create from ASCII decimal digits, most significant first.
    ///
    /// The caller guarantees every byte is in `b'0'..=b'9'`. Leading zeros
    /// are accepted and normalized away.
    pub(crate) fn from_ascii_digits(digits: &[u8]) -> Self {
        debug_assert!(digits.iter().all(u8::is_ascii_digit));

        let mut limbs = Limbs::with_capacity(digits.len() / BASE_DIGITS + 1);
        for chunk in digits.rchunks(BASE_DIGITS) {
            let limb = chunk
                .iter()
                .fold(0u32, |acc, &d| acc * 10 + u32::from(d - b'0'));
            limbs.push(limb);
        }
        Self::from_limbs(limbs)
    }

    #[inline]
    fn from_limbs(limbs: Limbs) -> Self {
        let mut value = Self { limbs };
        value.normalize();
        value
    }

    #[inline]
    fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Check if value is odd.
    #[inline]
    pub fn is_odd(&self) -> bool {
        // BASE is even, so parity lives in the lowest limb
        self.limbs.first().is_some_and(|&l| l % 2 == 1)
    }

    /// Number of decimal digits in the canonical text (`0` has one digit).
    pub fn digit_count(&self) -> usize {
        match self.limbs.last() {
            None => 1,
            Some(&top) => (self.limbs.len() - 1) * BASE_DIGITS + limb_digit_count(top),
        }
    }

    /// Convert to `u64` if the value fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.limbs.iter().rev().try_fold(0u64, |acc, &l| {
            acc.checked_mul(BASE64)?.checked_add(u64::from(l))
        })
    }

    /// Convert to `u128` if the value fits.
    pub fn to_u128(&self) -> Option<u128> {
        self.limbs.iter().rev().try_fold(0u128, |acc, &l| {
            acc.checked_mul(u128::from(BASE))?
                .checked_add(u128::from(l))
        })
    }

    // ========================================================================
    // Single-limb Operations
    // ========================================================================

    /// Multiply by a single limb-sized factor.
    pub fn mul_small(&self, factor: u32) -> Self {
        if factor == 0 || self.is_zero() {
            return Self::zero();
        }

        let mut limbs = Limbs::with_capacity(self.limbs.len() + 1);
        let mut carry = 0u64;
        for &l in &self.limbs {
            let t = u64::from(l) * u64::from(factor) + carry;
            limbs.push((t % BASE64) as u32);
            carry = t / BASE64;
        }
        while carry > 0 {
            limbs.push((carry % BASE64) as u32);
            carry /= BASE64;
        }
        Self::from_limbs(limbs)
    }

    /// Divide by a non-zero single limb-sized divisor, returning the
    /// quotient and remainder.
    pub fn div_rem_small(&self, divisor: u32) -> (Self, u32) {
        debug_assert!(divisor != 0, "BigUint division by zero limb");

        let mut limbs = Limbs::from_elem(0, self.limbs.len());
        let mut rem = 0u64;
        for (i, &l) in self.limbs.iter().enumerate().rev() {
            let cur = rem * BASE64 + u64::from(l);
            limbs[i] = (cur / u64::from(divisor)) as u32;
            rem = cur % u64::from(divisor);
        }
        (Self::from_limbs(limbs), rem as u32)
    }

    // ========================================================================
    // Decimal Shifts
    // ========================================================================

    /// Multiply by `10^exp`.
    pub fn mul_pow10(&self, exp: usize) -> Self {
        if exp == 0 || self.is_zero() {
            return self.clone();
        }

        let shifted = match exp % BASE_DIGITS {
            0 => self.clone(),
            digits => self.mul_small(POW10[digits]),
        };

        let whole = exp / BASE_DIGITS;
        let mut limbs = Limbs::with_capacity(shifted.limbs.len() + whole);
        limbs.extend(std::iter::repeat(0).take(whole));
        limbs.extend_from_slice(&shifted.limbs);
        Self { limbs }
    }

    /// Divide by `10^exp`, discarding the remainder (truncation).
    pub fn div_pow10(&self, exp: usize) -> Self {
        let whole = exp / BASE_DIGITS;
        if whole >= self.limbs.len() {
            return Self::zero();
        }

        let dropped = Self {
            limbs: Limbs::from_slice(&self.limbs[whole..]),
        };
        match exp % BASE_DIGITS {
            0 => dropped,
            digits => dropped.div_rem_small(POW10[digits]).0,
        }
    }

    // ========================================================================
    // Division
    // ========================================================================

    /// Long division returning `(quotient, remainder)`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> NumericResult<(Self, Self)> {
        if divisor.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(self.div_rem_nonzero(divisor))
    }

    fn div_rem_nonzero(&self, divisor: &Self) -> (Self, Self) {
        if self < divisor {
            return (Self::zero(), self.clone());
        }
        if divisor.limbs.len() == 1 {
            let (q, r) = self.div_rem_small(divisor.limbs[0]);
            return (q, Self::from_u64(u64::from(r)));
        }
        self.div_rem_knuth(divisor)
    }

    /// Knuth, TAOCP vol. 2, 4.3.1 Algorithm D, in base 10^9.
    ///
    /// Requires `divisor` to have at least two limbs and `self >= divisor`.
    fn div_rem_knuth(&self, divisor: &Self) -> (Self, Self) {
        let n = divisor.limbs.len();
        let m = self.limbs.len() - n;

        // Scale so the top divisor limb is at least BASE / 2
        let factor = BASE / (divisor.limbs[n - 1] + 1);
        let v = divisor.mul_small(factor).limbs;
        let mut u: Vec<u32> = self.mul_small(factor).limbs.into_vec();
        u.resize(self.limbs.len() + 1, 0);

        let v_top = u64::from(v[n - 1]);
        let v_next = u64::from(v[n - 2]);
        let mut quotient = vec![0u32; m + 1];

        for j in (0..=m).rev() {
            let numerator = u64::from(u[j + n]) * BASE64 + u64::from(u[j + n - 1]);
            let mut qhat = numerator / v_top;
            let mut rhat = numerator % v_top;

            while qhat >= BASE64 || qhat * v_next > rhat * BASE64 + u64::from(u[j + n - 2]) {
                qhat -= 1;
                rhat += v_top;
                if rhat >= BASE64 {
                    break;
                }
            }

            // u[j..=j+n] -= qhat * v
            let mut borrow = 0i64;
            let mut carry = 0u64;
            for i in 0..n {
                let p = qhat * u64::from(v[i]) + carry;
                carry = p / BASE64;
                let t = i64::from(u[i + j]) - (p % BASE64) as i64 - borrow;
                if t < 0 {
                    u[i + j] = (t + BASE64 as i64) as u32;
                    borrow = 1;
                } else {
                    u[i + j] = t as u32;
                    borrow = 0;
                }
            }
            let t = i64::from(u[j + n]) - carry as i64 - borrow;

            if t < 0 {
                // qhat was one too large: add the divisor back
                u[j + n] = (t + BASE64 as i64) as u32;
                qhat -= 1;
                let mut carry = 0u32;
                for i in 0..n {
                    let s = u[i + j] + v[i] + carry;
                    if s >= BASE {
                        u[i + j] = s - BASE;
                        carry = 1;
                    } else {
                        u[i + j] = s;
                        carry = 0;
                    }
                }
                u[j + n] = (u[j + n] + carry) % BASE;
            } else {
                u[j + n] = t as u32;
            }

            quotient[j] = qhat as u32;
        }

        let (remainder, _) = Self::from_limbs(Limbs::from_slice(&u[..n])).div_rem_small(factor);
        (Self::from_limbs(Limbs::from_vec(quotient)), remainder)
    }

    // ========================================================================
    // Roots
    // ========================================================================

    /// Integer square root: the largest `r` with `r * r <= self`.
    pub fn isqrt(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }

        // 10^ceil(d/2) is strictly above the root; Newton descends from there
        let mut x = Self::one().mul_pow10(self.digit_count().div_ceil(2));
        loop {
            let (q, _) = self.div_rem_nonzero(&x);
            let (y, _) = (&x + &q).div_rem_small(2);
            if y >= x {
                return x;
            }
            x = y;
        }
    }
}

#[inline]
fn limb_digit_count(mut limb: u32) -> usize {
    let mut digits = 1;
    while limb >= 10 {
        limb /= 10;
        digits += 1;
    }
    digits
}

// ============================================================================
// Arithmetic Traits
// ============================================================================

impl Add for &BigUint {
    type Output = BigUint;

    fn add(self, rhs: Self) -> BigUint {
        let (long, short) = if self.limbs.len() >= rhs.limbs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };

        let mut limbs = Limbs::with_capacity(long.limbs.len() + 1);
        let mut carry = 0u32;
        for (i, &l) in long.limbs.iter().enumerate() {
            let s = l + short.limbs.get(i).copied().unwrap_or(0) + carry;
            if s >= BASE {
                limbs.push(s - BASE);
                carry = 1;
            } else {
                limbs.push(s);
                carry = 0;
            }
        }
        if carry > 0 {
            limbs.push(carry);
        }
        BigUint::from_limbs(limbs)
    }
}

/// Subtraction requires `self >= rhs`; callers compare first.
impl Sub for &BigUint {
    type Output = BigUint;

    fn sub(self, rhs: Self) -> BigUint {
        debug_assert!(self >= rhs, "BigUint subtraction underflow");

        let mut limbs = Limbs::with_capacity(self.limbs.len());
        let mut borrow = 0u32;
        for (i, &l) in self.limbs.iter().enumerate() {
            let r = rhs.limbs.get(i).copied().unwrap_or(0) + borrow;
            if l >= r {
                limbs.push(l - r);
                borrow = 0;
            } else {
                limbs.push(l + BASE - r);
                borrow = 1;
            }
        }
        BigUint::from_limbs(limbs)
    }
}

/// Schoolbook multiplication with 64-bit accumulators.
impl Mul for &BigUint {
    type Output = BigUint;

    fn mul(self, rhs: Self) -> BigUint {
        if self.is_zero() || rhs.is_zero() {
            return BigUint::zero();
        }

        let mut acc = vec![0u64; self.limbs.len() + rhs.limbs.len()];
        for (i, &a) in self.limbs.iter().enumerate() {
            let mut carry = 0u64;
            for (j, &b) in rhs.limbs.iter().enumerate() {
                let t = acc[i + j] + u64::from(a) * u64::from(b) + carry;
                acc[i + j] = t % BASE64;
                carry = t / BASE64;
            }
            let mut k = i + rhs.limbs.len();
            while carry > 0 {
                let t = acc[k] + carry;
                acc[k] = t % BASE64;
                carry = t / BASE64;
                k += 1;
            }
        }
        BigUint::from_limbs(acc.into_iter().map(|l| l as u32).collect())
    }
}

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.limbs
            .len()
            .cmp(&other.limbs.len())
            .then_with(|| self.limbs.iter().rev().cmp(other.limbs.iter().rev()))
    }
}

impl PartialOrd for BigUint {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for BigUint {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut limbs = self.limbs.iter().rev();
        let Some(top) = limbs.next() else {
            return f.pad("0");
        };

        let mut text = String::with_capacity(self.limbs.len() * BASE_DIGITS);
        write!(text, "{}", top)?;
        for limb in limbs {
            write!(text, "{:09}", limb)?;
        }
        f.pad(&text)
    }
}

impl fmt::Debug for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigUint({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(digits: &str) -> BigUint {
        BigUint::from_ascii_digits(digits.as_bytes())
    }

    #[test]
    fn test_from_digits_normalizes() {
        assert_eq!(big("0000").to_string(), "0");
        assert!(big("000").is_zero());
        assert_eq!(big("000123").to_string(), "123");
        assert_eq!(
            big("1234567890123456789").to_string(),
            "1234567890123456789"
        );
        assert_eq!(big("1000000000").to_string(), "1000000000");
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(BigUint::zero().digit_count(), 1);
        assert_eq!(big("9").digit_count(), 1);
        assert_eq!(big("999999999").digit_count(), 9);
        assert_eq!(big("1000000000").digit_count(), 10);
    }

    #[test]
    fn test_add_carries_across_limbs() {
        let a = big("999999999999999999");
        let b = big("1");
        assert_eq!((&a + &b).to_string(), "1000000000000000000");
        assert_eq!((&b + &a).to_string(), "1000000000000000000");
    }

    #[test]
    fn test_sub_borrows_across_limbs() {
        let a = big("1000000000000000000");
        let b = big("1");
        assert_eq!((&a - &b).to_string(), "999999999999999999");
        assert!((&a - &a).is_zero());
    }

    #[test]
    fn test_mul() {
        let a = big("123456789012345678901234567890");
        let b = big("987654321098765432109876543210");
        assert_eq!(
            (&a * &b).to_string(),
            "121932631137021795226185032733622923332237463801111263526900"
        );
        assert!((&a * &BigUint::zero()).is_zero());
    }

    #[test]
    fn test_cmp() {
        assert!(big("1000000000") > big("999999999"));
        assert!(big("123") < big("124"));
        assert_eq!(big("0042").cmp(&big("42")), Ordering::Equal);
    }

    #[test]
    fn test_div_rem_small_divisor() {
        let (q, r) = big("1000000000000000000007").div_rem(&big("10")).unwrap();
        assert_eq!(q.to_string(), "100000000000000000000");
        assert_eq!(r.to_string(), "7");
    }

    #[test]
    fn test_div_rem_multi_limb() {
        let n = big("121932631137021795226185032733622923332237463801111263526907");
        let d = big("987654321098765432109876543210");
        let (q, r) = n.div_rem(&d).unwrap();
        assert_eq!(q.to_string(), "123456789012345678901234567890");
        assert_eq!(r.to_string(), "7");
    }

    #[test]
    fn test_div_rem_identity() {
        let cases = [
            ("99999999999999999999999999999999999", "99999999999999999"),
            ("100000000000000000000000000000000000", "999999999000000001"),
            ("340282366920938463463374607431768211455", "18446744073709551616"),
            ("5000000000000000000000000", "5000000000"),
            ("1000000000000000000", "1000000000000000000"),
        ];
        for (n, d) in cases {
            let n = big(n);
            let d = big(d);
            let (q, r) = n.div_rem(&d).unwrap();
            assert!(r < d, "remainder not reduced for {} / {}", n, d);
            assert_eq!(&(&q * &d) + &r, n);
        }
    }

    #[test]
    fn test_div_rem_by_zero() {
        assert_eq!(
            big("5").div_rem(&BigUint::zero()),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_decimal_shifts() {
        let x = big("123456789");
        assert_eq!(x.mul_pow10(3).to_string(), "123456789000");
        assert_eq!(x.mul_pow10(9).to_string(), "123456789000000000");
        assert_eq!(x.mul_pow10(12).div_pow10(12), x);
        assert_eq!(x.div_pow10(4).to_string(), "12345");
        assert_eq!(x.div_pow10(9), BigUint::zero());
        assert_eq!(big("1234567890123").div_pow10(10).to_string(), "123");
    }

    #[test]
    fn test_isqrt() {
        assert_eq!(big("0").isqrt(), BigUint::zero());
        assert_eq!(big("1").isqrt().to_string(), "1");
        assert_eq!(big("15").isqrt().to_string(), "3");
        assert_eq!(big("16").isqrt().to_string(), "4");
        assert_eq!(big("200000000000").isqrt().to_string(), "447213");
        assert_eq!(
            big("2000000000000000000000000000000000000000").isqrt().to_string(),
            "44721359549995793928"
        );
    }

    #[test]
    fn test_native_conversions() {
        assert_eq!(BigUint::from_u64(u64::MAX).to_u64(), Some(u64::MAX));
        assert_eq!(BigUint::from_u128(u128::MAX).to_u128(), Some(u128::MAX));
        assert_eq!(BigUint::from_u128(u128::MAX).to_u64(), None);
        assert_eq!(BigUint::zero().to_u64(), Some(0));
    }

    #[test]
    fn test_parity() {
        assert!(big("1000000001").is_odd());
        assert!(!big("1000000000").is_odd());
        assert!(!BigUint::zero().is_odd());
    }
}
