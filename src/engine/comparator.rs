// ============================================================================
// Comparator
// Scale-aligned three-way comparison of decimals
// ============================================================================

use crate::numeric::Decimal;
use std::cmp::Ordering;

impl Decimal {
    /// Exact three-way comparison.
    ///
    /// Both operands are aligned to the larger scale by zero-padding, so the
    /// result never depends on how many trailing zeros either side carries.
    pub fn compare(&self, other: &Self) -> Ordering {
        match self.signum().cmp(&other.signum()) {
            Ordering::Equal => {},
            unequal => return unequal,
        }
        if self.is_zero() {
            return Ordering::Equal;
        }

        let magnitude = if self.scale() == other.scale() {
            self.coefficient().cmp(other.coefficient())
        } else {
            let scale = self.scale().max(other.scale());
            self.coefficient_at(scale).cmp(&other.coefficient_at(scale))
        };

        if self.is_negative() {
            magnitude.reverse()
        } else {
            magnitude
        }
    }

    /// Compare after truncating both operands to `scale` fraction digits.
    ///
    /// Digits beyond `scale` are ignored, never rounded, so `1.009` and
    /// `1.001` are equal at scale 2 and `-0.001` equals zero at scale 2.
    pub fn compare_at(&self, other: &Self, scale: usize) -> Ordering {
        self.rescale(scale).compare(&other.rescale(scale))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for Decimal {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for Decimal {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}
