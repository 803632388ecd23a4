//! Math utilities: checked arithmetic, ray fixed point and fee helpers
//!
//! All helpers return `Option` and never panic; contracts map `None` to
//! their own overflow error code.

/// Ray fixed-point scale (10^27). Per-year rates are expressed in ray.
pub const RAY: i128 = 1_000_000_000_000_000_000_000_000_000;

/// Basis-point denominator.
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Checked arithmetic over i128
pub struct SafeMath;

impl SafeMath {
    /// Add two i128 values, `None` on overflow
    pub fn add(a: i128, b: i128) -> Option<i128> {
        a.checked_add(b)
    }

    /// Subtract two i128 values, `None` on overflow
    pub fn sub(a: i128, b: i128) -> Option<i128> {
        a.checked_sub(b)
    }

    /// Multiply two i128 values, `None` on overflow
    pub fn mul(a: i128, b: i128) -> Option<i128> {
        a.checked_mul(b)
    }

    /// Divide two i128 values, `None` on division by zero
    pub fn div(a: i128, b: i128) -> Option<i128> {
        a.checked_div(b)
    }

    /// Calculate a basis-point share: (value * bps) / 10_000
    ///
    /// Returns `None` if `bps` exceeds 10_000 or the product overflows.
    pub fn bps(value: i128, bps: u32) -> Option<i128> {
        if i128::from(bps) > BPS_DENOMINATOR {
            return None;
        }
        Self::div(Self::mul(value, bps as i128)?, BPS_DENOMINATOR)
    }

    /// Calculate a percentage: (value * percent) / 100
    ///
    /// Returns `None` if `percent` exceeds 100 or the product overflows.
    pub fn percent(value: i128, percent: u32) -> Option<i128> {
        if percent > 100 {
            return None;
        }
        Self::div(Self::mul(value, percent as i128)?, 100)
    }
}

/// Ray (10^27) fixed-point operations
pub struct Ray;

impl Ray {
    /// Multiply an integer amount by a ray-scaled factor: (a * b) / RAY
    ///
    /// Rounds toward zero, so interest computed per lender never exceeds
    /// the interest computed on the pooled principal.
    pub fn mul(a: i128, b: i128) -> Option<i128> {
        SafeMath::div(SafeMath::mul(a, b)?, RAY)
    }

    /// A ray-scaled rate from a percentage, e.g. `from_percent(10)` = 10%/year
    pub fn from_percent(percent: u32) -> i128 {
        RAY / 100 * percent as i128
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_add() {
        assert_eq!(SafeMath::add(100, 50), Some(150));
        assert_eq!(SafeMath::add(i128::MAX, 1), None);
    }

    #[test]
    fn test_safe_sub() {
        assert_eq!(SafeMath::sub(100, 50), Some(50));
        assert_eq!(SafeMath::sub(i128::MIN, 1), None);
    }

    #[test]
    fn test_safe_mul() {
        assert_eq!(SafeMath::mul(10, 5), Some(50));
        assert_eq!(SafeMath::mul(i128::MAX, 2), None);
    }

    #[test]
    fn test_safe_div() {
        assert_eq!(SafeMath::div(100, 5), Some(20));
        assert_eq!(SafeMath::div(100, 0), None);
    }

    #[test]
    fn test_bps() {
        assert_eq!(SafeMath::bps(10_000, 100), Some(100)); // 1%
        assert_eq!(SafeMath::bps(700, 100), Some(7));
        assert_eq!(SafeMath::bps(1000, 10_000), Some(1000)); // 100%
        assert_eq!(SafeMath::bps(1000, 10_001), None);
    }

    #[test]
    fn test_percent() {
        assert_eq!(SafeMath::percent(1000, 10), Some(100));
        assert_eq!(SafeMath::percent(7, 20), Some(1)); // floor
        assert_eq!(SafeMath::percent(1000, 101), None);
    }

    #[test]
    fn test_ray_mul() {
        // 700 * 10% = 70
        assert_eq!(Ray::mul(700, RAY / 10), Some(70));
        // zero factor
        assert_eq!(Ray::mul(700, 0), Some(0));
        // full ray is identity
        assert_eq!(Ray::mul(12_345, RAY), Some(12_345));
    }

    #[test]
    fn test_ray_mul_floors() {
        // 1/3 in ray times 100 floors to 33
        assert_eq!(Ray::mul(100, RAY / 3), Some(33));
    }

    #[test]
    fn test_ray_from_percent() {
        assert_eq!(Ray::from_percent(100), RAY);
        assert_eq!(Ray::from_percent(10), RAY / 10);
        assert_eq!(Ray::from_percent(0), 0);
    }

    #[test]
    fn test_ray_mul_overflow() {
        assert_eq!(Ray::mul(i128::MAX, 2), None);
    }
}
