//! Validation predicates for common input checks
//!
//! These are plain predicates rather than panicking guards; contracts turn
//! a `false` into the appropriate typed error.

/// Validation utility functions
pub struct Validation;

impl Validation {
    /// An amount usable for funding or settlement must be strictly positive
    pub fn is_positive(amount: i128) -> bool {
        amount > 0
    }

    /// A percentage proportion must be between 0 and 100
    pub fn valid_percent(percent: u32) -> bool {
        percent <= 100
    }

    /// A fee in basis points must not exceed 10_000 (100%)
    pub fn valid_bps(bps: u32) -> bool {
        bps <= 10_000
    }

    /// A funding/term window must close strictly after it opens
    pub fn valid_window(start_time: u64, end_time: u64) -> bool {
        end_time > start_time
    }
}
