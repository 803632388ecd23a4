//! Time utilities for timestamp and duration calculations

use soroban_sdk::Env;

/// Seconds in the 365-day year used for interest accrual.
pub const SECONDS_PER_YEAR: u64 = 365 * 24 * 60 * 60;

/// Time utility functions for working with timestamps and durations
pub struct TimeUtils;

impl TimeUtils {
    /// Get the current ledger timestamp
    pub fn now(e: &Env) -> u64 {
        e.ledger().timestamp()
    }

    /// Convert days to seconds
    pub fn days_to_seconds(days: u32) -> u64 {
        days as u64 * 24 * 60 * 60
    }

    /// Calculate elapsed time since a timestamp (0 if in the future)
    pub fn elapsed(e: &Env, start_time: u64) -> u64 {
        Self::now(e).saturating_sub(start_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Ledger;

    #[test]
    fn test_seconds_per_year() {
        assert_eq!(SECONDS_PER_YEAR, 31_536_000);
    }

    #[test]
    fn test_days_to_seconds() {
        assert_eq!(TimeUtils::days_to_seconds(1), 86400);
        assert_eq!(TimeUtils::days_to_seconds(365), SECONDS_PER_YEAR);
    }

    #[test]
    fn test_elapsed() {
        let env = Env::default();
        env.ledger().with_mut(|l| {
            l.timestamp = 2000;
        });

        assert_eq!(TimeUtils::elapsed(&env, 1000), 1000);
        assert_eq!(TimeUtils::elapsed(&env, 3000), 0);
    }
}
