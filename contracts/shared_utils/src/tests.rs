//! Integration tests for shared utilities

#[cfg(test)]
mod integration_tests {
    use crate::math::{Ray, SafeMath, RAY};
    use crate::time::{TimeUtils, SECONDS_PER_YEAR};
    use crate::validation::Validation;
    use soroban_sdk::{testutils::Ledger, Env};

    #[test]
    fn test_math_and_validation_integration() {
        let amount = 1000i128;
        assert!(Validation::is_positive(amount));

        let fee = SafeMath::bps(amount, 250).unwrap();
        assert_eq!(fee, 25);

        assert!(Validation::valid_bps(250));
        let admin_share = SafeMath::percent(fee, 20).unwrap();
        assert_eq!(admin_share, 5);
    }

    #[test]
    fn test_ray_rate_over_full_year() {
        // one year at 10%/year works out to exactly 10% of principal
        let rate = Ray::from_percent(10);
        let rate_time = SafeMath::mul(rate, SECONDS_PER_YEAR as i128).unwrap();
        let fraction = SafeMath::div(rate_time, SECONDS_PER_YEAR as i128).unwrap();
        assert_eq!(fraction, RAY / 10);
        assert_eq!(Ray::mul(1000, fraction), Some(100));
    }

    #[test]
    fn test_time_window_checks() {
        let env = Env::default();
        env.ledger().with_mut(|l| {
            l.timestamp = 1000;
        });

        let start = TimeUtils::now(&env) + TimeUtils::days_to_seconds(1);
        let end = start + TimeUtils::days_to_seconds(30);
        assert!(Validation::valid_window(start, end));
        assert_eq!(TimeUtils::elapsed(&env, start), 0);
    }
}
