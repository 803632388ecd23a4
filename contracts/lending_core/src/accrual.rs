//! Piecewise simple-interest accrual in ray fixed point.
//!
//! The same function prices the borrower's repayment (evaluated at the
//! repayment time) and each lender's payout (evaluated at the timestamp
//! frozen by `repay`). Interest is linear in both elapsed time and
//! principal, so the borrower's payment always covers the sum of lender
//! payouts; floor rounding leaves the residue with the pool.

use shared_utils::{Ray, SafeMath, SECONDS_PER_YEAR};

/// Total amount due on `principal` at time `at`.
///
/// Three accrual regimes, all simple (non-compounding) interest:
/// - up to `end_time`: `borrow_rate` over elapsed time,
/// - within `late_period` past `end_time`: term interest plus
///   `penalty_rate_1` over the overshoot,
/// - beyond the late period: both penalties stacked, `penalty_rate_2`
///   over the time past the grace window.
///
/// Evaluation before `start_time` clamps to `start_time` (zero interest).
/// Returns `None` on arithmetic overflow.
#[allow(clippy::too_many_arguments)]
pub fn amount_due(
    principal: i128,
    start_time: u64,
    end_time: u64,
    borrow_rate: i128,
    late_period: u64,
    penalty_rate_1: i128,
    penalty_rate_2: i128,
    at: u64,
) -> Option<i128> {
    let at = at.max(start_time);
    let grace_end = end_time.saturating_add(late_period);

    // rate * seconds, accumulated piecewise, still ray-scaled
    let rate_time = if at <= end_time {
        SafeMath::mul(borrow_rate, (at - start_time) as i128)?
    } else if at <= grace_end {
        let term = SafeMath::mul(borrow_rate, (end_time - start_time) as i128)?;
        let late = SafeMath::mul(penalty_rate_1, (at - end_time) as i128)?;
        SafeMath::add(term, late)?
    } else {
        let term = SafeMath::mul(borrow_rate, (end_time - start_time) as i128)?;
        let grace = SafeMath::mul(penalty_rate_1, late_period as i128)?;
        let overdue = SafeMath::mul(penalty_rate_2, (at - grace_end) as i128)?;
        SafeMath::add(SafeMath::add(term, grace)?, overdue)?
    };

    let rate_fraction = SafeMath::div(rate_time, SECONDS_PER_YEAR as i128)?;
    let interest = Ray::mul(principal, rate_fraction)?;
    SafeMath::add(principal, interest)
}
