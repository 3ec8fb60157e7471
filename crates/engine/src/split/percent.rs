//! Fixed amount totals and percentage to cents conversion.

use crate::{Allocation, EngineError, ResultEngine};

use super::categorize::Categorized;

/// Slack allowed on the percentage sum to absorb floating-point summation
/// error (e.g. `33.33 + 33.33 + 33.34`).
pub(crate) const PERCENT_TOLERANCE: f64 = 1e-6;

/// Output of the percentage stage.
#[derive(Debug, PartialEq)]
pub(crate) struct PercentAllocated {
    pub fixed_cents: i64,
    /// One entry per percentage member, in input order.
    pub percent: Vec<Allocation>,
    /// `total - fixed - percent`; negative when rounding overshot the total.
    pub remaining: i64,
}

pub(crate) fn allocate(total_cents: i64, groups: &Categorized) -> ResultEngine<PercentAllocated> {
    let fixed_cents = groups
        .fixed
        .iter()
        .try_fold(0i64, |acc, member| acc.checked_add(member.amount_cents))
        .ok_or_else(|| EngineError::InvalidInput("sum of fixed amounts overflows".to_string()))?;
    if fixed_cents > total_cents {
        return Err(EngineError::OverAllocation(format!(
            "sum of fixed amounts ({fixed_cents}) exceeds total ({total_cents})"
        )));
    }

    let percent_sum: f64 = groups.percent.iter().map(|member| member.percent).sum();
    if percent_sum > 100.0 + PERCENT_TOLERANCE {
        return Err(EngineError::OverPercentage(format!(
            "sum of percentages ({percent_sum}) exceeds 100%"
        )));
    }

    let percent: Vec<Allocation> = groups
        .percent
        .iter()
        .map(|member| Allocation::new(member.user_id, percent_to_cents(total_cents, member.percent)))
        .collect();

    Ok(PercentAllocated {
        fixed_cents,
        remaining: remaining_cents(total_cents, fixed_cents, &percent)?,
        percent,
    })
}

/// `total - fixed - Σpercent`, failing with
/// [`EngineError::InvalidInput`] instead of overflowing.
///
/// Totals close to `i64::MAX` round up to `2^63` once converted to `f64`, so
/// percentage shares alone can add up past the integer range.
pub(crate) fn remaining_cents(
    total_cents: i64,
    fixed_cents: i64,
    percent: &[Allocation],
) -> ResultEngine<i64> {
    let overflow = || {
        EngineError::InvalidInput(format!(
            "percentage shares of total ({total_cents}) overflow the cents range"
        ))
    };

    let percent_cents = percent
        .iter()
        .try_fold(0i64, |acc, allocation| acc.checked_add(allocation.amount_cents))
        .ok_or_else(overflow)?;
    total_cents
        .checked_sub(fixed_cents)
        .and_then(|rest| rest.checked_sub(percent_cents))
        .ok_or_else(overflow)
}

/// `total * percent / 100`, rounded to the nearest cent with ties to even.
///
/// The factor is computed as `percent / 100` first so that results match the
/// reference allocations bit for bit.
pub(crate) fn percent_to_cents(total_cents: i64, percent: f64) -> i64 {
    (total_cents as f64 * (percent / 100.0)).round_ties_even() as i64
}
