//! Rounding reconciliation and remainder distribution.
//!
//! Both passes depend on `slice::sort_by` being stable: members with equal
//! amounts must keep the order they had before sorting, otherwise tie
//! breaks stop being reproducible. Do not switch to `sort_unstable_by`.

use std::cmp::Reverse;

use crate::{Allocation, EngineError, ResultEngine, UserId};

use super::{
    categorize::Categorized,
    percent::{PercentAllocated, remaining_cents},
};

/// Produces one allocation per categorized member, summing to `total_cents`.
///
/// Order of the returned vector: fixed members, then percentage members, then
/// unspecified members, unless the round-robin pass re-sorted everything.
pub(crate) fn reconcile(
    total_cents: i64,
    groups: &Categorized,
    allocated: PercentAllocated,
) -> ResultEngine<Vec<Allocation>> {
    let PercentAllocated {
        fixed_cents,
        mut percent,
        mut remaining,
    } = allocated;

    if remaining < 0 {
        let deficit = -remaining;
        tracing::debug!(deficit, "percentage rounding overshot the total");
        absorb_deficit(&mut percent, deficit)?;
        remaining = remaining_cents(total_cents, fixed_cents, &percent)?;
    }

    let mut result: Vec<Allocation> = groups
        .fixed
        .iter()
        .map(|member| Allocation::new(member.user_id, member.amount_cents))
        .chain(percent)
        .collect();

    if groups.unspecified.is_empty() {
        spread_leftover(&mut result, remaining)?;
    } else {
        result.extend(share_remainder(remaining, &groups.unspecified)?);
    }

    Ok(result)
}

/// Takes `deficit` cents back from percentage allocations, largest first.
///
/// Leaves `percent` sorted by amount descending (ties in prior order).
pub(crate) fn absorb_deficit(percent: &mut [Allocation], mut deficit: i64) -> ResultEngine<()> {
    percent.sort_by_key(|a| Reverse(a.amount_cents));

    for allocation in percent.iter_mut() {
        if deficit <= 0 {
            break;
        }
        let take = deficit.min(allocation.amount_cents.max(0));
        allocation.amount_cents -= take;
        deficit -= take;
    }

    if deficit > 0 {
        return Err(EngineError::RoundingUnreconcilable(format!(
            "unable to take back {deficit} cents of rounding overshoot from percentage allocations"
        )));
    }
    Ok(())
}

/// Equal split of `remaining` among unspecified members.
///
/// The first `remaining % n` members, in input order, get one extra cent.
pub(crate) fn share_remainder(
    remaining: i64,
    unspecified: &[UserId],
) -> ResultEngine<Vec<Allocation>> {
    if remaining < 0 {
        return Err(EngineError::NegativeRemainder(format!(
            "remainder is {remaining} when allocating to unspecified members"
        )));
    }

    let n = unspecified.len() as i64;
    let base = remaining / n;
    let extra = remaining % n;

    Ok(unspecified
        .iter()
        .zip(0i64..)
        .map(|(&user_id, index)| Allocation::new(user_id, base + i64::from(index < extra)))
        .collect())
}

/// Gives leftover cents to the largest shares, one cent at a time,
/// round-robin from the largest.
///
/// `result` is re-sorted by amount descending when there is something to
/// spread. Going around the circle `k` full times plus a partial lap is the
/// same as giving everyone `k` and the first `leftover % len` one more, which
/// is how it is computed.
pub(crate) fn spread_leftover(result: &mut [Allocation], leftover: i64) -> ResultEngine<()> {
    if leftover < 0 {
        return Err(EngineError::NegativeRemainder(format!(
            "final remainder is {leftover}"
        )));
    }
    if leftover == 0 {
        return Ok(());
    }
    if result.is_empty() {
        return Err(EngineError::NoMembersForRemainder(format!(
            "{leftover} cents left but no members to assign them to"
        )));
    }

    tracing::trace!(leftover, members = result.len(), "spreading leftover cents");
    result.sort_by_key(|a| Reverse(a.amount_cents));

    let len = result.len() as i64;
    let laps = leftover / len;
    let partial = leftover % len;
    for (allocation, index) in result.iter_mut().zip(0i64..) {
        allocation.amount_cents += laps + i64::from(index < partial);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::categorize::{FixedMember, PercentMember};

    fn amounts(allocations: &[Allocation]) -> Vec<(UserId, i64)> {
        allocations
            .iter()
            .map(|a| (a.user_id, a.amount_cents))
            .collect()
    }

    #[test]
    fn deficit_comes_from_largest_first() {
        let mut percent = vec![
            Allocation::new(1, 10),
            Allocation::new(2, 30),
            Allocation::new(3, 20),
        ];
        absorb_deficit(&mut percent, 2).unwrap();
        assert_eq!(amounts(&percent), vec![(2, 28), (3, 20), (1, 10)]);
    }

    #[test]
    fn deficit_ties_keep_prior_order() {
        let mut percent = vec![
            Allocation::new(7, 4),
            Allocation::new(3, 4),
            Allocation::new(5, 4),
        ];
        absorb_deficit(&mut percent, 1).unwrap();
        assert_eq!(amounts(&percent), vec![(7, 3), (3, 4), (5, 4)]);
    }

    #[test]
    fn deficit_spills_over_to_next_allocation() {
        let mut percent = vec![Allocation::new(1, 2), Allocation::new(2, 1)];
        absorb_deficit(&mut percent, 3).unwrap();
        assert_eq!(amounts(&percent), vec![(1, 0), (2, 0)]);
    }

    #[test]
    fn deficit_larger_than_allocations_fails() {
        let mut percent = vec![Allocation::new(1, 2), Allocation::new(2, 1)];
        let err = absorb_deficit(&mut percent, 4).unwrap_err();
        assert!(matches!(err, EngineError::RoundingUnreconcilable(_)));
    }

    #[test]
    fn remainder_extra_cents_go_first() {
        let shares = share_remainder(11, &[9, 8, 7]).unwrap();
        assert_eq!(amounts(&shares), vec![(9, 4), (8, 4), (7, 3)]);

        let shares = share_remainder(0, &[1, 2]).unwrap();
        assert_eq!(amounts(&shares), vec![(1, 0), (2, 0)]);
    }

    #[test]
    fn negative_remainder_fails() {
        let err = share_remainder(-1, &[1]).unwrap_err();
        assert!(matches!(err, EngineError::NegativeRemainder(_)));

        let err = spread_leftover(&mut [Allocation::new(1, 5)], -1).unwrap_err();
        assert!(matches!(err, EngineError::NegativeRemainder(_)));
    }

    #[test]
    fn leftover_goes_round_robin_from_largest() {
        let mut result = vec![
            Allocation::new(1, 30),
            Allocation::new(2, 50),
            Allocation::new(3, 20),
        ];
        spread_leftover(&mut result, 4).unwrap();
        assert_eq!(amounts(&result), vec![(2, 52), (1, 31), (3, 21)]);
    }

    #[test]
    fn leftover_wraps_many_times() {
        let mut result = vec![Allocation::new(1, 0), Allocation::new(2, 0)];
        spread_leftover(&mut result, 1_000_001).unwrap();
        assert_eq!(amounts(&result), vec![(1, 500_001), (2, 500_000)]);
    }

    #[test]
    fn leftover_without_members_fails() {
        let err = spread_leftover(&mut [], 1).unwrap_err();
        assert!(matches!(err, EngineError::NoMembersForRemainder(_)));
        assert!(spread_leftover(&mut [], 0).is_ok());
    }

    #[test]
    fn reconcile_overshoot_then_hands_rest_to_unspecified() {
        let groups = Categorized {
            fixed: vec![FixedMember {
                user_id: 1,
                amount_cents: 1,
            }],
            percent: vec![
                PercentMember {
                    user_id: 2,
                    percent: 50.0,
                },
                PercentMember {
                    user_id: 3,
                    percent: 50.0,
                },
            ],
            unspecified: vec![4],
        };
        let allocated = PercentAllocated {
            fixed_cents: 1,
            percent: vec![Allocation::new(2, 2), Allocation::new(3, 2)],
            remaining: -1,
        };
        let result = reconcile(4, &groups, allocated).unwrap();
        assert_eq!(amounts(&result), vec![(1, 1), (2, 1), (3, 2), (4, 0)]);
    }
}
