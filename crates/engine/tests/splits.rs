use engine::{
    Allocation, Contribution, EngineError, MemberSpec, SplitOptions, UserId, compute_splits,
    compute_splits_with, shares_to_members,
};

fn amounts(splits: &[Allocation]) -> Vec<i64> {
    splits.iter().map(|a| a.amount_cents).collect()
}

fn ids(splits: &[Allocation]) -> Vec<UserId> {
    splits.iter().map(|a| a.user_id).collect()
}

fn unrecognized(user_id: UserId, kind: &str) -> MemberSpec {
    MemberSpec {
        user_id,
        contribution: Contribution::Unrecognized(kind.to_string()),
    }
}

#[test]
fn percent_only_even_split() {
    let members = [MemberSpec::percentage(1, 50.0), MemberSpec::percentage(2, 50.0)];
    let splits = compute_splits(10000, &members).unwrap();
    assert_eq!(
        splits,
        vec![Allocation::new(1, 5000), Allocation::new(2, 5000)]
    );
}

#[test]
fn fixed_then_rest_split_equally() {
    let members = [
        MemberSpec::fixed(1, 2000),
        MemberSpec::unspecified(2),
        MemberSpec::unspecified(3),
    ];
    let splits = compute_splits(6000, &members).unwrap();
    assert_eq!(amounts(&splits), vec![2000, 2000, 2000]);
}

#[test]
fn mixed_remainder_goes_to_unspecified() {
    let members = [
        MemberSpec::fixed(1, 3333),
        MemberSpec::percentage(2, 33.33),
        MemberSpec::unspecified(3),
    ];
    let splits = compute_splits(10000, &members).unwrap();
    assert_eq!(amounts(&splits), vec![3333, 3333, 3334]);
}

#[test]
fn shares_as_percentages() {
    let members = [
        MemberSpec::percentage(1, 16.6667),
        MemberSpec::percentage(2, 33.3333),
        MemberSpec::percentage(3, 50.0),
    ];
    let splits = compute_splits(12000, &members).unwrap();
    assert_eq!(amounts(&splits), vec![2000, 4000, 6000]);

    let members = shares_to_members(&[(1, 1), (2, 2), (3, 3)]).unwrap();
    let splits = compute_splits(12000, &members).unwrap();
    assert_eq!(amounts(&splits), vec![2000, 4000, 6000]);
}

#[test]
fn rounding_leftover_goes_to_first_largest() {
    let members = [
        MemberSpec::percentage(1, 33.33),
        MemberSpec::percentage(2, 33.33),
        MemberSpec::percentage(3, 33.34),
    ];
    let splits = compute_splits(100, &members).unwrap();
    assert_eq!(amounts(&splits), vec![34, 33, 33]);
}

#[test]
fn fixed_over_total_is_over_allocation() {
    let err = compute_splits(5000, &[MemberSpec::fixed(1, 6000)]).unwrap_err();
    assert!(matches!(err, EngineError::OverAllocation(_)));
}

#[test]
fn percentages_over_hundred_is_over_percentage() {
    let members = [MemberSpec::percentage(1, 60.0), MemberSpec::percentage(2, 50.0)];
    let err = compute_splits(10000, &members).unwrap_err();
    assert!(matches!(err, EngineError::OverPercentage(_)));
}

#[test]
fn zero_total_all_unspecified() {
    let members = [
        MemberSpec::unspecified(1),
        MemberSpec::unspecified(2),
        MemberSpec::unspecified(3),
    ];
    let splits = compute_splits(0, &members).unwrap();
    assert_eq!(amounts(&splits), vec![0, 0, 0]);
}

#[test]
fn single_unspecified_member_takes_everything() {
    for total in [0, 1, 99, 4321, 1_000_000] {
        let splits = compute_splits(total, &[MemberSpec::unspecified(42)]).unwrap();
        assert_eq!(splits, vec![Allocation::new(42, total)]);
    }
}

#[test]
fn half_cent_ties_round_to_even() {
    // 2.5 rounds down to 2 for both, the missing cent goes to the first.
    let members = [MemberSpec::percentage(1, 50.0), MemberSpec::percentage(2, 50.0)];
    assert_eq!(amounts(&compute_splits(5, &members).unwrap()), vec![3, 2]);

    // 1.5 rounds up to 2 for both, the extra cent is taken from the first.
    assert_eq!(amounts(&compute_splits(3, &members).unwrap()), vec![1, 2]);

    // 3.5 rounds up to 4 for both.
    assert_eq!(amounts(&compute_splits(7, &members).unwrap()), vec![3, 4]);
}

#[test]
fn overshoot_is_taken_from_largest_percentage() {
    let members = [
        MemberSpec::percentage(1, 25.0),
        MemberSpec::percentage(2, 75.0),
    ];
    // 0.5 -> 0 and 1.5 -> 2: no overshoot.
    assert_eq!(amounts(&compute_splits(2, &members).unwrap()), vec![0, 2]);

    let members = [
        MemberSpec::percentage(1, 50.0),
        MemberSpec::percentage(2, 50.0),
        MemberSpec::unspecified(3),
    ];
    // 1.5 -> 2 twice overshoots 3 by one cent; unspecified gets nothing.
    assert_eq!(amounts(&compute_splits(3, &members).unwrap()), vec![1, 2, 0]);
}

#[test]
fn leftover_without_unspecified_goes_to_largest_share() {
    let members = [
        MemberSpec::fixed(1, 30),
        MemberSpec::percentage(2, 50.0),
        MemberSpec::percentage(3, 20.0),
    ];
    let splits = compute_splits(101, &members).unwrap();
    assert_eq!(amounts(&splits), vec![30, 51, 20]);
}

#[test]
fn fixed_members_absorb_unclaimed_total() {
    let members = [MemberSpec::fixed(1, 30), MemberSpec::fixed(2, 20)];
    let splits = compute_splits(100, &members).unwrap();
    assert_eq!(amounts(&splits), vec![55, 45]);
}

#[test]
fn remainder_extra_cents_follow_input_order() {
    let members = [
        MemberSpec::unspecified(9),
        MemberSpec::fixed(4, 100),
        MemberSpec::unspecified(7),
        MemberSpec::percentage(2, 10.0),
    ];
    let splits = compute_splits(1001, &members).unwrap();
    assert_eq!(ids(&splits), vec![9, 4, 7, 2]);
    assert_eq!(amounts(&splits), vec![401, 100, 400, 100]);
}

#[test]
fn absent_values_count_as_zero() {
    let members = [
        MemberSpec {
            user_id: 1,
            contribution: Contribution::Fixed(None),
        },
        MemberSpec {
            user_id: 2,
            contribution: Contribution::Percentage(None),
        },
        MemberSpec::unspecified(3),
    ];
    let splits = compute_splits(500, &members).unwrap();
    assert_eq!(amounts(&splits), vec![0, 0, 500]);
}

#[test]
fn empty_members() {
    assert!(compute_splits(0, &[]).unwrap().is_empty());

    let err = compute_splits(100, &[]).unwrap_err();
    assert!(matches!(err, EngineError::NoMembersForRemainder(_)));
}

#[test]
fn negative_inputs_are_invalid() {
    let err = compute_splits(-1, &[MemberSpec::unspecified(1)]).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));

    let err = compute_splits(100, &[MemberSpec::fixed(1, -5)]).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));

    let err = compute_splits(100, &[MemberSpec::percentage(1, -5.0)]).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));

    let err = compute_splits(100, &[MemberSpec::percentage(1, f64::INFINITY)]).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));
}

#[test]
fn percentage_shares_of_huge_totals_are_invalid() {
    let halves = [MemberSpec::percentage(1, 50.0), MemberSpec::percentage(2, 50.0)];
    let err = compute_splits(i64::MAX, &halves).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));

    let members = [
        MemberSpec::percentage(1, 50.0),
        MemberSpec::percentage(2, 50.0),
        MemberSpec::unspecified(3),
    ];
    let err = compute_splits(i64::MAX - 10, &members).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));
}

#[test]
fn unrecognized_members_are_dropped() {
    let members = [
        MemberSpec::percentage(1, 50.0),
        unrecognized(2, "removed"),
        MemberSpec::unspecified(3),
    ];
    let splits = compute_splits(1000, &members).unwrap();
    assert_eq!(
        splits,
        vec![Allocation::new(1, 500), Allocation::new(3, 500)]
    );
}

#[test]
fn only_unrecognized_members_cannot_take_remainder() {
    let err = compute_splits(100, &[unrecognized(1, "removed")]).unwrap_err();
    assert!(matches!(err, EngineError::NoMembersForRemainder(_)));
}

#[test]
fn strict_options_reject_unrecognized_members() {
    let members = [MemberSpec::unspecified(1), unrecognized(2, "removed")];
    let err = compute_splits_with(1000, &members, SplitOptions::strict()).unwrap_err();
    assert!(matches!(err, EngineError::UnrecognizedKind(_)));
    assert!(compute_splits_with(1000, &members, SplitOptions::default()).is_ok());
}

#[test]
fn same_input_same_output() {
    let members = [
        MemberSpec::percentage(1, 33.33),
        MemberSpec::fixed(2, 17),
        MemberSpec::percentage(3, 33.33),
        MemberSpec::unspecified(4),
        MemberSpec::unspecified(5),
    ];
    let first = compute_splits(9999, &members);
    for _ in 0..10 {
        assert_eq!(compute_splits(9999, &members), first);
    }

    let bad = [MemberSpec::percentage(1, 70.0), MemberSpec::percentage(2, 70.0)];
    let first = compute_splits(9999, &bad);
    assert!(first.is_err());
    assert_eq!(compute_splits(9999, &bad), first);
}

/// Builds a member list from a percentage pattern, a number of fixed and
/// unspecified members, interleaved so that every kind shows up in every
/// position.
fn build_members(total: i64, percents: &[f64], fixed: usize, unspecified: usize) -> Vec<MemberSpec> {
    let fixed_amount = total / (fixed as i64 + 1);
    let mut members = Vec::new();
    let mut next_id: UserId = 100;
    let (mut p, mut f, mut u) = (0, 0, 0);

    while p < percents.len() || f < fixed || u < unspecified {
        if u < unspecified && (next_id % 3 == 0) {
            members.push(MemberSpec::unspecified(next_id));
            u += 1;
        } else if f < fixed && (next_id % 3 == 1 || p >= percents.len()) {
            members.push(MemberSpec::fixed(next_id, fixed_amount / 2));
            f += 1;
        } else if p < percents.len() {
            members.push(MemberSpec::percentage(next_id, percents[p]));
            p += 1;
        } else {
            members.push(MemberSpec::unspecified(next_id));
            u += 1;
        }
        next_id += 7;
    }
    members
}

#[test]
fn conservation_coverage_and_order_hold_across_inputs() {
    let totals = [0, 1, 2, 3, 5, 7, 10, 99, 100, 101, 999, 1001, 12345, 100_000];
    let patterns: [&[f64]; 7] = [
        &[],
        &[50.0, 50.0],
        &[33.33, 33.33, 33.34],
        &[16.6667, 33.3333, 50.0],
        &[12.5, 12.5, 12.5, 12.5],
        &[0.1, 99.9],
        &[14.285_714, 14.285_714, 14.285_714, 14.285_714, 14.285_714, 14.285_714, 14.285_714],
    ];

    for &total in &totals {
        for percents in patterns {
            for fixed in 0..3 {
                for unspecified in 0..3 {
                    let members = build_members(total, percents, fixed, unspecified);
                    let result = compute_splits(total, &members);

                    if members.is_empty() && total > 0 {
                        assert!(matches!(result, Err(EngineError::NoMembersForRemainder(_))));
                        continue;
                    }

                    let splits = result.unwrap_or_else(|err| {
                        panic!("total {total} members {members:?} failed: {err}")
                    });
                    assert_eq!(
                        splits.iter().map(|a| a.amount_cents).sum::<i64>(),
                        total,
                        "conservation broken for {members:?}"
                    );
                    assert!(splits.iter().all(|a| a.amount_cents >= 0));
                    assert_eq!(
                        ids(&splits),
                        members.iter().map(|m| m.user_id).collect::<Vec<_>>()
                    );
                }
            }
        }
    }
}
