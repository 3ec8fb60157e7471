//! Conservation check and input order restoration.

use std::collections::HashMap;

use crate::{Allocation, EngineError, MemberSpec, ResultEngine, UserId};

pub(crate) fn finalize(
    total_cents: i64,
    members: &[MemberSpec],
    mut allocations: Vec<Allocation>,
) -> ResultEngine<Vec<Allocation>> {
    verify_conservation(total_cents, &allocations)?;
    restore_input_order(members, &mut allocations);
    Ok(allocations)
}

/// Allocations must add up to the total, to the cent.
pub(crate) fn verify_conservation(total_cents: i64, allocations: &[Allocation]) -> ResultEngine<()> {
    let allocated: i128 = allocations.iter().map(|a| i128::from(a.amount_cents)).sum();
    if allocated != i128::from(total_cents) {
        return Err(EngineError::ConservationMismatch(format!(
            "allocations sum to {allocated}, expected {total_cents}"
        )));
    }
    Ok(())
}

/// Sorts allocations by the position of their member in `members`.
///
/// Positions are looked up in a map built once; the first occurrence of a
/// user id wins.
pub(crate) fn restore_input_order(members: &[MemberSpec], allocations: &mut [Allocation]) {
    let mut positions: HashMap<UserId, usize> = HashMap::with_capacity(members.len());
    for (index, member) in members.iter().enumerate() {
        positions.entry(member.user_id).or_insert(index);
    }

    allocations.sort_by_key(|a| positions.get(&a.user_id).copied().unwrap_or(usize::MAX));
}
