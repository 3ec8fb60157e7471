//! Share based splits.
//!
//! "1 : 2 : 3" style splits are not an engine kind of their own: each
//! member's shares become a percentage of the share total and go through the
//! regular percentage path.

use crate::{EngineError, MemberSpec, ResultEngine, UserId};

/// Converts `(user_id, shares)` pairs into percentage specs, in input order.
///
/// Fails with [`EngineError::InvalidInput`] when there are no shares at all.
///
/// ```rust
/// use engine::{compute_splits, shares_to_members};
///
/// let members = shares_to_members(&[(1, 1), (2, 2), (3, 3)]).unwrap();
/// let splits = compute_splits(12000, &members).unwrap();
/// let amounts: Vec<i64> = splits.iter().map(|a| a.amount_cents).collect();
/// assert_eq!(amounts, vec![2000, 4000, 6000]);
/// ```
pub fn shares_to_members(shares: &[(UserId, u32)]) -> ResultEngine<Vec<MemberSpec>> {
    let total_shares: u64 = shares.iter().map(|&(_, count)| u64::from(count)).sum();
    if total_shares == 0 {
        return Err(EngineError::InvalidInput(
            "at least one member must hold a share".to_string(),
        ));
    }

    Ok(shares
        .iter()
        .map(|&(user_id, count)| {
            MemberSpec::percentage(user_id, f64::from(count) / total_shares as f64 * 100.0)
        })
        .collect())
}
