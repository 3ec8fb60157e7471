//! Expense split allocation.
//!
//! [`compute_splits`] turns an expense total and one [`MemberSpec`] per member
//! into integer cent [`Allocation`]s that always sum to the total.
//!
//! The work runs as a linear pipeline, each stage able to stop it with an
//! [`EngineError`](crate::EngineError):
//!
//! 1. [`validate`]: total and member values are well formed.
//! 2. [`categorize`]: members split into fixed, percentage and unspecified
//!    lists, each keeping input order.
//! 3. [`percent`]: fixed amounts summed, percentages rounded to cents
//!    (half to even).
//! 4. [`reconcile`]: rounding overshoot taken back from the largest
//!    percentage shares, the remainder handed to unspecified members or spread
//!    round-robin over everyone.
//! 5. [`finalize`]: conservation checked, input order restored.
//!
//! The computation owns no state and does no I/O; calling it concurrently is
//! fine.

use serde::{Deserialize, Serialize};

use crate::{Allocation, MemberSpec, ResultEngine};

mod categorize;
mod finalize;
mod percent;
mod reconcile;
mod validate;

pub use validate::parse_total;

/// What to do with members whose contribution kind is not recognized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnrecognizedPolicy {
    /// Leave the member out of the result without raising an error.
    #[default]
    Drop,
    /// Fail the split with [`EngineError::UnrecognizedKind`](crate::EngineError::UnrecognizedKind).
    Reject,
}

/// Tuning knobs for [`compute_splits_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitOptions {
    pub unrecognized: UnrecognizedPolicy,
}

impl SplitOptions {
    /// Options that reject unrecognized kinds instead of dropping them.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            unrecognized: UnrecognizedPolicy::Reject,
        }
    }
}

/// Splits `total_cents` among `members` with the default options.
///
/// The result holds one allocation per member with a recognized kind, in
/// input order, and always sums to `total_cents`.
///
/// # Examples
///
/// ```rust
/// use engine::{compute_splits, Allocation, MemberSpec};
///
/// let members = [
///     MemberSpec::fixed(1, 2000),
///     MemberSpec::unspecified(2),
///     MemberSpec::unspecified(3),
/// ];
/// let splits = compute_splits(6000, &members).unwrap();
/// assert_eq!(
///     splits,
///     vec![Allocation::new(1, 2000), Allocation::new(2, 2000), Allocation::new(3, 2000)]
/// );
/// ```
pub fn compute_splits(total_cents: i64, members: &[MemberSpec]) -> ResultEngine<Vec<Allocation>> {
    compute_splits_with(total_cents, members, SplitOptions::default())
}

/// Splits `total_cents` among `members`.
pub fn compute_splits_with(
    total_cents: i64,
    members: &[MemberSpec],
    options: SplitOptions,
) -> ResultEngine<Vec<Allocation>> {
    validate::total_cents(total_cents)?;
    validate::members(members)?;

    let groups = categorize::categorize(members, options.unrecognized)?;
    tracing::debug!(
        total_cents,
        fixed = groups.fixed.len(),
        percent = groups.percent.len(),
        unspecified = groups.unspecified.len(),
        "categorized split members"
    );

    let allocated = percent::allocate(total_cents, &groups)?;
    let allocations = reconcile::reconcile(total_cents, &groups, allocated)?;
    finalize::finalize(total_cents, members, allocations)
}
