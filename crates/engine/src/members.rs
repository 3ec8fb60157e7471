//! Split inputs and outputs.
//!
//! A [`MemberSpec`] states how one member takes part in an expense; an
//! [`Allocation`] is what the engine assigns to that member, in cents.

use serde::{Deserialize, Serialize};

/// Identifier of a group member.
pub type UserId = i64;

/// How a member contributes to one expense.
///
/// A missing value on [`Fixed`](Contribution::Fixed) or
/// [`Percentage`](Contribution::Percentage) counts as 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Contribution {
    /// Exact amount in cents.
    Fixed(Option<i64>),
    /// Percentage of the total, 0 to 100.
    Percentage(Option<f64>),
    /// Takes an equal part of whatever is left.
    Unspecified,
    /// A kind the engine does not know. Depending on
    /// [`UnrecognizedPolicy`](crate::UnrecognizedPolicy) the member is dropped
    /// from the result or the whole split is rejected.
    Unrecognized(String),
}

/// One member's share rule for an expense.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberSpec {
    pub user_id: UserId,
    pub contribution: Contribution,
}

impl MemberSpec {
    #[must_use]
    pub fn fixed(user_id: UserId, amount_cents: i64) -> Self {
        Self {
            user_id,
            contribution: Contribution::Fixed(Some(amount_cents)),
        }
    }

    #[must_use]
    pub fn percentage(user_id: UserId, percent: f64) -> Self {
        Self {
            user_id,
            contribution: Contribution::Percentage(Some(percent)),
        }
    }

    #[must_use]
    pub fn unspecified(user_id: UserId) -> Self {
        Self {
            user_id,
            contribution: Contribution::Unspecified,
        }
    }
}

/// Amount assigned to one member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub user_id: UserId,
    pub amount_cents: i64,
}

impl Allocation {
    #[must_use]
    pub const fn new(user_id: UserId, amount_cents: i64) -> Self {
        Self {
            user_id,
            amount_cents,
        }
    }
}
