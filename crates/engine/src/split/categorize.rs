//! Partition of members by contribution kind.

use crate::{Contribution, EngineError, MemberSpec, ResultEngine, UnrecognizedPolicy, UserId};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct FixedMember {
    pub user_id: UserId,
    pub amount_cents: i64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PercentMember {
    pub user_id: UserId,
    pub percent: f64,
}

/// Members grouped by kind. Each list keeps the relative input order.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct Categorized {
    pub fixed: Vec<FixedMember>,
    pub percent: Vec<PercentMember>,
    pub unspecified: Vec<UserId>,
}

pub(crate) fn categorize(
    members: &[MemberSpec],
    policy: UnrecognizedPolicy,
) -> ResultEngine<Categorized> {
    let mut groups = Categorized::default();

    for member in members {
        match &member.contribution {
            Contribution::Fixed(amount) => groups.fixed.push(FixedMember {
                user_id: member.user_id,
                amount_cents: amount.unwrap_or(0),
            }),
            Contribution::Percentage(percent) => groups.percent.push(PercentMember {
                user_id: member.user_id,
                percent: percent.unwrap_or(0.0),
            }),
            Contribution::Unspecified => groups.unspecified.push(member.user_id),
            Contribution::Unrecognized(kind) => match policy {
                UnrecognizedPolicy::Drop => {
                    tracing::debug!(
                        user_id = member.user_id,
                        kind = kind.as_str(),
                        "dropping member with unrecognized kind"
                    );
                }
                UnrecognizedPolicy::Reject => {
                    return Err(EngineError::UnrecognizedKind(format!(
                        "user {} has unrecognized kind {kind:?}",
                        member.user_id
                    )));
                }
            },
        }
    }

    Ok(groups)
}
