//! Mapping between wire types and engine types.

use api_types::{
    error::ErrorResponse,
    split::{
        AllocationView, KIND_AMOUNT, KIND_NONE, KIND_PERCENT, MemberSplit, SharesRequest,
        SplitRequest, SplitResponse,
    },
};
use engine::{
    Allocation, Contribution, EngineError, MemberSpec, ResultEngine, parse_total,
    shares_to_members,
};
use serde_json::Value;

/// Total and member specs of a split request.
pub fn split_input(request: &SplitRequest) -> ResultEngine<(i64, Vec<MemberSpec>)> {
    let total = parse_total(&request.total_cents)?;
    let members = request
        .members
        .iter()
        .map(member_spec)
        .collect::<ResultEngine<Vec<_>>>()?;
    Ok((total, members))
}

/// Total and percentage specs of a shares request.
pub fn shares_input(request: &SharesRequest) -> ResultEngine<(i64, Vec<MemberSpec>)> {
    let total = parse_total(&request.total_cents)?;
    let shares: Vec<_> = request
        .shares
        .iter()
        .map(|member| (member.user_id, member.shares))
        .collect();
    Ok((total, shares_to_members(&shares)?))
}

pub fn member_spec(member: &MemberSplit) -> ResultEngine<MemberSpec> {
    let contribution = match member.kind.as_str() {
        KIND_AMOUNT => Contribution::Fixed(
            member
                .value
                .as_ref()
                .map(|value| amount_cents(member.user_id, value))
                .transpose()?,
        ),
        KIND_PERCENT => Contribution::Percentage(
            member
                .value
                .as_ref()
                .map(|value| percent(member.user_id, value))
                .transpose()?,
        ),
        KIND_NONE => Contribution::Unspecified,
        other => Contribution::Unrecognized(other.to_string()),
    };

    Ok(MemberSpec {
        user_id: member.user_id,
        contribution,
    })
}

/// Cents from a JSON number. Integral floats (`2000.0`) are accepted.
fn amount_cents(user_id: i64, value: &Value) -> ResultEngine<i64> {
    let invalid = || {
        EngineError::InvalidInput(format!(
            "amount for user {user_id} must be a whole number of cents, got {value}"
        ))
    };

    let Value::Number(number) = value else {
        return Err(invalid());
    };
    if let Some(cents) = number.as_i64() {
        return Ok(cents);
    }
    match number.as_f64() {
        Some(cents) if cents.fract() == 0.0 && cents.abs() < i64::MAX as f64 => Ok(cents as i64),
        _ => Err(invalid()),
    }
}

fn percent(user_id: i64, value: &Value) -> ResultEngine<f64> {
    value.as_f64().ok_or_else(|| {
        EngineError::InvalidInput(format!(
            "percentage for user {user_id} must be a number, got {value}"
        ))
    })
}

pub fn split_response(total_cents: i64, allocations: &[Allocation]) -> SplitResponse {
    SplitResponse {
        total_cents,
        allocations: allocations
            .iter()
            .map(|allocation| AllocationView {
                user_id: allocation.user_id,
                amount_cents: allocation.amount_cents,
            })
            .collect(),
    }
}

pub fn error_response(err: &EngineError) -> ErrorResponse {
    ErrorResponse {
        kind: err.kind().to_string(),
        error: err.to_string(),
    }
}
