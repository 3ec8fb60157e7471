//! Input validation, run before any allocation work.

use serde_json::Value;

use crate::{Contribution, EngineError, MemberSpec, ResultEngine};

/// Reject a negative total.
pub(crate) fn total_cents(total_cents: i64) -> ResultEngine<()> {
    if total_cents < 0 {
        return Err(EngineError::InvalidInput(format!(
            "total_cents must be a non-negative integer, got {total_cents}"
        )));
    }
    Ok(())
}

/// Reject negative fixed amounts and negative or non-finite percentages.
pub(crate) fn members(members: &[MemberSpec]) -> ResultEngine<()> {
    for member in members {
        match member.contribution {
            Contribution::Fixed(Some(amount)) if amount < 0 => {
                return Err(EngineError::InvalidInput(format!(
                    "fixed amount for user {} must be >= 0, got {amount}",
                    member.user_id
                )));
            }
            Contribution::Percentage(Some(percent)) if !percent.is_finite() || percent < 0.0 => {
                return Err(EngineError::InvalidInput(format!(
                    "percentage for user {} must be a finite number >= 0, got {percent}",
                    member.user_id
                )));
            }
            _ => {}
        }
    }
    Ok(())
}

/// Reads an expense total from untyped JSON.
///
/// Only JSON integers are accepted: floats (even `10.0`), strings, booleans,
/// `null` and negative numbers fail with
/// [`EngineError::InvalidInput`].
///
/// ```rust
/// use engine::parse_total;
/// use serde_json::json;
///
/// assert_eq!(parse_total(&json!(12000)).unwrap(), 12000);
/// assert!(parse_total(&json!(120.5)).is_err());
/// assert!(parse_total(&json!("12000")).is_err());
/// ```
pub fn parse_total(value: &Value) -> ResultEngine<i64> {
    let invalid = || {
        EngineError::InvalidInput(format!(
            "total_cents must be a non-negative integer, got {value}"
        ))
    };

    let Value::Number(number) = value else {
        return Err(invalid());
    };
    let total = number.as_i64().ok_or_else(invalid)?;
    total_cents(total)?;
    Ok(total)
}
