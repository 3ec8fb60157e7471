//! The module contains the errors the split engine can return.
//!
//! Every variant carries a human-readable message. Callers map the variant to
//! a client-facing rejection; [`EngineError::kind`] gives a stable code for
//! that purpose.
//!
//! The defensive variants ([`NegativeRemainder`], [`ConservationMismatch`]
//! and [`RoundingUnreconcilable`]) should never surface for inputs that pass
//! validation.
//!
//!  [`NegativeRemainder`]: EngineError::NegativeRemainder
//!  [`ConservationMismatch`]: EngineError::ConservationMismatch
//!  [`RoundingUnreconcilable`]: EngineError::RoundingUnreconcilable
use thiserror::Error;

/// Split engine errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Over allocation: {0}")]
    OverAllocation(String),
    #[error("Over percentage: {0}")]
    OverPercentage(String),
    #[error("Rounding unreconcilable: {0}")]
    RoundingUnreconcilable(String),
    #[error("Negative remainder: {0}")]
    NegativeRemainder(String),
    #[error("No members for remainder: {0}")]
    NoMembersForRemainder(String),
    #[error("Conservation mismatch: {0}")]
    ConservationMismatch(String),
    #[error("Unrecognized kind: {0}")]
    UnrecognizedKind(String),
}

impl EngineError {
    /// Stable snake_case code of the error kind, used in wire responses.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::OverAllocation(_) => "over_allocation",
            Self::OverPercentage(_) => "over_percentage",
            Self::RoundingUnreconcilable(_) => "rounding_unreconcilable",
            Self::NegativeRemainder(_) => "negative_remainder",
            Self::NoMembersForRemainder(_) => "no_members_for_remainder",
            Self::ConservationMismatch(_) => "conservation_mismatch",
            Self::UnrecognizedKind(_) => "unrecognized_kind",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = EngineError::OverAllocation("fixed amounts exceed total".to_string());
        assert_eq!(err.to_string(), "Over allocation: fixed amounts exceed total");
        assert_eq!(err.kind(), "over_allocation");
    }
}
