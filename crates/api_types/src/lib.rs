use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod split {
    use super::*;

    /// Contribution kinds understood on the wire.
    ///
    /// The `type` field of [`MemberSplit`] is kept as a plain string so that
    /// unknown kinds survive deserialization and reach the engine.
    pub const KIND_AMOUNT: &str = "amount";
    pub const KIND_PERCENT: &str = "percent";
    pub const KIND_NONE: &str = "none";

    /// Request body for splitting one expense.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct SplitRequest {
        /// Expense total in cents.
        ///
        /// Kept untyped so that floats and strings can be rejected with a
        /// proper error instead of a deserialization failure.
        pub total_cents: Value,
        pub members: Vec<MemberSplit>,
    }

    /// One member's contribution rule.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct MemberSplit {
        pub user_id: i64,
        /// `amount`, `percent` or `none`.
        #[serde(rename = "type")]
        pub kind: String,
        /// Cents for `amount`, percentage for `percent`, absent for `none`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub value: Option<Value>,
    }

    /// Request body for a share based split ("1 : 2 : 3").
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct SharesRequest {
        pub total_cents: Value,
        pub shares: Vec<MemberShares>,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct MemberShares {
        pub user_id: i64,
        pub shares: u32,
    }

    /// Response body of a successful split.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SplitResponse {
        pub total_cents: i64,
        pub allocations: Vec<AllocationView>,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct AllocationView {
        pub user_id: i64,
        pub amount_cents: i64,
    }
}

pub mod error {
    use super::*;

    /// Response body of a rejected request.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ErrorResponse {
        /// Stable snake_case error code, e.g. `over_allocation`.
        pub kind: String,
        pub error: String,
    }
}
