//! Expense split engine.
//!
//! Given the total of one shared expense and how each member takes part in it
//! (a fixed amount, a percentage, or "whatever is left"), the engine assigns
//! every member an integer number of cents. Allocations always add up to the
//! total exactly: rounding leftovers are reconciled instead of lost.
//!
//! ```rust
//! use engine::{compute_splits, MemberSpec};
//!
//! let members = [
//!     MemberSpec::fixed(1, 3333),
//!     MemberSpec::percentage(2, 33.33),
//!     MemberSpec::unspecified(3),
//! ];
//! let splits = compute_splits(10000, &members).unwrap();
//! let amounts: Vec<i64> = splits.iter().map(|a| a.amount_cents).collect();
//! assert_eq!(amounts, vec![3333, 3333, 3334]);
//! ```
//!
//! The engine is a pure function: no state, no I/O. Persisting allocations
//! and turning errors into responses is up to the caller.

pub use error::EngineError;
pub use members::{Allocation, Contribution, MemberSpec, UserId};
pub use money::MoneyCents;
pub use report::{ReportLine, SplitReport};
pub use shares::shares_to_members;
pub use split::{
    SplitOptions, UnrecognizedPolicy, compute_splits, compute_splits_with, parse_total,
};

mod error;
mod members;
mod money;
mod report;
mod shares;
mod split;

pub type ResultEngine<T> = Result<T, EngineError>;
