//! Human oriented summary of a split.

use serde::{Deserialize, Serialize};

use crate::{Allocation, MoneyCents, UserId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    pub user_id: UserId,
    pub amount: MoneyCents,
    /// Share of the expense total, in percent (0 when the total is 0).
    pub percent_of_total: f64,
}

/// Per-member amounts of one split together with a balance check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitReport {
    pub total: MoneyCents,
    pub lines: Vec<ReportLine>,
    pub allocated: MoneyCents,
}

impl SplitReport {
    #[must_use]
    pub fn new(total_cents: i64, allocations: &[Allocation]) -> Self {
        let total = MoneyCents::new(total_cents);
        let lines: Vec<ReportLine> = allocations
            .iter()
            .map(|allocation| {
                let amount = MoneyCents::new(allocation.amount_cents);
                ReportLine {
                    user_id: allocation.user_id,
                    amount,
                    percent_of_total: amount.percent_of(total),
                }
            })
            .collect();
        let allocated = lines.iter().map(|line| line.amount).sum();

        Self {
            total,
            lines,
            allocated,
        }
    }

    /// `true` when the allocations add up to the total.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.allocated == self.total
    }
}
