//! Rendering of split outcomes.

use engine::{Allocation, EngineError, SplitReport};

use crate::{config::OutputFormat, convert, error::Result};

/// Renders a successful split.
pub fn allocations(format: OutputFormat, total_cents: i64, allocations: &[Allocation]) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report_text(&SplitReport::new(total_cents, allocations))),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&convert::split_response(
            total_cents,
            allocations,
        ))?),
    }
}

/// Renders a rejected split.
pub fn rejection(format: OutputFormat, err: &EngineError) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("SplitError: {err}\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&convert::error_response(err))?),
    }
}

pub fn report_text(report: &SplitReport) -> String {
    let mut out = String::from("Allocations:\n");
    for line in &report.lines {
        out.push_str(&format!(
            " - user_id={}: {} ({} cents) -> {:.6}%\n",
            line.user_id,
            line.amount,
            line.amount.cents(),
            line.percent_of_total
        ));
    }
    out.push_str(&format!(
        "\nSum of allocations: {} ({} cents)\n",
        report.allocated,
        report.allocated.cents()
    ));
    if report.is_balanced() {
        out.push_str("Check: OK, allocations sum to total.\n");
    } else {
        out.push_str("Check: MISMATCH, allocations do NOT sum to total!\n");
    }
    out
}
