//! Built-in reference cases.

use engine::{
    Contribution, MemberSpec, MoneyCents, ResultEngine, SplitOptions, SplitReport,
    compute_splits_with, shares_to_members,
};

use crate::output;

pub struct Case {
    pub title: &'static str,
    pub total_cents: i64,
    pub members: Vec<MemberSpec>,
}

pub fn cases() -> ResultEngine<Vec<Case>> {
    Ok(vec![
        Case {
            title: "Percent-only (50% / 50%)",
            total_cents: 10000,
            members: vec![MemberSpec::percentage(1, 50.0), MemberSpec::percentage(2, 50.0)],
        },
        Case {
            title: "Amount + unspecified ($20, rest split equally)",
            total_cents: 6000,
            members: vec![
                MemberSpec::fixed(1, 2000),
                MemberSpec::unspecified(2),
                MemberSpec::unspecified(3),
            ],
        },
        Case {
            title: "Mixed (explicit $33.33, 33.33%, rest unspecified)",
            total_cents: 10000,
            members: vec![
                MemberSpec::fixed(1, 3333),
                MemberSpec::percentage(2, 33.33),
                MemberSpec::unspecified(3),
            ],
        },
        Case {
            title: "Shares as percentages (1:2:3)",
            total_cents: 12000,
            members: shares_to_members(&[(1, 1), (2, 2), (3, 3)])?,
        },
        Case {
            title: "Rounding edge (33.33%, 33.33%, 33.34%) on $1.00",
            total_cents: 100,
            members: vec![
                MemberSpec::percentage(1, 33.33),
                MemberSpec::percentage(2, 33.33),
                MemberSpec::percentage(3, 33.34),
            ],
        },
        Case {
            title: "Explicit amounts > total (should error)",
            total_cents: 5000,
            members: vec![MemberSpec::fixed(1, 6000)],
        },
        Case {
            title: "Percentages sum > 100 (should error)",
            total_cents: 10000,
            members: vec![MemberSpec::percentage(1, 60.0), MemberSpec::percentage(2, 50.0)],
        },
    ])
}

pub fn render(case: &Case, options: SplitOptions) -> String {
    let rule = "=".repeat(60);
    let total = MoneyCents::new(case.total_cents);
    let mut out = String::new();

    out.push_str(&format!("{rule}\n{}\n", case.title));
    out.push_str(&format!("Total: {total} ({} cents)\n", case.total_cents));
    out.push_str("Members input:\n");
    for member in &case.members {
        out.push_str(&format!(
            " - user_id={}: {}\n",
            member.user_id,
            describe(&member.contribution)
        ));
    }

    match compute_splits_with(case.total_cents, &case.members, options) {
        Ok(allocations) => {
            out.push('\n');
            out.push_str(&output::report_text(&SplitReport::new(
                case.total_cents,
                &allocations,
            )));
        }
        Err(err) => {
            tracing::debug!(title = case.title, kind = err.kind(), "reference case rejected");
            out.push_str(&format!("SplitError: {err}\n"));
        }
    }
    out.push_str(&format!("{rule}\n"));
    out
}

fn describe(contribution: &Contribution) -> String {
    match contribution {
        Contribution::Fixed(amount) => {
            let cents = amount.unwrap_or(0);
            format!("amount = {} ({cents} cents)", MoneyCents::new(cents))
        }
        Contribution::Percentage(percent) => format!("percent = {}%", percent.unwrap_or(0.0)),
        Contribution::Unspecified => "unspecified (none)".to_string(),
        Contribution::Unrecognized(kind) => format!("unrecognized ({kind})"),
    }
}
