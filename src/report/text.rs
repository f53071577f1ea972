//! Plain-text results summary and owner breakdown.

use std::fmt::Write;

use crate::allocation::AllocationReport;

use super::{as_percent, format_acres, format_currency};

const RULE: &str = "----------------------------------------";

/// Renders the summary block, the per-owner breakdown, and the formula notes.
pub fn render_text(report: &AllocationReport) -> String {
    let summary = &report.summary;
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Results Summary");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "Lease Royalty:                      {:.4}%",
        as_percent(report.parameters.royalty_rate)
    );
    let _ = writeln!(
        out,
        "Total Royalty Payments:             {}",
        format_currency(summary.total_royalty_payment)
    );
    let _ = writeln!(
        out,
        "Working Interest Revenue (WI):      {}",
        format_currency(summary.working_interest_revenue)
    );
    let _ = writeln!(
        out,
        "Estimated Costs:                    {}",
        format_currency(summary.estimated_costs)
    );
    let _ = writeln!(
        out,
        "Estimated Profit:                   {}",
        format_currency(summary.profit)
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "Mineral Owner Breakdown");
    let _ = writeln!(out, "{RULE}");
    if report.allocations.is_empty() {
        let _ = writeln!(out, "(no mineral owners)");
    }
    for row in &report.allocations {
        let _ = writeln!(out, "{}", row.name);
        let _ = writeln!(out, "  Leased Acres:     {}", format_acres(row.leased_acres));
        let _ = writeln!(out, "  MI:               {:.4}%", as_percent(row.mi));
        let _ = writeln!(out, "  NRI:              {:.4}%", as_percent(row.nri));
        let _ = writeln!(out, "  Royalty Payment:  {}", format_currency(row.royalty_payment));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "NRI = (Leased Acres / Total Acres) x Royalty %");
    let _ = writeln!(out, "Total Royalty Payment = Sum of all owners' NRI x Revenue");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::compute_allocations;
    use crate::core::{LeaseParameters, OwnerInput};

    #[test]
    fn summary_and_breakdown_are_rendered() {
        let lease = LeaseParameters {
            gross_revenue: 100_000.0,
            total_acres: 160.0,
            estimated_costs: 50_000.0,
            royalty_rate: 0.1875,
        };
        let report = compute_allocations(&lease, &[OwnerInput::new("Smith", 160.0)]);
        let text = render_text(&report);

        assert!(text.contains("Total Royalty Payments:             $18,750.00"));
        assert!(text.contains("Working Interest Revenue (WI):      $81,250.00"));
        assert!(text.contains("Estimated Profit:                   $31,250.00"));
        assert!(text.contains("  Leased Acres:     160.0"));
        assert!(text.contains("  MI:               100.0000%"));
        assert!(text.contains("  NRI:              18.7500%"));
    }

    #[test]
    fn empty_owner_list_still_renders_summary() {
        let lease = LeaseParameters {
            gross_revenue: 1_000.0,
            total_acres: 10.0,
            estimated_costs: 2_000.0,
            royalty_rate: 0.25,
        };
        let text = render_text(&compute_allocations(&lease, &[]));
        assert!(text.contains("(no mineral owners)"));
        assert!(text.contains("Estimated Profit:                   -$1,250.00"));
    }
}
