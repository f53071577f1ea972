//! Owner breakdown CSV export.

use std::io::Write;

use crate::core::OwnerAllocation;

use super::{CURRENCY_DECIMALS, as_percent, format_acres, round_to};

pub const CSV_HEADER: &str = "Owner Name,Leased Acres,MI (%),NRI (%),Royalty Payment ($)";

/// File name offered for the export when the caller does not pick one.
pub const DEFAULT_CSV_FILE_NAME: &str = "owner_breakdown.csv";

fn csv_escape(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn to_csv_row(row: &OwnerAllocation) -> String {
    format!(
        "{},{},{:.4},{:.4},{:.2}",
        csv_escape(&row.name),
        format_acres(row.leased_acres),
        as_percent(row.mi),
        as_percent(row.nri),
        round_to(row.royalty_payment, CURRENCY_DECIMALS)
    )
}

/// Serialize owner rows as CSV: header, one line per owner, trailing newline.
pub fn to_owner_csv(allocations: &[OwnerAllocation]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + allocations.len() * 64);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for row in allocations {
        out.push_str(&to_csv_row(row));
        out.push('\n');
    }
    out
}

/// Writes [`to_owner_csv`] output to `writer`.
pub fn write_owner_csv<W: Write>(
    writer: &mut W,
    allocations: &[OwnerAllocation],
) -> std::io::Result<()> {
    writer.write_all(to_owner_csv(allocations).as_bytes())?;
    writer.flush()
}
