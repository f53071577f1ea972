//! Lease royalty allocation: three owners on a 640-acre section.

use openroyalty::allocation::{allocation_warnings, compute_allocations};
use openroyalty::core::{LeaseParameters, OwnerInput, RoyaltyPreset};
use openroyalty::report::{render_text, to_owner_csv};

fn main() {
    let lease = LeaseParameters::builder()
        .gross_revenue(425_000.0)
        .total_acres(640.0)
        .estimated_costs(180_000.0)
        .royalty_preset(RoyaltyPreset::OneFifth)
        .build()
        .unwrap();

    let owners = vec![
        OwnerInput::new("Smith Family Trust", 320.0),
        OwnerInput::new("Jones, Mary", 160.0),
        OwnerInput::unnamed(160.0),
    ];

    // 1. Data-quality warnings (none for a fully leased section)
    for warning in allocation_warnings(&lease, &owners) {
        println!("warning: {warning}");
    }

    // 2. Allocation
    let report = compute_allocations(&lease, &owners);
    print!("{}", render_text(&report));

    // 3. CSV export
    println!("\n{}", to_owner_csv(&report.allocations));
}
