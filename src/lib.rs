//! OpenRoyalty computes royalty allocations for the mineral owners of a single oil & gas
//! lease, together with the operator's working-interest revenue and profit.
//!
//! Given gross production revenue, total tract acreage, each owner's leased acreage, and the
//! lease royalty rate, every owner receives:
//! - a mineral interest (MI): leased acres / total acres,
//! - a net revenue interest (NRI): MI x royalty rate,
//! - a royalty payment: gross revenue x NRI.
//!
//! The operator keeps the working interest `1 - royalty rate`; profit is WI revenue less
//! estimated costs.
//!
//! Numerical considerations:
//! - All arithmetic is `f64` and unrounded. Rounding (2 dp currency, 4 dp percentages) is
//!   applied only by [`report`].
//! - A non-positive tract is not an error: every MI is defined as zero.
//! - Over-leased owners (MI above 100%) are computed as given; [`allocation::allocation_warnings`]
//!   reports them for boundary layers.
//!
//! # Feature Flags
//! - `parallel`: allocates owners on the Rayon thread pool.
//! - `cli` (default): builds the `royalty_calc` binary and its `clap`/`anyhow`/
//!   `tracing-subscriber` dependencies. Library users can disable it with
//!   `default-features = false`.
//!
//! # Quick Start
//! ```rust
//! use openroyalty::allocation::compute_allocations;
//! use openroyalty::core::{LeaseParameters, OwnerInput, RoyaltyPreset};
//!
//! let lease = LeaseParameters::builder()
//!     .gross_revenue(100_000.0)
//!     .total_acres(160.0)
//!     .estimated_costs(50_000.0)
//!     .royalty_preset(RoyaltyPreset::ThreeSixteenths)
//!     .build()
//!     .unwrap();
//!
//! let report = compute_allocations(&lease, &[OwnerInput::new("Smith", 160.0)]);
//! assert_eq!(report.allocations[0].royalty_payment, 18_750.0);
//! assert_eq!(report.summary.working_interest_revenue, 81_250.0);
//! assert_eq!(report.summary.profit, 31_250.0);
//! ```
//!
//! Export the owner breakdown:
//! ```rust
//! use openroyalty::allocation::compute_allocations;
//! use openroyalty::core::{LeaseParameters, OwnerInput};
//! use openroyalty::report::to_owner_csv;
//!
//! let lease = LeaseParameters {
//!     gross_revenue: 100_000.0,
//!     total_acres: 160.0,
//!     estimated_costs: 0.0,
//!     royalty_rate: 0.125,
//! };
//! let report = compute_allocations(&lease, &[OwnerInput::new("Smith", 80.0)]);
//! let csv = to_owner_csv(&report.allocations);
//! assert!(csv.ends_with("Smith,80.0,50.0000,6.2500,6250.00\n"));
//! ```

pub mod allocation;
pub mod config;
pub mod core;
pub mod report;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::allocation::*;
    pub use crate::config::LeaseConfig;
    pub use crate::core::*;
    pub use crate::report::{render_text, to_owner_csv};
}
