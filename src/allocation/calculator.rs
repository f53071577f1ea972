//! Per-owner royalty allocation and lease-level aggregation.
//!
//! For owner `i` on a tract of `A` acres with royalty rate `r` and gross revenue `G`:
//! - `MI_i = acres_i / A` (zero when `A <= 0`),
//! - `NRI_i = MI_i * r`,
//! - `payment_i = G * NRI_i`.
//!
//! The operator keeps the working interest `WI = 1 - r`, so WI revenue is `G * WI` and
//! profit is WI revenue less estimated costs. Nothing is rounded here; rounding belongs to
//! [`crate::report`].

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{AllocationSummary, LeaseParameters, OwnerAllocation, OwnerInput};

/// One calculation result: inputs echoed back with per-owner rows and totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationReport {
    pub parameters: LeaseParameters,
    pub allocations: Vec<OwnerAllocation>,
    pub summary: AllocationSummary,
}

impl AllocationReport {
    /// Splits the report into per-owner rows and the summary.
    pub fn into_parts(self) -> (Vec<OwnerAllocation>, AllocationSummary) {
        (self.allocations, self.summary)
    }

    /// Sum of owner mineral interests; above 1.0 when the tract is over-allocated.
    pub fn total_mi(&self) -> f64 {
        self.allocations.iter().map(|a| a.mi).sum()
    }
}

/// Allocation engine bound to one lease.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationCalculator {
    params: LeaseParameters,
}

impl AllocationCalculator {
    pub fn new(params: LeaseParameters) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &LeaseParameters {
        &self.params
    }

    /// Mineral interest for `leased_acres`; zero for a non-positive tract.
    #[inline]
    pub fn mineral_interest(&self, leased_acres: f64) -> f64 {
        if self.params.total_acres > 0.0 {
            leased_acres / self.params.total_acres
        } else {
            0.0
        }
    }

    /// Allocation for the owner at zero-based `index` (used for default naming).
    pub fn allocate_owner(&self, index: usize, owner: &OwnerInput) -> OwnerAllocation {
        let mi = self.mineral_interest(owner.leased_acres);
        let nri = mi * self.params.royalty_rate;
        OwnerAllocation {
            name: owner.display_name(index),
            leased_acres: owner.leased_acres,
            mi,
            nri,
            royalty_payment: self.params.gross_revenue * nri,
        }
    }

    /// Lease totals over already-computed owner rows.
    pub fn summarize(&self, allocations: &[OwnerAllocation]) -> AllocationSummary {
        let total_royalty_payment = allocations.iter().map(|a| a.royalty_payment).sum();
        let total_nri = allocations.iter().map(|a| a.nri).sum();
        let working_interest = self.params.working_interest();
        let working_interest_revenue = self.params.gross_revenue * working_interest;

        AllocationSummary {
            total_royalty_payment,
            total_nri,
            working_interest,
            working_interest_revenue,
            estimated_costs: self.params.estimated_costs,
            profit: working_interest_revenue - self.params.estimated_costs,
        }
    }

    /// Allocates every owner and aggregates the lease totals.
    pub fn compute(&self, owners: &[OwnerInput]) -> AllocationReport {
        #[cfg(feature = "parallel")]
        let allocations = owners
            .par_iter()
            .enumerate()
            .map(|(i, owner)| self.allocate_owner(i, owner))
            .collect::<Vec<_>>();
        #[cfg(not(feature = "parallel"))]
        let allocations = owners
            .iter()
            .enumerate()
            .map(|(i, owner)| self.allocate_owner(i, owner))
            .collect::<Vec<_>>();

        let summary = self.summarize(&allocations);
        tracing::debug!(
            owners = allocations.len(),
            total_royalty = summary.total_royalty_payment,
            "computed lease allocations"
        );

        AllocationReport {
            parameters: self.params,
            allocations,
            summary,
        }
    }
}

/// Computes owner allocations and lease totals for one request.
///
/// # Examples
/// ```
/// use openroyalty::allocation::compute_allocations;
/// use openroyalty::core::{LeaseParameters, OwnerInput};
///
/// let lease = LeaseParameters {
///     gross_revenue: 100_000.0,
///     total_acres: 160.0,
///     estimated_costs: 50_000.0,
///     royalty_rate: 0.125,
/// };
/// let owners = [OwnerInput::new("A", 80.0), OwnerInput::new("B", 80.0)];
/// let (rows, summary) = compute_allocations(&lease, &owners).into_parts();
///
/// assert_eq!(rows[0].royalty_payment, 6_250.0);
/// assert_eq!(summary.total_royalty_payment, 12_500.0);
/// ```
pub fn compute_allocations(params: &LeaseParameters, owners: &[OwnerInput]) -> AllocationReport {
    AllocationCalculator::new(*params).compute(owners)
}
