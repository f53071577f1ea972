//! Royalty allocation namespace.
//!
//! This module wires and re-exports:
//! - `calculator`: per-owner MI/NRI/royalty arithmetic and lease-level WI/profit totals,
//! - `warnings`: non-fatal over-allocation and degenerate-tract checks for boundary callers.
//!
//! It also hosts [`validate_owners`], the input gate a boundary applies before computing.

pub mod calculator;
pub mod warnings;

pub use calculator::{AllocationCalculator, AllocationReport, compute_allocations};
pub use warnings::{AllocationWarning, allocation_warnings};

use crate::core::{AllocationError, OwnerInput, Result};

/// Owner cap applied by the interactive front ends.
pub const DEFAULT_MAX_OWNERS: usize = 10;

/// Checks owner count against `max_owners` and every row's acreage.
///
/// The calculator itself has no owner limit; this is caller policy.
pub fn validate_owners(owners: &[OwnerInput], max_owners: usize) -> Result<()> {
    if owners.len() > max_owners {
        return Err(AllocationError::TooManyOwners {
            count: owners.len(),
            limit: max_owners,
        });
    }
    owners.iter().try_for_each(OwnerInput::validate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_cap_is_enforced() {
        let owners = vec![OwnerInput::unnamed(1.0); DEFAULT_MAX_OWNERS + 1];
        assert!(matches!(
            validate_owners(&owners, DEFAULT_MAX_OWNERS),
            Err(AllocationError::TooManyOwners { count: 11, limit: 10 })
        ));
        assert!(validate_owners(&owners[..DEFAULT_MAX_OWNERS], DEFAULT_MAX_OWNERS).is_ok());
    }

    #[test]
    fn negative_acreage_is_rejected() {
        let owners = [OwnerInput::new("A", 1.0), OwnerInput::new("B", -2.0)];
        assert!(matches!(
            validate_owners(&owners, DEFAULT_MAX_OWNERS),
            Err(AllocationError::InvalidInput(_))
        ));
    }
}
