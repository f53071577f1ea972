//! Non-fatal data-quality checks for allocation inputs.
//!
//! The calculator computes over-leased and degenerate tracts silently. These checks let a
//! boundary layer tell the user about them without refusing the calculation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{LeaseParameters, OwnerInput};

/// Tolerance for comparing summed acreage against the tract.
const ACRE_TOLERANCE: f64 = 1.0e-9;

/// Suspicious but computable input condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AllocationWarning {
    /// Tract has no positive acreage; every MI is defined as zero.
    DegenerateTract { total_acres: f64 },
    /// One owner leases more acres than the tract holds.
    OwnerExceedsTract {
        name: String,
        leased_acres: f64,
        total_acres: f64,
    },
    /// Owners together lease more acres than the tract holds.
    OverAllocated { leased_acres: f64, total_acres: f64 },
}

impl fmt::Display for AllocationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateTract { total_acres } => write!(
                f,
                "total acres is {total_acres}; mineral interest is zero for every owner"
            ),
            Self::OwnerExceedsTract {
                name,
                leased_acres,
                total_acres,
            } => write!(
                f,
                "{name} leases {leased_acres} acres of a {total_acres}-acre tract (MI above 100%)"
            ),
            Self::OverAllocated {
                leased_acres,
                total_acres,
            } => write!(
                f,
                "owners lease {leased_acres} acres in total, more than the {total_acres}-acre tract"
            ),
        }
    }
}

/// Collects warnings for `owners` on the given lease, in input order.
pub fn allocation_warnings(
    params: &LeaseParameters,
    owners: &[OwnerInput],
) -> Vec<AllocationWarning> {
    let total_acres = params.total_acres;
    if total_acres <= 0.0 {
        return vec![AllocationWarning::DegenerateTract { total_acres }];
    }

    let mut warnings: Vec<_> = owners
        .iter()
        .enumerate()
        .filter(|(_, o)| o.leased_acres > total_acres + ACRE_TOLERANCE)
        .map(|(i, o)| AllocationWarning::OwnerExceedsTract {
            name: o.display_name(i),
            leased_acres: o.leased_acres,
            total_acres,
        })
        .collect();

    let leased_acres: f64 = owners.iter().map(|o| o.leased_acres).sum();
    if leased_acres > total_acres + ACRE_TOLERANCE {
        warnings.push(AllocationWarning::OverAllocated {
            leased_acres,
            total_acres,
        });
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lease(total_acres: f64) -> LeaseParameters {
        LeaseParameters {
            gross_revenue: 100_000.0,
            total_acres,
            estimated_costs: 0.0,
            royalty_rate: 0.125,
        }
    }

    #[test]
    fn fully_allocated_tract_is_clean() {
        let owners = [OwnerInput::new("A", 80.0), OwnerInput::new("B", 80.0)];
        assert!(allocation_warnings(&lease(160.0), &owners).is_empty());
    }

    #[test]
    fn flags_sum_above_tract() {
        let owners = [OwnerInput::new("A", 100.0), OwnerInput::new("B", 100.0)];
        let warnings = allocation_warnings(&lease(160.0), &owners);
        assert_eq!(
            warnings,
            vec![AllocationWarning::OverAllocated {
                leased_acres: 200.0,
                total_acres: 160.0
            }]
        );
    }

    #[test]
    fn flags_single_owner_above_tract_by_display_name() {
        let owners = [OwnerInput::unnamed(200.0)];
        let warnings = allocation_warnings(&lease(160.0), &owners);
        assert_eq!(warnings.len(), 2);
        assert!(matches!(
            &warnings[0],
            AllocationWarning::OwnerExceedsTract { name, .. } if name == "Owner 1"
        ));
        assert!(warnings[0].to_string().contains("MI above 100%"));
    }

    #[test]
    fn degenerate_tract_short_circuits() {
        let owners = [OwnerInput::new("A", 10.0)];
        assert_eq!(
            allocation_warnings(&lease(0.0), &owners),
            vec![AllocationWarning::DegenerateTract { total_acres: 0.0 }]
        );
    }
}
