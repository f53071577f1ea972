use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{AllocationError, Result};

/// Standard lease royalty fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoyaltyPreset {
    /// 1/8 = 12.5%.
    #[serde(rename = "1/8")]
    OneEighth,
    /// 3/16 = 18.75%.
    #[default]
    #[serde(rename = "3/16")]
    ThreeSixteenths,
    /// 1/5 = 20%.
    #[serde(rename = "1/5")]
    OneFifth,
    /// 1/4 = 25%.
    #[serde(rename = "1/4")]
    OneQuarter,
}

impl RoyaltyPreset {
    pub const ALL: [Self; 4] = [
        Self::OneEighth,
        Self::ThreeSixteenths,
        Self::OneFifth,
        Self::OneQuarter,
    ];

    /// Royalty as a percentage in [0, 100].
    pub fn percent(self) -> f64 {
        match self {
            Self::OneEighth => 12.5,
            Self::ThreeSixteenths => 18.75,
            Self::OneFifth => 20.0,
            Self::OneQuarter => 25.0,
        }
    }

    /// Royalty as a decimal rate in [0, 1].
    pub fn rate(self) -> f64 {
        self.percent() / 100.0
    }

    pub fn as_fraction(self) -> &'static str {
        match self {
            Self::OneEighth => "1/8",
            Self::ThreeSixteenths => "3/16",
            Self::OneFifth => "1/5",
            Self::OneQuarter => "1/4",
        }
    }
}

impl fmt::Display for RoyaltyPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% ({})", self.percent(), self.as_fraction())
    }
}

impl FromStr for RoyaltyPreset {
    type Err = AllocationError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_fraction() == key)
            .ok_or_else(|| {
                AllocationError::Parse(format!(
                    "unknown royalty preset `{key}`; expected one of 1/8, 3/16, 1/5, 1/4"
                ))
            })
    }
}

/// Lease-wide inputs shared by every owner in one calculation.
///
/// Fields are public so callers can express degenerate states (for example a zero-acre
/// tract); [`LeaseParametersBuilder`] enforces the documented ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeaseParameters {
    /// Gross production revenue in dollars.
    pub gross_revenue: f64,
    /// Total tract acreage.
    pub total_acres: f64,
    /// Estimated drilling and operating costs in dollars.
    pub estimated_costs: f64,
    /// Lease royalty as a decimal in [0, 1].
    pub royalty_rate: f64,
}

impl LeaseParameters {
    /// Creates a [`LeaseParametersBuilder`].
    ///
    /// # Examples
    /// ```
    /// use openroyalty::core::{LeaseParameters, RoyaltyPreset};
    ///
    /// let lease = LeaseParameters::builder()
    ///     .gross_revenue(100_000.0)
    ///     .total_acres(160.0)
    ///     .estimated_costs(50_000.0)
    ///     .royalty_preset(RoyaltyPreset::ThreeSixteenths)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(lease.royalty_rate, 0.1875);
    /// ```
    #[inline]
    pub fn builder() -> LeaseParametersBuilder {
        LeaseParametersBuilder::default()
    }

    /// Operator share of revenue after royalty obligations.
    #[inline]
    pub fn working_interest(&self) -> f64 {
        1.0 - self.royalty_rate
    }

    /// Checks the ranges a boundary caller is expected to guarantee.
    ///
    /// # Errors
    /// Returns [`AllocationError::InvalidInput`] for non-finite values, negative revenue or
    /// costs, a non-positive tract, or a royalty rate outside [0, 1].
    pub fn validate(&self) -> Result<()> {
        check_non_negative("gross_revenue", self.gross_revenue)?;
        check_non_negative("estimated_costs", self.estimated_costs)?;
        if !self.total_acres.is_finite() || self.total_acres <= 0.0 {
            return Err(AllocationError::InvalidInput(format!(
                "total_acres must be finite and > 0, got {}",
                self.total_acres
            )));
        }
        if !self.royalty_rate.is_finite() || !(0.0..=1.0).contains(&self.royalty_rate) {
            return Err(AllocationError::InvalidInput(format!(
                "royalty_rate must be in [0, 1], got {}",
                self.royalty_rate
            )));
        }
        Ok(())
    }
}

fn check_non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AllocationError::InvalidInput(format!(
            "{field} must be finite and >= 0, got {value}"
        )));
    }
    Ok(())
}

/// Builder for [`LeaseParameters`].
#[derive(Debug, Clone, Default)]
pub struct LeaseParametersBuilder {
    gross_revenue: Option<f64>,
    total_acres: Option<f64>,
    estimated_costs: Option<f64>,
    royalty_rate: Option<f64>,
}

impl LeaseParametersBuilder {
    #[inline]
    pub fn gross_revenue(mut self, gross_revenue: f64) -> Self {
        self.gross_revenue = Some(gross_revenue);
        self
    }

    #[inline]
    pub fn total_acres(mut self, total_acres: f64) -> Self {
        self.total_acres = Some(total_acres);
        self
    }

    /// Defaults to zero when unset.
    #[inline]
    pub fn estimated_costs(mut self, estimated_costs: f64) -> Self {
        self.estimated_costs = Some(estimated_costs);
        self
    }

    /// Sets the royalty as a decimal rate.
    #[inline]
    pub fn royalty_rate(mut self, rate: f64) -> Self {
        self.royalty_rate = Some(rate);
        self
    }

    /// Sets the royalty as a percentage (18.75 for 3/16).
    #[inline]
    pub fn royalty_percent(mut self, percent: f64) -> Self {
        self.royalty_rate = Some(percent / 100.0);
        self
    }

    #[inline]
    pub fn royalty_preset(mut self, preset: RoyaltyPreset) -> Self {
        self.royalty_rate = Some(preset.rate());
        self
    }

    /// Validates and builds [`LeaseParameters`].
    ///
    /// # Errors
    /// Returns [`AllocationError::InvalidInput`] when revenue, acreage or royalty is missing,
    /// or when any value fails [`LeaseParameters::validate`].
    pub fn build(self) -> Result<LeaseParameters> {
        let gross_revenue = self.gross_revenue.ok_or_else(|| {
            AllocationError::InvalidInput("gross_revenue is required".to_string())
        })?;
        let total_acres = self
            .total_acres
            .ok_or_else(|| AllocationError::InvalidInput("total_acres is required".to_string()))?;
        let royalty_rate = self
            .royalty_rate
            .ok_or_else(|| AllocationError::InvalidInput("royalty rate is required".to_string()))?;

        let params = LeaseParameters {
            gross_revenue,
            total_acres,
            estimated_costs: self.estimated_costs.unwrap_or(0.0),
            royalty_rate,
        };
        params.validate()?;
        Ok(params)
    }
}

/// One mineral owner's input row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OwnerInput {
    /// Owner name; blank names are replaced by `Owner {n}` when allocating.
    #[serde(default)]
    pub name: String,
    /// Acres leased from this owner.
    #[serde(default)]
    pub leased_acres: f64,
}

impl OwnerInput {
    pub fn new(name: impl Into<String>, leased_acres: f64) -> Self {
        Self {
            name: name.into(),
            leased_acres,
        }
    }

    /// Owner with a blank name, to be labelled by position.
    pub fn unnamed(leased_acres: f64) -> Self {
        Self::new(String::new(), leased_acres)
    }

    /// Name to report for the owner at zero-based `index`.
    pub fn display_name(&self, index: usize) -> String {
        if self.name.trim().is_empty() {
            default_owner_name(index)
        } else {
            self.name.clone()
        }
    }

    /// Rejects negative or non-finite acreage.
    pub fn validate(&self) -> Result<()> {
        if !self.leased_acres.is_finite() || self.leased_acres < 0.0 {
            return Err(AllocationError::InvalidInput(format!(
                "leased_acres for `{}` must be finite and >= 0, got {}",
                self.name, self.leased_acres
            )));
        }
        Ok(())
    }
}

/// Generated label for the owner at zero-based `index`.
pub fn default_owner_name(index: usize) -> String {
    format!("Owner {}", index + 1)
}

impl FromStr for OwnerInput {
    type Err = AllocationError;

    /// Parses `NAME=ACRES` or a bare `ACRES`.
    fn from_str(s: &str) -> Result<Self> {
        let (name, acres) = match s.rfind('=') {
            Some(idx) => (s[..idx].trim(), s[idx + 1..].trim()),
            None => ("", s.trim()),
        };
        let leased_acres: f64 = acres.parse().map_err(|_| {
            AllocationError::Parse(format!("invalid leased acres `{acres}` in owner `{s}`"))
        })?;
        let owner = Self::new(name, leased_acres);
        owner.validate()?;
        Ok(owner)
    }
}

/// Derived allocation for one owner. Values are unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerAllocation {
    pub name: String,
    pub leased_acres: f64,
    /// Mineral interest: leased acres / total acres.
    pub mi: f64,
    /// Net revenue interest: MI x royalty rate.
    pub nri: f64,
    /// Gross revenue x NRI.
    pub royalty_payment: f64,
}

/// Lease-level totals for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationSummary {
    pub total_royalty_payment: f64,
    pub total_nri: f64,
    /// 1 - royalty rate.
    pub working_interest: f64,
    pub working_interest_revenue: f64,
    pub estimated_costs: f64,
    /// WI revenue less estimated costs; negative for a loss.
    pub profit: f64,
}
