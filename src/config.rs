//! Lease input files.
//!
//! A lease file has three optional sections. Missing values fall back to the calculator's
//! interactive defaults ($100,000 revenue, 160 acres, $50,000 costs, 3/16 royalty, two blank
//! owners, at most 10 owners):
//!
//! ```toml
//! [lease]
//! gross_revenue = 250000.0
//! total_acres = 640.0
//! estimated_costs = 90000.0
//! royalty = "1/5"            # or: royalty_percent = 22.5
//!
//! [[owners]]
//! name = "Smith Family Trust"
//! leased_acres = 320.0
//!
//! [export]
//! csv_path = "owner_breakdown.csv"
//! max_owners = 10
//! ```
//!
//! The same structure is accepted as JSON when the file extension is `.json`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::allocation::{DEFAULT_MAX_OWNERS, validate_owners};
use crate::core::{AllocationError, LeaseParameters, OwnerInput, Result, RoyaltyPreset};

/// Complete lease input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaseConfig {
    pub lease: LeaseSection,
    pub owners: Vec<OwnerInput>,
    pub export: ExportSection,
}

/// Lease-wide parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaseSection {
    pub gross_revenue: f64,
    pub total_acres: f64,
    pub estimated_costs: f64,
    /// Standard royalty fraction. Mutually exclusive with `royalty_percent`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub royalty: Option<RoyaltyPreset>,
    /// Custom royalty percentage in [0, 100].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub royalty_percent: Option<f64>,
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSection {
    /// CSV destination. Unset = no CSV written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv_path: Option<PathBuf>,
    pub max_owners: usize,
}

impl Default for LeaseConfig {
    fn default() -> Self {
        Self {
            lease: LeaseSection::default(),
            owners: vec![OwnerInput::unnamed(0.0), OwnerInput::unnamed(0.0)],
            export: ExportSection::default(),
        }
    }
}

impl Default for LeaseSection {
    fn default() -> Self {
        Self {
            gross_revenue: 100_000.0,
            total_acres: 160.0,
            estimated_costs: 50_000.0,
            royalty: None,
            royalty_percent: None,
        }
    }
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            csv_path: None,
            max_owners: DEFAULT_MAX_OWNERS,
        }
    }
}

impl LeaseSection {
    /// Decimal royalty rate; preset 3/16 when neither field is set.
    pub fn royalty_rate(&self) -> Result<f64> {
        match (self.royalty, self.royalty_percent) {
            (Some(_), Some(_)) => Err(AllocationError::Config(
                "set either `royalty` or `royalty_percent`, not both".to_string(),
            )),
            (Some(preset), None) => Ok(preset.rate()),
            (None, Some(percent)) => {
                if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
                    return Err(AllocationError::Config(format!(
                        "royalty_percent must be in [0, 100], got {percent}"
                    )));
                }
                Ok(percent / 100.0)
            }
            (None, None) => Ok(RoyaltyPreset::default().rate()),
        }
    }
}

impl LeaseConfig {
    /// Loads a `.toml` or `.json` lease file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let config = match ext.as_deref() {
            Some("toml") => Self::from_toml_str(&raw)?,
            Some("json") => Self::from_json_str(&raw)?,
            other => {
                return Err(AllocationError::Config(format!(
                    "unsupported lease file extension {other:?} for {}; use .toml or .json",
                    path.display()
                )));
            }
        };
        tracing::info!(
            path = %path.display(),
            owners = config.owners.len(),
            "loaded lease config"
        );
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Validated lease parameters.
    pub fn lease_parameters(&self) -> Result<LeaseParameters> {
        LeaseParameters::builder()
            .gross_revenue(self.lease.gross_revenue)
            .total_acres(self.lease.total_acres)
            .estimated_costs(self.lease.estimated_costs)
            .royalty_rate(self.lease.royalty_rate()?)
            .build()
    }

    /// Owners after count and acreage checks.
    pub fn validated_owners(&self) -> Result<&[OwnerInput]> {
        validate_owners(&self.owners, self.export.max_owners)?;
        Ok(&self.owners)
    }
}
