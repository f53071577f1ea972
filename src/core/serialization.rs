//! JSON helpers for allocation payloads.
//!
//! All data types in [`crate::core`] and [`crate::allocation`] derive serde, so reports and
//! inputs can be persisted or handed to other tools without a bespoke format.
//!
//! # Examples
//! ```rust
//! use openroyalty::allocation::compute_allocations;
//! use openroyalty::core::{from_json, to_json_pretty, LeaseParameters, OwnerInput};
//! use openroyalty::allocation::AllocationReport;
//!
//! let lease = LeaseParameters {
//!     gross_revenue: 100_000.0,
//!     total_acres: 160.0,
//!     estimated_costs: 50_000.0,
//!     royalty_rate: 0.1875,
//! };
//! let report = compute_allocations(&lease, &[OwnerInput::new("Smith", 160.0)]);
//!
//! let json = to_json_pretty(&report).expect("json serialization");
//! let decoded: AllocationReport = from_json(&json).expect("json deserialization");
//! assert_eq!(decoded, report);
//! ```

use serde::de::DeserializeOwned;

/// Serialize a value to pretty JSON.
pub fn to_json_pretty<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Deserialize a value from JSON.
pub fn from_json<T: DeserializeOwned>(payload: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(payload)
}
