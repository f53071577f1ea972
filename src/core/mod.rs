//! Core domain types, serialization helpers, and library-wide error structures.

pub mod serialization;
pub mod types;

pub use serialization::*;
pub use types::*;

/// Boundary-level failures surfaced by the API.
///
/// The allocation arithmetic itself never fails; these errors come from validating
/// caller input, parsing owner/royalty text, and loading lease configuration files.
#[derive(Debug, thiserror::Error)]
pub enum AllocationError {
    /// Input validation error.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// More owners were supplied than the boundary allows.
    #[error("too many owners: {count} supplied, limit is {limit}")]
    TooManyOwners { count: usize, limit: usize },
    /// Owner or royalty text could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
    /// Lease configuration is inconsistent or unsupported.
    #[error("config error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

/// Library result alias.
pub type Result<T> = std::result::Result<T, AllocationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_failure() {
        let err = AllocationError::TooManyOwners {
            count: 12,
            limit: 10,
        };
        assert_eq!(err.to_string(), "too many owners: 12 supplied, limit is 10");

        let err = AllocationError::InvalidInput("total_acres must be > 0".to_string());
        assert_eq!(err.to_string(), "invalid input: total_acres must be > 0");
    }
}
