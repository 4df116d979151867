//! Error types for the sift crate.

use thiserror::Error;

/// Errors that can occur when building queries.
///
/// Executing a query never fails; empty inputs and absent fields are
/// represented in the results (`None`, exclusion), not as errors.
#[derive(Debug, Error)]
pub enum SiftError {
    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// Operator is not valid for the given value type.
    #[error("operator '{op}' is not valid for {value_type} values")]
    InvalidOperatorForType {
        op: &'static str,
        value_type: &'static str,
    },
}

/// Result type for sift operations.
pub type Result<T> = std::result::Result<T, SiftError>;
