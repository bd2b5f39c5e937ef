//! Error types for wayfind
//!
//! Search engines never fail on their own: an unreachable target is reported
//! as `Ok(None)` and provider failures are handed back as the provider's own
//! error type. `WayfindError` covers the ambient surfaces around the engines,
//! namely configuration loading and logging setup.

mod macros;

use thiserror::Error;

/// Errors that can occur outside of the search engines themselves
#[derive(Error, Debug)]
pub enum WayfindError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl WayfindError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WayfindError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed operation
    pub fn failed_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        WayfindError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }
}

/// Result type alias for wayfind operations
pub type Result<T, E = WayfindError> = std::result::Result<T, E>;
