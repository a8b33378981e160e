//! Unified error type definition.

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use classboard_client::ApiError;

/// Core layer error type.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Validation error (bad caller input).
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// API error (converted from the client library).
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, bad credentials, etc.),
    /// used for log leveling.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ValidationError(_) => true,
            Self::Api(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
