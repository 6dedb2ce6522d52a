//! Error model shared across the engine.

use thiserror::Error;

/// Result type used across the analytics layers.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Failure taxonomy for the engine.
///
/// Every failure a request can hit falls into one of three kinds, and the
/// API layer routes each kind to a distinct HTTP status. Keep infrastructure
/// detail (driver errors, SQL text) out of the messages where possible.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// The request itself was malformed (missing/invalid fields).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The data store could not be reached or a query failed.
    #[error("data access failed: {0}")]
    DataAccess(String),

    /// A computation produced an unusable result.
    #[error("computation failed: {0}")]
    Computation(String),
}

impl AnalyticsError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn data_access(msg: impl Into<String>) -> Self {
        Self::DataAccess(msg.into())
    }

    pub fn computation(msg: impl Into<String>) -> Self {
        Self::Computation(msg.into())
    }
}
