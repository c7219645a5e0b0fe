//! Error types for stream construction and seeding
//!
//! Every failure is detected before any state is touched: a call that
//! returns `Err` leaves the instance and the factory exactly as they were.

use thiserror::Error;

/// Errors raised by seeding, data replacement and configuration
#[derive(Debug, Error, PartialEq)]
pub enum RngError {
    /// Linear seed is the zero vector or the reserved fixed point
    #[error("Invalid linear seed: {reason}")]
    InvalidSeed { reason: String },

    /// Nonlinear seed or component data is malformed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation not allowed once streams have been constructed
    #[error("Illegal state: {0}")]
    IllegalState(String),

    /// Configuration document could not be parsed
    #[error("Invalid config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for RngError {
    fn from(err: serde_json::Error) -> Self {
        RngError::Config(err.to_string())
    }
}
