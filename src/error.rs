//! Error types for the rating library
//!
//! The rating computations themselves never fail. Errors only come out of
//! configuration loading and the opt-in validation step.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for configuration handling
#[derive(Debug, thiserror::Error)]
pub enum EloError {
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Failed to parse configuration: {message}")]
    ConfigParse { message: String },
}
