//! Elo Rating - rating updates for two-competitor matches
//!
//! This crate computes expected scores, rating deltas, updated ratings and
//! zero-sum match outcomes from a small, tunable configuration (K-factor and
//! scale).

pub mod config;
pub mod error;
pub mod rating;
pub mod types;

// Re-export commonly used types
pub use error::{EloError, Result};
pub use types::*;

// Re-export key components
pub use config::{EloConfig, EloOptions};
pub use rating::EloCalculator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
