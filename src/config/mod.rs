//! Configuration management for Elo calculations
//!
//! This module holds the rating parameters, their defaults and presets,
//! and loading from TOML or JSON.

pub mod rating;

// Re-export commonly used types
pub use rating::{EloConfig, EloOptions, DEFAULT_K_FACTOR, DEFAULT_SCALE};
