//! Elo rating calculations
//!
//! This module provides expected-score, rating-delta and match-outcome
//! computations for two competitors.

pub mod calculator;

// Re-export commonly used types
pub use calculator::EloCalculator;
