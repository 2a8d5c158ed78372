//! Elo rating calculator
//!
//! All computations are pure functions of their arguments and the stored
//! [`EloConfig`]. Invalid numeric input (NaN, infinities, negative or zero
//! parameters) is never rejected; it propagates through IEEE-754 arithmetic.

use crate::config::{EloConfig, EloOptions};
use crate::error::{EloError, Result};
use crate::types::{MatchResult, Outcome, Rating, Score};
use tracing::{debug, trace, warn};

/// Calculates expected scores and rating changes for two-player matches
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EloCalculator {
    config: EloConfig,
}

impl EloCalculator {
    /// Create a calculator with `options` merged over the defaults
    pub fn new(options: EloOptions) -> Self {
        Self::with_config(EloConfig::from_options(options))
    }

    /// Create a calculator with a complete configuration
    pub fn with_config(config: EloConfig) -> Self {
        debug!(k = config.k, n = config.n, "Created Elo calculator");
        Self { config }
    }

    /// Like [`EloCalculator::new`], but rejects degenerate parameters
    pub fn try_new(options: EloOptions) -> Result<Self> {
        let config = EloConfig::from_options(options);
        config.validate()?;

        Ok(Self::with_config(config))
    }

    /// Current configuration
    pub fn config(&self) -> &EloConfig {
        &self.config
    }

    /// Merge `options` over the current configuration
    pub fn set_options(&mut self, options: EloOptions) {
        self.config = self.config.merged(options);
        debug!(
            k = self.config.k,
            n = self.config.n,
            "Updated Elo configuration"
        );
    }

    /// Merge a JSON object over the current configuration.
    ///
    /// Numeric `k` and `n` keys are applied, other keys are ignored. A
    /// non-object value or a non-numeric `k`/`n` leaves the configuration
    /// untouched.
    pub fn update_config(&mut self, config: serde_json::Value) -> Result<()> {
        let Some(fields) = config.as_object() else {
            warn!("Rejected Elo configuration update: not a JSON object");
            return Err(EloError::InvalidConfig {
                message: format!("expected a JSON object, got {}", config),
            }
            .into());
        };

        let mut options = EloOptions::new();
        for (key, slot) in [("k", &mut options.k), ("n", &mut options.n)] {
            if let Some(value) = fields.get(key) {
                match value.as_f64() {
                    Some(number) => *slot = Some(number),
                    None => {
                        warn!(key, %value, "Rejected Elo configuration update");
                        return Err(EloError::InvalidConfig {
                            message: format!("'{}' must be a number, got {}", key, value),
                        }
                        .into());
                    }
                }
            }
        }

        self.set_options(options);
        Ok(())
    }

    /// Probability that A beats B: `1 / (1 + 10^((b - a) / n))`.
    ///
    /// `n` overrides the stored scale for this call only.
    pub fn expected_score(&self, rating_a: Rating, rating_b: Rating, n: Option<f64>) -> f64 {
        let n = n.unwrap_or(self.config.n);
        let expected = 1.0 / (1.0 + 10f64.powf((rating_b - rating_a) / n));
        trace!(rating_a, rating_b, n, expected, "Computed expected score");
        expected
    }

    /// Signed change to A's rating: `k * (score - expected)`.
    ///
    /// B's change is the negation.
    pub fn rating_delta(
        &self,
        rating_a: Rating,
        rating_b: Rating,
        score: Score,
        k: Option<f64>,
        n: Option<f64>,
    ) -> f64 {
        let k = k.unwrap_or(self.config.k);
        k * (score - self.expected_score(rating_a, rating_b, n))
    }

    /// A's rating after the match
    pub fn new_rating(
        &self,
        rating_a: Rating,
        rating_b: Rating,
        score: Score,
        k: Option<f64>,
        n: Option<f64>,
    ) -> Rating {
        rating_a + self.rating_delta(rating_a, rating_b, score, k, n)
    }

    /// Rating changes for both sides. A gains exactly what B loses.
    pub fn outcome(
        &self,
        rating_a: Rating,
        rating_b: Rating,
        score: Score,
        k: Option<f64>,
        n: Option<f64>,
    ) -> Outcome {
        let delta = self.rating_delta(rating_a, rating_b, score, k, n);
        trace!(rating_a, rating_b, score, delta, "Computed match outcome");
        Outcome::from_delta(rating_a, rating_b, delta)
    }

    /// [`EloCalculator::outcome`] for a decided result with the stored configuration
    pub fn outcome_for(&self, rating_a: Rating, rating_b: Rating, result: MatchResult) -> Outcome {
        self.outcome(rating_a, rating_b, result.score(), None, None)
    }
}
