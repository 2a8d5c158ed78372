//! Elo rating configuration
//!
//! [`EloConfig`] is the full record stored on a calculator. [`EloOptions`] is
//! the partial form accepted on construction and reconfiguration, where every
//! unset field keeps whatever value it is merged over.

use crate::error::{EloError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default K-factor
pub const DEFAULT_K_FACTOR: f64 = 24.0;

/// Default rating scale
pub const DEFAULT_SCALE: f64 = 400.0;

/// Elo rating parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EloConfig {
    /// K-factor: maximum rating change for a single match
    pub k: f64,
    /// Scale: rating gap at which the stronger side is ten times as likely to win
    pub n: f64,
}

impl Default for EloConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_K_FACTOR,
            n: DEFAULT_SCALE,
        }
    }
}

impl EloConfig {
    /// Defaults with `options` merged over them
    pub fn from_options(options: EloOptions) -> Self {
        Self::default().merged(options)
    }

    /// Provisional players (few games played, ratings move fast)
    pub fn provisional() -> Self {
        Self {
            k: 40.0,
            n: DEFAULT_SCALE,
        }
    }

    /// Established players
    pub fn established() -> Self {
        Self {
            k: 20.0,
            n: DEFAULT_SCALE,
        }
    }

    /// Top-rated players (ratings move slowly)
    pub fn elite() -> Self {
        Self {
            k: 10.0,
            n: DEFAULT_SCALE,
        }
    }

    /// Shallow merge: every field set in `options` overwrites the stored one
    pub fn merged(&self, options: EloOptions) -> Self {
        Self {
            k: options.k.unwrap_or(self.k),
            n: options.n.unwrap_or(self.n),
        }
    }

    /// Parse a TOML table with optional `k` and `n` keys.
    /// Missing keys take the defaults.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let options = EloOptions::from_toml_str(input)?;
        let config = Self::from_options(options);
        debug!(k = config.k, n = config.n, "Loaded Elo configuration");
        Ok(config)
    }

    /// Validate configuration parameters.
    ///
    /// Nothing in the crate calls this implicitly; degenerate values are
    /// otherwise computed through as plain floating point.
    pub fn validate(&self) -> Result<()> {
        if !self.k.is_finite() {
            return Err(EloError::InvalidConfig {
                message: format!("K-factor must be finite, got {}", self.k),
            }
            .into());
        }

        if self.k < 0.0 {
            return Err(EloError::InvalidConfig {
                message: format!("K-factor must be non-negative, got {}", self.k),
            }
            .into());
        }

        if !self.n.is_finite() {
            return Err(EloError::InvalidConfig {
                message: format!("Scale must be finite, got {}", self.n),
            }
            .into());
        }

        if self.n == 0.0 {
            return Err(EloError::InvalidConfig {
                message: "Scale must not be zero".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Partial Elo configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EloOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<f64>,
}

impl EloOptions {
    /// Options with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_k(mut self, k: f64) -> Self {
        self.k = Some(k);
        self
    }

    pub fn with_n(mut self, n: f64) -> Self {
        self.n = Some(n);
        self
    }

    /// Parse a TOML table with optional `k` and `n` keys
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| {
            EloError::ConfigParse {
                message: e.to_string(),
            }
            .into()
        })
    }
}

impl From<EloConfig> for EloOptions {
    fn from(config: EloConfig) -> Self {
        Self {
            k: Some(config.k),
            n: Some(config.n),
        }
    }
}
