//! Configuration for risk metric computation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{validate_confidence, RiskError, RiskResult};

/// Parameters shared by the VaR measures in a [`RiskReport`](crate::RiskReport).
///
/// Every field has a default, so a TOML file only needs the values it changes:
///
/// ```toml
/// confidence = 0.99
/// window = 10
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// One-sided confidence level in `(0, 1)`.
    pub confidence: f64,

    /// Horizon multiplier for parametric VaR, applied as `√time_scale`.
    pub time_scale: f64,

    /// Days compounded into each historical return.
    pub window: usize,

    /// Covariance decay factor in `(0, 1]`; 1 weights all observations equally.
    pub lambda: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            confidence: 0.95,
            time_scale: 1.0,
            window: 1,
            lambda: 0.94, // RiskMetrics daily decay
        }
    }
}

impl RiskConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the confidence level.
    #[must_use]
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    /// Sets the horizon multiplier.
    #[must_use]
    pub fn with_time_scale(mut self, time_scale: f64) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Sets the historical window.
    #[must_use]
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Sets the covariance decay factor.
    #[must_use]
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    /// Checks every field is in range.
    pub fn validate(&self) -> RiskResult<()> {
        validate_confidence(self.confidence)?;
        if !(self.time_scale >= 0.0 && self.time_scale.is_finite()) {
            return Err(RiskError::invalid_input(format!(
                "time scale must be finite and non-negative, got {}",
                self.time_scale
            )));
        }
        if self.window == 0 {
            return Err(RiskError::invalid_input("window must be at least 1"));
        }
        if !(self.lambda > 0.0 && self.lambda <= 1.0) {
            return Err(RiskError::invalid_input(format!(
                "decay factor must be in (0, 1], got {}",
                self.lambda
            )));
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> RiskResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| RiskError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> RiskResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| RiskError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }
}
