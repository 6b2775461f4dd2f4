//! Configuration for return decomposition.

use std::path::Path;

use meridian_core::Currency;
use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// Configuration for a [`ReturnDecomposer`](crate::ReturnDecomposer).
///
/// Controls the reporting currency, the price source and date parallelism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReturnConfig {
    /// Currency every value is converted into.
    pub reporting_currency: Currency,

    /// Price source passed to the price provider.
    pub price_source_id: String,

    /// Enable parallel processing across dates (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum business days in a period to trigger parallel processing.
    pub parallel_threshold: usize,
}

impl Default for ReturnConfig {
    fn default() -> Self {
        Self {
            reporting_currency: Currency::USD,
            price_source_id: "CLOSE".to_string(),
            parallel: true,
            parallel_threshold: 20, // about one month of dates
        }
    }
}

impl ReturnConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets the reporting currency.
    #[must_use]
    pub fn with_reporting_currency(mut self, currency: Currency) -> Self {
        self.reporting_currency = currency;
        self
    }

    /// Sets the price source.
    #[must_use]
    pub fn with_price_source(mut self, source_id: impl Into<String>) -> Self {
        self.price_source_id = source_id.into();
        self
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }

    /// Checks the configuration is usable.
    pub fn validate(&self) -> PortfolioResult<()> {
        if self.price_source_id.trim().is_empty() {
            return Err(PortfolioError::config("price source id is empty"));
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> PortfolioResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| PortfolioError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| PortfolioError::config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }
}
