//! One-call risk report over a return panel.

use serde::Serialize;

use crate::config::RiskConfig;
use crate::covariance::CovarianceMatrix;
use crate::error::{RiskError, RiskResult};
use crate::var::{conditional_var, historical_var, parametric_var};

/// Every VaR measure for one weighted portfolio.
///
/// Export only: a `NaN` conditional VaR serializes to JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    /// Variance-covariance VaR.
    pub parametric_var: f64,
    /// Percentile of rolling compounded portfolio returns.
    pub historical_var: f64,
    /// Mean of the tail beyond the historical VaR; `NaN` with too few returns.
    pub conditional_var: f64,
    /// `√(wᵀΣw + specific²)`, one period.
    pub portfolio_volatility: f64,
    /// Confidence level used.
    pub confidence: f64,
    /// Horizon multiplier used for the parametric figure.
    pub time_scale: f64,
    /// Historical window in days.
    pub window: usize,
}

/// Risk calculator bound to a validated [`RiskConfig`].
///
/// # Example
///
/// ```rust
/// use meridian_risk::{RiskConfig, RiskMetrics};
///
/// let metrics = RiskMetrics::new(RiskConfig::new().with_lambda(1.0)).unwrap();
/// let panel = vec![
///     vec![0.010, -0.020, 0.015, -0.005, 0.003],
///     vec![0.004, -0.010, 0.012, 0.001, -0.002],
/// ];
/// let report = metrics.report(&[0.5, 0.5], &panel, 0.0).unwrap();
/// assert!(report.parametric_var < 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RiskMetrics {
    config: RiskConfig,
}

impl RiskMetrics {
    /// Creates a calculator after validating `config`.
    pub fn new(config: RiskConfig) -> RiskResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &RiskConfig {
        &self.config
    }

    /// Covariance of `panel` with the configured decay factor.
    pub fn covariance<S: AsRef<[f64]>>(&self, panel: &[S]) -> RiskResult<CovarianceMatrix> {
        CovarianceMatrix::from_returns(panel, self.config.lambda)
    }

    /// Weighted sum of the series at each date: `Σᵢ wᵢ rᵢₜ`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when the weights do not match the series count or
    /// the series differ in length.
    pub fn portfolio_returns<S: AsRef<[f64]>>(
        &self,
        weights: &[f64],
        panel: &[S],
    ) -> RiskResult<Vec<f64>> {
        if weights.len() != panel.len() {
            return Err(RiskError::dimension_mismatch(panel.len(), weights.len()));
        }
        let observations = panel.first().map_or(0, |s| s.as_ref().len());
        let mut returns = vec![0.0; observations];
        for (weight, series) in weights.iter().zip(panel) {
            let series = series.as_ref();
            if series.len() != observations {
                return Err(RiskError::dimension_mismatch(observations, series.len()));
            }
            for (total, r) in returns.iter_mut().zip(series) {
                *total += weight * r;
            }
        }
        Ok(returns)
    }

    /// Parametric, historical and conditional VaR for `weights` over `panel`.
    ///
    /// `panel` holds one return series per asset, oldest first. The historical
    /// measures use the weighted portfolio return series.
    pub fn report<S: AsRef<[f64]>>(
        &self,
        weights: &[f64],
        panel: &[S],
        specific_risk: f64,
    ) -> RiskResult<RiskReport> {
        let config = &self.config;
        let covariance = self.covariance(panel)?;
        let variance = covariance.portfolio_variance(weights)?;
        let parametric = parametric_var(
            weights,
            &covariance,
            specific_risk,
            config.confidence,
            config.time_scale,
        )?;

        let returns = self.portfolio_returns(weights, panel)?;
        let historical = historical_var(&returns, config.window, config.confidence)?;
        let conditional = conditional_var(&returns, config.window, config.confidence)?;

        log::debug!(
            "risk report over {} assets and {} observations at {}: parametric {parametric}, historical {historical}",
            covariance.dimension(),
            covariance.observations(),
            config.confidence
        );

        Ok(RiskReport {
            parametric_var: parametric,
            historical_var: historical,
            conditional_var: conditional,
            portfolio_volatility: (variance + specific_risk * specific_risk).sqrt(),
            confidence: config.confidence,
            time_scale: config.time_scale,
            window: config.window,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::var::standard_normal_quantile;
    use approx::assert_relative_eq;

    fn panel() -> Vec<Vec<f64>> {
        vec![
            vec![0.010, -0.020, 0.015, -0.005, 0.003, 0.008, -0.012, 0.004],
            vec![0.004, -0.010, 0.012, 0.001, -0.002, 0.006, -0.007, 0.002],
        ]
    }

    #[test]
    fn test_new_validates() {
        assert!(RiskMetrics::new(RiskConfig::new().with_confidence(0.0)).is_err());
        assert!(RiskMetrics::new(RiskConfig::default()).is_ok());
    }

    #[test]
    fn test_portfolio_returns() {
        let metrics = RiskMetrics::new(RiskConfig::default()).unwrap();
        let returns = metrics.portfolio_returns(&[0.5, 0.5], &panel()).unwrap();
        assert_eq!(returns.len(), 8);
        assert_relative_eq!(returns[0], 0.007, epsilon = 1e-15);
        assert_relative_eq!(returns[1], -0.015, epsilon = 1e-15);

        assert!(metrics.portfolio_returns(&[1.0], &panel()).is_err());
        let ragged = vec![vec![0.01, 0.02], vec![0.01]];
        assert!(metrics.portfolio_returns(&[0.5, 0.5], &ragged).is_err());
    }

    #[test]
    fn test_report_matches_components() {
        let config = RiskConfig::new().with_lambda(1.0).with_confidence(0.9).with_window(2);
        let metrics = RiskMetrics::new(config).unwrap();
        let weights = [0.6, 0.4];
        let report = metrics.report(&weights, &panel(), 0.005).unwrap();

        let cov = CovarianceMatrix::from_returns(&panel(), 1.0).unwrap();
        let sigma = (cov.portfolio_variance(&weights).unwrap() + 0.005 * 0.005).sqrt();
        let z = standard_normal_quantile(0.9).unwrap();

        assert_relative_eq!(report.portfolio_volatility, sigma, epsilon = 1e-15);
        assert_relative_eq!(report.parametric_var, -z * sigma, epsilon = 1e-12);

        let returns = metrics.portfolio_returns(&weights, &panel()).unwrap();
        assert_eq!(report.historical_var, historical_var(&returns, 2, 0.9).unwrap());
        // 7 rolling returns at 90% leave no tail
        assert!(report.conditional_var.is_nan());
        assert_eq!(report.window, 2);

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["conditional_var"].is_null());
        assert_eq!(json["window"], 2);
    }

    #[test]
    fn test_report_propagates_dimension_errors() {
        let metrics = RiskMetrics::new(RiskConfig::default()).unwrap();
        assert!(matches!(
            metrics.report(&[1.0, 0.0, 0.0], &panel(), 0.0),
            Err(RiskError::DimensionMismatch { .. })
        ));
    }
}
