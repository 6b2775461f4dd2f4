//! Parametric (variance-covariance) VaR calculation.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::covariance::CovarianceMatrix;
use crate::error::{validate_confidence, RiskError, RiskResult};

/// Inverse standard normal CDF at `p`.
pub fn standard_normal_quantile(p: f64) -> RiskResult<f64> {
    let normal = Normal::new(0.0, 1.0)
        .map_err(|err| RiskError::CalculationFailed(format!("standard normal: {err}")))?;
    Ok(normal.inverse_cdf(p))
}

/// Parametric VaR of a weighted portfolio.
///
/// `variance = wᵀΣw + specific_risk²`, and
/// `VaR = -Φ⁻¹(confidence) · √variance · √time_scale`, a negative number for
/// confidence above one half. `specific_risk` is an idiosyncratic volatility
/// assumed uncorrelated with the factors in `covariance`.
///
/// # Errors
///
/// - `InvalidInput` for a confidence outside `(0, 1)` or a negative time scale
/// - `DimensionMismatch` when `weights` and `covariance` disagree
pub fn parametric_var(
    weights: &[f64],
    covariance: &CovarianceMatrix,
    specific_risk: f64,
    confidence: f64,
    time_scale: f64,
) -> RiskResult<f64> {
    validate_confidence(confidence)?;
    if !(time_scale >= 0.0 && time_scale.is_finite()) {
        return Err(RiskError::invalid_input(format!(
            "time scale must be finite and non-negative, got {time_scale}"
        )));
    }

    let variance = covariance.portfolio_variance(weights)?;
    let specific = specific_risk * specific_risk;
    let sigma = (variance + specific).sqrt();
    let z = standard_normal_quantile(confidence)?;

    Ok(-z * sigma * time_scale.sqrt())
}
