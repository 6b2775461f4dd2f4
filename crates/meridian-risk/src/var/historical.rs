//! Historical VaR calculation.

use meridian_math::statistics::percentile;

use crate::error::{validate_confidence, RiskError, RiskResult};

/// Compounded returns over every run of `window` consecutive observations.
///
/// Each entry is `Π(1 + r) - 1` over the window; there are
/// `returns.len() - window + 1` of them, oldest first.
///
/// # Errors
///
/// `InvalidInput` for a zero window, `InsufficientData` when there are fewer
/// returns than the window.
pub fn rolling_compounded_returns(returns: &[f64], window: usize) -> RiskResult<Vec<f64>> {
    if window == 0 {
        return Err(RiskError::invalid_input("window must be at least 1"));
    }
    if returns.len() < window {
        return Err(RiskError::insufficient_data(format!(
            "{} returns for a {window}-day window",
            returns.len()
        )));
    }
    Ok(returns
        .windows(window)
        .map(|w| w.iter().map(|r| 1.0 + r).product::<f64>() - 1.0)
        .collect())
}

/// Historical VaR: the `(1 - confidence)` empirical percentile of rolling
/// `window`-day compounded returns.
///
/// # Errors
///
/// As for [`rolling_compounded_returns`], plus `InvalidInput` for a
/// confidence outside `(0, 1)`.
pub fn historical_var(returns: &[f64], window: usize, confidence: f64) -> RiskResult<f64> {
    validate_confidence(confidence)?;
    let rolling = rolling_compounded_returns(returns, window)?;
    Ok(percentile(&rolling, (1.0 - confidence) * 100.0))
}
