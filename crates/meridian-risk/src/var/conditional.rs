//! Conditional VaR (expected shortfall) calculation.

use std::cmp::Ordering;

use super::historical::rolling_compounded_returns;
use crate::error::{validate_confidence, RiskResult};

/// Tolerance absorbing rounding in `n * (1 - confidence)` before flooring.
const TAIL_COUNT_TOLERANCE: f64 = 1e-9;

/// Mean of the worst `floor(n · (1 - confidence))` rolling compounded returns,
/// where `n` is the number of rolling returns.
///
/// `NaN` when that count is zero (too few observations for the tail).
///
/// # Errors
///
/// As for [`historical_var`](super::historical_var).
pub fn conditional_var(returns: &[f64], window: usize, confidence: f64) -> RiskResult<f64> {
    validate_confidence(confidence)?;
    let mut rolling = rolling_compounded_returns(returns, window)?;

    let tail = (rolling.len() as f64 * (1.0 - confidence) + TAIL_COUNT_TOLERANCE).floor() as usize;
    if tail == 0 {
        log::warn!(
            "no tail observations for CVaR: {} rolling returns at confidence {confidence}",
            rolling.len()
        );
        return Ok(f64::NAN);
    }

    rolling.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    Ok(rolling[..tail].iter().sum::<f64>() / tail as f64)
}
