//! Value at Risk (VaR) and Conditional VaR.
//!
//! All figures are returns, not currency amounts. Losses are negative.

mod conditional;
mod historical;
mod parametric;

pub use conditional::conditional_var;
pub use historical::{historical_var, rolling_compounded_returns};
pub use parametric::{parametric_var, standard_normal_quantile};

use serde::{Deserialize, Serialize};

/// VaR calculation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VaRMethod {
    /// Variance-covariance with a normal quantile
    Parametric,
    /// Empirical percentile of rolling compounded returns
    Historical,
    /// Mean of the tail beyond the historical percentile
    Conditional,
}

impl std::fmt::Display for VaRMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VaRMethod::Parametric => "Parametric",
            VaRMethod::Historical => "Historical",
            VaRMethod::Conditional => "Conditional",
        };
        write!(f, "{name}")
    }
}
