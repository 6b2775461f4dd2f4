//! Descriptive statistics.
//!
//! Two strategies compute the same moments:
//!
//! - [`descriptive`]: batch functions over slices (two-pass)
//! - [`RunningStatistics`] / [`RunningCovariance`]: single-pass accumulators
//!
//! Order statistics (median, quantiles) live in [`OrderStatistics`].

pub mod descriptive;
mod order;
mod running;

pub use descriptive::{
    correlation, covariance, entropy, geometric_mean, harmonic_mean, maximum, maximum_abs, mean,
    minimum, minimum_abs, population_covariance, population_std_dev, population_variance,
    root_mean_square, std_dev, variance,
};
pub use order::{median, percentile, quantile, OrderStatistics, QuantileDefinition};
pub use running::{RunningCovariance, RunningStatistics};
