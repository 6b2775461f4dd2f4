//! Order statistics: median, quantiles and percentiles.

use std::cmp::Ordering;

/// Interpolation rule between order statistics (Hyndman & Fan numbering).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantileDefinition {
    /// R8: `h = (n + 1/3) tau + 1/3`, approximately median-unbiased.
    #[default]
    MedianUnbiased,
    /// R7: `h = (n - 1) tau + 1`, the spreadsheet PERCENTILE rule.
    Linear,
}

/// A sorted copy of a sample, queried for any number of quantiles.
///
/// ```rust
/// use meridian_math::statistics::OrderStatistics;
///
/// let stats = OrderStatistics::new(&[3.0, 1.0, 4.0, 2.0]);
/// assert_eq!(stats.median(), 2.5);
/// assert_eq!(stats.order_statistic(1), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct OrderStatistics {
    sorted: Vec<f64>,
    has_nan: bool,
}

impl OrderStatistics {
    /// Sorts a copy of `data`.
    pub fn new(data: &[f64]) -> Self {
        let has_nan = data.iter().any(|x| x.is_nan());
        let mut sorted = data.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        Self { sorted, has_nan }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// True for an empty sample.
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Samples in ascending order.
    pub fn sorted(&self) -> &[f64] {
        &self.sorted
    }

    /// The k-th smallest sample, 1-based. `NaN` outside `1..=n`.
    pub fn order_statistic(&self, k: usize) -> f64 {
        if k == 0 || k > self.sorted.len() || self.has_nan {
            return f64::NAN;
        }
        self.sorted[k - 1]
    }

    /// Median (R8; the mean of the middle pair for even n).
    pub fn median(&self) -> f64 {
        self.quantile(0.5)
    }

    /// Quantile at `tau` in `[0, 1]` using [`QuantileDefinition::MedianUnbiased`].
    pub fn quantile(&self, tau: f64) -> f64 {
        self.quantile_with(tau, QuantileDefinition::default())
    }

    /// Percentile `p` in `[0, 100]`.
    pub fn percentile(&self, p: f64) -> f64 {
        self.quantile(p / 100.0)
    }

    /// Quantile with an explicit interpolation rule.
    ///
    /// `NaN` when empty, when `tau` is outside `[0, 1]`, or when the sample
    /// contains `NaN`.
    pub fn quantile_with(&self, tau: f64, definition: QuantileDefinition) -> f64 {
        if self.sorted.is_empty() || self.has_nan || !(0.0..=1.0).contains(&tau) {
            return f64::NAN;
        }

        let n = self.sorted.len() as f64;
        // h is a 1-based fractional rank
        let h = match definition {
            QuantileDefinition::MedianUnbiased => n * tau + (tau + 1.0) / 3.0,
            QuantileDefinition::Linear => (n - 1.0) * tau + 1.0,
        };
        self.interpolate_rank(h)
    }

    fn interpolate_rank(&self, h: f64) -> f64 {
        let n = self.sorted.len();
        if h <= 1.0 {
            return self.sorted[0];
        }
        if h >= n as f64 {
            return self.sorted[n - 1];
        }
        let lo = h.floor();
        let i = lo as usize; // 1 <= i < n
        let below = self.sorted[i - 1];
        let above = self.sorted[i];
        below + (h - lo) * (above - below)
    }
}

/// Median of a sample.
pub fn median(data: &[f64]) -> f64 {
    OrderStatistics::new(data).median()
}

/// Quantile of a sample at `tau` in `[0, 1]`.
pub fn quantile(data: &[f64], tau: f64) -> f64 {
    OrderStatistics::new(data).quantile(tau)
}

/// Percentile of a sample, `p` in `[0, 100]`.
pub fn percentile(data: &[f64], p: f64) -> f64 {
    OrderStatistics::new(data).percentile(p)
}
