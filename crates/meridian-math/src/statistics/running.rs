//! Single-pass (streaming) estimators.
//!
//! Welford's update keeps a running mean and centred second moment, so the
//! results agree with the two-pass batch functions up to rounding. Two
//! accumulators built over disjoint chunks combine with [`RunningStatistics::merge`]
//! (Chan, Golub & LeVeque pairwise update).

use crate::error::{ensure_same_length, MathResult};

/// Streaming mean, variance and extremes of a univariate sample.
///
/// ```rust
/// use meridian_math::statistics::RunningStatistics;
///
/// let stats: RunningStatistics = [2.0, 4.0, 4.0, 5.0, 10.0].into_iter().collect();
/// assert_eq!(stats.mean(), 5.0);
/// assert!((stats.variance() - 9.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningStatistics {
    count: u64,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl Default for RunningStatistics {
    fn default() -> Self {
        Self::new()
    }
}

/// Extreme update that lets a `NaN` sample poison the result.
fn propagate(acc: f64, x: f64, pick: fn(f64, f64) -> f64) -> f64 {
    if acc.is_nan() || x.is_nan() {
        f64::NAN
    } else {
        pick(acc, x)
    }
}

impl RunningStatistics {
    /// An empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Adds one observation.
    pub fn push(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
        self.min = propagate(self.min, x, f64::min);
        self.max = propagate(self.max, x, f64::max);
    }

    /// Combines with an accumulator built over a disjoint sample.
    pub fn merge(&mut self, other: &Self) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = *other;
            return;
        }
        let (na, nb) = (self.count as f64, other.count as f64);
        let n = na + nb;
        let delta = other.mean - self.mean;
        self.mean += delta * nb / n;
        self.m2 += other.m2 + delta * delta * na * nb / n;
        self.count += other.count;
        self.min = propagate(self.min, other.min, f64::min);
        self.max = propagate(self.max, other.max, f64::max);
    }

    /// Number of observations.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Mean. `NaN` when empty.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.mean
        }
    }

    /// Sample variance. `NaN` for fewer than two observations.
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            f64::NAN
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    /// Population variance. `NaN` when empty.
    pub fn population_variance(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.m2 / self.count as f64
        }
    }

    /// Sample standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Population standard deviation.
    pub fn population_std_dev(&self) -> f64 {
        self.population_variance().sqrt()
    }

    /// Smallest observation. `NaN` when empty.
    pub fn minimum(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.min
        }
    }

    /// Largest observation. `NaN` when empty.
    pub fn maximum(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.max
        }
    }
}

impl Extend<f64> for RunningStatistics {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for x in iter {
            self.push(x);
        }
    }
}

impl FromIterator<f64> for RunningStatistics {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

/// Streaming covariance and correlation of paired observations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunningCovariance {
    count: u64,
    mean_x: f64,
    mean_y: f64,
    m2_x: f64,
    m2_y: f64,
    co_moment: f64,
}

impl RunningCovariance {
    /// An empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one `(x, y)` pair.
    pub fn push(&mut self, x: f64, y: f64) {
        self.count += 1;
        let n = self.count as f64;
        let dx = x - self.mean_x;
        let dy = y - self.mean_y;
        self.mean_x += dx / n;
        self.mean_y += dy / n;
        self.m2_x += dx * (x - self.mean_x);
        self.m2_y += dy * (y - self.mean_y);
        self.co_moment += dx * (y - self.mean_y);
    }

    /// Adds every pair from two parallel slices.
    ///
    /// # Errors
    ///
    /// `MathError::LengthMismatch` when the slices differ in length; nothing
    /// is added in that case.
    pub fn push_slices(&mut self, xs: &[f64], ys: &[f64]) -> MathResult<()> {
        ensure_same_length(xs.len(), ys.len())?;
        for (&x, &y) in xs.iter().zip(ys) {
            self.push(x, y);
        }
        Ok(())
    }

    /// Combines with an accumulator built over a disjoint sample.
    pub fn merge(&mut self, other: &Self) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = *other;
            return;
        }
        let (na, nb) = (self.count as f64, other.count as f64);
        let n = na + nb;
        let dx = other.mean_x - self.mean_x;
        let dy = other.mean_y - self.mean_y;
        let w = na * nb / n;
        self.mean_x += dx * nb / n;
        self.mean_y += dy * nb / n;
        self.m2_x += other.m2_x + dx * dx * w;
        self.m2_y += other.m2_y + dy * dy * w;
        self.co_moment += other.co_moment + dx * dy * w;
        self.count += other.count;
    }

    /// Number of pairs.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sample covariance. `NaN` for fewer than two pairs.
    pub fn covariance(&self) -> f64 {
        if self.count < 2 {
            f64::NAN
        } else {
            self.co_moment / (self.count - 1) as f64
        }
    }

    /// Population covariance. `NaN` when empty.
    pub fn population_covariance(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.co_moment / self.count as f64
        }
    }

    /// Pearson correlation. `NaN` for fewer than two pairs or a constant series.
    pub fn correlation(&self) -> f64 {
        if self.count < 2 {
            return f64::NAN;
        }
        self.co_moment / (self.m2_x * self.m2_y).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MathError;
    use crate::statistics::descriptive;
    use approx::assert_relative_eq;

    #[test]
    fn test_welford_matches_textbook_values() {
        let stats: RunningStatistics = [2.0, 4.0, 4.0, 5.0, 10.0].into_iter().collect();
        assert_eq!(stats.count(), 5);
        assert_relative_eq!(stats.mean(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(stats.variance(), 9.0, epsilon = 1e-12);
        assert_relative_eq!(stats.population_variance(), 7.2, epsilon = 1e-12);
        assert_eq!(stats.minimum(), 2.0);
        assert_eq!(stats.maximum(), 10.0);
    }

    #[test]
    fn test_empty_and_single() {
        let empty = RunningStatistics::new();
        assert!(empty.mean().is_nan());
        assert!(empty.variance().is_nan());
        assert!(empty.population_variance().is_nan());
        assert!(empty.minimum().is_nan());

        let mut one = RunningStatistics::new();
        one.push(3.0);
        assert_eq!(one.mean(), 3.0);
        assert!(one.variance().is_nan());
        assert!(one.std_dev().is_nan());
        assert_eq!(one.population_variance(), 0.0);
    }

    #[test]
    fn test_nan_poisons_extremes() {
        let stats: RunningStatistics = [1.0, f64::NAN, 2.0].into_iter().collect();
        assert!(stats.mean().is_nan());
        assert!(stats.minimum().is_nan());
        assert!(stats.maximum().is_nan());
    }

    #[test]
    fn test_merge_equals_single_pass() {
        let data = [0.5, -1.25, 3.0, 2.0, 7.5, -0.75, 1.0];
        let whole: RunningStatistics = data.iter().copied().collect();

        let mut left: RunningStatistics = data[..3].iter().copied().collect();
        let right: RunningStatistics = data[3..].iter().copied().collect();
        left.merge(&right);

        assert_eq!(left.count(), whole.count());
        assert_relative_eq!(left.mean(), whole.mean(), epsilon = 1e-12);
        assert_relative_eq!(left.variance(), whole.variance(), epsilon = 1e-12);
        assert_eq!(left.minimum(), -1.25);
        assert_eq!(left.maximum(), 7.5);

        let mut empty = RunningStatistics::new();
        empty.merge(&whole);
        assert_eq!(empty, whole);
    }

    #[test]
    fn test_running_covariance_matches_batch() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [2.0, 1.0, 4.0, 3.0, 6.0];
        let mut cov = RunningCovariance::new();
        cov.push_slices(&xs, &ys).unwrap();

        assert_relative_eq!(
            cov.covariance(),
            descriptive::covariance(&xs, &ys).unwrap(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            cov.population_covariance(),
            descriptive::population_covariance(&xs, &ys).unwrap(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            cov.correlation(),
            descriptive::correlation(&xs, &ys).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_running_covariance_merge() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let ys = [1.5, 1.0, 4.0, 3.5, 6.0, 5.0];
        let mut whole = RunningCovariance::new();
        whole.push_slices(&xs, &ys).unwrap();

        let mut left = RunningCovariance::new();
        left.push_slices(&xs[..2], &ys[..2]).unwrap();
        let mut right = RunningCovariance::new();
        right.push_slices(&xs[2..], &ys[2..]).unwrap();
        left.merge(&right);

        assert_eq!(left.count(), 6);
        assert_relative_eq!(left.covariance(), whole.covariance(), epsilon = 1e-12);
        assert_relative_eq!(left.correlation(), whole.correlation(), epsilon = 1e-12);
    }

    #[test]
    fn test_push_slices_rejects_mismatch() {
        let mut cov = RunningCovariance::new();
        let err = cov.push_slices(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(err, MathError::length_mismatch(2, 1));
        assert_eq!(cov.count(), 0);
        assert!(cov.covariance().is_nan());
        assert!(cov.population_covariance().is_nan());
    }
}
