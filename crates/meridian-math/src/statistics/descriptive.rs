//! Batch estimators over in-memory samples.
//!
//! Variance and covariance use the corrected two-pass algorithm: the mean is
//! computed first, then the centred sums, with the residual sum of deviations
//! subtracted to cancel rounding in the mean.

use std::collections::HashMap;

use crate::error::{ensure_same_length, MathResult};

/// Arithmetic mean. `NaN` when empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Centred sum of squares with the two-pass correction term.
fn sum_of_squares(data: &[f64]) -> f64 {
    let m = mean(data);
    let (sum_sq, sum_dev) = data.iter().fold((0.0, 0.0), |(sq, dev), &x| {
        let d = x - m;
        (sq + d * d, dev + d)
    });
    sum_sq - sum_dev * sum_dev / data.len() as f64
}

fn co_moment(a: &[f64], b: &[f64]) -> f64 {
    let (ma, mb) = (mean(a), mean(b));
    let (sum_prod, sum_da, sum_db) =
        a.iter()
            .zip(b)
            .fold((0.0, 0.0, 0.0), |(p, da_acc, db_acc), (&x, &y)| {
                let (da, db) = (x - ma, y - mb);
                (p + da * db, da_acc + da, db_acc + db)
            });
    sum_prod - sum_da * sum_db / a.len() as f64
}

/// Sample variance (N-1 normaliser). `NaN` for fewer than two samples.
pub fn variance(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return f64::NAN;
    }
    sum_of_squares(data) / (data.len() - 1) as f64
}

/// Population variance (N normaliser). `NaN` when empty, zero for one sample.
pub fn population_variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    sum_of_squares(data) / data.len() as f64
}

/// Sample standard deviation.
pub fn std_dev(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Population standard deviation.
pub fn population_std_dev(data: &[f64]) -> f64 {
    population_variance(data).sqrt()
}

/// Sample covariance (N-1 normaliser).
///
/// # Errors
///
/// `MathError::LengthMismatch` when the inputs differ in length.
pub fn covariance(a: &[f64], b: &[f64]) -> MathResult<f64> {
    ensure_same_length(a.len(), b.len())?;
    if a.len() < 2 {
        return Ok(f64::NAN);
    }
    Ok(co_moment(a, b) / (a.len() - 1) as f64)
}

/// Population covariance (N normaliser).
pub fn population_covariance(a: &[f64], b: &[f64]) -> MathResult<f64> {
    ensure_same_length(a.len(), b.len())?;
    if a.is_empty() {
        return Ok(f64::NAN);
    }
    Ok(co_moment(a, b) / a.len() as f64)
}

/// Pearson correlation coefficient.
///
/// `NaN` for fewer than two samples or when either series is constant.
pub fn correlation(a: &[f64], b: &[f64]) -> MathResult<f64> {
    ensure_same_length(a.len(), b.len())?;
    if a.len() < 2 {
        return Ok(f64::NAN);
    }
    let denom = (sum_of_squares(a) * sum_of_squares(b)).sqrt();
    Ok(co_moment(a, b) / denom)
}

/// Geometric mean, `exp(mean(ln x))`. `NaN` when empty or any value is negative.
pub fn geometric_mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let log_sum: f64 = data.iter().map(|x| x.ln()).sum();
    (log_sum / data.len() as f64).exp()
}

/// Harmonic mean, `n / sum(1/x)`.
pub fn harmonic_mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let reciprocal_sum: f64 = data.iter().map(|x| 1.0 / x).sum();
    data.len() as f64 / reciprocal_sum
}

/// Root mean square.
pub fn root_mean_square(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let sum_sq: f64 = data.iter().map(|x| x * x).sum();
    (sum_sq / data.len() as f64).sqrt()
}

/// Folds with `pick`, returning `NaN` for empty input or any `NaN` sample.
fn extreme(data: &[f64], map: impl Fn(f64) -> f64, pick: impl Fn(f64, f64) -> f64) -> f64 {
    let mut iter = data.iter().map(|&x| map(x));
    let Some(first) = iter.next() else {
        return f64::NAN;
    };
    iter.try_fold(first, |acc, x| if x.is_nan() { None } else { Some(pick(acc, x)) })
        .filter(|v| !v.is_nan())
        .unwrap_or(f64::NAN)
}

/// Smallest sample.
pub fn minimum(data: &[f64]) -> f64 {
    extreme(data, |x| x, f64::min)
}

/// Largest sample.
pub fn maximum(data: &[f64]) -> f64 {
    extreme(data, |x| x, f64::max)
}

/// Smallest absolute value.
pub fn minimum_abs(data: &[f64]) -> f64 {
    extreme(data, f64::abs, f64::min)
}

/// Largest absolute value.
pub fn maximum_abs(data: &[f64]) -> f64 {
    extreme(data, f64::abs, f64::max)
}

/// Shannon entropy in bits over the histogram of exact sample values.
///
/// Every distinct value is its own bucket (`0.0` and `-0.0` share one).
/// `NaN` when empty or when any sample is `NaN`.
pub fn entropy(data: &[f64]) -> f64 {
    if data.is_empty() || data.iter().any(|x| x.is_nan()) {
        return f64::NAN;
    }

    let mut histogram: HashMap<u64, usize> = HashMap::new();
    for &x in data {
        let key = if x == 0.0 { 0.0f64.to_bits() } else { x.to_bits() };
        *histogram.entry(key).or_insert(0) += 1;
    }

    let n = data.len() as f64;
    histogram
        .values()
        .map(|&count| {
            let p = count as f64 / n;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MathError;
    use approx::assert_relative_eq;

    const DATA: [f64; 5] = [2.0, 4.0, 4.0, 5.0, 10.0];

    #[test]
    fn test_mean_and_variance() {
        assert_relative_eq!(mean(&DATA), 5.0);
        // deviations: -3, -1, -1, 0, 5 -> sum of squares 36
        assert_relative_eq!(variance(&DATA), 9.0, epsilon = 1e-12);
        assert_relative_eq!(population_variance(&DATA), 7.2, epsilon = 1e-12);
        assert_relative_eq!(std_dev(&DATA), 3.0, epsilon = 1e-12);
        assert_relative_eq!(population_std_dev(&DATA), 7.2_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_small_samples_are_nan() {
        assert!(mean(&[]).is_nan());
        assert!(variance(&[]).is_nan());
        assert!(variance(&[1.0]).is_nan());
        assert!(std_dev(&[1.0]).is_nan());
        assert!(population_variance(&[]).is_nan());
        assert_eq!(population_variance(&[3.0]), 0.0);
        assert!(covariance(&[1.0], &[2.0]).unwrap().is_nan());
        assert!(correlation(&[], &[]).unwrap().is_nan());
    }

    #[test]
    fn test_covariance_and_correlation() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [2.0, 4.0, 6.0, 8.0];
        // var(a) = 5/3, cov = 2 var(a)
        assert_relative_eq!(covariance(&a, &b).unwrap(), 10.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(population_covariance(&a, &b).unwrap(), 2.5, epsilon = 1e-12);
        assert_relative_eq!(correlation(&a, &b).unwrap(), 1.0, epsilon = 1e-12);

        let c = [8.0, 6.0, 4.0, 2.0];
        assert_relative_eq!(correlation(&a, &c).unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_length_mismatch_fails_fast() {
        let err = covariance(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
        assert_eq!(err, MathError::length_mismatch(3, 2));
        assert!(population_covariance(&[1.0], &[]).is_err());
        assert!(correlation(&[1.0, 2.0], &[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_other_means() {
        assert_relative_eq!(geometric_mean(&[1.0, 4.0, 16.0]), 4.0, epsilon = 1e-12);
        assert_relative_eq!(harmonic_mean(&[1.0, 2.0, 4.0]), 12.0 / 7.0, epsilon = 1e-12);
        assert_relative_eq!(root_mean_square(&[3.0, 4.0]), 12.5_f64.sqrt(), epsilon = 1e-12);
        assert!(geometric_mean(&[1.0, -1.0]).is_nan());
        assert!(harmonic_mean(&[]).is_nan());
        assert!(root_mean_square(&[]).is_nan());
    }

    #[test]
    fn test_extremes() {
        let data = [-7.0, 3.0, -0.5, 6.0];
        assert_eq!(minimum(&data), -7.0);
        assert_eq!(maximum(&data), 6.0);
        assert_eq!(minimum_abs(&data), 0.5);
        assert_eq!(maximum_abs(&data), 7.0);
        assert!(minimum(&[]).is_nan());
        assert!(maximum(&[1.0, f64::NAN, 2.0]).is_nan());
        assert!(minimum(&[f64::NAN]).is_nan());
    }

    #[test]
    fn test_entropy() {
        // two equally likely values -> 1 bit
        assert_relative_eq!(entropy(&[1.0, 2.0, 1.0, 2.0]), 1.0, epsilon = 1e-12);
        // four distinct values -> 2 bits
        assert_relative_eq!(entropy(&[1.0, 2.0, 3.0, 4.0]), 2.0, epsilon = 1e-12);
        // constant -> 0 bits, signed zeros share a bucket
        assert_relative_eq!(entropy(&[0.0, -0.0, 0.0]), 0.0, epsilon = 1e-12);
        assert!(entropy(&[]).is_nan());
    }
}
