//! Covariance matrices from return panels.
//!
//! With `lambda == 1` every observation counts equally and each entry is the
//! population covariance (N normaliser). With `lambda < 1` the observation of
//! age `a` (0 = most recent) carries weight `lambda^a`; each series is
//! centred on its own weighted mean and the cross-moment is normalised by the
//! sum of weights.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use meridian_math::statistics::population_covariance;

use crate::error::{RiskError, RiskResult};

/// Serialized shape: row-major entries plus the estimation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CovarianceRows {
    lambda: f64,
    observations: usize,
    rows: Vec<Vec<f64>>,
}

/// A symmetric covariance matrix over N return series.
///
/// # Example
///
/// ```rust
/// use meridian_risk::CovarianceMatrix;
///
/// let panel = vec![vec![0.01, 0.02, 0.06], vec![0.03, -0.01, 0.04]];
/// let cov = CovarianceMatrix::from_returns(&panel, 1.0).unwrap();
/// assert_eq!(cov.dimension(), 2);
/// assert!((cov.get(0, 1) - 0.0007 / 3.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CovarianceRows", into = "CovarianceRows")]
pub struct CovarianceMatrix {
    matrix: DMatrix<f64>,
    lambda: f64,
    observations: usize,
}

impl CovarianceMatrix {
    /// Estimates the covariance of `panel`, one inner slice per series ordered
    /// oldest to newest.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` when `lambda` is outside `(0, 1]`
    /// - `InsufficientData` when there are no series or no observations
    /// - `DimensionMismatch` when the series differ in length
    pub fn from_returns<S: AsRef<[f64]>>(panel: &[S], lambda: f64) -> RiskResult<Self> {
        if !(lambda > 0.0 && lambda <= 1.0) {
            return Err(RiskError::invalid_input(format!(
                "decay factor must be in (0, 1], got {lambda}"
            )));
        }
        let Some(first) = panel.first() else {
            return Err(RiskError::insufficient_data("no return series"));
        };
        let observations = first.as_ref().len();
        if let Some(bad) = panel.iter().find(|s| s.as_ref().len() != observations) {
            return Err(RiskError::dimension_mismatch(observations, bad.as_ref().len()));
        }
        if observations == 0 {
            return Err(RiskError::insufficient_data("return series are empty"));
        }

        let n = panel.len();
        let mut matrix = DMatrix::zeros(n, n);

        if lambda == 1.0 {
            for i in 0..n {
                for j in i..n {
                    let value = population_covariance(panel[i].as_ref(), panel[j].as_ref())?;
                    matrix[(i, j)] = value;
                    matrix[(j, i)] = value;
                }
            }
        } else {
            let weights = decay_weights(observations, lambda);
            let total: f64 = weights.iter().sum();
            let centred: Vec<Vec<f64>> = panel
                .iter()
                .map(|series| {
                    let series = series.as_ref();
                    let mean = weights.iter().zip(series).map(|(w, x)| w * x).sum::<f64>() / total;
                    series.iter().map(|x| x - mean).collect()
                })
                .collect();

            for i in 0..n {
                for j in i..n {
                    let moment: f64 = weights
                        .iter()
                        .zip(centred[i].iter().zip(&centred[j]))
                        .map(|(w, (a, b))| w * a * b)
                        .sum();
                    let value = moment / total;
                    matrix[(i, j)] = value;
                    matrix[(j, i)] = value;
                }
            }
        }

        log::debug!(
            "estimated {n}x{n} covariance from {observations} observations, lambda {lambda}"
        );
        Ok(Self {
            matrix,
            lambda,
            observations,
        })
    }

    /// Wraps an existing square matrix.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when the matrix is not square.
    pub fn from_matrix(matrix: DMatrix<f64>) -> RiskResult<Self> {
        if matrix.nrows() != matrix.ncols() {
            return Err(RiskError::dimension_mismatch(matrix.nrows(), matrix.ncols()));
        }
        Ok(Self {
            matrix,
            lambda: 1.0,
            observations: 0,
        })
    }

    /// Number of series.
    pub fn dimension(&self) -> usize {
        self.matrix.nrows()
    }

    /// Entry `(i, j)`. Panics when out of range.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.matrix[(i, j)]
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Decay factor used for estimation.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Observations per series (zero when built from a matrix).
    pub fn observations(&self) -> usize {
        self.observations
    }

    /// Per-series standard deviations, the square roots of the diagonal.
    pub fn volatilities(&self) -> Vec<f64> {
        self.matrix.diagonal().iter().map(|v| v.sqrt()).collect()
    }

    /// Pearson correlations; `NaN` in rows and columns of constant series.
    pub fn correlation_matrix(&self) -> DMatrix<f64> {
        let vols = self.volatilities();
        let n = self.dimension();
        DMatrix::from_fn(n, n, |i, j| {
            let denom = vols[i] * vols[j];
            if denom > 0.0 {
                self.matrix[(i, j)] / denom
            } else {
                f64::NAN
            }
        })
    }

    /// Age in observations at which the decay weight halves; infinite for `lambda == 1`.
    pub fn half_life(&self) -> f64 {
        if self.lambda >= 1.0 {
            f64::INFINITY
        } else {
            0.5_f64.ln() / self.lambda.ln()
        }
    }

    /// `wᵀ Σ w` for a weight vector.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when `weights` has the wrong length.
    pub fn portfolio_variance(&self, weights: &[f64]) -> RiskResult<f64> {
        if weights.len() != self.dimension() {
            return Err(RiskError::dimension_mismatch(self.dimension(), weights.len()));
        }
        let w = DVector::from_column_slice(weights);
        Ok(w.dot(&(&self.matrix * &w)))
    }
}

/// `lambda^age` for each observation, oldest first.
fn decay_weights(observations: usize, lambda: f64) -> Vec<f64> {
    (0..observations)
        .map(|i| {
            let age = (observations - 1 - i) as i32;
            lambda.powi(age)
        })
        .collect()
}

impl TryFrom<CovarianceRows> for CovarianceMatrix {
    type Error = RiskError;

    fn try_from(value: CovarianceRows) -> RiskResult<Self> {
        let n = value.rows.len();
        if let Some(bad) = value.rows.iter().find(|row| row.len() != n) {
            return Err(RiskError::dimension_mismatch(n, bad.len()));
        }
        let matrix = DMatrix::from_fn(n, n, |i, j| value.rows[i][j]);
        Ok(Self {
            matrix,
            lambda: value.lambda,
            observations: value.observations,
        })
    }
}

impl From<CovarianceMatrix> for CovarianceRows {
    fn from(value: CovarianceMatrix) -> Self {
        let rows = value
            .matrix
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect();
        Self {
            lambda: value.lambda,
            observations: value.observations,
            rows,
        }
    }
}
