//! Linear interpolation.

use std::cmp::Ordering;

use crate::error::{MathError, MathResult};
use crate::extrapolation::{Extrapolator, LinearExtrapolator};
use crate::interpolation::Interpolator;

/// Piecewise-linear interpolation with linear extrapolation at both ends.
///
/// - a query equal to a node returns that node's value exactly
/// - an interior query uses the two bracketing nodes
/// - a query outside the range continues the nearest boundary segment
///
/// A single node defines a flat line.
///
/// # Example
///
/// ```rust
/// use meridian_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0]).unwrap();
/// assert_eq!(interp.interpolate(1.5), 2.5);
/// assert_eq!(interp.interpolate(3.0), 7.0); // last segment slope is 3
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    extrapolator: LinearExtrapolator,
}

/// Where a query falls relative to the nodes.
enum Location {
    Node(usize),
    Segment(usize),
    Below,
    Above,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no points, if the lengths differ, or if
    /// `xs` is not strictly increasing and finite.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.is_empty() {
            return Err(MathError::insufficient_data(1, 0));
        }
        if xs.len() != ys.len() {
            return Err(MathError::length_mismatch(xs.len(), ys.len()));
        }
        if xs.iter().any(|x| !x.is_finite()) {
            return Err(MathError::invalid_input("x values must be finite"));
        }
        if xs.windows(2).any(|w| w[1] <= w[0]) {
            return Err(MathError::invalid_input(
                "x values must be strictly increasing",
            ));
        }

        Ok(Self {
            xs,
            ys,
            extrapolator: LinearExtrapolator,
        })
    }

    /// A single node at zero: the constant function `value`.
    pub fn flat(value: f64) -> Self {
        Self {
            xs: vec![0.0],
            ys: vec![value],
            extrapolator: LinearExtrapolator,
        }
    }

    /// Node abscissae.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Node values.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    fn locate(&self, x: f64) -> Location {
        let last = self.xs.len() - 1;
        match self
            .xs
            .binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(Ordering::Less))
        {
            Ok(i) => Location::Node(i),
            Err(0) => Location::Below,
            Err(i) if i > last => Location::Above,
            Err(i) => Location::Segment(i - 1),
        }
    }

    /// Slope of the segment starting at node `i`; zero for a single node.
    fn slope(&self, i: usize) -> f64 {
        if self.xs.len() < 2 {
            return 0.0;
        }
        let i = i.min(self.xs.len() - 2);
        (self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i])
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> f64 {
        let last = self.xs.len() - 1;
        match self.locate(x) {
            Location::Node(i) => self.ys[i],
            Location::Segment(i) => {
                let t = (x - self.xs[i]) / (self.xs[i + 1] - self.xs[i]);
                self.ys[i] + t * (self.ys[i + 1] - self.ys[i])
            }
            Location::Below => {
                self.extrapolator
                    .extrapolate(x, self.xs[0], self.ys[0], self.slope(0))
            }
            Location::Above => {
                self.extrapolator
                    .extrapolate(x, self.xs[last], self.ys[last], self.slope(last))
            }
        }
    }

    fn derivative(&self, x: f64) -> f64 {
        match self.locate(x) {
            Location::Node(i) | Location::Segment(i) => self.slope(i),
            Location::Below => self.slope(0),
            Location::Above => self.slope(self.xs.len() - 1),
        }
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn curve() -> LinearInterpolator {
        LinearInterpolator::new(vec![30.0, 90.0, 180.0, 360.0], vec![0.02, 0.025, 0.03, 0.04])
            .unwrap()
    }

    #[test]
    fn test_exact_at_nodes() {
        let interp = curve();
        for (x, y) in [(30.0, 0.02), (90.0, 0.025), (180.0, 0.03), (360.0, 0.04)] {
            assert_eq!(interp.interpolate(x), y);
        }
    }

    #[test]
    fn test_interior() {
        let interp = curve();
        // halfway between 180 and 360
        assert_relative_eq!(interp.interpolate(270.0), 0.035, epsilon = 1e-15);
        // a third of the way between 30 and 90
        assert_relative_eq!(interp.interpolate(50.0), 0.02 + 0.005 / 3.0, epsilon = 1e-15);
    }

    #[test]
    fn test_extrapolates_both_ends() {
        let interp = curve();
        // last segment slope = 0.01 / 180
        assert_relative_eq!(interp.interpolate(540.0), 0.05, epsilon = 1e-15);
        // first segment slope = 0.005 / 60
        assert_relative_eq!(interp.interpolate(0.0), 0.0175, epsilon = 1e-15);
        assert_relative_eq!(interp.interpolate(-30.0), 0.015, epsilon = 1e-15);
    }

    #[test]
    fn test_derivative() {
        let interp = curve();
        assert_relative_eq!(interp.derivative(100.0), 0.005 / 90.0, epsilon = 1e-15);
        assert_relative_eq!(interp.derivative(1000.0), 0.01 / 180.0, epsilon = 1e-15);
        assert_relative_eq!(interp.derivative(360.0), 0.01 / 180.0, epsilon = 1e-15);
    }

    #[test]
    fn test_single_node_is_flat() {
        let interp = LinearInterpolator::new(vec![10.0], vec![0.05]).unwrap();
        assert_eq!(interp.interpolate(-100.0), 0.05);
        assert_eq!(interp.interpolate(10.0), 0.05);
        assert_eq!(interp.interpolate(1e6), 0.05);

        let flat = LinearInterpolator::flat(0.05);
        assert_eq!(flat.interpolate(-3.0), 0.05);
        assert_eq!(flat.derivative(7.0), 0.0);
    }

    #[test]
    fn test_rejects_bad_nodes() {
        assert!(LinearInterpolator::new(vec![], vec![]).is_err());
        assert_eq!(
            LinearInterpolator::new(vec![1.0, 2.0], vec![1.0]),
            Err(MathError::length_mismatch(2, 1))
        );
        assert!(LinearInterpolator::new(vec![1.0, 0.0, 2.0], vec![1.0, 0.0, 2.0]).is_err());
        assert!(LinearInterpolator::new(vec![1.0, 1.0], vec![1.0, 2.0]).is_err());
        assert!(LinearInterpolator::new(vec![1.0, f64::NAN], vec![1.0, 2.0]).is_err());
    }
}
