//! Interpolation over sorted nodes.

mod linear;

pub use linear::LinearInterpolator;

/// A function defined by nodes and evaluable anywhere on the real line.
pub trait Interpolator {
    /// Value at `x`; inside the node range it interpolates, outside it
    /// extrapolates.
    fn interpolate(&self, x: f64) -> f64;

    /// First derivative at `x`.
    fn derivative(&self, x: f64) -> f64;

    /// Smallest node abscissa.
    fn min_x(&self) -> f64;

    /// Largest node abscissa.
    fn max_x(&self) -> f64;
}
