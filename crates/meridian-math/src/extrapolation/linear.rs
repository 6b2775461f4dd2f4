//! Linear extrapolation.

use super::Extrapolator;

/// Continues the boundary segment's straight line.
///
/// Works on both ends: below the first node the anchor is the first node
/// and the slope is the first segment's; above the last node, the last.
///
/// ```rust
/// use meridian_math::extrapolation::{Extrapolator, LinearExtrapolator};
///
/// // Last node: 5% at 3600 days, slope 0.1% per 360 days
/// let rate = LinearExtrapolator.extrapolate(5400.0, 3600.0, 0.05, 0.001 / 360.0);
/// assert!((rate - 0.055).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearExtrapolator;

impl Extrapolator for LinearExtrapolator {
    fn extrapolate(&self, t: f64, anchor_t: f64, anchor_value: f64, slope: f64) -> f64 {
        anchor_value + slope * (t - anchor_t)
    }

    fn name(&self) -> &'static str {
        "Linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_forward_and_backward() {
        let extrap = LinearExtrapolator;

        // Right of the anchor
        assert_relative_eq!(extrap.extrapolate(15.0, 10.0, 0.05, 0.001), 0.055, epsilon = 1e-12);
        // Left of the anchor continues the same line downward
        assert_relative_eq!(extrap.extrapolate(5.0, 10.0, 0.05, 0.001), 0.045, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_slope_is_not_floored() {
        let value = LinearExtrapolator.extrapolate(100.0, 10.0, 0.01, -0.001);
        assert_relative_eq!(value, -0.08, epsilon = 1e-12);
    }

    #[test]
    fn test_at_anchor() {
        assert_relative_eq!(LinearExtrapolator.extrapolate(10.0, 10.0, 0.05, 3.0), 0.05);
        assert_eq!(LinearExtrapolator.name(), "Linear");
    }
}
