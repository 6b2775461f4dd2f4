//! Discount curve over term days.

use serde::{Deserialize, Serialize};

use meridian_core::Date;
use meridian_math::interpolation::{Interpolator, LinearInterpolator};

use crate::error::{CurveError, CurveResult};

/// Serialized shape of a curve: parallel term and value columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CurveNodes {
    as_of_date: Date,
    curve_id: String,
    terms: Vec<f64>,
    values: Vec<f64>,
}

/// A term structure of rates anchored at an as-of date.
///
/// Terms are calendar days from `as_of_date`, strictly ascending. Values are
/// already in the rate space the valuator expects.
///
/// Lookups never fail: a node term returns its value exactly, an interior
/// term interpolates linearly between the bracketing nodes, and a term
/// outside the node range continues the nearest boundary segment.
///
/// # Example
///
/// ```rust
/// use meridian_core::Date;
/// use meridian_curves::DiscountCurve;
///
/// let as_of = Date::from_ymd(2025, 1, 2).unwrap();
/// let curve = DiscountCurve::new(
///     as_of,
///     "USD.GOVT",
///     vec![90.0, 180.0, 360.0],
///     vec![0.040, 0.042, 0.046],
/// )
/// .unwrap();
///
/// assert_eq!(curve.term_value(180.0), 0.042);
/// assert!((curve.term_value(270.0) - 0.044).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CurveNodes", into = "CurveNodes")]
pub struct DiscountCurve {
    as_of_date: Date,
    curve_id: String,
    interpolator: LinearInterpolator,
}

impl DiscountCurve {
    /// Builds a curve from parallel term and value vectors.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurve` when there are no nodes, the lengths
    /// differ, or the terms are not finite and strictly ascending.
    pub fn new(
        as_of_date: Date,
        curve_id: impl Into<String>,
        terms: Vec<f64>,
        values: Vec<f64>,
    ) -> CurveResult<Self> {
        let curve_id = curve_id.into();
        let interpolator = LinearInterpolator::new(terms, values)
            .map_err(|e| CurveError::invalid_curve(curve_id.clone(), e.to_string()))?;

        Ok(Self {
            as_of_date,
            curve_id,
            interpolator,
        })
    }

    /// A single-node curve returning `rate` for every term.
    pub fn flat(as_of_date: Date, curve_id: impl Into<String>, rate: f64) -> Self {
        Self {
            as_of_date,
            curve_id: curve_id.into(),
            interpolator: LinearInterpolator::flat(rate),
        }
    }

    /// The curve's anchor date.
    pub fn as_of_date(&self) -> Date {
        self.as_of_date
    }

    /// The curve's identifier.
    pub fn curve_id(&self) -> &str {
        &self.curve_id
    }

    /// Node terms in days, ascending.
    pub fn terms(&self) -> &[f64] {
        self.interpolator.xs()
    }

    /// Node values, parallel to [`terms`](Self::terms).
    pub fn values(&self) -> &[f64] {
        self.interpolator.ys()
    }

    /// Iterates `(term, value)` nodes in ascending term order.
    pub fn nodes(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.terms().iter().copied().zip(self.values().iter().copied())
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.terms().len()
    }

    /// Always false; a curve has at least one node.
    pub fn is_empty(&self) -> bool {
        self.terms().is_empty()
    }

    /// Value at `term` days.
    pub fn term_value(&self, term: f64) -> f64 {
        self.interpolator.interpolate(term)
    }

    /// Value at the term from the as-of date to `date`.
    pub fn value_at(&self, date: Date) -> f64 {
        self.term_value((date - self.as_of_date) as f64)
    }

    /// Slope of the curve per day at `term`.
    pub fn slope(&self, term: f64) -> f64 {
        self.interpolator.derivative(term)
    }
}

impl TryFrom<CurveNodes> for DiscountCurve {
    type Error = CurveError;

    fn try_from(nodes: CurveNodes) -> CurveResult<Self> {
        DiscountCurve::new(nodes.as_of_date, nodes.curve_id, nodes.terms, nodes.values)
    }
}

impl From<DiscountCurve> for CurveNodes {
    fn from(curve: DiscountCurve) -> Self {
        CurveNodes {
            as_of_date: curve.as_of_date,
            terms: curve.terms().to_vec(),
            values: curve.values().to_vec(),
            curve_id: curve.curve_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn as_of() -> Date {
        Date::from_ymd(2025, 1, 2).unwrap()
    }

    fn govt() -> DiscountCurve {
        DiscountCurve::new(
            as_of(),
            "USD.GOVT",
            vec![30.0, 180.0, 360.0, 720.0],
            vec![0.030, 0.036, 0.040, 0.046],
        )
        .unwrap()
    }

    #[test]
    fn test_exact_at_nodes() {
        let curve = govt();
        for (term, value) in curve.nodes().collect::<Vec<_>>() {
            assert_eq!(curve.term_value(term), value);
        }
        assert_eq!(curve.len(), 4);
        assert!(!curve.is_empty());
    }

    #[test]
    fn test_interpolates_between_nodes() {
        let curve = govt();
        assert_relative_eq!(curve.term_value(270.0), 0.038, epsilon = 1e-15);
        assert_relative_eq!(curve.term_value(540.0), 0.043, epsilon = 1e-15);
    }

    #[test]
    fn test_extrapolation_continues_boundary_slope() {
        let curve = govt();
        // last segment: 0.006 per 360 days
        assert_relative_eq!(curve.term_value(1080.0), 0.052, epsilon = 1e-15);
        // first segment: 0.006 per 150 days, continued below 30 days
        assert_relative_eq!(curve.term_value(0.0), 0.0288, epsilon = 1e-15);
        assert_relative_eq!(curve.slope(5000.0), 0.006 / 360.0, epsilon = 1e-15);
    }

    #[test]
    fn test_value_at_date() {
        let curve = govt();
        let date = as_of().add_days(180);
        assert_eq!(curve.value_at(date), 0.036);
    }

    #[test]
    fn test_flat_curve() {
        let curve = DiscountCurve::flat(as_of(), "FLAT", 0.05);
        assert_eq!(curve.term_value(-10.0), 0.05);
        assert_eq!(curve.term_value(180.0), 0.05);
        assert_eq!(curve.term_value(10_000.0), 0.05);
        assert_eq!(curve.curve_id(), "FLAT");
    }

    #[test]
    fn test_rejects_invalid_nodes() {
        let err = DiscountCurve::new(as_of(), "BAD", vec![], vec![]).unwrap_err();
        assert!(matches!(err, CurveError::InvalidCurve { ref curve_id, .. } if curve_id == "BAD"));
        assert!(DiscountCurve::new(as_of(), "BAD", vec![1.0, 2.0], vec![0.1]).is_err());
        assert!(DiscountCurve::new(as_of(), "BAD", vec![2.0, 1.0], vec![0.1, 0.2]).is_err());
        assert!(DiscountCurve::new(as_of(), "BAD", vec![1.0, 1.0], vec![0.1, 0.2]).is_err());
    }

    #[test]
    fn test_serde_shape() {
        let curve = govt();
        let json = serde_json::to_value(&curve).unwrap();
        assert_eq!(json["curve_id"], "USD.GOVT");
        assert_eq!(json["terms"].as_array().unwrap().len(), 4);

        let back: DiscountCurve = serde_json::from_value(json).unwrap();
        assert_eq!(back, curve);

        let bad = serde_json::json!({
            "as_of_date": "2025-01-02",
            "curve_id": "BAD",
            "terms": [2.0, 1.0],
            "values": [0.1, 0.2],
        });
        assert!(serde_json::from_value::<DiscountCurve>(bad).is_err());
    }
}
