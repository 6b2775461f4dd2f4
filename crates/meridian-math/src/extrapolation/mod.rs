//! Extrapolation beyond the range of interpolation nodes.
//!
//! Rates beyond the last curve node continue the boundary segment; nothing
//! in the engine clamps or refuses an out-of-range query.

mod linear;

pub use linear::LinearExtrapolator;

/// Extends a curve past its boundary node.
pub trait Extrapolator {
    /// Value at `t` given the boundary point `(anchor_t, anchor_value)` and
    /// the slope of the boundary segment.
    fn extrapolate(&self, t: f64, anchor_t: f64, anchor_value: f64, slope: f64) -> f64;

    /// Name used in logs and diagnostics.
    fn name(&self) -> &'static str;
}
