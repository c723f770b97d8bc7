//! Epsilon comparisons and finiteness guards.

use crate::EPSILON;

/// Relative-to-magnitude equality at the engine's shared [`EPSILON`].
///
/// True iff `|a - b| <= EPSILON * max(1, |a|, |b|)`. The `max(1, ..)` floor
/// makes the comparison absolute near zero and relative for large values.
pub fn nearly_equal(a: f64, b: f64) -> bool {
    nearly_equal_with(a, b, EPSILON)
}

/// [`nearly_equal`] with a caller-supplied tolerance.
///
/// The DC resolver threads its configured tolerance through here so that a
/// loosened tolerance also loosens the "did this rule change anything" test.
pub fn nearly_equal_with(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance * 1.0_f64.max(a.abs()).max(b.abs())
}

/// Pass through only finite values; NaN, infinities, and `None` are all
/// treated as unknown.
pub fn is_finite_number(x: Option<f64>) -> Option<f64> {
    x.filter(|v| v.is_finite())
}
