//! Display formatting for solved quantities.
//!
//! Rendering is magnitude-aware: the requested decimal count applies below
//! magnitude 10, then shrinks as the value grows so large readings don't
//! carry spurious precision. Non-finite values render as a placeholder dash.

use crate::quantity::Quantity;

/// Placeholder rendered for non-finite values.
pub const PLACEHOLDER: &str = "--";

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Decimal count actually used for a value of the given magnitude.
fn clamp_decimals(value: f64, requested: usize) -> usize {
    let magnitude = value.abs();
    if magnitude >= 1000.0 {
        1
    } else if magnitude >= 100.0 {
        requested.min(1)
    } else if magnitude >= 10.0 {
        requested.min(2)
    } else {
        requested
    }
}

/// Render a bare value with magnitude-adaptive precision.
pub fn format_value(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{:.*}", clamp_decimals(value, decimals), value)
}

/// Render a value with an arbitrary unit suffix, e.g. `"1.25 VA"`.
pub fn format_with_unit(value: f64, unit: &str, decimals: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{} {}", format_value(value, decimals), unit)
}

/// Render a DC quantity with its unit suffix, e.g. `"6.00 Ω"`.
pub fn format_quantity(value: f64, quantity: Quantity, decimals: usize) -> String {
    format_with_unit(value, quantity.unit(), decimals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::PartialQuantitySet;
    use crate::solver::resolve;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(62.831853, 4), 62.8319);
        assert_eq!(round_to(51.4876, 2), 51.49);
        assert_eq!(round_to(0.1245354, 6), 0.124535);
        assert_eq!(round_to(-1.25, 1), -1.3);
    }

    #[test]
    fn test_requested_precision_below_ten() {
        assert_eq!(format_value(5.0, 4), "5.0000");
        assert_eq!(format_value(9.87654, 3), "9.877");
    }

    #[test]
    fn test_precision_clamps_with_magnitude() {
        assert_eq!(format_value(50.0, 4), "50.00");
        assert_eq!(format_value(500.0, 4), "500.0");
        assert_eq!(format_value(5000.0, 4), "5000.0");
        // At >= 1000 the single decimal is forced even when fewer requested.
        assert_eq!(format_value(5000.0, 0), "5000.0");
    }

    #[test]
    fn test_non_finite_renders_placeholder() {
        assert_eq!(format_value(f64::NAN, 2), "--");
        assert_eq!(format_value(f64::INFINITY, 2), "--");
        assert_eq!(format_with_unit(f64::NAN, "V", 2), "--");
    }

    #[test]
    fn test_unit_suffixes() {
        assert_eq!(format_quantity(12.0, Quantity::Voltage, 2), "12.00 V");
        assert_eq!(format_quantity(3.0, Quantity::Current, 1), "3.0 A");
        assert_eq!(format_with_unit(1.2454, "VA", 4), "1.2454 VA");
    }

    #[test]
    fn test_solved_resistance_formats_round_trip() {
        let input = PartialQuantitySet::default()
            .with_voltage(12.0)
            .with_current(2.0);
        let solved = resolve(&input).unwrap();
        assert_eq!(
            format_quantity(solved.quantities.resistance, Quantity::Resistance, 2),
            "6.00 Ω"
        );
    }
}
