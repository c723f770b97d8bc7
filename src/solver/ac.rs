//! Direct-evaluation AC network pipeline.
//!
//! For a series network described by voltage, frequency, R, L, C:
//!   1. X_L = 2πfL
//!   2. X_C = 1/(2πfC), or 0 when f or C is 0
//!   3. X = X_L - X_C
//!   4. Z = sqrt(R^2 + X^2)
//!   5. phase: R = 0 -> ±90° by sign of X, else atan(X/R) in degrees
//!   6. pf = cos(phase)
//!   7. I = V/Z, or 0 when Z <= epsilon
//!   8. S = V·I
//!   9. P = S·pf
//!   10. Q = S·sin(phase)
//!
//! The pipeline never fails numerically; input validation is a separate,
//! caller-invoked step. Display rounding (4 decimals for ohm, power and
//! power-factor fields, 2 for phase degrees, 6 for current) is part of the
//! evaluator's contract.

use std::f64::consts::PI;

use tracing::debug_span;

use crate::error::{Result, SolverError};
use crate::format::round_to;
use crate::quantity::{AcCircuitInput, AcQuantitySet};
use crate::EPSILON;

/// Evaluate the full AC quantity set for the given input.
///
/// Always produces finite numbers for finite, validator-accepted input.
/// Un-validated input (e.g. a negative resistance) still produces a numeric,
/// physically meaningless answer.
pub fn solve_ac(input: &AcCircuitInput) -> AcQuantitySet {
    let _span = debug_span!("ac_solve", frequency_hz = input.frequency_hz).entered();

    let inductive_reactance = 2.0 * PI * input.frequency_hz * input.inductance;

    let capacitive_reactance = if input.frequency_hz == 0.0 || input.capacitance == 0.0 {
        0.0
    } else {
        1.0 / (2.0 * PI * input.frequency_hz * input.capacitance)
    };

    let net_reactance = inductive_reactance - capacitive_reactance;

    let resistance = input.resistance;
    let impedance = (resistance * resistance + net_reactance * net_reactance).sqrt();

    let phase_angle_degrees = if resistance == 0.0 {
        if net_reactance > 0.0 {
            90.0
        } else if net_reactance < 0.0 {
            -90.0
        } else {
            0.0
        }
    } else {
        (net_reactance / resistance).atan().to_degrees()
    };

    let power_factor = phase_angle_degrees.to_radians().cos();

    let current = if impedance <= EPSILON {
        0.0
    } else {
        input.voltage / impedance
    };

    let apparent_power = input.voltage * current;
    let real_power = apparent_power * power_factor;
    let reactive_power = apparent_power * phase_angle_degrees.to_radians().sin();

    AcQuantitySet {
        frequency_hz: input.frequency_hz,
        inductive_reactance: round_to(inductive_reactance, 4),
        capacitive_reactance: round_to(capacitive_reactance, 4),
        net_reactance: round_to(net_reactance, 4),
        impedance: round_to(impedance, 4),
        phase_angle_degrees: round_to(phase_angle_degrees, 2),
        current: round_to(current, 6),
        apparent_power: round_to(apparent_power, 4),
        reactive_power: round_to(reactive_power, 4),
        real_power: round_to(real_power, 4),
        power_factor: round_to(power_factor, 4),
    }
}

/// Outcome of validating an [`AcCircuitInput`].
///
/// Collects every violation rather than stopping at the first, so a panel
/// can surface all field errors at once.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationReport {
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// True when no violations were found.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert into a `Result`, erroring with the collected violations.
    pub fn into_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(SolverError::invalid_ac_input(self.errors))
        }
    }
}

/// Validate an AC input before trusting evaluation results.
///
/// Checks each field independently; there are no cross-field checks, so
/// L = C = 0 is accepted and yields a purely resistive result.
pub fn validate(input: &AcCircuitInput) -> ValidationReport {
    let mut errors = Vec::new();

    if input.voltage < 0.0 {
        errors.push("voltage cannot be negative".to_string());
    }
    if input.frequency_hz <= 0.0 {
        errors.push("frequency must be greater than zero".to_string());
    }
    if input.resistance < 0.0 {
        errors.push("resistance cannot be negative".to_string());
    }
    if input.inductance < 0.0 {
        errors.push("inductance cannot be negative".to_string());
    }
    if input.capacitance < 0.0 {
        errors.push("capacitance cannot be negative".to_string());
    }

    ValidationReport { errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_series_rl_network() {
        // 10 V, 1 kHz, 50 Ω, 10 mH: X_L = 2π·1000·0.01 ≈ 62.8319 Ω,
        // Z = sqrt(50² + X_L²) ≈ 80.2985 Ω, I ≈ 0.124535 A.
        let input = AcCircuitInput::new(10.0, 1000.0, 50.0).with_inductance(0.01);
        let result = solve_ac(&input);

        assert_relative_eq!(result.inductive_reactance, 62.8319, epsilon = 1e-4);
        assert_relative_eq!(result.capacitive_reactance, 0.0);
        assert_relative_eq!(result.net_reactance, 62.8319, epsilon = 1e-4);
        assert_relative_eq!(result.impedance, 80.2985, epsilon = 1e-4);
        assert_relative_eq!(result.current, 0.124535, epsilon = 1e-6);
        assert_relative_eq!(result.phase_angle_degrees, 51.49, epsilon = 0.01);
        // pf = cos(atan(X/R)) = R/Z
        assert_relative_eq!(result.power_factor, 0.6227, epsilon = 1e-3);
        assert_relative_eq!(result.apparent_power, 1.2454, epsilon = 1e-3);
        assert_relative_eq!(result.real_power, 0.7755, epsilon = 1e-3);
        assert_relative_eq!(result.reactive_power, 0.9745, epsilon = 1e-3);
    }

    #[test]
    fn test_purely_resistive_network() {
        let input = AcCircuitInput::new(10.0, 60.0, 100.0);
        let result = solve_ac(&input);

        assert_relative_eq!(result.inductive_reactance, 0.0);
        assert_relative_eq!(result.capacitive_reactance, 0.0);
        assert_relative_eq!(result.impedance, 100.0);
        assert_relative_eq!(result.phase_angle_degrees, 0.0);
        assert_relative_eq!(result.power_factor, 1.0);
        assert_relative_eq!(result.current, 0.1);
        assert_relative_eq!(result.apparent_power, 1.0);
        assert_relative_eq!(result.real_power, 1.0);
        assert_relative_eq!(result.reactive_power, 0.0);
    }

    #[test]
    fn test_capacitive_network_has_negative_phase() {
        // 1 µF at 1 kHz: X_C = 1/(2π·1000·1e-6) ≈ 159.1549 Ω.
        let input = AcCircuitInput::new(10.0, 1000.0, 100.0).with_capacitance(1e-6);
        let result = solve_ac(&input);

        assert_relative_eq!(result.capacitive_reactance, 159.1549, epsilon = 1e-4);
        assert!(result.net_reactance < 0.0);
        assert!(result.phase_angle_degrees < 0.0);
        assert!(result.reactive_power < 0.0);
        assert!(result.power_factor > 0.0);
    }

    #[test]
    fn test_zero_resistance_clamps_phase_to_ninety() {
        let inductive = AcCircuitInput::new(10.0, 1000.0, 0.0).with_inductance(0.01);
        assert_relative_eq!(solve_ac(&inductive).phase_angle_degrees, 90.0);

        let capacitive = AcCircuitInput::new(10.0, 1000.0, 0.0).with_capacitance(1e-6);
        assert_relative_eq!(solve_ac(&capacitive).phase_angle_degrees, -90.0);
    }

    #[test]
    fn test_fully_degenerate_input_stays_finite() {
        let input = AcCircuitInput::new(10.0, 0.0, 0.0);
        let result = solve_ac(&input);

        assert_relative_eq!(result.impedance, 0.0);
        assert_relative_eq!(result.phase_angle_degrees, 0.0);
        // Zero impedance short-circuits the current to zero rather than inf.
        assert_relative_eq!(result.current, 0.0);
        assert_relative_eq!(result.apparent_power, 0.0);
    }

    #[test]
    fn test_zero_frequency_zeroes_capacitive_reactance() {
        let input = AcCircuitInput::new(10.0, 0.0, 50.0).with_capacitance(1e-6);
        let result = solve_ac(&input);
        assert_relative_eq!(result.capacitive_reactance, 0.0);
        assert_relative_eq!(result.impedance, 50.0);
    }

    #[test]
    fn test_validate_accepts_purely_resistive_input() {
        let report = validate(&AcCircuitInput::new(10.0, 60.0, 100.0));
        assert!(report.is_valid());
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_validate_collects_every_violation() {
        let input = AcCircuitInput {
            voltage: -1.0,
            frequency_hz: 0.0,
            resistance: -5.0,
            inductance: -0.01,
            capacitance: -1e-6,
        };
        let report = validate(&input);
        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 5);
        assert!(report.errors[0].contains("voltage"));
        assert!(report.errors[1].contains("frequency"));
    }

    #[test]
    fn test_validate_rejects_zero_frequency_only() {
        let report = validate(&AcCircuitInput::new(10.0, 0.0, 100.0));
        assert_eq!(
            report.errors,
            vec!["frequency must be greater than zero".to_string()]
        );
    }

    #[test]
    fn test_unvalidated_negative_resistance_still_evaluates() {
        let result = solve_ac(&AcCircuitInput::new(10.0, 60.0, -50.0));
        assert!(result.impedance.is_finite());
        assert_relative_eq!(result.impedance, 50.0);
    }

    #[test]
    fn test_contract_rounding_precision() {
        let input = AcCircuitInput::new(10.0, 1000.0, 50.0).with_inductance(0.01);
        let result = solve_ac(&input);

        // 4 decimals on ohm fields, 2 on phase, 6 on current.
        assert_eq!(result.inductive_reactance, 62.8319);
        assert_eq!(result.phase_angle_degrees, 51.49);
        assert_eq!(result.current, 0.124535);
    }
}
