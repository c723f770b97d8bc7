//! Core types for electrical quantity sets.

use std::fmt;

/// One of the four W.I.R.E. quantities related by Ohm's and power laws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Quantity {
    /// Power dissipated, in watts.
    Watts,
    /// Current (I), in amperes.
    Current,
    /// Resistance, in ohms.
    Resistance,
    /// Voltage (E), in volts.
    Voltage,
}

impl Quantity {
    /// All four quantities in W, I, R, E order.
    pub const ALL: [Quantity; 4] = [
        Quantity::Watts,
        Quantity::Current,
        Quantity::Resistance,
        Quantity::Voltage,
    ];

    /// Slot index used by the resolver's internal state.
    pub fn index(self) -> usize {
        match self {
            Quantity::Watts => 0,
            Quantity::Current => 1,
            Quantity::Resistance => 2,
            Quantity::Voltage => 3,
        }
    }

    /// Display unit suffix for this quantity.
    pub fn unit(self) -> &'static str {
        match self {
            Quantity::Watts => "W",
            Quantity::Current => "A",
            Quantity::Resistance => "Ω",
            Quantity::Voltage => "V",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quantity::Watts => "watts",
            Quantity::Current => "current",
            Quantity::Resistance => "resistance",
            Quantity::Voltage => "voltage",
        };
        write!(f, "{}", name)
    }
}

/// A partial set of DC quantities: the caller's knowns.
///
/// Any subset of the four fields may be supplied. Non-finite values are
/// treated as unknown by the resolver, the same as an absent field.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct PartialQuantitySet {
    pub watts: Option<f64>,
    pub current: Option<f64>,
    pub resistance: Option<f64>,
    pub voltage: Option<f64>,
}

impl PartialQuantitySet {
    /// Set the known power in watts.
    pub fn with_watts(mut self, watts: f64) -> Self {
        self.watts = Some(watts);
        self
    }

    /// Set the known current in amperes.
    pub fn with_current(mut self, current: f64) -> Self {
        self.current = Some(current);
        self
    }

    /// Set the known resistance in ohms.
    pub fn with_resistance(mut self, resistance: f64) -> Self {
        self.resistance = Some(resistance);
        self
    }

    /// Set the known voltage in volts.
    pub fn with_voltage(mut self, voltage: f64) -> Self {
        self.voltage = Some(voltage);
        self
    }

    /// Get a field by quantity key.
    pub fn get(&self, quantity: Quantity) -> Option<f64> {
        match quantity {
            Quantity::Watts => self.watts,
            Quantity::Current => self.current,
            Quantity::Resistance => self.resistance,
            Quantity::Voltage => self.voltage,
        }
    }
}

/// A complete, solved set of DC quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct QuantitySet {
    pub watts: f64,
    pub current: f64,
    pub resistance: f64,
    pub voltage: f64,
}

impl QuantitySet {
    /// Get a field by quantity key.
    pub fn get(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::Watts => self.watts,
            Quantity::Current => self.current,
            Quantity::Resistance => self.resistance,
            Quantity::Voltage => self.voltage,
        }
    }
}

impl From<QuantitySet> for PartialQuantitySet {
    /// View a solved set as fully-known input, e.g. to re-solve it.
    fn from(set: QuantitySet) -> Self {
        PartialQuantitySet {
            watts: Some(set.watts),
            current: Some(set.current),
            resistance: Some(set.resistance),
            voltage: Some(set.voltage),
        }
    }
}

/// Provenance for a derived quantity: which formula produced it and from
/// which inputs.
///
/// Attached to a quantity only when it was computed rather than given, or
/// when a computed value materially overwrote a previous one. At most one
/// record per quantity per solve; a later overwrite replaces the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DerivationRecord {
    /// Human-readable formula label, e.g. `"E = I x R"`.
    pub formula: &'static str,
    /// Quantity keys the formula consumed, in formula order.
    pub inputs: &'static [Quantity],
}

/// Input to the AC network evaluator.
///
/// Inductance and capacitance default to zero, which yields a purely
/// resistive network.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct AcCircuitInput {
    /// Source voltage in volts (RMS).
    pub voltage: f64,
    /// Source frequency in hertz.
    pub frequency_hz: f64,
    /// Series resistance in ohms.
    pub resistance: f64,
    /// Series inductance in henries.
    pub inductance: f64,
    /// Series capacitance in farads.
    pub capacitance: f64,
}

impl Default for AcCircuitInput {
    fn default() -> Self {
        Self {
            voltage: 0.0,
            frequency_hz: 0.0,
            resistance: 0.0,
            inductance: 0.0,
            capacitance: 0.0,
        }
    }
}

impl AcCircuitInput {
    /// Create an input for a purely resistive network.
    pub fn new(voltage: f64, frequency_hz: f64, resistance: f64) -> Self {
        Self {
            voltage,
            frequency_hz,
            resistance,
            inductance: 0.0,
            capacitance: 0.0,
        }
    }

    /// Set the series inductance in henries.
    pub fn with_inductance(mut self, inductance: f64) -> Self {
        self.inductance = inductance;
        self
    }

    /// Set the series capacitance in farads.
    pub fn with_capacitance(mut self, capacitance: f64) -> Self {
        self.capacitance = capacitance;
        self
    }
}

/// Full result of an AC network evaluation.
///
/// Values carry the evaluator's contract rounding: 4 decimals for the ohm,
/// power-factor and power fields, 2 for the phase angle, 6 for current.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AcQuantitySet {
    /// Source frequency, echoed from the input.
    pub frequency_hz: f64,
    /// Inductive reactance X_L in ohms.
    pub inductive_reactance: f64,
    /// Capacitive reactance X_C in ohms.
    pub capacitive_reactance: f64,
    /// Net reactance X_L - X_C in ohms.
    pub net_reactance: f64,
    /// Impedance magnitude in ohms.
    pub impedance: f64,
    /// Phase angle in degrees; positive for net-inductive networks.
    pub phase_angle_degrees: f64,
    /// Current in amperes.
    pub current: f64,
    /// Apparent power in volt-amperes.
    pub apparent_power: f64,
    /// Reactive power in volt-amperes reactive.
    pub reactive_power: f64,
    /// Real (dissipated) power in watts.
    pub real_power: f64,
    /// Ratio of real to apparent power, cos of the phase angle.
    pub power_factor: f64,
}
