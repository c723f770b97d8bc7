//! # Wire Core
//!
//! A deterministic electrical quantity solver for the WireBench circuit lab.
//!
//! This library provides:
//! - A DC constraint-propagation resolver over the four W.I.R.E. quantities
//!   (Watts, current, Resistance, voltage)
//! - A direct-evaluation AC network pipeline (reactance, impedance, phase,
//!   and power quantities) with a separate input validator
//! - Unit-suffixed, magnitude-aware display formatting for solved values
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`quantity`] - Quantity types, partial/complete sets, tolerance guards
//! - [`solver`] - DC fixpoint resolver and AC network evaluator
//! - [`format`] - Display rendering of solved values
//!
//! ## Solving Method
//!
//! The DC resolver treats Ohm's and power laws as a set of twelve guarded
//! derivation rules over four scalar slots. Each pass evaluates the rules in
//! a fixed priority order; a rule fires when its inputs are known and its
//! result would change the target slot by more than the tolerance. The loop
//! halts on the first pass in which no rule fires, or after a bounded number
//! of passes. If any slot is still unknown at that point the input was
//! underdetermined and the solve fails as a whole.
//!
//! The AC evaluator is not iterative: it computes ten quantities from the
//! input in one fixed order (reactances, impedance, phase, then powers) and
//! never fails on numeric grounds. Callers are expected to run
//! [`solver::validate`] on the input first.
//!
//! ## Usage
//!
//! ```
//! use wire_core::{resolve, PartialQuantitySet, Quantity};
//!
//! let input = PartialQuantitySet::default()
//!     .with_voltage(12.0)
//!     .with_resistance(4.0);
//! let solved = resolve(&input).unwrap();
//! assert_eq!(solved.quantities.current, 3.0);
//! assert_eq!(solved.quantities.watts, 36.0);
//! assert!(solved.derivation(Quantity::Voltage).is_none()); // given, not derived
//! ```

pub mod error;
pub mod format;
pub mod quantity;
pub mod solver;

// Re-export main types for convenience
pub use error::{Result, SolverError};
pub use quantity::{
    AcCircuitInput, AcQuantitySet, DerivationRecord, PartialQuantitySet, Quantity, QuantitySet,
};
pub use solver::{
    resolve, resolve_with_config, solve_ac, validate, Resolution, ResolverConfig,
    ValidationReport,
};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmQuantitySolver;

/// Relative/absolute comparison epsilon shared by the whole engine.
pub const EPSILON: f64 = 1e-9;

/// Default cap on DC resolver passes. Two knowns need at most two passes to
/// complete the set; the cap only matters for pathological inputs.
pub const MAX_PASSES: usize = 16;
