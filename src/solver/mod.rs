//! DC and AC quantity solvers.
//!
//! This module provides the numerical engine of the crate.
//!
//! ## DC Resolution
//!
//! The DC resolver completes a partial set of the four W.I.R.E. quantities
//! by constraint propagation. The algebra of Ohm's and power laws is
//! expressed as twelve guarded derivation rules:
//!
//! ```text
//! E = I x R        I = E / R        R = E / I
//! W = E x I        W = I^2 x R      W = E^2 / R
//! E = W / I        E = sqrt(W x R)  I = W / E
//! I = sqrt(W / R)  R = W / I^2      R = E^2 / W
//! ```
//!
//! Each pass evaluates the rules in the fixed order of [`rules::RULES`]; a
//! rule fires when its inputs are known, its guard holds, and its result
//! would materially change the target slot. The most recently evaluated
//! consistent derivation wins, which can overwrite a contradictory given
//! value. The loop halts on the first unproductive pass.
//!
//! ## AC Evaluation
//!
//! The AC evaluator is a pure, non-iterative pipeline from a five-field
//! input (voltage, frequency, R, L, C) to ten derived quantities, with
//! display rounding applied as part of its contract. Input validation is a
//! separate, caller-invoked step.

mod ac;
mod dc;
mod rules;

pub use ac::{solve_ac, validate, ValidationReport};
pub use dc::{resolve, resolve_with_config, Resolution, ResolverConfig};
