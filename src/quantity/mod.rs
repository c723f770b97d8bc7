//! Quantity types and tolerance guards.
//!
//! This module provides the data model shared by the DC resolver and the AC
//! evaluator: the four W.I.R.E. quantities, partial and complete quantity
//! sets, derivation provenance, AC inputs/results, and the epsilon
//! comparisons used to decide whether a computed value changes a slot.

mod tolerance;
mod types;

pub use tolerance::{is_finite_number, nearly_equal, nearly_equal_with};
pub use types::*;
