//! Error types for the Wire Core solver.
//!
//! This module provides a unified error type [`SolverError`] that covers
//! all error conditions that can occur during DC resolution and AC input
//! validation.

use thiserror::Error;

use crate::quantity::Quantity;

/// Result type alias using [`SolverError`].
pub type Result<T> = std::result::Result<T, SolverError>;

/// Unified error type for all Wire Core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    // ============ DC Resolution Errors ============
    /// The fixpoint loop terminated with at least one quantity still unknown.
    ///
    /// The display message is fixed; the still-unknown quantities ride along
    /// for callers that want to highlight the missing fields.
    #[error("Unable to resolve all circuit metrics from provided values")]
    UnderdeterminedSystem { missing: Vec<Quantity> },

    // ============ AC Validation Errors ============
    /// An AC input failed validation. Carries every violation found.
    #[error("Invalid AC circuit input: {}", .errors.join("; "))]
    InvalidAcInput { errors: Vec<String> },
}

impl SolverError {
    /// Create an underdetermined-system error.
    pub fn underdetermined(missing: Vec<Quantity>) -> Self {
        Self::UnderdeterminedSystem { missing }
    }

    /// Create an invalid-AC-input error.
    pub fn invalid_ac_input(errors: Vec<String>) -> Self {
        Self::InvalidAcInput { errors }
    }
}
