//! Fixpoint constraint-propagation resolver for the DC quantity set.

use tracing::{debug, debug_span, trace};

use crate::error::{Result, SolverError};
use crate::quantity::{
    is_finite_number, nearly_equal_with, DerivationRecord, PartialQuantitySet, Quantity,
    QuantitySet,
};
use crate::{EPSILON, MAX_PASSES};

use super::rules::{Slots, RULES};

/// Configuration for the DC resolver.
#[derive(Debug, Clone, Copy)]
pub struct ResolverConfig {
    /// Tolerance for deciding whether a freshly computed value changes an
    /// existing slot.
    pub tolerance: f64,
    /// Maximum number of passes over the rule table.
    pub max_passes: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            max_passes: MAX_PASSES,
        }
    }
}

impl ResolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the change-detection tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the maximum number of passes over the rule table.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }
}

/// A completed DC solve: the four quantities plus per-quantity provenance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Resolution {
    /// The complete quantity set.
    pub quantities: QuantitySet,
    /// Derivation records indexed by [`Quantity::index`]. `None` for a
    /// quantity that was given by the caller and never overwritten.
    derivations: [Option<DerivationRecord>; 4],
}

impl Resolution {
    /// Provenance for a quantity, if it was derived rather than given.
    pub fn derivation(&self, quantity: Quantity) -> Option<&DerivationRecord> {
        self.derivations[quantity.index()].as_ref()
    }
}

/// Resolve a partial quantity set with default configuration.
///
/// Returns the completed set with per-quantity derivation provenance, or
/// [`SolverError::UnderdeterminedSystem`] when the knowns cannot complete
/// the set. Pure function of its input; safe to call on every keystroke.
pub fn resolve(input: &PartialQuantitySet) -> Result<Resolution> {
    resolve_with_config(input, ResolverConfig::default())
}

/// Resolve a partial quantity set with a custom configuration.
pub fn resolve_with_config(input: &PartialQuantitySet, config: ResolverConfig) -> Result<Resolution> {
    let _span = debug_span!("dc_resolve").entered();

    // Seed slots from whichever knowns are finite; NaN and infinities count
    // as unknown.
    let mut slots: Slots = [None; 4];
    for quantity in Quantity::ALL {
        slots[quantity.index()] = is_finite_number(input.get(quantity));
    }

    let mut derivations: [Option<DerivationRecord>; 4] = [None; 4];

    for pass in 0..config.max_passes {
        let mut productive = false;

        for rule in &RULES {
            if !rule.applicable(&slots) {
                continue;
            }

            let value = (rule.compute)(&slots);
            let slot = &mut slots[rule.target.index()];
            let changed = match *slot {
                None => true,
                Some(current) => !nearly_equal_with(value, current, config.tolerance),
            };
            if !changed {
                continue;
            }

            trace!(target_quantity = %rule.target, formula = rule.formula, value, "rule fired");
            *slot = Some(value);
            // Last consistent derivation wins; its record replaces any prior one.
            derivations[rule.target.index()] = Some(DerivationRecord {
                formula: rule.formula,
                inputs: rule.inputs,
            });
            productive = true;
        }

        if !productive {
            debug!(passes = pass + 1, "fixpoint reached");
            break;
        }
    }

    let missing: Vec<Quantity> = Quantity::ALL
        .into_iter()
        .filter(|q| slots[q.index()].is_none())
        .collect();
    if !missing.is_empty() {
        debug!(?missing, "resolution underdetermined");
        return Err(SolverError::underdetermined(missing));
    }

    Ok(Resolution {
        quantities: QuantitySet {
            watts: slots[Quantity::Watts.index()].unwrap_or_default(),
            current: slots[Quantity::Current.index()].unwrap_or_default(),
            resistance: slots[Quantity::Resistance.index()].unwrap_or_default(),
            voltage: slots[Quantity::Voltage.index()].unwrap_or_default(),
        },
        derivations,
    })
}
