//! WASM bindings for Wire Core.
//!
//! This module provides JavaScript-friendly bindings for the browser-hosted
//! WireBench panels. Inputs and results cross the boundary as JSON strings
//! in the same camelCase shape the panels persist.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmQuantitySolver } from 'wire_core';
//!
//! await init();
//!
//! const solver = new WasmQuantitySolver();
//! const dc = JSON.parse(solver.solve_dc('{"voltage": 12, "resistance": 4}'));
//! // dc.quantities.current === 3, dc.quantities.watts === 36
//!
//! const ac = JSON.parse(solver.solve_ac(
//!   '{"voltage": 10, "frequencyHz": 1000, "resistance": 50, "inductance": 0.01}'
//! ));
//! ```

use wasm_bindgen::prelude::*;

use crate::quantity::{AcCircuitInput, PartialQuantitySet};
use crate::solver::{resolve_with_config, solve_ac, validate, ResolverConfig};
use crate::{EPSILON, MAX_PASSES};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js_err(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-compatible electrical quantity solver.
///
/// Wraps the native resolver configuration and provides JSON-in/JSON-out
/// methods for the DC resolver, the AC evaluator, and the AC validator.
#[wasm_bindgen]
pub struct WasmQuantitySolver {
    config: ResolverConfig,
}

impl Default for WasmQuantitySolver {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmQuantitySolver {
    /// Create a solver with the default tolerance and pass bound.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmQuantitySolver {
        Self::with_config(EPSILON, MAX_PASSES)
    }

    /// Create a solver with custom DC resolution configuration.
    ///
    /// # Arguments
    /// * `tolerance` - Change-detection tolerance (default: 1e-9)
    /// * `max_passes` - Maximum passes over the rule table (default: 16)
    #[wasm_bindgen]
    pub fn with_config(tolerance: f64, max_passes: usize) -> WasmQuantitySolver {
        WasmQuantitySolver {
            config: ResolverConfig::new()
                .with_tolerance(tolerance)
                .with_max_passes(max_passes),
        }
    }

    /// Resolve a partial DC quantity set.
    ///
    /// # Arguments
    /// * `input_json` - JSON object with any subset of `watts`, `current`,
    ///   `resistance`, `voltage`
    ///
    /// # Returns
    /// JSON with the complete `quantities` set and per-field `derivations`,
    /// or an error string when the input is underdetermined.
    #[wasm_bindgen]
    pub fn solve_dc(&self, input_json: &str) -> Result<String, JsValue> {
        let input: PartialQuantitySet = serde_json::from_str(input_json).map_err(to_js_err)?;
        let solved = resolve_with_config(&input, self.config).map_err(to_js_err)?;
        serde_json::to_string(&solved).map_err(to_js_err)
    }

    /// Evaluate an AC network.
    ///
    /// # Arguments
    /// * `input_json` - JSON object with `voltage`, `frequencyHz`,
    ///   `resistance` and optional `inductance` / `capacitance`
    #[wasm_bindgen]
    pub fn solve_ac(&self, input_json: &str) -> Result<String, JsValue> {
        let input: AcCircuitInput = serde_json::from_str(input_json).map_err(to_js_err)?;
        serde_json::to_string(&solve_ac(&input)).map_err(to_js_err)
    }

    /// Validate an AC input without evaluating it.
    ///
    /// # Returns
    /// JSON `{"errors": [...]}`; an empty list means the input is valid.
    #[wasm_bindgen]
    pub fn validate_ac(&self, input_json: &str) -> Result<String, JsValue> {
        let input: AcCircuitInput = serde_json::from_str(input_json).map_err(to_js_err)?;
        serde_json::to_string(&validate(&input)).map_err(to_js_err)
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
