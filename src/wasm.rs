//! WASM bindings for procflow.
//!
//! Exposes `buildFlowchart` and `buildBlueprint` to JavaScript via
//! wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::export::blueprint_json;
use crate::scenario::Scenario;

/// Build a Scenario's decision graph and return it as Mermaid text.
///
/// Errors on invalid JSON and when no feature toggle is enabled.
#[wasm_bindgen(js_name = "buildFlowchart")]
pub fn build_flowchart(scenario_json: &str) -> Result<String, JsError> {
    crate::render_scenario_json(scenario_json).map_err(|e| JsError::new(&e))
}

/// Stamp a Scenario with generation metadata and return the blueprint JSON.
#[wasm_bindgen(js_name = "buildBlueprint")]
pub fn build_blueprint(scenario_json: &str) -> Result<String, JsError> {
    let scenario = Scenario::from_json(scenario_json)
        .map_err(|e| JsError::new(&format!("invalid scenario JSON: {e}")))?;
    blueprint_json(&scenario).map_err(|e| JsError::new(&e.to_string()))
}
