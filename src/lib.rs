//! procflow — procurement logic scenario to flow-diagram compiler.
//!
//! Takes a Scenario (geography, category, supplier pool, buying channels,
//! sourcing thresholds) and emits a decision-graph description, Mermaid
//! text rendering it, blueprint JSON and CSV exports.
//!
//! Public API: `build_graph()`, `MermaidRenderer`, `render_scenario_json()`.

pub mod export;
pub mod graph;
pub mod lookup;
pub mod render;
pub mod scenario;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use graph::{BuildOutcome, GraphDescription, GraphIR, build_graph};
pub use render::{MermaidRenderer, Renderer};
pub use scenario::Scenario;

/// Message callers surface when no feature toggle is on.
pub const NOTHING_ENABLED_WARNING: &str =
    "nothing to render: enable at least one of supplier pool, buying channels, or sourcing logic";

/// Parse scenario JSON, build the decision graph and render it to Mermaid
/// text. Errors on invalid JSON and on the "nothing enabled" condition.
pub fn render_scenario_json(src: &str) -> Result<String, String> {
    let scenario = Scenario::from_json(src).map_err(|e| format!("invalid scenario JSON: {e}"))?;
    match build_graph(&scenario) {
        BuildOutcome::Diagram(desc) => Ok(MermaidRenderer::new().render(&desc)),
        BuildOutcome::NothingEnabled(_) => Err(NOTHING_ENABLED_WARNING.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_scenario_json_default() {
        let out = render_scenario_json("{}").unwrap();
        assert!(out.starts_with("graph TD\n"));
        assert!(out.contains("Start([User Request])"));
    }

    #[test]
    fn test_render_scenario_json_bad_input() {
        assert!(render_scenario_json("not json").is_err());
    }

    #[test]
    fn test_render_scenario_json_nothing_enabled() {
        let src = r#"{
            "supplier_pool": {"enabled": false},
            "buying_channels": {"enabled": false},
            "stream2": {"enabled": false}
        }"#;
        assert_eq!(
            render_scenario_json(src).unwrap_err(),
            NOTHING_ENABLED_WARNING
        );
    }
}
