//! Integration tests for the export surface: blueprint JSON, CSV sheets,
//! and Mermaid text, driven end to end from scenario JSON.

use procflow::export::{
    BLUEPRINT_VERSION, blueprint_json, channels_csv, logic_matrix_csv, make_blueprint,
    suppliers_csv, summary_csv,
};
use procflow::render::{MermaidRenderer, Renderer};
use procflow::scenario::{
    ChannelRow, LogicType, Scenario, SupplierRow, SupplierType, SupplierTypeFilter,
    TacticalAction,
};
use procflow::{build_graph, render_scenario_json};

fn sample_scenario() -> Scenario {
    let mut s = Scenario::new();
    s.scope.region = Some("AME".to_string());
    s.scope.cluster = Some("WESTERN EUROPE".to_string());
    s.scope.end_markets = vec!["France".to_string(), "Spain".to_string()];
    s.category.l1 = vec!["Marketing".to_string()];
    s.category.l2 = vec!["Media".to_string()];
    s.supplier_pool.suppliers = vec![
        SupplierRow {
            vendor_code: "V-100".to_string(),
            buying_channel: "Catalogue".to_string(),
            ..SupplierRow::named("Acme")
        },
        SupplierRow {
            supplier_type: SupplierType::Global,
            logic_type: LogicType::Sourcing,
            ..SupplierRow::named("Globex")
        },
    ];
    s.buying_channels.channels = vec![ChannelRow {
        channel_type: "Catalogue".to_string(),
        supplier: "Acme".to_string(),
        vendor_code: "V-100".to_string(),
        link: "https://catalogue.example".to_string(),
        comments: String::new(),
    }];
    s.buying_channels.allow_marketplace = true;
    s.buying_channels.marketplace_limit = 500;
    s.stream2.tactical_threshold = 25_000;
    s.stream2.tactical_action = TacticalAction::Fairmarkit;
    s
}

#[test]
fn test_blueprint_round_trips_every_field() {
    let s = sample_scenario();
    let json = blueprint_json(&s).unwrap();
    let back = Scenario::from_json(&json).unwrap();
    assert_eq!(back, s);
}

#[test]
fn test_blueprint_metadata_and_derived_path() {
    let s = sample_scenario();
    let value: serde_json::Value =
        serde_json::from_str(&blueprint_json(&s).unwrap()).unwrap();
    assert_eq!(value["metadata"]["version"], BLUEPRINT_VERSION);
    assert!(value["metadata"]["created_at"].is_string());
    assert_eq!(
        value["category"]["full_path"],
        "Marketing > Media > N/A > N/A"
    );
}

#[test]
fn test_blueprint_metadata_ignored_on_reparse() {
    let s = sample_scenario();
    let bp = make_blueprint(&s);
    let json = serde_json::to_string(&bp).unwrap();
    // Parsing the full blueprint as a bare Scenario drops metadata only.
    assert_eq!(Scenario::from_json(&json).unwrap(), s);
}

#[test]
fn test_logic_matrix_reflects_scenario() {
    let csv = logic_matrix_csv(&sample_scenario()).unwrap();
    assert!(csv.starts_with("Field,Value\n"));
    assert!(csv.contains("Region,AME"));
    assert!(csv.contains("Cluster/DRBU,WESTERN EUROPE"));
    assert!(csv.contains("End Markets,\"France, Spain\""));
    assert!(csv.contains("Category Full Path,Marketing > Media > N/A > N/A"));
    assert!(csv.contains("Marketplace Limit,500"));
    assert!(csv.contains("Tactical Threshold,25000"));
    assert!(csv.contains("Tactical Action,Fairmarkit (Autonomous)"));
}

#[test]
fn test_logic_matrix_blank_scope_renders_na() {
    let csv = logic_matrix_csv(&Scenario::new()).unwrap();
    assert!(csv.contains("Region,N/A"));
    assert!(csv.contains("End Markets,N/A"));
    assert!(csv.contains("Category Full Path,N/A > N/A > N/A > N/A"));
}

#[test]
fn test_suppliers_sheet_matches_diagram_filter() {
    let mut s = sample_scenario();
    s.supplier_pool.supplier_type_filter = SupplierTypeFilter::Global;

    let csv = suppliers_csv(&s).unwrap();
    assert!(csv.contains("Globex"));
    assert!(!csv.contains("Acme"));

    // The diagram and the sheet agree on which rows survive.
    let g = build_graph(&s).diagram().cloned().unwrap();
    assert!(!g.has_node("Supp0"));
    assert!(g.has_node("Supp1"));
}

#[test]
fn test_channels_and_summary_sheets() {
    let s = sample_scenario();
    let channels = channels_csv(&s).unwrap();
    assert!(channels.starts_with("Channel Type,Supplier,Vendor Code,Link,Comments\n"));
    assert!(channels.contains("Catalogue,Acme,V-100,https://catalogue.example,"));

    let summary = summary_csv(&s).unwrap();
    assert!(summary.starts_with("Item,Count\n"));
    assert!(summary.contains("End Markets,2"));
    assert!(summary.contains("Suppliers,2"));
    assert!(summary.contains("Buying Channels,1"));
}

#[test]
fn test_render_scenario_json_matches_direct_pipeline() {
    let s = sample_scenario();
    let json = blueprint_json(&s).unwrap();

    let via_json = render_scenario_json(&json).unwrap();
    let g = build_graph(&s).diagram().cloned().unwrap();
    let direct = MermaidRenderer::new().render(&g);
    assert_eq!(via_json, direct);
    assert!(direct.contains("CheckTaxonomyYes[\"Marketing &gt; Media &gt; N/A &gt; N/A\"]"));
}

#[test]
fn test_render_scenario_json_reports_nothing_enabled() {
    let src = r#"{
        "supplier_pool": {"enabled": false},
        "buying_channels": {"enabled": false},
        "stream2": {"enabled": false}
    }"#;
    let err = render_scenario_json(src).unwrap_err();
    assert!(err.contains("nothing to render"));
}
