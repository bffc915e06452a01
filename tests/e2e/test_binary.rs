//! Integration tests for the procflow binary.
//!
//! These tests run the compiled binary with scenario JSON on stdin and
//! verify the emitted Mermaid / JSON / summary text and the export
//! directory artifacts.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Run the binary with the given stdin input and extra CLI args.
fn run_binary(input: &str, extra_args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_procflow"))
        .args(extra_args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::Write;
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(input.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary")
}

/// Run the binary expecting success; returns stdout.
fn run_ok(input: &str, extra_args: &[&str]) -> String {
    let output = run_binary(input, extra_args);
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Non-UTF8 output")
}

const SAMPLE: &str = r#"{
    "scope": {"region": "AME", "end_markets": ["France"]},
    "category": {"l1": ["Marketing"]},
    "supplier_pool": {
        "enabled": true,
        "suppliers": [
            {"name": "Acme", "supplier_type": "Local", "logic_type": "Buying Channel",
             "buying_channel": "Catalogue", "tender_required": "No"}
        ],
        "supplier_type_filter": "All"
    },
    "buying_channels": {"enabled": true, "allow_marketplace": false},
    "stream2": {"enabled": true, "tactical_threshold": 25000}
}"#;

const NOTHING_ENABLED: &str = r#"{
    "supplier_pool": {"enabled": false},
    "buying_channels": {"enabled": false},
    "stream2": {"enabled": false}
}"#;

#[test]
fn test_default_format_emits_mermaid() {
    let out = run_ok(SAMPLE, &[]);
    assert!(out.starts_with("graph TD\n"));
    assert!(out.contains("Start([User Request])"));
    assert!(out.contains("Supp0"));
    assert!(out.contains("subgraph SourcingBox [Sourcing Logic]"));
    assert!(out.contains("25000"));
}

#[test]
fn test_empty_scenario_still_renders() {
    let out = run_ok("{}", &[]);
    assert!(out.starts_with("graph TD\n"));
    assert!(out.contains("CheckTaxonomyYes[\"N/A\"]"));
}

#[test]
fn test_json_format_emits_blueprint() {
    let out = run_ok(SAMPLE, &["--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&out).expect("invalid JSON output");
    assert_eq!(value["metadata"]["version"], "2.0");
    assert_eq!(value["scope"]["region"], "AME");
    assert_eq!(value["supplier_pool"]["suppliers"][0]["name"], "Acme");
}

#[test]
fn test_summary_format() {
    let out = run_ok(SAMPLE, &["-f", "summary"]);
    assert!(out.contains("Scope: AME / N/A"));
    assert!(out.contains("Suppliers: 1"));
    assert!(out.contains("Tactical Threshold: £25000"));
}

#[test]
fn test_nothing_enabled_warns_and_exits_zero() {
    let output = run_binary(NOTHING_ENABLED, &[]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning:"));
    assert!(stderr.contains("nothing to render"));
}

#[test]
fn test_invalid_json_exits_nonzero() {
    let output = run_binary("not json", &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid scenario JSON"));
}

#[test]
fn test_unknown_format_exits_nonzero() {
    let output = run_binary(SAMPLE, &["-f", "ascii"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown format"));
}

#[test]
fn test_stats_flag_reports_dag() {
    let output = run_binary(SAMPLE, &["--stats"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("dag: true"));
}

#[test]
fn test_output_file_written() {
    let dir = std::env::temp_dir().join(format!("procflow-out-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("flow.mmd");
    let out = run_ok(SAMPLE, &["-o", path.to_str().unwrap()]);
    assert!(out.is_empty());
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("graph TD\n"));
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_export_dir_writes_all_artifacts() {
    let dir: PathBuf =
        std::env::temp_dir().join(format!("procflow-export-{}", std::process::id()));
    run_ok(SAMPLE, &["--export-dir", dir.to_str().unwrap()]);

    for name in [
        "logic_flow.mmd",
        "blueprint.json",
        "logic_matrix.csv",
        "suppliers.csv",
        "buying_channels.csv",
        "summary.csv",
    ] {
        let path = dir.join(name);
        assert!(path.exists(), "missing artifact {}", name);
        assert!(!fs::read_to_string(&path).unwrap().is_empty());
    }

    let suppliers = fs::read_to_string(dir.join("suppliers.csv")).unwrap();
    assert!(suppliers.contains("Acme"));
    fs::remove_dir_all(&dir).ok();
}
