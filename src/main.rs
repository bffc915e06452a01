//! procflow CLI entry point.
//!
//! Reads blueprint-shaped scenario JSON from a file or stdin and emits
//! Mermaid text, blueprint JSON, a plain-text summary, or a full artifact
//! directory.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use procflow::export::{
    blueprint_json, channels_csv, logic_matrix_csv, suppliers_csv, summary_csv,
};
use procflow::graph::GraphIR;
use procflow::scenario::Scenario;
use procflow::{BuildOutcome, MermaidRenderer, NOTHING_ENABLED_WARNING, Renderer, build_graph};

/// Procurement logic scenario to flow-diagram compiler.
#[derive(Parser, Debug)]
#[command(
    name = "procflow",
    about = "Procurement logic scenario to Mermaid/JSON/CSV output"
)]
struct Cli {
    /// Scenario JSON file (reads from stdin if not provided)
    input: Option<String>,

    /// Output format: mermaid, json, or summary
    #[arg(short = 'f', long = "format", default_value = "mermaid")]
    format: String,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Write all artifacts (blueprint.json, logic_flow.mmd, CSV sheets)
    /// to this directory
    #[arg(long = "export-dir")]
    export_dir: Option<String>,

    /// Print node/edge counts and a DAG check to stderr
    #[arg(long = "stats")]
    stats: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    let scenario = match Scenario::from_json(&text) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: invalid scenario JSON: {}", e);
            process::exit(1);
        }
    };

    let outcome = build_graph(&scenario);

    if cli.stats {
        let ir = GraphIR::from_description(outcome.description());
        eprintln!(
            "stats: {} nodes, {} edges, dag: {}",
            ir.node_count(),
            ir.edge_count(),
            ir.is_dag()
        );
    }

    if let Some(ref dir) = cli.export_dir {
        export_all(&scenario, &outcome, dir);
        return;
    }

    let rendered = match cli.format.as_str() {
        "mermaid" => match &outcome {
            BuildOutcome::Diagram(desc) => MermaidRenderer::new().render(desc),
            BuildOutcome::NothingEnabled(_) => {
                eprintln!("warning: {}", NOTHING_ENABLED_WARNING);
                return;
            }
        },
        "json" => match blueprint_json(&scenario) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        },
        "summary" => summary_text(&scenario),
        other => {
            eprintln!("error: unknown format '{}'; use mermaid, json, or summary", other);
            process::exit(1);
        }
    };

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}

/// Write every artifact into the directory. Failures are reported per
/// artifact and never abort the remaining ones.
fn export_all(scenario: &Scenario, outcome: &BuildOutcome, dir: &str) {
    if let Err(e) = fs::create_dir_all(dir) {
        eprintln!("error: cannot create '{}': {}", dir, e);
        process::exit(1);
    }
    let dir = Path::new(dir);
    let mut failures = 0;

    let mut write = |name: &str, content: Result<String, String>| match content {
        Ok(text) => {
            if let Err(e) = fs::write(dir.join(name), text) {
                eprintln!("warning: cannot write {}: {}", name, e);
                failures += 1;
            }
        }
        Err(e) => {
            eprintln!("warning: skipping {}: {}", name, e);
            failures += 1;
        }
    };

    match outcome {
        BuildOutcome::Diagram(desc) => write(
            "logic_flow.mmd",
            Ok(MermaidRenderer::new().render(desc)),
        ),
        BuildOutcome::NothingEnabled(_) => {
            eprintln!("warning: {}", NOTHING_ENABLED_WARNING);
        }
    }
    write("blueprint.json", blueprint_json(scenario).map_err(|e| e.to_string()));
    write("logic_matrix.csv", logic_matrix_csv(scenario).map_err(|e| e.to_string()));
    write("suppliers.csv", suppliers_csv(scenario).map_err(|e| e.to_string()));
    write("buying_channels.csv", channels_csv(scenario).map_err(|e| e.to_string()));
    write("summary.csv", summary_csv(scenario).map_err(|e| e.to_string()));

    if failures > 0 {
        eprintln!("warning: {} artifact(s) failed", failures);
    }
}

fn summary_text(scenario: &Scenario) -> String {
    let na = || "N/A".to_string();
    let lines = [
        format!(
            "Scope: {} / {}",
            scenario.scope.region.clone().unwrap_or_else(na),
            scenario.scope.cluster.clone().unwrap_or_else(na)
        ),
        format!("End Markets: {}", scenario.scope.end_markets.len()),
        format!(
            "Business User Markets: {}",
            scenario.scope.business_user_markets.len()
        ),
        format!("Category: {}", scenario.category.full_path()),
        format!("Suppliers: {}", scenario.supplier_pool.filtered().count()),
        format!(
            "Buying Channels: {}",
            scenario.buying_channels.channels.len()
        ),
        format!(
            "Marketplace Enabled: {}",
            if scenario.buying_channels.allow_marketplace {
                "Yes"
            } else {
                "No"
            }
        ),
        format!(
            "Tactical Threshold: £{}",
            scenario.stream2.tactical_threshold
        ),
    ];
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
