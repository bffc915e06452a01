//! Mermaid flowchart emitter.
//!
//! Produces `graph TD` text: node declarations first (subgraph members
//! inside their `subgraph … end` block), then edges, then styling. Any
//! Mermaid-capable viewer renders the output as-is.

use crate::graph::{GraphDescription, Node, NodeShape};

use super::Renderer;

const INDENT: &str = "    ";

/// Emits Mermaid `graph TD` text from a GraphDescription.
#[derive(Debug, Clone, Default)]
pub struct MermaidRenderer;

impl MermaidRenderer {
    pub fn new() -> Self {
        Self
    }

    fn node_decl(node: &Node) -> String {
        // Quoted labels may carry embedded newlines (escaped for Mermaid);
        // unquoted shapes get their newlines flattened to spaces.
        let quoted = node.label.replace('"', "'").replace('\n', "\\n");
        let flat = node.label.replace('"', "'").replace('\n', " ");
        match node.shape {
            NodeShape::Rectangle => format!("{}[\"{}\"]", node.id, quoted),
            NodeShape::Rounded => format!("{}({})", node.id, flat),
            NodeShape::Diamond => format!("{}{{{}}}", node.id, flat),
            NodeShape::Circle => format!("{}(({}))", node.id, flat),
            NodeShape::Stadium => format!("{}([{}])", node.id, flat),
        }
    }
}

impl Renderer for MermaidRenderer {
    fn render(&self, desc: &GraphDescription) -> String {
        let mut lines: Vec<String> = vec!["graph TD".to_string()];

        for id in desc.top_level_node_ids() {
            if let Some(node) = desc.node(id) {
                lines.push(format!("{INDENT}{}", Self::node_decl(node)));
            }
        }

        for sg in &desc.subgraphs {
            lines.push(format!("{INDENT}subgraph {} [{}]", sg.id, sg.title));
            lines.push(format!("{INDENT}{INDENT}direction TB"));
            for id in &sg.nodes {
                if let Some(node) = desc.node(id) {
                    lines.push(format!("{INDENT}{INDENT}{}", Self::node_decl(node)));
                }
            }
            lines.push(format!("{INDENT}end"));
        }

        for edge in &desc.edges {
            let arrow = if edge.dashed { "-.->" } else { "-->" };
            let line = match &edge.label {
                Some(label) => format!("{INDENT}{} {arrow}|{label}| {}", edge.from, edge.to),
                None => format!("{INDENT}{} {arrow} {}", edge.from, edge.to),
            };
            lines.push(line);
        }

        if !desc.class_defs.is_empty() || !desc.classes.is_empty() {
            lines.push(String::new());
            lines.push(format!("{INDENT}%% STYLING"));
            for def in &desc.class_defs {
                lines.push(format!("{INDENT}classDef {} {}", def.name, def.style));
            }
            for assign in &desc.classes {
                lines.push(format!(
                    "{INDENT}class {} {}",
                    assign.nodes.join(","),
                    assign.class
                ));
            }
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
