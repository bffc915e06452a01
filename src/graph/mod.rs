//! Flow graph description — the output side of the builder.
//!
//! A GraphDescription is renderer-agnostic: ordered node and edge
//! declarations, named subgraphs, and class→node style assignments. Any
//! diagramming backend that understands those four lists can draw it.

pub mod builder;
pub mod ir;

pub use builder::{BuildOutcome, build_graph};
pub use ir::GraphIR;

// ─── NodeShape ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeShape {
    #[default]
    Rectangle, // id["Label"]
    Rounded, // id(Label)
    Diamond, // id{Label}
    Circle,  // id((Label))
    Stadium, // id([Label])
}

// ─── Node ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Diagram identifier (e.g. "Start", "Supp0").
    pub id: String,
    /// Display label; may contain embedded newlines.
    pub label: String,
    pub shape: NodeShape,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>, shape: NodeShape) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            shape,
        }
    }
}

// ─── Edge ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    /// Optional inline label (the |text| part).
    pub label: Option<String>,
    /// Dashed "failover" edges render as -.-> instead of -->.
    pub dashed: bool,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: None,
            dashed: false,
        }
    }

    pub fn labeled(from: impl Into<String>, to: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::new(from, to)
        }
    }
}

// ─── Subgraph ────────────────────────────────────────────────────────────────

/// A named grouping of node ids, rendered as a boxed subgraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subgraph {
    pub id: String,
    pub title: String,
    /// Member node ids, in declaration order.
    pub nodes: Vec<String>,
}

// ─── Style classes ───────────────────────────────────────────────────────────

/// A class definition (name → style text, e.g. fill/stroke directives).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDef {
    pub name: String,
    pub style: String,
}

/// Assignment of a set of node ids to a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassAssign {
    pub class: String,
    pub nodes: Vec<String>,
}

// ─── GraphDescription ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GraphDescription {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub subgraphs: Vec<Subgraph>,
    pub class_defs: Vec<ClassDef>,
    pub classes: Vec<ClassAssign>,
}

impl GraphDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node. Ids are unique; a repeated id keeps the first
    /// declaration.
    pub fn add_node(
        &mut self,
        id: impl Into<String>,
        label: impl Into<String>,
        shape: NodeShape,
    ) -> String {
        let id = id.into();
        if !self.has_node(&id) {
            self.nodes.push(Node::new(id.clone(), label, shape));
        }
        id
    }

    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.edges.push(Edge::new(from, to));
    }

    pub fn add_labeled_edge(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        label: impl Into<String>,
    ) {
        self.edges.push(Edge::labeled(from, to, label));
    }

    pub fn add_dashed_edge(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        label: impl Into<String>,
    ) {
        self.edges.push(Edge {
            dashed: true,
            ..Edge::labeled(from, to, label)
        });
    }

    pub fn add_subgraph(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        nodes: Vec<String>,
    ) {
        self.subgraphs.push(Subgraph {
            id: id.into(),
            title: title.into(),
            nodes,
        });
    }

    pub fn define_class(&mut self, name: impl Into<String>, style: impl Into<String>) {
        self.class_defs.push(ClassDef {
            name: name.into(),
            style: style.into(),
        });
    }

    pub fn assign_class(&mut self, class: impl Into<String>, nodes: Vec<String>) {
        if !nodes.is_empty() {
            self.classes.push(ClassAssign {
                class: class.into(),
                nodes,
            });
        }
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges.iter().any(|e| e.from == from && e.to == to)
    }

    pub fn node_ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    /// Node ids that do not belong to any subgraph, in declaration order.
    pub fn top_level_node_ids(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .map(|n| n.id.as_str())
            .filter(|id| !self.subgraphs.iter().any(|sg| sg.nodes.iter().any(|m| m == id)))
            .collect()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
