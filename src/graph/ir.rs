//! GraphIR — converts a GraphDescription into a petgraph DiGraph for
//! structural queries (counts, DAG check, topological order).
//!
//! Edge endpoints that were never declared as nodes get placeholder
//! entries (id used as label), so queries are total over any description.

use std::collections::HashMap;

use petgraph::algo::{is_cyclic_directed, toposort};
use petgraph::graph::{DiGraph, NodeIndex};

use super::{GraphDescription, NodeShape};

/// Node data stored in the petgraph DiGraph.
#[derive(Debug, Clone)]
pub struct NodeData {
    pub id: String,
    pub label: String,
    pub shape: NodeShape,
    /// Subgraph id this node belongs to, if any.
    pub subgraph: Option<String>,
}

/// Edge data stored in the petgraph DiGraph.
#[derive(Debug, Clone)]
pub struct EdgeData {
    pub label: Option<String>,
    pub dashed: bool,
}

pub struct GraphIR {
    pub digraph: DiGraph<NodeData, EdgeData>,
    /// Maps node id → petgraph NodeIndex.
    pub node_index: HashMap<String, NodeIndex>,
    /// (subgraph id, member node ids) in declaration order.
    pub subgraph_members: Vec<(String, Vec<String>)>,
}

impl GraphIR {
    pub fn from_description(desc: &GraphDescription) -> Self {
        let mut digraph: DiGraph<NodeData, EdgeData> = DiGraph::new();
        let mut node_index: HashMap<String, NodeIndex> = HashMap::new();

        let subgraph_of = |id: &str| -> Option<String> {
            desc.subgraphs
                .iter()
                .find(|sg| sg.nodes.iter().any(|m| m == id))
                .map(|sg| sg.id.clone())
        };

        for node in &desc.nodes {
            let idx = digraph.add_node(NodeData {
                id: node.id.clone(),
                label: node.label.clone(),
                shape: node.shape,
                subgraph: subgraph_of(&node.id),
            });
            node_index.insert(node.id.clone(), idx);
        }

        for edge in &desc.edges {
            ensure_node(&mut digraph, &mut node_index, &edge.from);
            ensure_node(&mut digraph, &mut node_index, &edge.to);
            let from = node_index[&edge.from];
            let to = node_index[&edge.to];
            digraph.add_edge(
                from,
                to,
                EdgeData {
                    label: edge.label.clone(),
                    dashed: edge.dashed,
                },
            );
        }

        let subgraph_members = desc
            .subgraphs
            .iter()
            .map(|sg| (sg.id.clone(), sg.nodes.clone()))
            .collect();

        Self {
            digraph,
            node_index,
            subgraph_members,
        }
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        match (self.node_index.get(from), self.node_index.get(to)) {
            (Some(&a), Some(&b)) => self.digraph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    /// Returns true if the description is a directed acyclic graph.
    pub fn is_dag(&self) -> bool {
        !is_cyclic_directed(&self.digraph)
    }

    /// Topological order of node ids, or None if the graph has cycles.
    pub fn topological_order(&self) -> Option<Vec<String>> {
        toposort(&self.digraph, None)
            .ok()
            .map(|indices| indices.into_iter().map(|i| self.digraph[i].id.clone()).collect())
    }
}

/// Add a placeholder node (id = label) if the id is not yet present.
fn ensure_node(
    digraph: &mut DiGraph<NodeData, EdgeData>,
    node_index: &mut HashMap<String, NodeIndex>,
    id: &str,
) {
    if !node_index.contains_key(id) {
        let idx = digraph.add_node(NodeData {
            id: id.to_string(),
            label: id.to_string(),
            shape: NodeShape::Rectangle,
            subgraph: None,
        });
        node_index.insert(id.to_string(), idx);
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn small_desc() -> GraphDescription {
        let mut g = GraphDescription::new();
        g.add_node("A", "A", NodeShape::Rectangle);
        g.add_node("B", "B", NodeShape::Rectangle);
        g.add_edge("A", "B");
        g.add_edge("B", "C"); // C undeclared on purpose
        g
    }

    #[test]
    fn test_counts_and_placeholder() {
        let ir = GraphIR::from_description(&small_desc());
        assert_eq!(ir.node_count(), 3);
        assert_eq!(ir.edge_count(), 2);
        assert!(ir.contains_node("C"));
    }

    #[test]
    fn test_contains_edge() {
        let ir = GraphIR::from_description(&small_desc());
        assert!(ir.contains_edge("A", "B"));
        assert!(!ir.contains_edge("B", "A"));
        assert!(!ir.contains_edge("A", "missing"));
    }

    #[test]
    fn test_dag_and_topo() {
        let ir = GraphIR::from_description(&small_desc());
        assert!(ir.is_dag());
        let order = ir.topological_order().unwrap();
        let pos = |id: &str| order.iter().position(|x| x == id).unwrap();
        assert!(pos("A") < pos("B"));
        assert!(pos("B") < pos("C"));
    }

    #[test]
    fn test_cycle_detected() {
        let mut g = small_desc();
        g.add_edge("C", "A");
        let ir = GraphIR::from_description(&g);
        assert!(!ir.is_dag());
        assert!(ir.topological_order().is_none());
    }

    #[test]
    fn test_subgraph_membership() {
        let mut g = small_desc();
        g.add_subgraph("Box", "Box", vec!["B".to_string()]);
        let ir = GraphIR::from_description(&g);
        assert_eq!(ir.subgraph_members.len(), 1);
        let b = ir.node_index["B"];
        assert_eq!(ir.digraph[b].subgraph.as_deref(), Some("Box"));
    }
}
