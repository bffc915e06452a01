//! Renderer registry and Renderer trait.

pub mod mermaid;

pub use mermaid::MermaidRenderer;

use crate::graph::GraphDescription;

/// Trait for diagram backends: turn a GraphDescription into text a
/// drawing tool can consume.
pub trait Renderer {
    fn render(&self, desc: &GraphDescription) -> String;
}
