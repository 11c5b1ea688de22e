//! Fluent API for building Graph instances.

use crate::types::{AdjResult, Edge, NodeId, DEFAULT_WEIGHT};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Edges are validated when [`GraphBuilder::build`] runs, so a chain of
/// calls never has to stop for a `?`.
pub struct GraphBuilder<N> {
    nodes: Vec<N>,
    edges: Vec<Edge<N>>,
}

impl<N: NodeId> GraphBuilder<N> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Register a node (possibly isolated).
    pub fn node(&mut self, node: N) -> &mut Self {
        self.nodes.push(node);
        self
    }

    /// Add a directed edge.
    pub fn edge(&mut self, source: N, target: N, weight: f64) -> &mut Self {
        self.edges.push(Edge::new(source, target, weight));
        self
    }

    /// Add a directed edge with the default weight.
    pub fn arc(&mut self, source: N, target: N) -> &mut Self {
        self.edge(source, target, DEFAULT_WEIGHT)
    }

    /// Add an undirected edge (two directed entries of equal weight).
    pub fn undirected(&mut self, a: N, b: N, weight: f64) -> &mut Self {
        self.edges.push(Edge::new(a.clone(), b.clone(), weight));
        self.edges.push(Edge::new(b, a, weight));
        self
    }

    /// Build the final Graph. Nodes registered with [`GraphBuilder::node`]
    /// come first in iteration order, then edge endpoints as they appear.
    pub fn build(&self) -> AdjResult<Graph<N>> {
        let mut graph = Graph::new();
        for node in &self.nodes {
            graph.add_node(node.clone());
        }
        for edge in &self.edges {
            graph.add_edge(edge.source.clone(), edge.target.clone(), edge.weight)?;
        }
        Ok(graph)
    }
}

impl<N: NodeId> Default for GraphBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}
