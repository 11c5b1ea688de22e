//! Serializable form of a graph.
//!
//! ```json
//! {
//!   "nodes": ["A", "B", "C"],
//!   "edges": [
//!     {"source": "A", "target": "B", "weight": 2.0},
//!     {"source": "B", "target": "C", "directed": false}
//!   ]
//! }
//! ```
//!
//! `weight` defaults to 1 and `directed` to true. An undirected record
//! becomes one entry in each direction.

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::types::{AdjResult, NodeId, DEFAULT_WEIGHT};

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

fn default_directed() -> bool {
    true
}

fn is_directed(directed: &bool) -> bool {
    *directed
}

/// One edge as it appears in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "N: Deserialize<'de>"))]
pub struct EdgeRecord<N> {
    pub source: N,
    pub target: N,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default = "default_directed", skip_serializing_if = "is_directed")]
    pub directed: bool,
}

/// A whole graph: node list (insertion order) plus edge records.
///
/// Missing `nodes` or `edges` read as empty lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "N: Deserialize<'de>"))]
pub struct GraphDocument<N> {
    #[serde(default)]
    pub nodes: Vec<N>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord<N>>,
}

impl<N: NodeId> GraphDocument<N> {
    /// Snapshot a graph. Every adjacency entry becomes a directed record.
    pub fn from_graph(graph: &Graph<N>) -> Self {
        Self {
            nodes: graph.nodes().cloned().collect(),
            edges: graph
                .edges()
                .map(|e| EdgeRecord {
                    source: e.source,
                    target: e.target,
                    weight: e.weight,
                    directed: true,
                })
                .collect(),
        }
    }

    /// Build the graph this document describes.
    pub fn into_graph(self) -> AdjResult<Graph<N>> {
        let mut graph = Graph::new();
        for node in self.nodes {
            graph.add_node(node);
        }
        for record in self.edges {
            if record.directed {
                graph.add_edge(record.source, record.target, record.weight)?;
            } else {
                graph.add_undirected_edge(record.source, record.target, record.weight)?;
            }
        }
        Ok(graph)
    }
}
