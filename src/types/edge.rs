//! Weighted edges and successor entries.

use serde::{Deserialize, Serialize};

use super::DEFAULT_WEIGHT;

/// One entry of a node's adjacency list: the successor and the weight of the
/// edge leading to it. Parallel edges are separate entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Successor<N> {
    /// The node this entry points to.
    pub node: N,
    /// Weight of the edge (defaults to 1).
    pub weight: f64,
}

impl<N> Successor<N> {
    /// Create an entry with an explicit weight.
    pub fn new(node: N, weight: f64) -> Self {
        Self { node, weight }
    }

    /// Create an entry carrying [`DEFAULT_WEIGHT`].
    pub fn unweighted(node: N) -> Self {
        Self::new(node, DEFAULT_WEIGHT)
    }
}

/// A directed, weighted edge `source -> target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<N> {
    /// Origin of the edge.
    pub source: N,
    /// Destination of the edge.
    pub target: N,
    /// Weight of the edge.
    pub weight: f64,
}

impl<N> Edge<N> {
    /// Create a new edge.
    pub fn new(source: N, target: N, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}
