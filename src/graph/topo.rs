//! DFS-based topological sort.

use crate::types::{AdjResult, NodeId};

use super::traversal::{initial_colors, walk_all, DfsEvent};
use super::Graph;

/// Order nodes so that for every edge `u -> v`, `u` comes before `v`.
///
/// Nodes are appended as they finish (roots taken in insertion order) and the
/// completion sequence is reversed. Cyclic input is not rejected; the result
/// is then simply not a valid topological order. Run [`super::has_cycle`]
/// first when acyclicity is not guaranteed.
pub fn topological_order<N: NodeId>(graph: &Graph<N>) -> AdjResult<Vec<N>> {
    let mut colors = initial_colors(graph);
    let mut finished: Vec<N> = Vec::with_capacity(graph.len());

    walk_all(graph, &mut colors, |event| {
        if let DfsEvent::Finish(node) = event {
            finished.push(node.clone());
        }
    })?;

    finished.reverse();
    Ok(finished)
}

impl<N: NodeId> Graph<N> {
    /// See [`topological_order`].
    pub fn topological_order(&self) -> AdjResult<Vec<N>> {
        topological_order(self)
    }
}
