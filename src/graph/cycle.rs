//! Cycle detection over the whole graph.

use std::fmt;
use std::ops::ControlFlow;

use crate::types::{AdjResult, NodeId};

use super::traversal::{initial_colors, visit_all, DfsEvent};
use super::Graph;

/// A closed cycle: first and last node are the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclePath<N> {
    pub path: Vec<N>,
}

impl<N: NodeId> CyclePath<N> {
    /// Create a new cycle path.
    pub fn new(path: Vec<N>) -> Self {
        Self { path }
    }

    /// Number of edges on the cycle.
    pub fn len(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// True for the degenerate path with no edges.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<N: NodeId> fmt::Display for CyclePath<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.path.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join(" -> "))
    }
}

/// Find the first directed cycle, rooting a DFS at every unvisited node in
/// insertion order and stopping at the first back edge.
///
/// Self-loops count as cycles. Returns `None` for an acyclic graph.
pub fn find_cycle<N: NodeId>(graph: &Graph<N>) -> AdjResult<Option<CyclePath<N>>> {
    let mut colors = initial_colors(graph);
    // Exactly the in-progress nodes, in discovery order.
    let mut path: Vec<&N> = Vec::new();

    let flow = visit_all(graph, &mut colors, &mut |event| match event {
        DfsEvent::Discover(node) => {
            log::debug!("visiting {}", node);
            path.push(node);
            ControlFlow::Continue(())
        }
        DfsEvent::Finish(_) => {
            path.pop();
            ControlFlow::Continue(())
        }
        DfsEvent::BackEdge { from, to } => {
            log::debug!("back edge {} -> {}: cycle detected", from, to);
            let mut closed: Vec<N> = path
                .iter()
                .skip_while(|n| **n != to)
                .map(|n| (*n).clone())
                .collect();
            closed.push(to.clone());
            ControlFlow::Break(CyclePath::new(closed))
        }
    })?;

    Ok(match flow {
        ControlFlow::Break(cycle) => Some(cycle),
        ControlFlow::Continue(()) => None,
    })
}

/// Whether the graph contains at least one directed cycle.
pub fn has_cycle<N: NodeId>(graph: &Graph<N>) -> AdjResult<bool> {
    Ok(find_cycle(graph)?.is_some())
}

impl<N: NodeId> Graph<N> {
    /// See [`has_cycle`].
    pub fn has_cycle(&self) -> AdjResult<bool> {
        has_cycle(self)
    }

    /// See [`find_cycle`].
    pub fn find_cycle(&self) -> AdjResult<Option<CyclePath<N>>> {
        find_cycle(self)
    }
}
