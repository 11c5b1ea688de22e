//! Prim's minimum spanning tree.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

use crate::types::{AdjResult, GraphError, NodeId};

use super::Graph;

/// A frontier edge waiting in the priority queue.
///
/// Ordered by weight, then source, then target, so equal weights resolve by
/// node order and the resulting tree is deterministic.
#[derive(Debug)]
struct Candidate<'g, N> {
    weight: f64,
    source: &'g N,
    target: &'g N,
}

impl<N: Ord> Ord for Candidate<'_, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.source.cmp(other.source))
            .then_with(|| self.target.cmp(other.target))
    }
}

impl<N: Ord> PartialOrd for Candidate<'_, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord> PartialEq for Candidate<'_, N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Ord> Eq for Candidate<'_, N> {}

type Frontier<'g, N> = BinaryHeap<Reverse<Candidate<'g, N>>>;

/// Push every edge leaving `node` towards an unvisited node.
fn push_frontier<'g, N: NodeId>(
    graph: &'g Graph<N>,
    node: &'g N,
    visited: &HashSet<&'g N>,
    frontier: &mut Frontier<'g, N>,
) -> AdjResult<()> {
    for entry in graph.successors(node)? {
        if visited.contains(&entry.node) {
            continue;
        }
        log::trace!("frontier += {} -> {} ({})", node, entry.node, entry.weight);
        frontier.push(Reverse(Candidate {
            weight: entry.weight,
            source: node,
            target: &entry.node,
        }));
    }
    Ok(())
}

/// Grow a minimum spanning tree from `start` with Prim's algorithm.
///
/// The result holds exactly the nodes reachable from `start` and one edge
/// `parent -> child` per node other than `start`, weights copied from the
/// source graph. Weights are expected to be symmetric and non-negative;
/// whichever directed weight is met first is used.
///
/// Fails with [`GraphError::UnknownNode`] if `start` (or any reached
/// successor) is not registered.
pub fn minimum_spanning_tree<N: NodeId>(graph: &Graph<N>, start: &N) -> AdjResult<Graph<N>> {
    if !graph.contains(start) {
        return Err(GraphError::unknown(start));
    }

    let mut visited: HashSet<&N> = HashSet::from([start]);
    let mut frontier: Frontier<'_, N> = BinaryHeap::new();
    let mut tree = Graph::new();
    tree.add_node(start.clone());

    push_frontier(graph, start, &visited, &mut frontier)?;

    while let Some(Reverse(candidate)) = frontier.pop() {
        if !visited.insert(candidate.target) {
            continue;
        }
        log::debug!(
            "tree edge {} -> {} ({})",
            candidate.source,
            candidate.target,
            candidate.weight
        );
        tree.add_edge(
            candidate.source.clone(),
            candidate.target.clone(),
            candidate.weight,
        )?;
        push_frontier(graph, candidate.target, &visited, &mut frontier)?;
    }

    Ok(tree)
}

impl<N: NodeId> Graph<N> {
    /// See [`minimum_spanning_tree`].
    pub fn minimum_spanning_tree(&self, start: &N) -> AdjResult<Graph<N>> {
        minimum_spanning_tree(self, start)
    }
}
