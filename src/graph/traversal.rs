//! Depth-first traversal with three-color marking.
//!
//! Every walk uses an explicit stack of `(node, successors, next index)`
//! frames, so depth is bounded by the heap rather than the call stack. The
//! color map is created per call and handed back (or dropped) at the end.

use std::collections::HashMap;
use std::ops::ControlFlow;

use crate::types::{AdjResult, Color, GraphError, NodeId, Successor};

use super::Graph;

/// Something that happened during a depth-first walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent<'a, N> {
    /// The node turned in-progress.
    Discover(&'a N),
    /// `from -> to` where `to` is still in-progress: a cycle closes here.
    BackEdge { from: &'a N, to: &'a N },
    /// Every successor of the node has been explored.
    Finish(&'a N),
}

/// A fresh color map with every known node unvisited.
pub(crate) fn initial_colors<N: NodeId>(graph: &Graph<N>) -> HashMap<N, Color> {
    graph
        .nodes()
        .map(|n| (n.clone(), Color::Unvisited))
        .collect()
}

/// Walk everything reachable from `root` that is still unvisited in `colors`,
/// reporting events to `visitor`. `root` must be unvisited.
///
/// Returns the visitor's `Break` value as soon as it produces one; colors are
/// then left as they were at that point. A successor missing from `colors` is
/// an unregistered node and fails the walk.
pub(crate) fn visit<'g, N, B, F>(
    graph: &'g Graph<N>,
    root: &'g N,
    colors: &mut HashMap<N, Color>,
    visitor: &mut F,
) -> AdjResult<ControlFlow<B>>
where
    N: NodeId,
    F: FnMut(DfsEvent<'g, N>) -> ControlFlow<B>,
{
    let mut stack: Vec<(&'g N, &'g [Successor<N>], usize)> = Vec::new();

    colors.insert(root.clone(), Color::InProgress);
    if let ControlFlow::Break(value) = visitor(DfsEvent::Discover(root)) {
        return Ok(ControlFlow::Break(value));
    }
    stack.push((root, graph.successors(root)?, 0));

    while let Some(&(node, successors, index)) = stack.last() {
        let Some(entry) = successors.get(index) else {
            colors.insert(node.clone(), Color::Finished);
            stack.pop();
            if let ControlFlow::Break(value) = visitor(DfsEvent::Finish(node)) {
                return Ok(ControlFlow::Break(value));
            }
            continue;
        };

        let top = stack.len() - 1;
        stack[top].2 += 1;

        let next = &entry.node;
        match colors.get(next).copied() {
            None => return Err(GraphError::unknown(next)),
            Some(Color::Unvisited) => {
                colors.insert(next.clone(), Color::InProgress);
                if let ControlFlow::Break(value) = visitor(DfsEvent::Discover(next)) {
                    return Ok(ControlFlow::Break(value));
                }
                stack.push((next, graph.successors(next)?, 0));
            }
            Some(Color::InProgress) => {
                let event = DfsEvent::BackEdge {
                    from: node,
                    to: next,
                };
                if let ControlFlow::Break(value) = visitor(event) {
                    return Ok(ControlFlow::Break(value));
                }
            }
            Some(Color::Finished) => {}
        }
    }

    Ok(ControlFlow::Continue(()))
}

/// Walk every node as a root, in insertion order, skipping the ones an
/// earlier root already reached.
pub(crate) fn visit_all<'g, N, B, F>(
    graph: &'g Graph<N>,
    colors: &mut HashMap<N, Color>,
    visitor: &mut F,
) -> AdjResult<ControlFlow<B>>
where
    N: NodeId,
    F: FnMut(DfsEvent<'g, N>) -> ControlFlow<B>,
{
    for root in graph.nodes() {
        if colors.get(root) != Some(&Color::Unvisited) {
            continue;
        }
        if let ControlFlow::Break(value) = visit(graph, root, colors, visitor)? {
            return Ok(ControlFlow::Break(value));
        }
    }
    Ok(ControlFlow::Continue(()))
}

/// [`visit`] for a visitor that never stops early.
pub(crate) fn walk<'g, N, F>(
    graph: &'g Graph<N>,
    root: &'g N,
    colors: &mut HashMap<N, Color>,
    mut visitor: F,
) -> AdjResult<()>
where
    N: NodeId,
    F: FnMut(DfsEvent<'g, N>),
{
    let flow = visit(graph, root, colors, &mut |event| {
        visitor(event);
        ControlFlow::<()>::Continue(())
    })?;
    debug_assert!(flow.is_continue());
    Ok(())
}

/// [`visit_all`] for a visitor that never stops early.
pub(crate) fn walk_all<'g, N, F>(
    graph: &'g Graph<N>,
    colors: &mut HashMap<N, Color>,
    mut visitor: F,
) -> AdjResult<()>
where
    N: NodeId,
    F: FnMut(DfsEvent<'g, N>),
{
    let flow = visit_all(graph, colors, &mut |event| {
        visitor(event);
        ControlFlow::<()>::Continue(())
    })?;
    debug_assert!(flow.is_continue());
    Ok(())
}

/// Depth-first walk from `start`.
///
/// Every reachable node ends [`Color::Finished`]; everything else stays
/// [`Color::Unvisited`].
pub fn depth_first_walk<N: NodeId>(graph: &Graph<N>, start: &N) -> AdjResult<HashMap<N, Color>> {
    if !graph.contains(start) {
        return Err(GraphError::invalid_start(start));
    }
    let mut colors = initial_colors(graph);
    walk(graph, start, &mut colors, |_| {})?;
    Ok(colors)
}

/// Depth-first walk rooted at every unvisited node in insertion order.
/// All nodes end [`Color::Finished`].
pub fn dfs_all<N: NodeId>(graph: &Graph<N>) -> AdjResult<HashMap<N, Color>> {
    let mut colors = initial_colors(graph);
    walk_all(graph, &mut colors, |_| {})?;
    Ok(colors)
}

/// Nodes reachable from `start`, in the order they were discovered.
pub fn discovery_order<N: NodeId>(graph: &Graph<N>, start: &N) -> AdjResult<Vec<N>> {
    if !graph.contains(start) {
        return Err(GraphError::invalid_start(start));
    }
    let mut colors = initial_colors(graph);
    let mut order = Vec::new();
    walk(graph, start, &mut colors, |event| {
        if let DfsEvent::Discover(node) = event {
            order.push(node.clone());
        }
    })?;
    Ok(order)
}

impl<N: NodeId> Graph<N> {
    /// See [`depth_first_walk`].
    pub fn dfs(&self, start: &N) -> AdjResult<HashMap<N, Color>> {
        depth_first_walk(self, start)
    }

    /// See [`dfs_all`].
    pub fn dfs_all(&self) -> AdjResult<HashMap<N, Color>> {
        dfs_all(self)
    }
}
