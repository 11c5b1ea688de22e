//! Core graph structure — ordered nodes with weighted adjacency lists.

use std::collections::HashMap;

use crate::types::{AdjResult, Edge, GraphError, NodeId, Successor, DEFAULT_WEIGHT};

/// A directed multigraph stored as `node -> ordered successors`.
///
/// Nodes iterate in insertion order, which is also the root order used by
/// every whole-graph algorithm. Each successor entry carries its own weight.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    /// Nodes in insertion order.
    order: Vec<N>,
    /// Adjacency lists, keyed by node.
    adjacency: HashMap<N, Vec<Successor<N>>>,
}

impl<N: NodeId> Graph<N> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Create from a raw adjacency mapping. Every successor gets
    /// [`DEFAULT_WEIGHT`].
    ///
    /// Successors are not checked against the key set; a successor that is
    /// never listed as a key makes traversals fail with
    /// [`GraphError::UnknownNode`]. Use [`Graph::validate`] to check up front.
    pub fn from_adjacency<I, S>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        S: IntoIterator<Item = N>,
    {
        let mut graph = Self::new();
        for (node, successors) in adjacency {
            graph.add_node(node.clone());
            let list = successors.into_iter().map(Successor::unweighted).collect();
            graph.adjacency.insert(node, list);
        }
        graph
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of directed edge entries (parallel edges counted separately).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Whether `node` is registered.
    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.order.iter()
    }

    /// The adjacency entries of a node, in insertion order.
    pub fn successors(&self, node: &N) -> AdjResult<&[Successor<N>]> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::unknown(node))
    }

    /// The children of a node, in adjacency order.
    pub fn children(&self, node: &N) -> AdjResult<Vec<&N>> {
        Ok(self.successors(node)?.iter().map(|s| &s.node).collect())
    }

    /// Weight of the first `source -> target` entry, if any.
    pub fn weight(&self, source: &N, target: &N) -> Option<f64> {
        self.adjacency
            .get(source)?
            .iter()
            .find(|s| &s.node == target)
            .map(|s| s.weight)
    }

    /// Every edge, grouped by source in node order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<N>> + '_ {
        self.order.iter().flat_map(move |source| {
            self.adjacency
                .get(source)
                .into_iter()
                .flatten()
                .map(move |s| Edge::new(source.clone(), s.node.clone(), s.weight))
        })
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> f64 {
        self.adjacency.values().flatten().map(|s| s.weight).sum()
    }

    /// Add a node. Returns false if it was already present.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.order.push(node.clone());
        self.adjacency.insert(node, Vec::new());
        true
    }

    /// Add a directed edge, registering both endpoints if needed.
    pub fn add_edge(&mut self, source: N, target: N, weight: f64) -> AdjResult<()> {
        if weight.is_nan() {
            return Err(GraphError::InvalidWeight(weight));
        }
        self.add_node(source.clone());
        self.add_node(target.clone());
        self.adjacency
            .entry(source)
            .or_default()
            .push(Successor::new(target, weight));
        Ok(())
    }

    /// Add a directed edge with [`DEFAULT_WEIGHT`].
    pub fn add_unweighted_edge(&mut self, source: N, target: N) -> AdjResult<()> {
        self.add_edge(source, target, DEFAULT_WEIGHT)
    }

    /// Add an undirected edge: one entry in each direction, same weight.
    pub fn add_undirected_edge(&mut self, a: N, b: N, weight: f64) -> AdjResult<()> {
        self.add_edge(a.clone(), b.clone(), weight)?;
        self.add_edge(b, a, weight)
    }

    /// Remove a node, its outgoing entries and every entry pointing to it.
    pub fn remove_node(&mut self, node: &N) -> AdjResult<()> {
        if self.adjacency.remove(node).is_none() {
            return Err(GraphError::unknown(node));
        }
        self.order.retain(|n| n != node);
        for list in self.adjacency.values_mut() {
            list.retain(|s| &s.node != node);
        }
        log::debug!("removed node {}", node);
        Ok(())
    }

    /// Drop every outgoing entry of a node, keeping the node itself.
    pub fn remove_outgoing_from(&mut self, node: &N) -> AdjResult<()> {
        self.adjacency
            .get_mut(node)
            .map(Vec::clear)
            .ok_or_else(|| GraphError::unknown(node))
    }

    /// Check that every successor is a registered node.
    pub fn validate(&self) -> AdjResult<()> {
        for node in &self.order {
            for s in self.successors(node)? {
                if !self.contains(&s.node) {
                    return Err(GraphError::unknown(&s.node));
                }
            }
        }
        Ok(())
    }

    /// A new graph with every edge reversed, weights kept.
    ///
    /// Node order is preserved. A dangling successor becomes a node of the
    /// transpose, appended after the registered ones.
    pub fn transpose(&self) -> Self {
        let mut reversed = Self::new();
        for node in &self.order {
            reversed.add_node(node.clone());
        }
        for edge in self.edges() {
            reversed.add_node(edge.target.clone());
            reversed
                .adjacency
                .entry(edge.target)
                .or_default()
                .push(Successor::new(edge.source, edge.weight));
        }
        reversed
    }

    /// A copy where every node's successors are followed by its
    /// predecessors, so each edge can be walked both ways.
    pub fn to_undirected(&self) -> Self {
        let mut undirected = self.clone();
        let reversed = self.transpose();
        for node in reversed.order {
            undirected.add_node(node.clone());
            if let Some(back) = reversed.adjacency.get(&node) {
                undirected
                    .adjacency
                    .entry(node)
                    .or_default()
                    .extend(back.iter().cloned());
            }
        }
        undirected
    }
}

impl<N: NodeId> PartialEq for Graph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.adjacency == other.adjacency
    }
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}
