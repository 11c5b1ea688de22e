//! adjgraph — adjacency-list graphs with depth-first algorithms and Prim's MST.
//!
//! A [`Graph`] maps each node to an ordered list of weighted successors. On
//! top of it sit a three-color depth-first walk, cycle detection,
//! topological ordering, transposition and minimum spanning trees.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{to_dot, DotOptions, GraphDocument, GraphReader, GraphWriter};
pub use graph::{
    depth_first_walk, dfs_all, discovery_order, find_cycle, has_cycle, minimum_spanning_tree,
    topological_order, CyclePath, DfsEvent, Graph, GraphBuilder,
};
pub use types::{AdjResult, Color, Edge, GraphError, NodeId, Successor, DEFAULT_WEIGHT};
