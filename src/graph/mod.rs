//! In-memory graph and the algorithms that run over it.

pub mod adjacency;
pub mod builder;
pub mod cycle;
pub mod mst;
pub mod topo;
pub mod traversal;

pub use adjacency::Graph;
pub use builder::GraphBuilder;
pub use cycle::{find_cycle, has_cycle, CyclePath};
pub use mst::minimum_spanning_tree;
pub use topo::topological_order;
pub use traversal::{depth_first_walk, dfs_all, discovery_order, DfsEvent};
