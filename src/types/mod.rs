//! All data types for the adjgraph library.

use std::fmt;
use std::hash::Hash;

use serde::Serialize;

pub mod edge;
pub mod error;

pub use edge::{Edge, Successor};
pub use error::{AdjResult, GraphError};

/// Weight given to an edge when none is specified.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Requirements on a node identifier.
///
/// `Ord` makes MST tie-breaking deterministic, `Display` is used for error
/// messages and rendering.
pub trait NodeId: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

/// Visited-state of a node during a depth-first walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Not reached yet.
    Unvisited,
    /// On the current DFS path.
    InProgress,
    /// Every successor has been explored.
    Finished,
}

impl Color {
    /// Return a human-readable name for this color.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unvisited => "unvisited",
            Self::InProgress => "in_progress",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
