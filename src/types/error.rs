//! Error types for the adjgraph library.

use thiserror::Error;

/// All errors that can occur in the adjgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A node is referenced (as a start, an adjacency entry or a removal
    /// target) but is not registered in the graph.
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    /// A traversal was requested from a start node outside the node set.
    #[error("Start node {0} is not in the graph")]
    InvalidStart(String),

    /// Edge weight is not a number.
    #[error("Invalid edge weight: {0}")]
    InvalidWeight(f64),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed graph document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Build a [`GraphError::UnknownNode`] from any displayable node.
    pub fn unknown(node: &impl std::fmt::Display) -> Self {
        Self::UnknownNode(node.to_string())
    }

    /// Build a [`GraphError::InvalidStart`] from any displayable node.
    pub fn invalid_start(node: &impl std::fmt::Display) -> Self {
        Self::InvalidStart(node.to_string())
    }
}

/// Convenience result type for adjgraph operations.
pub type AdjResult<T> = Result<T, GraphError>;
