//! Reads JSON graph documents into in-memory graphs.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::graph::Graph;
use crate::types::{AdjResult, NodeId};

use super::GraphDocument;

/// Reader for JSON graph documents.
pub struct GraphReader;

impl GraphReader {
    /// Read a document file into a Graph.
    pub fn read_from_file<N>(path: &Path) -> AdjResult<Graph<N>>
    where
        N: NodeId + DeserializeOwned,
    {
        let data = std::fs::read(path)?;
        Self::read_from(&mut data.as_slice())
    }

    /// Read from any reader into a Graph.
    pub fn read_from<N>(reader: &mut impl Read) -> AdjResult<Graph<N>>
    where
        N: NodeId + DeserializeOwned,
    {
        let document: GraphDocument<N> = serde_json::from_reader(reader)?;
        log::debug!(
            "read document: {} nodes, {} edge records",
            document.nodes.len(),
            document.edges.len()
        );
        document.into_graph()
    }

    /// Parse a document held in a string.
    pub fn read_from_str<N>(json: &str) -> AdjResult<Graph<N>>
    where
        N: NodeId + DeserializeOwned,
    {
        let document: GraphDocument<N> = serde_json::from_str(json)?;
        document.into_graph()
    }
}
