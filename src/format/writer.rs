//! Writes in-memory graphs as JSON documents.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{AdjResult, NodeId};

use super::GraphDocument;

/// Writer for JSON graph documents.
pub struct GraphWriter {
    pretty: bool,
}

impl GraphWriter {
    /// Create a new writer. `pretty` switches on indented output.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Write a complete Graph to a file, replacing it.
    pub fn write_to_file<N>(&self, graph: &Graph<N>, path: &Path) -> AdjResult<()>
    where
        N: NodeId + Serialize,
    {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a complete Graph to any writer.
    pub fn write_to<N>(&self, graph: &Graph<N>, writer: &mut impl Write) -> AdjResult<()>
    where
        N: NodeId + Serialize,
    {
        let document = GraphDocument::from_graph(graph);
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &document)?;
        } else {
            serde_json::to_writer(&mut *writer, &document)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    /// Render a Graph to a JSON string.
    pub fn to_json<N>(&self, graph: &Graph<N>) -> AdjResult<String>
    where
        N: NodeId + Serialize,
    {
        let document = GraphDocument::from_graph(graph);
        let json = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(json)
    }
}

impl Default for GraphWriter {
    fn default() -> Self {
        Self::new(false)
    }
}
