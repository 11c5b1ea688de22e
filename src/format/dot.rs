//! Graphviz DOT rendering.

use std::collections::HashMap;
use std::fmt::Write;

use crate::graph::Graph;
use crate::types::NodeId;

/// How to render a graph.
#[derive(Debug, Clone)]
pub struct DotOptions<N> {
    /// `digraph` with `->` edges when true, `strict graph` with `--` otherwise.
    pub directed: bool,
    /// Optional `pos` attribute per node (neato layout coordinates).
    pub positions: HashMap<N, String>,
}

impl<N> DotOptions<N> {
    /// Directed rendering, no positions.
    pub fn directed() -> Self {
        Self {
            directed: true,
            positions: HashMap::new(),
        }
    }

    /// Undirected rendering, no positions.
    pub fn undirected() -> Self {
        Self {
            directed: false,
            positions: HashMap::new(),
        }
    }
}

impl<N> Default for DotOptions<N> {
    fn default() -> Self {
        Self::directed()
    }
}

fn quote(id: &impl std::fmt::Display) -> String {
    let raw = id.to_string();
    format!("\"{}\"", raw.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Render a graph as DOT source for the neato engine.
///
/// In undirected mode the graph is declared `strict`, so the two entries of
/// an undirected edge collapse into one line when laid out.
pub fn to_dot<N: NodeId>(graph: &Graph<N>, options: &DotOptions<N>) -> String {
    let (header, arrow) = if options.directed {
        ("// Directed graph\ndigraph {", "->")
    } else {
        ("// Undirected graph\nstrict graph {", "--")
    };

    let mut out = String::new();
    out.push_str(header);
    out.push('\n');
    out.push_str("\tgraph [layout=neato overlap=false splines=true]\n");

    for node in graph.nodes() {
        match options.positions.get(node) {
            Some(pos) => {
                let _ = writeln!(out, "\t{} [pos={}]", quote(node), quote(pos));
            }
            None => {
                let _ = writeln!(out, "\t{}", quote(node));
            }
        }
    }
    for edge in graph.edges() {
        let _ = writeln!(
            out,
            "\t{} {} {}",
            quote(&edge.source),
            arrow,
            quote(&edge.target)
        );
    }
    out.push_str("}\n");
    out
}
