//! CLI command implementations.

use std::path::Path;

use crate::format::{to_dot, DotOptions, GraphReader, GraphWriter};
use crate::graph::{
    depth_first_walk, discovery_order, find_cycle, minimum_spanning_tree, topological_order, Graph,
};
use crate::types::{AdjResult, Color};

fn load(path: &Path) -> AdjResult<Graph<String>> {
    GraphReader::read_from_file(path)
}

/// Write `graph` to `output` if given, otherwise print it as JSON.
fn emit_graph(graph: &Graph<String>, output: Option<&Path>, pretty: bool) -> AdjResult<()> {
    let writer = GraphWriter::new(pretty);
    match output {
        Some(out) => {
            writer.write_to_file(graph, out)?;
            println!("Wrote {}", out.display());
        }
        None => println!("{}", writer.to_json(graph)?),
    }
    Ok(())
}

/// Display information about a graph document.
pub fn cmd_info(path: &Path, json: bool) -> AdjResult<()> {
    let graph = load(path)?;
    let dangling = graph.validate().err().map(|e| e.to_string());

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "nodes": graph.len(),
            "edges": graph.edge_count(),
            "total_weight": graph.total_weight(),
            "valid": dangling.is_none(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Nodes: {}", graph.len());
        println!("Edges: {}", graph.edge_count());
        println!("Total weight: {}", graph.total_weight());
        match dangling {
            None => println!("Valid: yes"),
            Some(reason) => println!("Valid: no ({})", reason),
        }
    }
    Ok(())
}

/// Depth-first walk from a start node.
pub fn cmd_dfs(path: &Path, start: &str, json: bool) -> AdjResult<()> {
    let graph = load(path)?;
    let start = start.to_string();
    let colors = depth_first_walk(&graph, &start)?;
    let order = discovery_order(&graph, &start)?;
    let unreached: Vec<&String> = graph
        .nodes()
        .filter(|n| colors.get(*n) == Some(&Color::Unvisited))
        .collect();

    if json {
        let info = serde_json::json!({
            "start": start,
            "visited": order,
            "unreached": unreached,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("DFS from {}: {} nodes reached", start, order.len());
        for node in &order {
            println!("  {}", node);
        }
        if !unreached.is_empty() {
            println!("Unreached:");
            for node in unreached {
                println!("  {}", node);
            }
        }
    }
    Ok(())
}

/// Report whether the graph has a directed cycle.
pub fn cmd_cycle(path: &Path, json: bool) -> AdjResult<()> {
    let graph = load(path)?;
    let cycle = find_cycle(&graph)?;

    if json {
        let info = serde_json::json!({
            "has_cycle": cycle.is_some(),
            "cycle": cycle.as_ref().map(|c| c.path.clone()),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        match cycle {
            Some(c) => println!("Cycle detected: {}", c),
            None => println!("No cycle"),
        }
    }
    Ok(())
}

/// Print a topological order.
pub fn cmd_topo(path: &Path, json: bool) -> AdjResult<()> {
    let graph = load(path)?;
    if graph.has_cycle()? {
        log::warn!("graph has a cycle; order below is not topological");
    }
    let order = topological_order(&graph)?;

    if json {
        println!("{}", serde_json::json!({ "order": order }));
    } else {
        println!("{}", order.join(" "));
    }
    Ok(())
}

/// Compute a minimum spanning tree with Prim's algorithm.
pub fn cmd_mst(
    path: &Path,
    start: &str,
    output: Option<&Path>,
    json: bool,
) -> AdjResult<()> {
    let graph = load(path)?;
    let tree = minimum_spanning_tree(&graph, &start.to_string())?;

    if json || output.is_some() {
        return emit_graph(&tree, output, true);
    }

    println!(
        "MST from {}: {} nodes, {} edges, total weight {}",
        start,
        tree.len(),
        tree.edge_count(),
        tree.total_weight()
    );
    for edge in tree.edges() {
        println!("  {} -> {} ({})", edge.source, edge.target, edge.weight);
    }
    Ok(())
}

/// Reverse every edge.
pub fn cmd_transpose(path: &Path, output: Option<&Path>) -> AdjResult<()> {
    let graph = load(path)?;
    emit_graph(&graph.transpose(), output, true)
}

/// Add the reverse of every edge.
pub fn cmd_undirected(path: &Path, output: Option<&Path>) -> AdjResult<()> {
    let graph = load(path)?;
    emit_graph(&graph.to_undirected(), output, true)
}

/// Render the graph as Graphviz DOT.
pub fn cmd_dot(path: &Path, undirected: bool) -> AdjResult<()> {
    let graph = load(path)?;
    let options = if undirected {
        DotOptions::undirected()
    } else {
        DotOptions::directed()
    };
    print!("{}", to_dot(&graph, &options));
    Ok(())
}
