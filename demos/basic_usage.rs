//! Build a small graph, then run every algorithm over it.

use adjgraph::*;

fn main() -> AdjResult<()> {
    // A course prerequisite graph
    let mut builder = GraphBuilder::new();
    builder
        .arc("intro", "data-structures")
        .arc("intro", "discrete-math")
        .arc("data-structures", "algorithms")
        .arc("discrete-math", "algorithms")
        .arc("algorithms", "compilers");
    let courses = builder.build()?;

    println!(
        "Graph created with {} nodes and {} edges",
        courses.len(),
        courses.edge_count()
    );

    if let Some(cycle) = find_cycle(&courses)? {
        println!("Cycle: {}", cycle);
    } else {
        println!("Study order: {:?}", topological_order(&courses)?);
    }

    let colors = depth_first_walk(&courses, &"discrete-math")?;
    for node in courses.nodes() {
        println!("  {:<16} {}", node, colors[node]);
    }

    // Road network with distances
    let roads = GraphBuilder::new()
        .undirected("Amsterdam", "Utrecht", 45.0)
        .undirected("Amsterdam", "Haarlem", 20.0)
        .undirected("Haarlem", "Leiden", 30.0)
        .undirected("Leiden", "Utrecht", 55.0)
        .undirected("Utrecht", "Arnhem", 65.0)
        .build()?;

    let tree = minimum_spanning_tree(&roads, &"Amsterdam")?;
    println!("Minimum road network ({} km):", tree.total_weight());
    for edge in tree.edges() {
        println!("  {} - {} ({} km)", edge.source, edge.target, edge.weight);
    }

    print!("{}", to_dot(&tree, &DotOptions::directed()));
    Ok(())
}
