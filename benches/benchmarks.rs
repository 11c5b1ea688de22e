//! Criterion benchmarks for adjgraph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use adjgraph::graph::{
    depth_first_walk, has_cycle, minimum_spanning_tree, topological_order, Graph,
};

/// Random DAG: edges only go from lower to higher ids.
fn make_dag(node_count: u32, edges_per_node: usize) -> Graph<u32> {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::new();
    for i in 0..node_count {
        graph.add_node(i);
    }
    for i in 0..node_count - 1 {
        for _ in 0..edges_per_node {
            let target = rng.gen_range(i + 1..node_count);
            graph.add_edge(i, target, 1.0).unwrap();
        }
    }
    graph
}

/// Random connected undirected graph with weights in [1, 100).
fn make_weighted(node_count: u32, extra_edges: usize) -> Graph<u32> {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::new();
    for i in 1..node_count {
        let parent = rng.gen_range(0..i);
        graph
            .add_undirected_edge(parent, i, rng.gen_range(1.0..100.0))
            .unwrap();
    }
    for _ in 0..extra_edges {
        let a = rng.gen_range(0..node_count);
        let b = rng.gen_range(0..node_count);
        if a != b {
            graph
                .add_undirected_edge(a, b, rng.gen_range(1.0..100.0))
                .unwrap();
        }
    }
    graph
}

/// A single path 0 -> 1 -> ... -> n-1.
fn make_chain(node_count: u32) -> Graph<u32> {
    let mut graph = Graph::new();
    for i in 0..node_count - 1 {
        graph.add_edge(i, i + 1, 1.0).unwrap();
    }
    graph
}

fn bench_dfs(c: &mut Criterion) {
    let graph = make_dag(10_000, 4);
    c.bench_function("dfs_10k", |b| {
        b.iter(|| depth_first_walk(&graph, &0).unwrap())
    });

    let chain = make_chain(100_000);
    c.bench_function("dfs_chain_100k", |b| {
        b.iter(|| depth_first_walk(&chain, &0).unwrap())
    });
}

fn bench_cycle(c: &mut Criterion) {
    let graph = make_dag(10_000, 4);
    c.bench_function("has_cycle_dag_10k", |b| {
        b.iter(|| has_cycle(&graph).unwrap())
    });
}

fn bench_topo(c: &mut Criterion) {
    let graph = make_dag(10_000, 4);
    c.bench_function("topological_order_10k", |b| {
        b.iter(|| topological_order(&graph).unwrap())
    });
}

fn bench_mst(c: &mut Criterion) {
    let graph = make_weighted(10_000, 30_000);
    c.bench_function("prim_10k", |b| {
        b.iter(|| minimum_spanning_tree(&graph, &0).unwrap())
    });
}

criterion_group!(benches, bench_dfs, bench_cycle, bench_topo, bench_mst);
criterion_main!(benches);
