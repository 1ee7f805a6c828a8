use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linkorder::prelude::*;

/// Chain: file0 depends on file1, which depends on file2, and so on.
fn chain_graph(n: usize) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for i in 0..n {
        graph.insert_edge(format!("file{}", i), format!("file{}", i + 1));
    }
    graph
}

/// Every translation unit depends on a handful of shared headers.
fn fan_in_graph(n: usize) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for i in 0..n {
        let header = format!("header{}", i % 10);
        graph.insert_dependencies(format!("unit{}", i), ["config", "util", header.as_str()]);
    }
    graph
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("build_chain_200", |b| b.iter(|| chain_graph(black_box(200))));

    let chain = chain_graph(200);
    c.bench_function("order_chain_200", |b| b.iter(|| chain.compute_order()));

    let fan_in = fan_in_graph(200);
    c.bench_function("order_fan_in_200", |b| b.iter(|| fan_in.compute_order()));
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(100);
    targets = criterion_benchmark
}

criterion_main!(benches);
