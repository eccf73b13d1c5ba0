use atc_core::{graph::RouteGraph, search::dijkstra::Dijkstra};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

pub fn criterion_benchmark(c: &mut Criterion) {
    let g = RouteGraph::with_default_routes().expect("Built-in routes are valid");

    let pairs = [("A", "F"), ("A", "D"), ("C", "D"), ("F", "F")];

    let mut group = c.benchmark_group("dijkstra_on_seed_graph");
    for (start, end) in pairs {
        let source = g.airport_index(start).expect("Unknown airport");
        let target = g.airport_index(end).expect("Unknown airport");

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{start}-{end}")),
            &(source, target),
            |b, &(source, target)| {
                b.iter(|| {
                    let mut dijkstra = Dijkstra::new(&g);
                    dijkstra.search(black_box(source), black_box(target))
                })
            },
        );
    }
    group.finish();
}
