use atc_core::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

criterion_group!(benches, random_queries);
criterion_main!(benches);

fn random_queries(c: &mut Criterion) {
    let g = RouteGraph::with_default_routes().expect("Built-in routes are valid");
    let service = PathQueryService::new(&g);

    let mut pool: Vec<String> = g.airports().map(|a| a.code.clone()).collect();
    // Include one unknown code to cover the validation path
    pool.push("Z".to_string());

    let mut rng: StdRng = SeedableRng::seed_from_u64(187);
    let queries: Vec<(String, String)> = (0..1_000)
        .filter_map(|_| Some((pool.choose(&mut rng)?.clone(), pool.choose(&mut rng)?.clone())))
        .collect();

    c.bench_function("query_service_random_pairs", |b| {
        b.iter(|| {
            for (start, end) in &queries {
                black_box(service.query(start, end));
            }
        })
    });
}
