use criterion::{black_box, criterion_group, criterion_main, Criterion};
use facility_layout::{
    solve, EffortChallenge, EvolutionOptions, LayoutProblem, RandomNumberGenerator,
    StationOrdering,
};

fn problem(n: usize) -> LayoutProblem {
    let sizes = (0..n).map(|i| (i % 5 + 1) as f64).collect();
    let preferences = (0..n)
        .map(|i| (0..n).map(|j| ((i * 31 + j * 17) % 11) as f64).collect())
        .collect();
    LayoutProblem::new(sizes, preferences).unwrap()
}

fn bench_effort(c: &mut Criterion) {
    let mut group = c.benchmark_group("effort");
    for size in [10, 50, 200].iter() {
        let challenge = EffortChallenge::new(problem(*size));
        let mut stations: Vec<usize> = (0..*size).collect();
        RandomNumberGenerator::from_seed(1).shuffle(&mut stations);
        let ordering = StationOrdering::from_stations(stations);

        group.bench_function(&format!("effort_{}", size), |b| {
            b.iter(|| challenge.effort(black_box(ordering.stations())).unwrap())
        });
    }
    group.finish();
}

fn bench_evolve(c: &mut Criterion) {
    let options = EvolutionOptions::builder()
        .num_generations(20)
        .build()
        .unwrap();

    c.bench_function("evolve_30_stations", |b| {
        b.iter(|| {
            let mut rng = RandomNumberGenerator::from_seed(7);
            let result = solve(black_box(problem(30)), &options, &mut rng);
            assert!(result.is_ok());
        })
    });
}

criterion_group!(benches, bench_effort, bench_evolve);
criterion_main!(benches);
