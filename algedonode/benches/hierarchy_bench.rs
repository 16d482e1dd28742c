use algedonode::{ContactLayout, DialState, Hierarchy};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_construction(c: &mut Criterion) {
    c.bench_function("wire_hierarchy", |b| b.iter(|| black_box(Hierarchy::new())));
}

fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");
    group.throughput(Throughput::Elements(1));

    let states = [
        ("algedonode_path", [1, 1, 1, 1]),
        ("escape_path", [10, 10, 10, 10]),
        ("mixed", [4, 9, 7, 10]),
    ];
    for (name, values) in states {
        let state = DialState::new(values).unwrap();
        let mut hierarchy = Hierarchy::new();
        group.bench_with_input(BenchmarkId::from_parameter(name), &state, |b, &state| {
            b.iter(|| black_box(hierarchy.simulate(black_box(state))))
        });
    }
    group.finish();
}

fn bench_full_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_simulate");
    group.throughput(Throughput::Elements(10_000));
    group.sample_size(20);

    for (name, layout) in [
        ("default", ContactLayout::default_layout()),
        ("randomized", ContactLayout::randomized(7)),
    ] {
        let mut hierarchy = Hierarchy::with_contacts(layout);
        group.bench_function(name, |b| b.iter(|| black_box(hierarchy.full_simulate())));
    }
    group.finish();
}

criterion_group!(benches, bench_construction, bench_simulate, bench_full_simulate);
criterion_main!(benches);
