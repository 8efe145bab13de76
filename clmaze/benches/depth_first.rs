use clmaze::{
    dims::Dims,
    maze::algorithms::{DepthFirstSearch, MazeAlgorithm},
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn carve_101(c: &mut Criterion) {
    c.bench_function("carve_101", |b| {
        b.iter(|| DepthFirstSearch::generate_seeded(black_box(Dims(101, 101)), Some(7)).unwrap())
    });
}

pub fn carve_201(c: &mut Criterion) {
    c.bench_function("carve_201", |b| {
        b.iter(|| DepthFirstSearch::generate_seeded(black_box(Dims(201, 201)), Some(7)).unwrap())
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(20); targets = carve_101, carve_201}
criterion_main!(benches);
