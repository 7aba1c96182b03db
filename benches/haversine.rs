#[macro_use]
extern crate criterion;

extern crate geocoords;

use criterion::Criterion;
use geocoords::{Coordinates, DistanceCalculator, Haversine, route_length_with};

const POINT1: Coordinates = Coordinates::new(51.301389, 6.953333);
const POINT2: Coordinates = Coordinates::new(50.823194, 6.186389);

fn route() -> Vec<Coordinates> {
    (0..1000)
        .map(|i| Coordinates::new(50.8 + i as f32 * 0.0005, 6.1 + i as f32 * 0.0008))
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("haversine", |b| b.iter(|| Haversine.calculate_distance(&POINT1, &POINT2)));

    let route = route();
    c.bench_function("route_length", |b| b.iter(|| route_length_with(&Haversine, &route)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
