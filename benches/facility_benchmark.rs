use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use facility_kmeans::{
    assign_points, compute_metrics, update_facilities, FacilitySet, OptimizationSession, PointSet,
    SpatialGrid,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

fn fixture(n_points: usize, n_facilities: usize) -> (PointSet, FacilitySet) {
    let grid = SpatialGrid::new(1_000).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let points = PointSet::generate(n_points, &grid, &mut rng).unwrap();
    let facilities = FacilitySet::generate(n_facilities, &grid, &mut rng).unwrap();
    (points, facilities)
}

fn benchmark_assign_varying_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("assign_points");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n_facilities = 20;
    let point_counts = [1_000, 10_000, 50_000];

    for n_points in point_counts.iter() {
        group.throughput(Throughput::Elements(*n_points as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_points),
            n_points,
            |b, &n_points| {
                let (points, facilities) = fixture(n_points, n_facilities);
                b.iter(|| assign_points(black_box(&points), black_box(&facilities)).unwrap());
            },
        );
    }
    group.finish();
}

fn benchmark_assign_varying_facilities(c: &mut Criterion) {
    let mut group = c.benchmark_group("assign_facilities");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n_points = 10_000;
    let facility_counts = [5, 50, 200];

    for k in facility_counts.iter() {
        group.throughput(Throughput::Elements(*k as u64));
        group.bench_with_input(BenchmarkId::from_parameter(k), k, |b, &k| {
            let (points, facilities) = fixture(n_points, k);
            b.iter(|| assign_points(black_box(&points), black_box(&facilities)).unwrap());
        });
    }
    group.finish();
}

fn benchmark_update_and_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_metrics");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let (points, facilities) = fixture(50_000, 50);
    let assignment = assign_points(&points, &facilities).unwrap();

    group.bench_function("update_50k_points", |b| {
        b.iter(|| {
            update_facilities(
                black_box(&points),
                black_box(&facilities),
                black_box(&assignment),
            )
            .unwrap()
        });
    });

    group.bench_function("metrics_50k_points", |b| {
        b.iter(|| {
            compute_metrics(
                black_box(&points),
                black_box(&facilities),
                black_box(&assignment),
            )
        });
    });
    group.finish();
}

fn benchmark_session_rounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    group.bench_function("10_rounds_5k_points_10_facilities", |b| {
        b.iter(|| {
            let mut session = OptimizationSession::with_seed(42);
            session.configure_grid(500).unwrap();
            session.generate_points(5_000).unwrap();
            session.generate_facilities(10).unwrap();
            for _ in 0..10 {
                session.assign().unwrap();
                session.update().unwrap();
            }
            session.metrics()
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_assign_varying_points,
    benchmark_assign_varying_facilities,
    benchmark_update_and_metrics,
    benchmark_session_rounds,
);

criterion_main!(benches);
