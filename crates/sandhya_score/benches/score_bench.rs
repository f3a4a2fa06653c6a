use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sandhya_score::{AtmosphericInput, CloudType, OutlookTier, evaluate, evaluate_at};
use sandhya_solar::GeoCoordinate;
use sandhya_time::{CivilDate, LocalMoment};

fn scoring_bench(c: &mut Criterion) {
    let input = AtmosphericInput {
        cloud_cover_pct: 35.0,
        cloud_type: CloudType::Cirrus,
        humidity_pct: 50.0,
        aerosol_index: 1.5,
        air_quality_index: 100.0,
    };

    let mut group = c.benchmark_group("score");
    group.bench_function("evaluate", |b| b.iter(|| evaluate(black_box(&input))));
    group.bench_function("evaluate_at", |b| {
        let coord = GeoCoordinate::new(40.7, -74.0);
        let now = LocalMoment::at(CivilDate::new(2024, 4, 15), 12, 0);
        b.iter(|| evaluate_at(black_box(&input), coord, now, 240))
    });
    group.bench_function("outlook_tier", |b| {
        b.iter(|| OutlookTier::from_probability(black_box(0.73)))
    });
    group.finish();
}

criterion_group!(benches, scoring_bench);
criterion_main!(benches);
