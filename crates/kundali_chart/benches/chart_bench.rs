use chrono::{TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_chart::{ChartConfig, ChartRequest, FixedEphemeris, generate_chart};
use kundali_time::BirthMoment;

const POSITIONS: &str = r#"{
    "ascendant": 254.0,
    "cusps": [254, 284, 314, 344, 14, 44, 74, 104, 134, 164, 194, 224],
    "bodies": {
        "Sun": {"longitude": 41.3, "speed": 0.96},
        "Moon": {"longitude": 85.2, "speed": 13.1},
        "Mars": {"longitude": 270.9, "speed": -0.1},
        "Mercury": {"longitude": 54.8, "speed": 1.5},
        "Jupiter": {"longitude": 63.1, "speed": 0.23},
        "Venus": {"longitude": 5.6, "speed": 1.1},
        "Saturn": {"longitude": 38.4, "speed": 0.12},
        "Rahu": {"longitude": 78.2, "speed": -0.05}
    }
}"#;

fn chart_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart");
    let provider = FixedEphemeris::from_json(POSITIONS).unwrap();
    let birth = BirthMoment::parse("2001-05-26", "21:48", "+05:30").unwrap();
    let request = ChartRequest::new(birth)
        .with_location(28.6139, 77.209)
        .at(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());

    let full = ChartConfig::default();
    group.bench_function("generate_full", |b| {
        b.iter(|| generate_chart(black_box(&request), &full, &provider))
    });

    let d9_only = ChartConfig {
        harmonics: vec![9],
        ..ChartConfig::default()
    };
    group.bench_function("generate_d9_only", |b| {
        b.iter(|| generate_chart(black_box(&request), &d9_only, &provider))
    });

    group.finish();
}

criterion_group!(benches, chart_bench);
criterion_main!(benches);
