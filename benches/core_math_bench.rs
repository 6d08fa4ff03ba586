use criterion::{Criterion, criterion_group, criterion_main};
use profile_charts::core::{
    AggregationConfig, LinePlot, Margins, TransactionRecord, ValueScaleTuning, Viewport,
    aggregate_categories, build_cumulative_series,
};
use profile_charts::interaction::nearest_point_index;
use std::hint::black_box;

const PROJECTS: [&str; 12] = [
    "graphql",
    "ascii-art",
    "groupie-tracker",
    "forum",
    "real-time-forum",
    "social-network",
    "lem-in",
    "net-cat",
    "push-swap",
    "make-your-game",
    "old-deprecated",
    "piscine-js",
];

fn generated_transactions(count: usize) -> Vec<TransactionRecord> {
    (0..count)
        .map(|i| {
            // Timestamps descend with `i`.
            let minute = (count - i) % 60;
            let hour = ((count - i) / 60) % 24;
            let day = 1 + ((count - i) / 1_440) % 28;
            TransactionRecord::new(
                (i % 97) as f64 * 25.0,
                format!("2024-02-{day:02}T{hour:02}:{minute:02}:00Z"),
            )
            .with_path(format!("/school/div-01/{}", PROJECTS[i % PROJECTS.len()]))
        })
        .collect()
}

fn bench_cumulative_series_10k(c: &mut Criterion) {
    let records = generated_transactions(10_000);

    c.bench_function("cumulative_series_10k", |b| {
        b.iter(|| {
            let _ = build_cumulative_series(black_box(&records), black_box("%Y-%m-%d %H:%M"));
        })
    });
}

fn bench_category_aggregation_10k(c: &mut Criterion) {
    let records = generated_transactions(10_000);
    let config = AggregationConfig::default();

    c.bench_function("category_aggregation_10k", |b| {
        b.iter(|| {
            let _ = aggregate_categories(black_box(&records), black_box(&config))
                .expect("aggregation should succeed");
        })
    });
}

fn bench_nearest_point_10k(c: &mut Criterion) {
    let records = generated_transactions(10_000);
    let points = build_cumulative_series(&records, "%Y-%m-%d %H:%M");
    let plot = LinePlot::new(
        points,
        Viewport::new(1600, 400),
        Margins::new(20.0, 5.0, 20.0, 5.0),
        ValueScaleTuning::default(),
    )
    .expect("plot init");

    c.bench_function("nearest_point_10k", |b| {
        b.iter(|| {
            let _ = nearest_point_index(black_box(&plot), black_box(812.25));
        })
    });
}

criterion_group!(
    benches,
    bench_cumulative_series_10k,
    bench_category_aggregation_10k,
    bench_nearest_point_10k
);
criterion_main!(benches);
