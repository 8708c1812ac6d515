// File: crates/perfchart-core/benches/render_bench.rs
// Purpose: Criterion benchmark for scatter rendering throughput.

use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use perfchart_core::{Chart, ChartConfig, Point, RenderOptions, Series};

fn synthetic_datasets(points_per_series: usize) -> Vec<Series> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..3)
        .map(|s| {
            let data = (0..points_per_series)
                .map(|i| {
                    let t = start + Duration::seconds((i * 90) as i64);
                    let y = ((i as f64 * 0.37 + s as f64).sin() + 1.5) * 40.0;
                    Point::new(t, y)
                })
                .collect();
            Series::with_data(format!("series-{s}"), data)
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let opts = RenderOptions::default();
    let mut group = c.benchmark_group("scatter_render");
    for n in [1_000usize, 10_000] {
        let chart = Chart::new(ChartConfig::scatter(synthetic_datasets(n)));
        group.bench_with_input(BenchmarkId::from_parameter(n), &chart, |b, chart| {
            b.iter(|| chart.render_to_png_bytes(&opts).expect("render"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
