// File: crates/perfchart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use perfchart_core::{Chart, ChartConfig, Point, RenderOptions, Series};

fn tiny_dataset() -> Vec<Series> {
    vec![Series::with_data(
        "latency",
        vec![
            Point::parse("2024-01-01T00:05:00Z", 12.0).unwrap(),
            Point::parse("2024-01-01T01:10:00Z", 18.5).unwrap(),
            Point::parse("2024-01-01T02:40:00Z", 9.0).unwrap(),
            Point::parse("2024-01-01T03:15:00Z", 21.0).unwrap(),
        ],
    )]
}

#[test]
fn render_smoke_png() {
    let chart = Chart::new(ChartConfig::scatter(tiny_dataset()));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works and decodes at the requested size.
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let decoded = image::load_from_memory(&bytes).expect("valid PNG");
    assert_eq!(decoded.width(), opts.width as u32);
    assert_eq!(decoded.height(), opts.height as u32);
}
