// File: crates/perfchart-core/tests/builder.rs
// Purpose: Validate the comparison builder contract (target lookup, single construction).

use skia_safe as skia;

use perfchart_core::config::{AxisKind, ChartKind, TimeUnit};
use perfchart_core::{
    render_comparison, ChartError, Point, RasterTargets, RenderOptions, Series, TargetProvider,
    COMPARISON_TARGET_ID,
};

/// Provider wrapper that counts lookups so tests can assert the builder
/// resolved the target exactly once.
struct CountingTargets {
    inner: RasterTargets,
    lookups: usize,
}

impl TargetProvider for CountingTargets {
    fn surface(&mut self, id: &str) -> Result<&mut skia::Surface, ChartError> {
        self.lookups += 1;
        self.inner.surface(id)
    }
}

fn one_point_dataset() -> Vec<Series> {
    vec![Series::with_data(
        "A",
        vec![Point::parse("2024-01-01T00:00:00Z", 3.0).unwrap()],
    )]
}

#[test]
fn missing_target_fails_before_construction() {
    // Empty document: no `comparison` surface registered.
    let mut provider = RasterTargets::new();
    match render_comparison(&mut provider, one_point_dataset(), &RenderOptions::default()) {
        Err(ChartError::TargetNotFound(id)) => assert_eq!(id, COMPARISON_TARGET_ID),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("lookup must fail"),
    }
}

#[test]
fn builder_constructs_one_scatter_chart() {
    let mut inner = RasterTargets::new();
    inner.insert(COMPARISON_TARGET_ID, 320, 200).unwrap();
    let mut provider = CountingTargets { inner, lookups: 0 };

    let datasets = one_point_dataset();
    let chart = render_comparison(&mut provider, datasets.clone(), &RenderOptions::default())
        .expect("render succeeds");

    assert_eq!(provider.lookups, 1);
    assert_eq!(chart.config.kind, ChartKind::Scatter);
    assert_eq!(chart.config.data.datasets, datasets);
    assert_eq!(chart.config.data.datasets.len(), 1);
    assert_eq!(chart.config.data.datasets[0].data.len(), 1);

    let x_axis = chart.config.x_axis().unwrap();
    assert_eq!(x_axis.kind, AxisKind::Time);
    assert_eq!(x_axis.time.unit, TimeUnit::Hour);
}

#[test]
fn builder_renders_empty_dataset_without_error() {
    // Absent data is the renderer's problem: it draws an empty chart.
    let mut provider = RasterTargets::new();
    provider.insert(COMPARISON_TARGET_ID, 320, 200).unwrap();
    let chart = render_comparison(&mut provider, Vec::new(), &RenderOptions::default())
        .expect("empty chart renders");
    assert!(chart.config.data.datasets.is_empty());

    let png = provider.encode_png(COMPARISON_TARGET_ID).unwrap();
    assert!(png.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
