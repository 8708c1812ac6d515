// File: crates/perfchart-core/src/dashboard.rs
// Summary: The comparison dashboard builder: resolve target, build config, render.

use crate::chart::{Chart, RenderOptions};
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::series::Series;
use crate::target::TargetProvider;

/// Target id the comparison chart renders into.
pub const COMPARISON_TARGET_ID: &str = "comparison";

/// Build and render the performance comparison scatter chart.
///
/// The target is resolved before any chart is constructed, so a missing
/// `comparison` surface returns [`ChartError::TargetNotFound`] without side
/// effects. The constructed [`Chart`] is returned for inspection.
pub fn render_comparison(
    provider: &mut dyn TargetProvider,
    datasets: Vec<Series>,
    opts: &RenderOptions,
) -> Result<Chart, ChartError> {
    let surface = provider.surface(COMPARISON_TARGET_ID)?;
    let chart = Chart::new(ChartConfig::scatter(datasets));
    chart.render(surface, opts)?;
    Ok(chart)
}
