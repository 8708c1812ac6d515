// File: crates/perfchart-core/src/config.rs
// Summary: Chart configuration object; mirrors the shape handed to the renderer
//          ({type, data: {datasets}, options: {scales: {x_axes: [{type, time}]}}}).

use crate::series::Series;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Scatter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    Linear,
    Time,
}

/// Display/binning granularity for a time axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
}

impl TimeUnit {
    /// Width of one unit, in seconds.
    pub const fn seconds(self) -> f64 {
        match self {
            TimeUnit::Minute => 60.0,
            TimeUnit::Hour => 3_600.0,
            TimeUnit::Day => 86_400.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeOptions {
    pub unit: TimeUnit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XAxisConfig {
    pub kind: AxisKind,
    pub time: TimeOptions,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScaleOptions {
    pub x_axes: Vec<XAxisConfig>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub scales: ScaleOptions,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    pub datasets: Vec<Series>,
}

/// Full configuration passed to [`crate::Chart::new`].
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    /// Scatter chart over `datasets` with a single hourly time X axis.
    pub fn scatter(datasets: Vec<Series>) -> Self {
        Self {
            kind: ChartKind::Scatter,
            data: ChartData { datasets },
            options: ChartOptions {
                scales: ScaleOptions {
                    x_axes: vec![XAxisConfig {
                        kind: AxisKind::Time,
                        time: TimeOptions { unit: TimeUnit::Hour },
                    }],
                },
            },
        }
    }

    /// Primary X axis configuration, when one is present.
    pub fn x_axis(&self) -> Option<&XAxisConfig> {
        self.options.scales.x_axes.first()
    }
}
