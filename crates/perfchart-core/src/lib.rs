// File: crates/perfchart-core/src/lib.rs
// Summary: Core library entry point; exports the comparison chart API.

pub mod axis;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod series;
pub mod target;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::Axis;
pub use chart::{Chart, RenderOptions};
pub use config::{ChartConfig, ChartKind, TimeUnit};
pub use dashboard::{render_comparison, COMPARISON_TARGET_ID};
pub use error::ChartError;
pub use series::{Point, Series};
pub use target::{RasterTargets, TargetProvider};
pub use text::TextShaper;
pub use theme::Theme;
pub use view::ViewState;
