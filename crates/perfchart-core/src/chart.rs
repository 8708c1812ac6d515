// File: crates/perfchart-core/src/chart.rs
// Summary: Chart construction and scatter rendering onto Skia CPU raster surfaces.

use skia_safe as skia;

use crate::axis::{Axis, ScaleKind};
use crate::config::{AxisKind, ChartConfig, TimeUnit};
use crate::error::ChartError;
use crate::geometry::RectI32;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;

const POINT_RADIUS: f32 = 3.5;
const LABEL_SIZE: f32 = 13.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
        }
    }
}

/// A constructed chart: the configuration plus axes ranged over its data.
pub struct Chart {
    pub config: ChartConfig,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    /// Construct from a configuration, auto-ranging both axes from the data.
    pub fn new(config: ChartConfig) -> Self {
        let unit = match config.x_axis() {
            Some(ax) if ax.kind == AxisKind::Time => ax.time.unit,
            _ => TimeUnit::Hour,
        };
        let mut x_axis = Axis::default_x(unit);
        if let Some(ax) = config.x_axis() {
            if ax.kind == AxisKind::Linear {
                x_axis.kind = ScaleKind::Linear;
            }
        }
        let mut y_axis = Axis::default_y();
        let view = ViewState::from_datasets(&config.data.datasets, unit);
        view.apply_to(&mut x_axis, &mut y_axis);
        Self { config, x_axis, y_axis }
    }

    /// Render into a provider-resolved surface.
    pub fn render(&self, surface: &mut skia::Surface, opts: &RenderOptions) -> Result<(), ChartError> {
        let (w, h) = (surface.width(), surface.height());
        self.draw(surface.canvas(), w, h, opts);
        Ok(())
    }

    /// Render headless to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), ChartError> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render headless and return the encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, ChartError> {
        let mut surface =
            skia::surfaces::raster_n32_premul((opts.width, opts.height)).ok_or(ChartError::Surface)?;
        self.draw(surface.canvas(), opts.width, opts.height, opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    fn draw(&self, canvas: &skia::Canvas, width: i32, height: i32, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = RectI32::inset(width, height, &opts.insets);
        if plot.width() <= 0 || plot.height() <= 0 {
            return;
        }

        let shaper = TextShaper::new();
        self.draw_grid_and_ticks(canvas, &plot, theme, &shaper);
        self.draw_axis_lines(canvas, &plot, theme);
        self.draw_points(canvas, &plot, theme);
        self.draw_legend(canvas, &plot, theme, &shaper);
    }

    // Scale helpers mapping data coordinates into the plot rect.
    fn sx(&self, plot: &RectI32, x: f64) -> f32 {
        let span = (self.x_axis.max - self.x_axis.min).max(1e-9);
        plot.left as f32 + ((x - self.x_axis.min) / span) as f32 * plot.width() as f32
    }

    fn sy(&self, plot: &RectI32, y: f64) -> f32 {
        let span = (self.y_axis.max - self.y_axis.min).max(1e-9);
        plot.bottom as f32 - ((y - self.y_axis.min) / span) as f32 * plot.height() as f32
    }

    fn draw_grid_and_ticks(&self, canvas: &skia::Canvas, plot: &RectI32, theme: &Theme, shaper: &TextShaper) {
        let mut grid = skia::Paint::default();
        grid.set_color(theme.grid);
        grid.set_anti_alias(true);
        grid.set_stroke_width(1.0);

        let mut tick_paint = skia::Paint::default();
        tick_paint.set_color(theme.axis_line);
        tick_paint.set_anti_alias(true);
        tick_paint.set_stroke_width(1.0);

        // Vertical grid lines and labels at X ticks.
        for t in self.x_axis.ticks() {
            let x = self.sx(plot, t);
            canvas.draw_line((x, plot.top as f32), (x, plot.bottom as f32), &grid);
            canvas.draw_line((x, plot.bottom as f32), (x, plot.bottom as f32 + 5.0), &tick_paint);
            shaper.draw_centered(
                canvas,
                &self.x_axis.format_tick(t),
                x,
                plot.bottom as f32 + 20.0,
                LABEL_SIZE,
                theme.tick,
            );
        }

        // Horizontal grid lines and labels at Y ticks.
        for t in self.y_axis.ticks() {
            let y = self.sy(plot, t);
            canvas.draw_line((plot.left as f32, y), (plot.right as f32, y), &grid);
            canvas.draw_line((plot.left as f32 - 5.0, y), (plot.left as f32, y), &tick_paint);
            shaper.draw_right(
                canvas,
                &self.y_axis.format_tick(t),
                plot.left as f32 - 9.0,
                y + 4.0,
                LABEL_SIZE,
                theme.tick,
            );
        }
    }

    fn draw_axis_lines(&self, canvas: &skia::Canvas, plot: &RectI32, theme: &Theme) {
        let mut paint = skia::Paint::default();
        paint.set_color(theme.axis_line);
        paint.set_anti_alias(true);
        paint.set_stroke_width(1.5);

        let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
        canvas.draw_line((l, b), (r, b), &paint);
        canvas.draw_line((l, t), (l, b), &paint);
    }

    fn draw_points(&self, canvas: &skia::Canvas, plot: &RectI32, theme: &Theme) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);

        for (i, series) in self.config.data.datasets.iter().enumerate() {
            paint.set_color(theme.series_color(i));
            for p in &series.data {
                let x = self.sx(plot, p.epoch_secs());
                let y = self.sy(plot, p.y);
                canvas.draw_circle((x, y), POINT_RADIUS, &paint);
            }
        }
    }

    fn draw_legend(&self, canvas: &skia::Canvas, plot: &RectI32, theme: &Theme, shaper: &TextShaper) {
        let mut swatch = skia::Paint::default();
        swatch.set_anti_alias(true);
        swatch.set_style(skia::paint::Style::Fill);

        let y = plot.top as f32 - 16.0;
        let mut x = plot.left as f32;
        for (i, series) in self.config.data.datasets.iter().enumerate() {
            swatch.set_color(theme.series_color(i));
            canvas.draw_rect(skia::Rect::from_xywh(x, y - 9.0, 10.0, 10.0), &swatch);
            shaper.draw_left(canvas, &series.label, x + 14.0, y, LABEL_SIZE, theme.axis_label);
            x += 14.0 + shaper.measure_width(&series.label, LABEL_SIZE) + 18.0;
        }
    }
}
