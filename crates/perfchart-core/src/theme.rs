// File: crates/perfchart-core/src/theme.rs
// Summary: Light/Dark theming plus the per-series point palette.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    /// Colors assigned to series in order, wrapping around when exhausted.
    pub palette: [skia::Color; 6],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            palette: default_palette(),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            palette: default_palette(),
        }
    }

    /// Color for the series at `index`, wrapping past the palette end.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

fn default_palette() -> [skia::Color; 6] {
    [
        skia::Color::from_argb(255, 0x36, 0xa2, 0xeb), // blue
        skia::Color::from_argb(255, 0xff, 0x63, 0x84), // red
        skia::Color::from_argb(255, 0xff, 0x9f, 0x40), // orange
        skia::Color::from_argb(255, 0x4b, 0xc0, 0xc0), // teal
        skia::Color::from_argb(255, 0x99, 0x66, 0xff), // purple
        skia::Color::from_argb(255, 0xff, 0xcd, 0x56), // yellow
    ]
}

/// Return the list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_colors_wrap() {
        let t = Theme::dark();
        assert_eq!(t.series_color(0), t.series_color(6));
        assert_ne!(t.series_color(0), t.series_color(1));
    }

    #[test]
    fn find_is_case_insensitive_with_dark_fallback() {
        assert_eq!(find("LIGHT").name, "light");
        assert_eq!(find("no-such-theme").name, "dark");
    }
}
