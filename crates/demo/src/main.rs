// File: crates/demo/src/main.rs
// Summary: Demo loads timestamped samples from CSV and renders the comparison scatter PNG.

use anyhow::{Context, Result};
use perfchart_core::types::{HEIGHT, WIDTH};
use perfchart_core::{
    render_comparison, theme, Point, RasterTargets, RenderOptions, Series, COMPARISON_TARGET_ID,
};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Accept CSV path and optional theme name from CLI.
    let raw = std::env::args().nth(1).unwrap_or_else(|| "perf_samples.csv".to_string());
    let theme_name = std::env::args().nth(2).unwrap_or_else(|| "dark".to_string());

    let path = PathBuf::from(&raw);
    if !path.exists() {
        anyhow::bail!("file not found: {}", path.display());
    }
    println!("Using input file: {}", path.display());

    let datasets = load_samples_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    let total: usize = datasets.iter().map(Series::len).sum();
    println!("Loaded {} points across {} series", total, datasets.len());

    if datasets.is_empty() {
        anyhow::bail!("no samples loaded — check headers/delimiter.");
    }

    let opts = RenderOptions {
        theme: theme::find(&theme_name),
        ..RenderOptions::default()
    };

    let mut targets = RasterTargets::new();
    targets.insert(COMPARISON_TARGET_ID, WIDTH, HEIGHT)?;
    render_comparison(&mut targets, datasets, &opts)?;

    let png = targets.encode_png(COMPARISON_TARGET_ID)?;
    let out = out_name(&path);
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out, png)?;
    println!("Wrote {}", out.display());

    Ok(())
}

/// Produce output file name like target/out/comparison_<stem>.png
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("samples");
    PathBuf::from("target/out").join(format!("comparison_{}.png", stem))
}

/// Load `timestamp,series,value` rows into labeled series, preserving the
/// order in which series first appear.
fn load_samples_csv(path: &Path) -> Result<Vec<Series>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_time = idx(&["timestamp", "time", "date", "datetime"])
        .context("missing timestamp column")?;
    let i_series = idx(&["series", "label", "name"]).context("missing series column")?;
    let i_value = idx(&["value", "y", "metric"]).context("missing value column")?;

    let mut datasets: Vec<Series> = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let ts = rec.get(i_time).unwrap_or("").trim();
        let label = rec.get(i_series).unwrap_or("").trim();
        let value = rec.get(i_value).unwrap_or("").trim();

        let y: f64 = value
            .parse()
            .with_context(|| format!("row {}: bad value '{}'", row + 2, value))?;
        let point = Point::parse(ts, y)
            .with_context(|| format!("row {}: bad timestamp '{}'", row + 2, ts))?;

        match datasets.iter_mut().find(|s| s.label == label) {
            Some(series) => series.push(point),
            None => datasets.push(Series::with_data(label, vec![point])),
        }
    }
    Ok(datasets)
}
