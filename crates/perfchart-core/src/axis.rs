// File: crates/perfchart-core/src/axis.rs
// Summary: Axis model with ranges, tick generation (time-unit aligned), and labels.

use chrono::{TimeZone, Utc};

use crate::config::TimeUnit;
use crate::grid::{aligned_steps, linspace};

/// Upper bound on rendered ticks; wider unit multiples are used past this.
const MAX_TICKS: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleKind {
    Linear,
    /// Timestamps in epoch seconds, ticked at whole multiples of the unit.
    Time(TimeUnit),
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear }
    }

    pub fn time(label: impl Into<String>, min: f64, max: f64, unit: TimeUnit) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Time(unit) }
    }

    pub fn default_x(unit: TimeUnit) -> Self {
        Self::time("Time", 0.0, unit.seconds(), unit)
    }

    pub fn default_y() -> Self {
        Self::new("Value", 0.0, 1.0)
    }

    /// Tick positions for the current range.
    ///
    /// Time axes snap to whole-unit boundaries (an hourly axis ticks on the
    /// hour). When that would exceed MAX_TICKS, the step widens to an integer
    /// multiple of the unit so boundaries stay aligned.
    pub fn ticks(&self) -> Vec<f64> {
        match self.kind {
            ScaleKind::Linear => linspace(self.min, self.max, 6),
            ScaleKind::Time(unit) => {
                let span = (self.max - self.min).max(0.0);
                let base = unit.seconds();
                let mut step = base;
                if span / step > (MAX_TICKS - 1) as f64 {
                    let mult = (span / (base * (MAX_TICKS - 1) as f64)).ceil();
                    step = base * mult;
                }
                aligned_steps(self.min, self.max, step)
            }
        }
    }

    /// Human-readable label for a tick at `value`.
    pub fn format_tick(&self, value: f64) -> String {
        match self.kind {
            ScaleKind::Linear => format_number(value),
            ScaleKind::Time(_) => {
                let millis = (value * 1000.0).round() as i64;
                match Utc.timestamp_millis_opt(millis).single() {
                    Some(t) => {
                        // Keep labels short inside a single day.
                        if self.max - self.min <= TimeUnit::Day.seconds() {
                            t.format("%H:%M").to_string()
                        } else {
                            t.format("%b %d %H:%M").to_string()
                        }
                    }
                    None => format_number(value),
                }
            }
        }
    }
}

fn format_number(v: f64) -> String {
    if v == v.trunc() && v.abs() < 1e12 {
        format!("{}", v as i64)
    } else {
        format!("{:.2}", v)
    }
}
