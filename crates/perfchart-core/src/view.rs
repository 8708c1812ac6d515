// File: crates/perfchart-core/src/view.rs
// Summary: Visible ranges derived from the datasets (auto-ranging).

use crate::axis::Axis;
use crate::config::TimeUnit;
use crate::series::Series;

#[derive(Clone, Copy, Debug)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Fit all points across `datasets`, padding Y by 2% and widening a
    /// degenerate X span by one time unit on each side so a lone point still
    /// gets surrounding ticks. Empty datasets fall back to a unit view.
    pub fn from_datasets(datasets: &[Series], unit: TimeUnit) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in datasets {
            for p in &s.data {
                let x = p.epoch_secs();
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(p.y);
                y_max = y_max.max(p.y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: unit.seconds(), y_min: 0.0, y_max: 1.0 };
        }
        if (x_max - x_min).abs() < 1e-9 {
            x_min -= unit.seconds();
            x_max += unit.seconds();
        }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let ym = (y_max - y_min) * 0.02;
        Self { x_min, x_max, y_min: y_min - ym, y_max: y_max + ym }
    }

    pub fn apply_to(&self, x_axis: &mut Axis, y_axis: &mut Axis) {
        x_axis.min = self.x_min;
        x_axis.max = self.x_max;
        y_axis.min = self.y_min;
        y_axis.max = self.y_max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Point;

    #[test]
    fn empty_datasets_fall_back_to_unit_view() {
        let v = ViewState::from_datasets(&[], TimeUnit::Hour);
        assert_eq!(v.x_min, 0.0);
        assert_eq!(v.x_max, 3_600.0);
        assert_eq!(v.y_min, 0.0);
        assert_eq!(v.y_max, 1.0);
    }

    #[test]
    fn single_point_gets_a_unit_of_room_each_side() {
        let p = Point::parse("2024-01-01T12:00:00Z", 3.0).unwrap();
        let x = p.epoch_secs();
        let v = ViewState::from_datasets(&[Series::with_data("A", vec![p])], TimeUnit::Hour);
        assert!((v.x_min - (x - 3_600.0)).abs() < 1e-9);
        assert!((v.x_max - (x + 3_600.0)).abs() < 1e-9);
        // Degenerate Y becomes a unit span, then gains the 2% margin.
        assert!(v.y_min < 3.0 && v.y_max > 3.0);
    }
}
