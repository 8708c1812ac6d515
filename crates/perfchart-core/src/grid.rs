// File: crates/perfchart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Positions aligned to whole multiples of `step` inside [start, end].
pub fn aligned_steps(start: f64, end: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || end < start { return Vec::new(); }
    let mut out = Vec::new();
    let mut t = (start / step).ceil() * step;
    while t <= end + 1e-9 {
        out.push(t);
        t += step;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligned_steps_snap_to_multiples() {
        let ticks = aligned_steps(90.0, 400.0, 100.0);
        assert_eq!(ticks, vec![100.0, 200.0, 300.0, 400.0]);
    }

    #[test]
    fn aligned_steps_include_exact_start() {
        let ticks = aligned_steps(200.0, 450.0, 100.0);
        assert_eq!(ticks, vec![200.0, 300.0, 400.0]);
    }

    #[test]
    fn aligned_steps_empty_for_bad_input() {
        assert!(aligned_steps(0.0, 10.0, 0.0).is_empty());
        assert!(aligned_steps(10.0, 0.0, 1.0).is_empty());
    }
}
