// File: crates/perfchart-core/src/series.rs
// Summary: Scatter data model: timestamped points grouped into labeled series.

use chrono::{DateTime, Utc};

/// One scatter sample: a UTC timestamp on X and a numeric value on Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: DateTime<Utc>,
    pub y: f64,
}

impl Point {
    pub fn new(x: DateTime<Utc>, y: f64) -> Self {
        Self { x, y }
    }

    /// Parse an RFC 3339 timestamp (e.g. "2024-01-01T00:00:00Z") into a point.
    pub fn parse(timestamp: &str, y: f64) -> Result<Self, chrono::ParseError> {
        let x = DateTime::parse_from_rfc3339(timestamp)?.with_timezone(&Utc);
        Ok(Self { x, y })
    }

    /// X coordinate as fractional epoch seconds, the unit axes work in.
    pub fn epoch_secs(&self) -> f64 {
        self.x.timestamp_millis() as f64 / 1000.0
    }
}

/// An ordered, labeled point series. The chart consumes series read-only.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub data: Vec<Point>,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), data: Vec::new() }
    }

    pub fn with_data(label: impl Into<String>, data: Vec<Point>) -> Self {
        Self { label: label.into(), data }
    }

    pub fn push(&mut self, point: Point) {
        self.data.push(point);
    }

    pub fn len(&self) -> usize { self.data.len() }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parse_rfc3339_point() {
        let p = Point::parse("2024-01-01T00:00:00Z", 3.0).unwrap();
        assert_eq!(p.x, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(p.y, 3.0);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Point::parse("not-a-timestamp", 1.0).is_err());
    }

    #[test]
    fn epoch_secs_keeps_millis() {
        let p = Point::parse("1970-01-01T00:00:01.500Z", 0.0).unwrap();
        assert!((p.epoch_secs() - 1.5).abs() < 1e-9);
    }
}
