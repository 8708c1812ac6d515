// File: crates/perfchart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    /// The plot area left over after subtracting `insets` from a surface.
    pub const fn inset(width: i32, height: i32, insets: &Insets) -> Self {
        Self {
            left: insets.left as i32,
            top: insets.top as i32,
            right: width - insets.right as i32,
            bottom: height - insets.bottom as i32,
        }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_rect_matches_surface_minus_margins() {
        let r = RectI32::inset(960, 600, &Insets::new(64, 24, 40, 56));
        assert_eq!(r, RectI32::from_ltrb(64, 40, 936, 544));
        assert_eq!(r.width(), 872);
        assert_eq!(r.height(), 504);
    }
}
