// File: crates/trendline-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

/// A position on the drawing surface, in pixels. Origin is top-left.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Pixel size of a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A surface can be laid out only once both sides are positive.
    pub fn is_ready(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_size(size: Size) -> Self {
        Self::from_ltrb(0.0, 0.0, size.width, size.height)
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}

/// Straight segment between two consecutive chart points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub start: Offset,
    pub end: Offset,
}

impl LineSegment {
    pub const fn new(start: Offset, end: Offset) -> Self {
        Self { start, end }
    }
}

/// Linear interpolation; `t` is not clamped.
#[inline]
pub fn lerp(start: f32, stop: f32, t: f32) -> f32 {
    start + (stop - start) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_and_extrapolation() {
        assert_eq!(lerp(100.0, 0.0, 0.0), 100.0);
        assert_eq!(lerp(100.0, 0.0, 1.0), 0.0);
        assert_eq!(lerp(100.0, 0.0, 1.5), -50.0);
    }

    #[test]
    fn zero_sized_surface_is_not_ready() {
        assert!(!Size::new(0.0, 100.0).is_ready());
        assert!(!Size::new(300.0, -1.0).is_ready());
        assert!(Size::new(1.0, 1.0).is_ready());
    }
}
