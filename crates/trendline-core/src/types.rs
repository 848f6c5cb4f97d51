// File: crates/trendline-core/src/types.rs
// Summary: Shared types and constants (default sizes, directional padding).

/// Default surface width in pixels.
pub const WIDTH: i32 = 720;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 330;

/// Reading direction; decides which physical edge "start" refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Directional insets in density-independent units.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Padding {
    pub top: f32,
    pub bottom: f32,
    pub start: f32,
    pub end: f32,
    pub direction: LayoutDirection,
}

impl Padding {
    pub const fn new(top: f32, bottom: f32, start: f32, end: f32) -> Self {
        Self { top, bottom, start, end, direction: LayoutDirection::Ltr }
    }

    pub const fn horizontal(value: f32) -> Self {
        Self::new(0.0, 0.0, value, value)
    }

    pub const fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Resolve to physical pixel insets.
    pub fn resolve(&self, density: f32) -> PixelInsets {
        let (left, right) = match self.direction {
            LayoutDirection::Ltr => (self.start, self.end),
            LayoutDirection::Rtl => (self.end, self.start),
        };
        PixelInsets {
            left: left.max(0.0) * density,
            right: right.max(0.0) * density,
            top: self.top.max(0.0) * density,
            bottom: self.bottom.max(0.0) * density,
        }
    }
}

/// Insets after direction and density are applied.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PixelInsets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl PixelInsets {
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f32 { self.top + self.bottom }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rtl_swaps_start_and_end() {
        let p = Padding::new(1.0, 2.0, 3.0, 4.0);
        let ltr = p.resolve(2.0);
        assert_eq!((ltr.left, ltr.right, ltr.top, ltr.bottom), (6.0, 8.0, 2.0, 4.0));
        let rtl = p.with_direction(LayoutDirection::Rtl).resolve(2.0);
        assert_eq!((rtl.left, rtl.right), (8.0, 6.0));
    }
}
