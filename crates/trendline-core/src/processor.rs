// File: crates/trendline-core/src/processor.rs
// Summary: Maps series samples to pixel positions for a surface size; size-keyed cache and nearest lookup.
// Notes:
// - x encodes ordinal rank: samples are spaced evenly whatever their timestamps.
// - y follows lerp(drawable_height, pad_bottom, fraction), unclamped.

use std::cmp::Ordering;

use tracing::debug;

use crate::geometry::{lerp, LineSegment, Offset, Size};
use crate::series::{Sample, Series};
use crate::types::{Padding, PixelInsets};

/// Cache key: the last laid-out surface size and the density it was resolved with.
#[derive(Clone, Copy, Debug, PartialEq)]
struct LayoutKey {
    size: Size,
    density: f32,
}

#[derive(Clone, Copy, Debug, Default)]
struct Frame {
    insets: PixelInsets,
    drawable_height: f32,
    step: f32,
}

impl Frame {
    fn x_of(&self, position: usize) -> f32 {
        self.insets.left + position as f32 * self.step
    }
}

pub struct LineChartProcessor {
    series: Series,
    padding: Padding,
    key: Option<LayoutKey>,
    frame: Frame,
    points: Vec<Offset>,
    path: Vec<LineSegment>,
    recomputes: u64,
}

impl LineChartProcessor {
    pub fn new(series: Series, padding: Padding) -> Self {
        Self {
            series,
            padding,
            key: None,
            frame: Frame::default(),
            points: Vec::new(),
            path: Vec::new(),
            recomputes: 0,
        }
    }

    /// Replace the series; the next `process` call recomputes regardless of size.
    pub fn set_series(&mut self, series: Series) {
        self.series = series;
        self.invalidate();
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.key = None;
        self.points.clear();
        self.path.clear();
    }

    /// Lay out the series for `size`. Returns true when a recomputation ran.
    ///
    /// Does nothing when the size matches the cached layout, or when the
    /// surface has no area yet.
    pub fn process(&mut self, size: Size, density: f32) -> bool {
        if !size.is_ready() {
            return false;
        }
        let key = LayoutKey { size, density };
        if self.key == Some(key) {
            return false;
        }

        let insets = self.padding.resolve(density);
        let drawable_height = size.height - insets.vsum();
        let drawable_width = size.width - insets.hsum();
        // Series guarantees n >= 2, so the denominator is never zero.
        let step = drawable_width / (self.series.len() - 1) as f32;
        self.frame = Frame { insets, drawable_height, step };

        let frame = self.frame;
        let series = &self.series;
        self.points.clear();
        self.points.extend(
            series
                .iter()
                .enumerate()
                .map(|(i, s)| Offset::new(frame.x_of(i), y_for(&frame, series, s.value))),
        );
        self.path.clear();
        self.path
            .extend(self.points.windows(2).map(|w| LineSegment::new(w[0], w[1])));

        self.key = Some(key);
        self.recomputes += 1;
        debug!(
            width = size.width,
            height = size.height,
            samples = self.points.len(),
            recomputes = self.recomputes,
            "processed line chart layout"
        );
        true
    }

    /// Pixel y for an arbitrary value under the current layout.
    pub fn y_of(&self, value: i32) -> f32 {
        y_for(&self.frame, &self.series, value)
    }

    /// Sample whose x is closest to `offset.x`; y is ignored. Ties go to the
    /// lower index. `None` until the first successful `process`.
    pub fn nearest(&self, offset: Offset) -> Option<(&Sample, Offset)> {
        let mut best: Option<(usize, f32)> = None;
        for (i, p) in self.points.iter().enumerate() {
            let dist = (p.x - offset.x).abs();
            match best {
                Some((_, d)) if dist.partial_cmp(&d) != Some(Ordering::Less) => {}
                _ => best = Some((i, dist)),
            }
        }
        let (index, _) = best?;
        let sample = self.series.get(index).ok()?;
        Some((sample, self.points[index]))
    }

    pub fn series(&self) -> &Series { &self.series }
    pub fn padding(&self) -> &Padding { &self.padding }
    pub fn points(&self) -> &[Offset] { &self.points }
    pub fn path(&self) -> &[LineSegment] { &self.path }
    pub fn start(&self) -> Option<Offset> { self.points.first().copied() }
    pub fn end(&self) -> Option<Offset> { self.points.last().copied() }
    /// Size of the cached layout, if any.
    pub fn size(&self) -> Option<Size> { self.key.map(|k| k.size) }
    pub fn recompute_count(&self) -> u64 { self.recomputes }
}

fn y_for(frame: &Frame, series: &Series, value: i32) -> f32 {
    lerp(frame.drawable_height, frame.insets.bottom, series.fraction_of(value))
}
