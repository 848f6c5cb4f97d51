// File: crates/trendline-core/src/decorator.rs
// Summary: Decorator trait (pluggable overlays drawn around the series path) and the dashed threshold line.

use crate::canvas::{Canvas, Stroke, StrokeCap};
use crate::geometry::{Offset, Size};
use crate::processor::LineChartProcessor;
use crate::selection::Selection;
use crate::theme::Theme;

/// Pointer input forwarded by the host's gesture layer, in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Start(Offset),
    Move(Offset),
    End,
    Cancel,
}

/// Everything a decorator may read while drawing one frame.
pub struct DrawContext<'a> {
    pub size: Size,
    /// Pixels per density-independent unit.
    pub density: f32,
    pub theme: &'a Theme,
    pub processor: &'a LineChartProcessor,
}

impl DrawContext<'_> {
    pub fn px(&self, dp: f32) -> f32 {
        dp * self.density
    }
}

/// Overlay drawn before (background) or after (foreground) the series path.
pub trait Decorator {
    fn id(&self) -> &'static str;
    fn draw(&self, ctx: &DrawContext<'_>, canvas: &mut dyn Canvas);
    /// React to pointer input. Returns true when the decorator's visible state changed.
    fn on_pointer(&mut self, _event: &PointerEvent, _processor: &LineChartProcessor) -> bool {
        false
    }
    /// Current highlighted sample, for decorators that track one.
    fn selection(&self) -> Option<&Selection> {
        None
    }
}

/// Dashed horizontal reference line at a fixed value.
pub struct ThresholdLine {
    value: i32,
}

impl ThresholdLine {
    pub fn new(value: i32) -> Self { Self { value } }
    pub fn value(&self) -> i32 { self.value }
}

impl Decorator for ThresholdLine {
    fn id(&self) -> &'static str { "threshold_line" }

    fn draw(&self, ctx: &DrawContext<'_>, canvas: &mut dyn Canvas) {
        // Read through the processor each frame so a replaced series is picked up.
        let y = ctx.processor.y_of(self.value);
        let dash = ctx.px(5.0);
        let stroke = Stroke::new(ctx.theme.threshold, ctx.px(1.0))
            .cap(StrokeCap::Round)
            .dashed(dash, dash);
        canvas.draw_line(Offset::new(0.0, y), Offset::new(ctx.size.width, y), &stroke);
    }
}
