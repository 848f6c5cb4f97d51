// File: crates/trendline-core/src/selection.rs
// Summary: Selection cursor decorator: scrubs to the nearest sample on drag and draws a vertical cursor.

use tracing::trace;

use crate::canvas::{Canvas, Stroke, StrokeCap};
use crate::decorator::{Decorator, DrawContext, PointerEvent};
use crate::geometry::{Offset, Rect};
use crate::processor::LineChartProcessor;
use crate::series::Sample;

/// Highlighted sample and its pixel position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    pub sample: Sample,
    pub offset: Offset,
}

/// Subscriber notified on every selection update; `None` when the drag ends.
pub type SelectionListener = Box<dyn FnMut(Option<&Selection>)>;

/// How far the cursor line overshoots the surface, in pixels.
const CURSOR_OVERSHOOT: f32 = 10.0;

#[derive(Default)]
pub struct SelectionCursor {
    current: Option<Selection>,
    listener: Option<SelectionListener>,
}

impl SelectionCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listener(listener: impl FnMut(Option<&Selection>) + 'static) -> Self {
        Self { current: None, listener: Some(Box::new(listener)) }
    }

    pub fn current(&self) -> Option<&Selection> {
        self.current.as_ref()
    }

    /// Select the sample nearest to `position`. Returns false when the
    /// processor has no layout yet.
    pub fn select_nearest(&mut self, position: Offset, processor: &LineChartProcessor) -> bool {
        let Some((sample, offset)) = processor.nearest(position) else {
            return false;
        };
        let selection = Selection { sample: *sample, offset };
        trace!(value = sample.value, x = offset.x, "selection moved");
        self.current = Some(selection);
        self.notify();
        true
    }

    /// Drop the selection and notify `None`, whatever the prior state.
    pub fn clear(&mut self) {
        self.current = None;
        trace!("selection cleared");
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener(self.current.as_ref());
        }
    }
}

impl Decorator for SelectionCursor {
    fn id(&self) -> &'static str { "selection_cursor" }

    fn draw(&self, ctx: &DrawContext<'_>, canvas: &mut dyn Canvas) {
        let Some(sel) = self.current else {
            return;
        };
        canvas.fill_rect(Rect::from_size(ctx.size), ctx.theme.scrim);
        let stroke = Stroke::new(ctx.theme.cursor, ctx.px(1.0)).cap(StrokeCap::Round);
        canvas.draw_line(
            Offset::new(sel.offset.x, ctx.size.height + CURSOR_OVERSHOOT),
            Offset::new(sel.offset.x, -CURSOR_OVERSHOOT),
            &stroke,
        );
    }

    fn on_pointer(&mut self, event: &PointerEvent, processor: &LineChartProcessor) -> bool {
        match *event {
            PointerEvent::Start(pos) | PointerEvent::Move(pos) => self.select_nearest(pos, processor),
            PointerEvent::End | PointerEvent::Cancel => {
                self.clear();
                true
            }
        }
    }

    fn selection(&self) -> Option<&Selection> {
        self.current.as_ref()
    }
}
