// File: crates/trendline-core/src/chart.rs
// Summary: LineChart composition: processor + ordered decorators, frame render pass and pointer dispatch.
// Notes:
// - Frame order is fixed: background decorators, path, endpoint markers, foreground decorators.
// - Pointer input only flips a dirty flag; the host redraws on its next frame.

use std::time::Duration;

use skia_safe as skia;
use tracing::warn;

use crate::canvas::{Canvas, Stroke, StrokeJoin};
use crate::decorator::{Decorator, DrawContext, PointerEvent};
use crate::geometry::{Offset, Size};
use crate::processor::LineChartProcessor;
use crate::selection::Selection;
use crate::series::Series;
use crate::theme::Theme;
use crate::types::{Padding, HEIGHT, WIDTH};

/// Path stroke width (dp) when nothing is selected.
const PATH_WIDTH: f32 = 2.0;
/// Path stroke width (dp) while a selection is shown.
const PATH_WIDTH_SELECTED: f32 = 1.4;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Pixels per density-independent unit.
    pub density: f32,
    pub theme: Theme,
    /// Draw the value side panel and the date row next to the chart.
    pub draw_labels: bool,
    /// Width of the value side panel, in dp.
    pub panel_width: f32,
    /// chrono format string for date labels.
    pub date_pattern: String,
    /// Endpoint animation phase in 0..=1.
    pub pulse: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            density: 2.0,
            theme: Theme::light(),
            draw_labels: true,
            panel_width: 80.0,
            date_pattern: crate::labels::DEFAULT_DATE_PATTERN.to_string(),
            pulse: 0.0,
        }
    }
}

pub type LastPointListener = Box<dyn FnMut(Offset)>;

pub struct LineChart {
    processor: LineChartProcessor,
    background: Vec<Box<dyn Decorator>>,
    foreground: Vec<Box<dyn Decorator>>,
    pub theme: Theme,
    pub density: f32,
    on_last_point: Option<LastPointListener>,
    dirty: bool,
}

impl LineChart {
    pub fn new(series: Series, padding: Padding) -> Self {
        Self {
            processor: LineChartProcessor::new(series, padding),
            background: Vec::new(),
            foreground: Vec::new(),
            theme: Theme::light(),
            density: 1.0,
            on_last_point: None,
            dirty: true,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    /// Decorator drawn below the series path.
    pub fn add_background(&mut self, decorator: impl Decorator + 'static) {
        self.background.push(Box::new(decorator));
        self.dirty = true;
    }

    /// Decorator drawn above the series path.
    pub fn add_foreground(&mut self, decorator: impl Decorator + 'static) {
        self.foreground.push(Box::new(decorator));
        self.dirty = true;
    }

    /// Called after every rendered frame with the last point's pixel position.
    pub fn on_last_point(&mut self, listener: impl FnMut(Offset) + 'static) {
        self.on_last_point = Some(Box::new(listener));
    }

    /// Replace the data. Any active selection refers to the old samples, so
    /// decorators receive a `Cancel` first.
    pub fn set_series(&mut self, series: Series) {
        self.handle_pointer(PointerEvent::Cancel);
        self.processor.set_series(series);
        self.dirty = true;
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.processor.set_padding(padding);
        self.dirty = true;
    }

    pub fn series(&self) -> &Series { self.processor.series() }
    pub fn processor(&self) -> &LineChartProcessor { &self.processor }
    pub fn needs_redraw(&self) -> bool { self.dirty }

    pub fn decorators(&self) -> impl Iterator<Item = &(dyn Decorator + 'static)> + '_ {
        self.foreground.iter().chain(self.background.iter()).map(|d| d.as_ref())
    }

    /// First active selection among the decorators.
    pub fn selection(&self) -> Option<&Selection> {
        self.decorators().find_map(|d| d.selection())
    }

    /// Forward pointer input to every decorator. Returns true if a redraw is due.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let processor = &self.processor;
        let mut changed = false;
        for d in self.foreground.iter_mut().chain(self.background.iter_mut()) {
            changed |= d.on_pointer(&event, processor);
        }
        self.dirty |= changed;
        changed
    }

    /// Draw one frame onto `canvas`. Returns false if `size` is not drawable yet.
    pub fn render(&mut self, canvas: &mut dyn Canvas, size: Size, pulse: f32) -> bool {
        if !size.is_ready() {
            warn!(width = size.width, height = size.height, "skipping frame: surface not laid out");
            return false;
        }
        self.processor.process(size, self.density);

        let ctx = DrawContext { size, density: self.density, theme: &self.theme, processor: &self.processor };
        for d in &self.background {
            d.draw(&ctx, canvas);
        }

        let width = if self.selection().is_some() { PATH_WIDTH_SELECTED } else { PATH_WIDTH };
        let stroke = Stroke::new(self.theme.line_stroke, ctx.px(width)).join(StrokeJoin::Round);
        canvas.draw_path(self.processor.path(), &stroke);
        draw_endpoints(&ctx, canvas, pulse);

        for d in &self.foreground {
            d.draw(&ctx, canvas);
        }

        if let (Some(end), Some(listener)) = (self.processor.end(), self.on_last_point.as_mut()) {
            listener(end);
        }
        self.dirty = false;
        true
    }
}

fn draw_endpoints(ctx: &DrawContext<'_>, canvas: &mut dyn Canvas, pulse: f32) {
    let (Some(start), Some(end)) = (ctx.processor.start(), ctx.processor.end()) else {
        return;
    };
    let marker = ctx.theme.marker;
    let halo = with_alpha(marker, 0.6 - 0.3 * pulse);

    canvas.draw_circle(start, ctx.px(4.0), halo);
    canvas.draw_circle(start, ctx.px(2.0), marker);

    canvas.draw_circle(end, ctx.px(4.0) + ctx.px(2.0) * pulse, halo);
    canvas.draw_circle(end, ctx.px(2.0) + ctx.px(0.5) * pulse, ctx.theme.line_stroke);
}

fn with_alpha(color: skia::Color, alpha: f32) -> skia::Color {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    color.with_a(a)
}

/// Reverse-repeating linear phase: 0 -> 1 over `period`, then back to 0.
pub fn pulse_phase(elapsed: Duration, period: Duration) -> f32 {
    if period.is_zero() {
        return 0.0;
    }
    let t = (elapsed.as_secs_f64() / period.as_secs_f64()) % 2.0;
    (if t <= 1.0 { t } else { 2.0 - t }) as f32
}
